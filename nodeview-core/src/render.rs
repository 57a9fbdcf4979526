// HTML rendering for the status page

use crate::error::RenderError;
use crate::model::{Node, PageData};
use std::borrow::Cow;
use std::fmt::Write;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
	<head>
		<meta charset="utf-8">
		<title>Nodes</title>
		<style type="text/css">
			.container {
				display: flex;
				align-items: center;
				justify-content: center;
				flex-direction: column;
			}

			li {
				list-style: none;
				padding: 5px;
				word-spacing: 10px;
			}

			li.current {
				color: green;
				list-style: disclosure-closed;
			}
		</style>
	</head>
	<body>
		<div class="container">
"#;

const PAGE_TAIL: &str = r#"		</div>
	</body>
</html>
"#;

/// Render the full status page.
pub fn render_page(data: &PageData) -> Result<String, RenderError> {
    let mut page = String::with_capacity(PAGE_HEAD.len() + PAGE_TAIL.len() + 64 * data.total());

    page.push_str(PAGE_HEAD);
    write_section(&mut page, "Web Nodes", &data.web_nodes)?;
    write_section(&mut page, "Other Nodes", &data.other_nodes)?;
    page.push_str(PAGE_TAIL);

    Ok(page)
}

fn write_section(out: &mut String, heading: &str, nodes: &[Node]) -> Result<(), RenderError> {
    writeln!(out, "\t\t\t<h4>{}</h4>", heading)?;
    writeln!(out, "\t\t\t<ul>")?;
    for node in nodes {
        let class = if node.is_current { r#" class="current""# } else { "" };
        writeln!(
            out,
            "\t\t\t\t<li{}>{}   -   {}</li>",
            class,
            escape_html(&node.name),
            escape_html(&node.address)
        )?;
    }
    writeln!(out, "\t\t\t</ul>")?;
    Ok(())
}

/// Escape text for use inside an element or a quoted attribute.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
