// Tests for status page rendering

use nodeview_core::model::{Node, PageData};
use nodeview_core::render::render_page;

fn section<'a>(page: &'a str, heading: &str) -> &'a str {
    let start = page
        .find(&format!("<h4>{}</h4>", heading))
        .unwrap_or_else(|| panic!("missing heading {}", heading));
    let rest = &page[start..];
    let end = rest.find("</ul>").expect("unterminated list");
    &rest[..end]
}

#[test]
fn test_render_marks_current_web_node() {
    let data = PageData {
        web_nodes: vec![Node::new("web-1", "10.0.0.5").current(true)],
        other_nodes: vec![Node::new("db-1", "10.0.0.9")],
    };

    let page = render_page(&data).unwrap();
    let web = section(&page, "Web Nodes");
    let other = section(&page, "Other Nodes");

    assert!(web.contains(r#"<li class="current">web-1   -   10.0.0.5</li>"#));
    assert!(other.contains("<li>db-1   -   10.0.0.9</li>"));
    assert!(!other.contains("current"));
}

#[test]
fn test_render_heading_order() {
    let page = render_page(&PageData::default()).unwrap();

    assert!(page.starts_with("<!DOCTYPE html>"));
    let web = page.find("<h4>Web Nodes</h4>").unwrap();
    let other = page.find("<h4>Other Nodes</h4>").unwrap();
    assert!(web < other);
    assert!(page.trim_end().ends_with("</html>"));
}

#[test]
fn test_render_empty_lists() {
    let page = render_page(&PageData::default()).unwrap();

    assert_eq!(page.matches("<ul>").count(), 2);
    assert_eq!(page.matches("<li").count(), 0);
}

#[test]
fn test_render_keeps_node_order() {
    let data = PageData {
        web_nodes: vec![Node::new("web-2", "10.0.0.2"), Node::new("web-1", "10.0.0.1")],
        other_nodes: vec![],
    };

    let page = render_page(&data).unwrap();
    assert!(page.find("web-2").unwrap() < page.find("web-1").unwrap());
}

#[test]
fn test_render_escapes_node_names() {
    let data = PageData {
        web_nodes: vec![],
        other_nodes: vec![Node::new("<script>alert(1)</script>", "10.0.0.9")],
    };

    let page = render_page(&data).unwrap();
    assert!(!page.contains("<script>"));
    assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}
