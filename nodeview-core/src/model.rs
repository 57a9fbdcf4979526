/// A catalog node as shown on the status page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub address: String,
    /// Set when the node's address is the address of the machine serving the page
    pub is_current: bool,
}

impl Node {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            is_current: false,
        }
    }

    pub fn current(mut self, is_current: bool) -> Self {
        self.is_current = is_current;
        self
    }
}

/// Everything the page template needs. Both lists keep catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageData {
    pub web_nodes: Vec<Node>,
    pub other_nodes: Vec<Node>,
}

impl PageData {
    pub fn total(&self) -> usize {
        self.web_nodes.len() + self.other_nodes.len()
    }

    pub fn current_node(&self) -> Option<&Node> {
        self.web_nodes.iter().find(|n| n.is_current)
    }
}
