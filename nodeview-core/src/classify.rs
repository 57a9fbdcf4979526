// Splits catalog nodes into web and other groups and finds the current node

use crate::model::{Node, PageData};
use nodeview_consul::CatalogNode;
use std::net::Ipv4Addr;
use tracing::debug;

pub const DEFAULT_WEB_PREFIX: &str = "web";

/// Decides which group a node belongs to, by name alone.
pub trait NodeClassifier: Send + Sync {
    fn is_web(&self, name: &str) -> bool;
}

impl<F> NodeClassifier for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_web(&self, name: &str) -> bool {
        self(name)
    }
}

/// Web nodes are the ones whose name starts with `prefix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixClassifier {
    prefix: String,
}

impl PrefixClassifier {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for PrefixClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_WEB_PREFIX)
    }
}

impl NodeClassifier for PrefixClassifier {
    fn is_web(&self, name: &str) -> bool {
        name.starts_with(&self.prefix)
    }
}

/// Partition `nodes` into page data.
///
/// Only web nodes can be current: a web node is current when its address is
/// exactly the dotted-quad form of `local_address`.
pub fn classify_nodes<I, C>(nodes: I, local_address: Ipv4Addr, classifier: &C) -> PageData
where
    I: IntoIterator<Item = CatalogNode>,
    C: NodeClassifier + ?Sized,
{
    let local = local_address.to_string();
    let mut data = PageData::default();

    for node in nodes {
        if classifier.is_web(&node.node) {
            let is_current = node.address == local;
            data.web_nodes.push(Node::new(node.node, node.address).current(is_current));
        } else {
            data.other_nodes.push(Node::new(node.node, node.address));
        }
    }

    debug!(
        "Classified {} web and {} other nodes",
        data.web_nodes.len(),
        data.other_nodes.len()
    );
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_classifier_default() {
        let classifier = PrefixClassifier::default();
        assert_eq!(classifier.prefix(), "web");
        assert!(classifier.is_web("web"));
        assert!(classifier.is_web("web-1"));
        assert!(classifier.is_web("webserver"));
        assert!(!classifier.is_web("Web-1"));
        assert!(!classifier.is_web("db-web"));
        assert!(!classifier.is_web(""));
    }

    #[test]
    fn test_closure_classifier() {
        let classifier = |name: &str| name.ends_with("-fe");
        assert!(classifier.is_web("shop-fe"));
        assert!(!classifier.is_web("web-1"));
    }
}
