use serde::Deserialize;
use std::collections::HashMap;

/// One entry of the `/v1/catalog/nodes` listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CatalogNode {
    #[serde(rename = "ID", default)]
    pub id: Option<String>,
    pub node: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub datacenter: Option<String>,
    #[serde(default)]
    pub tagged_addresses: Option<HashMap<String, String>>,
    #[serde(default)]
    pub meta: Option<HashMap<String, String>>,
    #[serde(default)]
    pub create_index: u64,
    #[serde(default)]
    pub modify_index: u64,
}

impl CatalogNode {
    pub fn new(node: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: None,
            node: node.into(),
            address: address.into(),
            datacenter: None,
            tagged_addresses: None,
            meta: None,
            create_index: 0,
            modify_index: 0,
        }
    }
}

/// Nodes returned by a catalog query, in the order the agent sent them,
/// together with the blocking-query metadata from the response headers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeList {
    pub nodes: Vec<CatalogNode>,
    pub last_index: Option<u64>,
    pub known_leader: Option<bool>,
}

impl NodeList {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl IntoIterator for NodeList {
    type Item = CatalogNode;
    type IntoIter = std::vec::IntoIter<CatalogNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}
