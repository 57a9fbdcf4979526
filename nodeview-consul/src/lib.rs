pub mod catalog;
pub mod client;
pub mod error;

pub use catalog::{CatalogNode, NodeList};
pub use client::{ConsulClient, ConsulConfig, build_http_client};
pub use error::ConsulError;
