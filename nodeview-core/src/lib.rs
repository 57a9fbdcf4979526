pub mod classify;
pub mod error;
pub mod iface;
pub mod model;
pub mod render;

pub use classify::{NodeClassifier, PrefixClassifier, classify_nodes};
pub use error::{InterfaceError, RenderError};
pub use iface::{InterfaceInspector, SystemInterfaces};
pub use model::{Node, PageData};
pub use render::render_page;
