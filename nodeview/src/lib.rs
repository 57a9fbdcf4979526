pub mod config;
pub mod handlers;
pub mod routes;

pub use config::{Config, ConfigError};
pub use handlers::{PageConfig, PageError, StatusPage};
pub use routes::routes;
