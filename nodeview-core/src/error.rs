use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterfaceError {
    #[error("Interface '{0}' doesn't exist")]
    NotFound(String),

    #[error("Interface '{0}' has no IPv4 address")]
    NoIpv4Address(String),
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to write page: {0}")]
    Format(#[from] std::fmt::Error),
}
