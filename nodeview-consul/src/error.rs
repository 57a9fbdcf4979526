use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsulError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid agent address: {0}")]
    InvalidAddress(String),

    #[error("Unexpected response code: {status} ({body})")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Failed to decode catalog response: {0}")]
    DecodeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConsulError>;
