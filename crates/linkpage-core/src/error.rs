//! Error types for Linkpage

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinkpageError>;

#[derive(Error, Debug)]
pub enum LinkpageError {
    /// Lookups return `Ok(None)`; this variant is for callers that need
    /// a hard failure, e.g. a handler turning absence into a 404.
    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Payment provider error: {0}")]
    Payment(String),

    #[error("Payment provider not configured")]
    PaymentUnavailable,

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for LinkpageError {
    fn from(e: serde_json::Error) -> Self {
        LinkpageError::Serialization(e.to_string())
    }
}

impl LinkpageError {
    pub fn invalid(message: impl Into<String>) -> Self {
        LinkpageError::InvalidInput(message.into())
    }
}
