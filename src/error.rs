use thiserror::Error;

use crate::types::ContactField;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing configuration value {0}")]
    Missing(&'static str),
}

/// Failure of the single outbound call the site makes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SendError {
    #[error("email delivery is not configured: {0}")]
    NotConfigured(#[from] ConfigError),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("delivery rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    Missing(ContactField),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}
