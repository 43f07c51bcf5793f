use thiserror::Error;

#[derive(Error, Debug)]
pub enum LbError {
    #[error("Invalid value for {field}: {reason}")]
    Validation { field: &'static str, reason: String },
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LbError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        LbError::Validation { field, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, LbError>;
