use thiserror::Error;

#[derive(Error, Debug)]
pub enum RpError {
    #[error("Invalid resource name: {0}")]
    InvalidResourceName(String),
    #[error("Invalid resource type: {0}")]
    InvalidResourceType(String),
    #[error("Invalid resource id: {0}")]
    InvalidResourceId(String),
    #[error("Invalid resources config (line {line}): {message}")]
    InvalidConfig { line: usize, message: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, RpError>;
