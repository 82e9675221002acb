use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoViewerError {
    #[error("Invalid URL: {0}")]
    InvalidRequest(String),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Failed to decode data: {0}")]
    DecodeFailure(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    TransportFailure(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RepoViewerError>;
