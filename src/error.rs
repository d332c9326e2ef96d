use thiserror::Error;

#[derive(Error, Debug)]
pub enum FairplayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Invalid move list: {0}")]
    Usage(String),

    #[error("Invalid move selection: {0:?}")]
    InvalidMove(String),

    #[error("Secure random source unavailable: {0}")]
    Entropy(String),

    #[error("MAC initialization failed: {0}")]
    Mac(String),

    #[error("Invalid {what} length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, FairplayError>;
