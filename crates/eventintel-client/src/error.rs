use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Local input check failed; no request was sent.
    #[error("{0}")]
    Validation(String),

    #[error("HTTP {0}")]
    HttpStatus(u16),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a `success: false` envelope.
    #[error("{0}")]
    Rejected(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
