//! Error types for the page behaviour layer

use thiserror::Error;

/// Errors surfaced by network calls, storage and markup loading.
///
/// Validation failures are not errors; they live in field state.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FolioError {
    /// Request could not be sent or the connection failed.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// Base URL or endpoint path did not form an absolute URL.
    #[error("invalid URL {0}")]
    InvalidUrl(String),

    /// Response or stored data was not the JSON we expected.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Local storage could not be read or written.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Export encoding failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Clipboard was unavailable or refused the write.
    #[error("clipboard error: {0}")]
    Clipboard(String),
}

impl FolioError {
    /// Whether the error came from the network round-trip rather than local state
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Status { .. })
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
