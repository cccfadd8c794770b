//! Error types for the airwatch client

/// Errors that can occur while talking to the air quality API
#[derive(Debug, thiserror::Error)]
pub enum AirwatchError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid form: {0}")]
    InvalidForm(&'static str),
}

/// Result type alias for airwatch operations
pub type Result<T> = std::result::Result<T, AirwatchError>;
