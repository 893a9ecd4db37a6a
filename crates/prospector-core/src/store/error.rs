use thiserror::Error;

/// Errors that can occur talking to a triple store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not authenticated. Call login() before querying.")]
    NotAuthenticated,

    #[error("Login failed: {0}")]
    LoginFailed(String),

    #[error("SPARQL endpoint returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse query result: {0}")]
    ParseError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unsupported query pattern: at least one position must be bound")]
    UnsupportedPattern,
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Network(err.to_string())
    }
}
