use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Extract error: {0}")]
    Extract(#[from] ExtractError),

    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Failure causes behind [`Fetcher::get`](crate::fetch::Fetcher::get).
///
/// The fail-soft [`fetch`](crate::fetch::fetch) wrapper absorbs these and
/// returns an empty string instead; only the strict API surfaces them.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to build client: {0}")]
    BuildFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Response error {status_code}")]
    ResponseStatus { status_code: u16 },
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Length mismatch for column '{column}': expected {expected}, got {actual}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
