use thiserror::Error;

/// Why a submitted URL was rejected. Checked in order: presence,
/// length, shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("URL is required")]
    Empty,

    #[error("URL exceeds 255 characters")]
    TooLong,

    #[error("URL is not valid")]
    Malformed,
}

/// Why a fetch produced no page.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error status: {0}")]
    Http(reqwest::Error),

    #[error("request failed: {0}")]
    Network(reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_status() {
            FetchError::Http(err)
        } else {
            FetchError::Network(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
