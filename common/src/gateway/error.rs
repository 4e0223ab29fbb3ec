use thiserror::Error;

/// Problems caught locally, before any request leaves the browser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("the Thai product name is required")]
    MissingThaiName,
    #[error("a category must be selected")]
    MissingCategory,
    #[error("price must be a non-negative number (got `{0}`)")]
    InvalidPrice(String),
    #[error("the slide URL is required")]
    MissingSlideUrl,
    #[error("invalid storage key `{0}`")]
    InvalidBlobKey(String),
}

/// Failures reported by the remote store or the transport in front of it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("network error: {0}")]
    Network(String),
    #[error("store answered {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Outcome of a failed admin mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("another change is still being saved")]
    Busy,
}
