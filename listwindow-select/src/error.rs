use alloc::string::String;

use thiserror::Error;

/// Construction-time misconfiguration. These fail fast: a `Select` is never
/// handed out half-wired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("no data source configured: provide either `data` or `on_search`")]
    NoDataSource,
    #[error("conflicting data sources: `data` and `on_search` are mutually exclusive")]
    ConflictingDataSources,
    #[error("row_height must be nonzero")]
    InvalidRowHeight,
    #[error("viewport_height must be nonzero")]
    InvalidViewport,
}

/// Why an asynchronous lookup failed.
///
/// Reported through `Select::resolve_search`, where it degrades into the
/// loading-cleared empty state; it is never re-thrown at the embedding page.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("search failed: {message}")]
pub struct SearchFailure {
    pub message: String,
}

impl SearchFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
