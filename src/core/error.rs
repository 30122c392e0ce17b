use std::fmt;
use std::fmt::{Display, Formatter};

/// SearchError enumerates the typed failures of the range search.
///
/// Errors are returned wrapped in an [`anyhow::Error`]; callers that need to tell the kinds apart
/// can recover them with `err.downcast_ref::<SearchError>()`.
/// A key that does not occur in the search space is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// An argument handed to the search is unusable, e.g. the search space is absent.
    InvalidArgument(String),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for SearchError {}
