//! Information extraction over tweet lists.
//!
//! # Responsibility
//! - Reduce tweet timestamps to their minimal enclosing interval.
//! - Collect the usernames mentioned in tweet text.
//!
//! # Invariants
//! - Input tweets are borrowed immutably and never modified.
//! - Results are freshly built per call; nothing is cached between calls.

pub mod mentions;
pub mod timespan;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for extraction APIs.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Extraction error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// Input violates the operation's precondition (e.g. an empty list).
    InvalidArgument(&'static str),
}

impl Display for ExtractError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
        }
    }
}

impl Error for ExtractError {}
