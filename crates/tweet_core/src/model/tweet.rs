//! Tweet record model.
//!
//! # Responsibility
//! - Hold the id, author handle, text body and timestamp of one tweet.
//! - Own the username character rules used by author validation and
//!   mention extraction.
//!
//! # Invariants
//! - `author` is a non-empty run of ASCII letters, digits or `_`.
//! - Author handles compare case-insensitively; the stored value keeps the
//!   caller's casing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Returns whether `c` may appear inside a username.
///
/// Usernames are limited to `A-Z`, `a-z`, `0-9` and `_`. Every other char,
/// including non-ASCII letters, counts as a boundary.
pub fn is_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Validation error raised while building a [`Tweet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TweetValidationError {
    EmptyAuthor,
    /// Author contains a char outside the username alphabet.
    InvalidAuthor(String),
}

impl Display for TweetValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAuthor => write!(f, "tweet author cannot be empty"),
            Self::InvalidAuthor(author) => write!(
                f,
                "tweet author `{author}` must contain only letters, digits or `_`"
            ),
        }
    }
}

impl Error for TweetValidationError {}

/// One immutable tweet.
///
/// Fields are private so that operations receiving `&[Tweet]` cannot alter
/// the records they were given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TweetFields")]
pub struct Tweet {
    id: u64,
    author: String,
    text: String,
    timestamp: DateTime<Utc>,
}

impl Tweet {
    /// Builds a tweet after validating the author handle.
    ///
    /// # Errors
    /// - [`TweetValidationError::EmptyAuthor`] when `author` is empty.
    /// - [`TweetValidationError::InvalidAuthor`] when `author` contains a
    ///   char rejected by [`is_username_char`].
    pub fn new(
        id: u64,
        author: impl Into<String>,
        text: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, TweetValidationError> {
        let author = author.into();
        validate_author(&author)?;
        Ok(Self {
            id,
            author,
            text: text.into(),
            timestamp,
        })
    }

    /// Unique id within one tweet collection.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns whether this tweet was written by `username`, ignoring case.
    pub fn is_by(&self, username: &str) -> bool {
        self.author.eq_ignore_ascii_case(username)
    }
}

fn validate_author(author: &str) -> Result<(), TweetValidationError> {
    if author.is_empty() {
        return Err(TweetValidationError::EmptyAuthor);
    }
    if !author.chars().all(is_username_char) {
        return Err(TweetValidationError::InvalidAuthor(author.to_string()));
    }
    Ok(())
}

/// Unvalidated wire shape; converted into [`Tweet`] through `new`.
#[derive(Deserialize)]
struct TweetFields {
    id: u64,
    author: String,
    text: String,
    timestamp: DateTime<Utc>,
}

impl TryFrom<TweetFields> for Tweet {
    type Error = TweetValidationError;

    fn try_from(fields: TweetFields) -> Result<Self, Self::Error> {
        Tweet::new(fields.id, fields.author, fields.text, fields.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::{is_username_char, validate_author, TweetValidationError};

    #[test]
    fn username_alphabet_is_ascii_word_chars() {
        for c in ['a', 'Z', '0', '9', '_'] {
            assert!(is_username_char(c), "{c:?} should be accepted");
        }
        for c in ['@', '-', '.', ' ', '\n', 'é', '中'] {
            assert!(!is_username_char(c), "{c:?} should be rejected");
        }
    }

    #[test]
    fn validate_author_reports_offending_handle() {
        assert_eq!(validate_author(""), Err(TweetValidationError::EmptyAuthor));
        assert_eq!(
            validate_author("bit-diddle"),
            Err(TweetValidationError::InvalidAuthor("bit-diddle".to_string()))
        );
        assert!(validate_author("bbitdiddle_2").is_ok());
    }
}
