//! Closed time interval model.
//!
//! # Invariants
//! - `start <= end` for every constructed or deserialized value.
//! - Both bounds are inclusive.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error raised when an interval would end before it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimespanError {
    Reversed {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

impl Display for TimespanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reversed { start, end } => write!(
                f,
                "timespan end ({}) must be >= start ({})",
                end.to_rfc3339(),
                start.to_rfc3339()
            ),
        }
    }
}

impl Error for TimespanError {}

/// Minimal closed interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TimespanBounds")]
pub struct Timespan {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Timespan {
    /// Builds an interval from inclusive bounds.
    ///
    /// # Errors
    /// Returns [`TimespanError::Reversed`] when `start > end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TimespanError> {
        if start > end {
            return Err(TimespanError::Reversed { start, end });
        }
        Ok(Self { start, end })
    }

    /// Zero-length interval covering exactly `at`.
    pub fn instant(at: DateTime<Utc>) -> Self {
        Self { start: at, end: at }
    }

    /// Caller guarantees `start <= end`.
    pub(crate) fn from_ordered(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Length of the interval; zero for [`Timespan::instant`].
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Returns whether `at` falls inside the interval, bounds included.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }
}

#[derive(Deserialize)]
struct TimespanBounds {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<TimespanBounds> for Timespan {
    type Error = TimespanError;

    fn try_from(bounds: TimespanBounds) -> Result<Self, Self::Error> {
        Timespan::new(bounds.start, bounds.end)
    }
}
