//! Core extraction logic over tweet lists.
//! Every operation is a pure function of borrowed, immutable tweets.

pub mod extract;
pub mod filter;
pub mod logging;
pub mod model;

pub use extract::mentions::{get_mentioned_users, mentions_in, MentionSet};
pub use extract::timespan::get_timespan;
pub use extract::{ExtractError, ExtractResult};
pub use filter::{containing, in_timespan, written_by};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::timespan::{Timespan, TimespanError};
pub use model::tweet::{is_username_char, Tweet, TweetValidationError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
