//! Tweet selection helpers.
//!
//! # Invariants
//! - Output keeps the relative order of the input.
//! - Input tweets are only borrowed; selected tweets are returned by reference.

use crate::model::timespan::Timespan;
use crate::model::tweet::Tweet;

/// Returns tweets written by `username`, compared case-insensitively.
pub fn written_by<'a>(tweets: &'a [Tweet], username: &str) -> Vec<&'a Tweet> {
    tweets.iter().filter(|tweet| tweet.is_by(username)).collect()
}

/// Returns tweets whose timestamp lies within `timespan`, bounds included.
pub fn in_timespan<'a>(tweets: &'a [Tweet], timespan: &Timespan) -> Vec<&'a Tweet> {
    tweets
        .iter()
        .filter(|tweet| timespan.contains(tweet.timestamp()))
        .collect()
}

/// Returns tweets whose text contains at least one of `words`.
///
/// A word matches a whitespace-separated token of the text exactly, ignoring
/// case; `talk` does not match `talking`. Empty `words` selects nothing.
pub fn containing<'a, S: AsRef<str>>(tweets: &'a [Tweet], words: &[S]) -> Vec<&'a Tweet> {
    let wanted = words
        .iter()
        .map(|word| word.as_ref().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>();
    if wanted.is_empty() {
        return Vec::new();
    }

    tweets
        .iter()
        .filter(|tweet| {
            tweet
                .text()
                .split_whitespace()
                .any(|token| wanted.contains(&token.to_lowercase()))
        })
        .collect()
}
