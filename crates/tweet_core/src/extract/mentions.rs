//! Username mention extraction.
//!
//! # Responsibility
//! - Find `@username` tokens in free-form text.
//! - Normalize and deduplicate mentioned usernames across tweets.
//!
//! # Invariants
//! - A mention is `@` plus a maximal run of username chars.
//! - The chars directly before the `@` and directly after the run must not
//!   be username chars, so `bitdiddle@mit.edu` mentions nobody.
//! - Returned usernames are ASCII lower-cased.

use crate::model::tweet::{is_username_char, Tweet};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Set of lower-cased usernames.
pub type MentionSet = BTreeSet<String>;

// Candidate tokens only; boundaries are checked by `has_mention_boundaries`
// because `regex` has no lookaround.
static MENTION_CANDIDATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@[A-Za-z0-9_]+").expect("valid mention regex"));

/// Returns the usernames mentioned in `text`, in order of appearance.
///
/// Usernames are yielded without the leading `@` and with their original
/// casing. Repeated mentions are yielded repeatedly.
pub fn mentions_in(text: &str) -> impl Iterator<Item = &str> + '_ {
    MENTION_CANDIDATE_RE
        .find_iter(text)
        .filter(move |candidate| has_mention_boundaries(text, candidate.start(), candidate.end()))
        .map(|candidate| &candidate.as_str()[1..])
}

/// Returns the set of usernames mentioned in any tweet's text.
///
/// Usernames are case-insensitive, so `@User` and `@user` collapse into a
/// single `user` entry. Never fails; text without mentions adds nothing.
pub fn get_mentioned_users(tweets: &[Tweet]) -> MentionSet {
    let mut mentioned = MentionSet::new();
    let mut occurrences = 0usize;

    for tweet in tweets {
        for username in mentions_in(tweet.text()) {
            occurrences += 1;
            mentioned.insert(username.to_ascii_lowercase());
        }
    }

    debug!(
        "event=mentions_extract module=extract status=ok tweets={} occurrences={} users={}",
        tweets.len(),
        occurrences,
        mentioned.len()
    );
    mentioned
}

fn has_mention_boundaries(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_username_char) && !after.is_some_and(is_username_char)
}
