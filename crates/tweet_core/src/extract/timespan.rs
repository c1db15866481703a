//! Timespan reduction.

use super::{ExtractError, ExtractResult};
use crate::model::timespan::Timespan;
use crate::model::tweet::Tweet;
use log::debug;

/// Returns the minimal closed interval containing every tweet timestamp.
///
/// Each tweet is visited once while tracking the running min and max, so
/// input order does not change the result.
///
/// # Errors
/// Returns [`ExtractError::InvalidArgument`] when `tweets` is empty. No
/// placeholder interval is ever produced for empty input.
pub fn get_timespan(tweets: &[Tweet]) -> ExtractResult<Timespan> {
    let Some((first, rest)) = tweets.split_first() else {
        debug!("event=timespan_reduce module=extract status=error tweets=0 error_code=empty_input");
        return Err(ExtractError::InvalidArgument(
            "cannot compute the timespan of an empty tweet list",
        ));
    };

    let mut start = first.timestamp();
    let mut end = start;
    for tweet in rest {
        let timestamp = tweet.timestamp();
        if timestamp < start {
            start = timestamp;
        }
        if timestamp > end {
            end = timestamp;
        }
    }

    debug!(
        "event=timespan_reduce module=extract status=ok tweets={} duration_s={}",
        tweets.len(),
        (end - start).num_seconds()
    );
    Ok(Timespan::from_ordered(start, end))
}
