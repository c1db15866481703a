use chrono::{DateTime, Utc};
use tweet_core::{Timespan, Tweet, TweetValidationError};

fn at(value: &str) -> DateTime<Utc> {
    value.parse().unwrap()
}

#[test]
fn tweet_new_keeps_fields() {
    let tweet = Tweet::new(
        2,
        "bbitdiddle",
        "rivest talk in 30 minutes #hype",
        at("2016-02-17T11:00:00Z"),
    )
    .unwrap();

    assert_eq!(tweet.id(), 2);
    assert_eq!(tweet.author(), "bbitdiddle");
    assert_eq!(tweet.text(), "rivest talk in 30 minutes #hype");
    assert_eq!(tweet.timestamp(), at("2016-02-17T11:00:00Z"));
}

#[test]
fn tweet_new_rejects_invalid_authors() {
    let timestamp = at("2016-02-17T11:00:00Z");

    assert_eq!(
        Tweet::new(1, "", "text", timestamp).unwrap_err(),
        TweetValidationError::EmptyAuthor
    );
    assert_eq!(
        Tweet::new(1, "bit diddle", "text", timestamp).unwrap_err(),
        TweetValidationError::InvalidAuthor("bit diddle".to_string())
    );
}

#[test]
fn authorship_ignores_case() {
    let tweet = Tweet::new(1, "Alyssa", "hello", at("2016-02-17T10:00:00Z")).unwrap();

    assert!(tweet.is_by("alyssa"));
    assert!(tweet.is_by("ALYSSA"));
    assert!(!tweet.is_by("alyssa_p"));
}

#[test]
fn tweet_serialization_uses_expected_wire_fields() {
    let tweet = Tweet::new(7, "alyssa", "ping @ben", at("2016-02-17T10:00:00Z")).unwrap();

    let json = serde_json::to_value(&tweet).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["author"], "alyssa");
    assert_eq!(json["text"], "ping @ben");
    assert_eq!(json["timestamp"], "2016-02-17T10:00:00Z");

    let decoded: Tweet = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, tweet);
}

#[test]
fn deserialize_rejects_invalid_author() {
    let value = serde_json::json!({
        "id": 1,
        "author": "bad.author",
        "text": "hello",
        "timestamp": "2016-02-17T10:00:00Z"
    });

    let err = serde_json::from_value::<Tweet>(value).unwrap_err();
    assert!(
        err.to_string().contains("`bad.author` must contain only"),
        "unexpected error: {err}"
    );
}

#[test]
fn timespan_serialization_round_trips() {
    let span = Timespan::new(at("2016-02-17T09:00:00Z"), at("2016-02-17T11:00:00Z")).unwrap();

    let json = serde_json::to_value(span).unwrap();
    assert_eq!(json["start"], "2016-02-17T09:00:00Z");
    assert_eq!(json["end"], "2016-02-17T11:00:00Z");

    let decoded: Timespan = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, span);
}

#[test]
fn deserialize_rejects_reversed_timespan() {
    let value = serde_json::json!({
        "start": "2016-02-17T11:00:00Z",
        "end": "2016-02-17T09:00:00Z"
    });

    let err = serde_json::from_value::<Timespan>(value).unwrap_err();
    assert!(
        err.to_string().contains("must be >= start"),
        "unexpected error: {err}"
    );
}
