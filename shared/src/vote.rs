//! Wire types for the `POST /vote` endpoint.

use serde::{Deserialize, Serialize};

/// Body of a vote request.
///
/// `post_id` is `None` when the button's `data-post-id` has no leading
/// integer; it is sent as `null` and the endpoint decides what to do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRequest {
    pub post_id: Option<i64>,
    pub is_upvote: bool,
}

/// Tally returned by the endpoint after a vote settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteResult {
    pub upvotes: i64,
    pub downvotes: i64,
    pub score: i64,
}

impl VoteRequest {
    /// Build a request from the raw `data-post-id` / `data-vote-type`
    /// attribute values of a vote button.
    pub fn from_attributes(post_id: Option<&str>, vote_type: Option<&str>) -> Self {
        Self {
            post_id: post_id.and_then(parse_leading_int),
            is_upvote: vote_type == Some("true"),
        }
    }
}

/// Parse the leading integer of `raw`, ignoring leading whitespace and any
/// trailing garbage (`"42px"` -> 42). Returns `None` when no digit leads.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| n * sign)
}
