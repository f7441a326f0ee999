//! Matching pairs: one `=left -> right` per line.
//!
//! Lines without the leading `=` or without the `->` separator are ignored.

use crate::gift::ast::MatchPair;

pub const PAIR_SEPARATOR: &str = "->";

pub fn parse_matching(payload: &str) -> Vec<MatchPair> {
    payload
        .lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix('='))
        .filter_map(|pair| pair.trim().split_once(PAIR_SEPARATOR))
        .map(|(left, right)| MatchPair {
            left: left.trim().to_string(),
            right: right.trim().to_string(),
        })
        .collect()
}
