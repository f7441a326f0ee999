//! Short answers: `=one =two =three`, every entry accepted.
//!
//! Whatever precedes the first `=` is discarded.

use crate::gift::ast::AcceptedAnswer;

pub fn parse_shortanswer(payload: &str) -> Vec<AcceptedAnswer> {
    payload
        .split('=')
        .skip(1)
        .map(str::trim)
        .filter(|answer| !answer.is_empty())
        .map(AcceptedAnswer::new)
        .collect()
}
