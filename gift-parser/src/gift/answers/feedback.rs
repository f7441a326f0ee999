//! Percentage and feedback suffixes
//!
//! A choice's raw text is split on `#`:
//!
//!     text                      -> no percentage, no feedback
//!     text#50%                  -> percentage 50
//!     text#50%#Well done        -> percentage 50, feedback "Well done"
//!     text#Close, but no        -> feedback only
//!
//! Feedback that itself contains `#` is rejoined with `#`.

use crate::gift::ast::Choice;
use once_cell::sync::Lazy;
use regex::Regex;

static PERCENTAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+(?:\.\d+)?)%$").unwrap());

/// Build a [`Choice`] from marker-stripped answer text.
pub fn parse_choice(raw: &str, correct: bool) -> Choice {
    let mut segments = raw.split('#');
    let text = segments.next().unwrap_or("").trim().to_string();
    let rest: Vec<&str> = segments.collect();

    let (percentage, feedback) = match rest.split_first() {
        None => (None, None),
        Some((second, tail)) => match parse_percentage(second) {
            Some(percentage) => (Some(percentage), join_feedback(tail)),
            None => (None, join_feedback(&rest)),
        },
    };

    Choice {
        text,
        correct,
        percentage,
        feedback,
    }
}

fn parse_percentage(segment: &str) -> Option<f64> {
    PERCENTAGE
        .captures(segment.trim())
        .and_then(|captures| captures.get(1))
        .and_then(|number| number.as_str().parse().ok())
}

fn join_feedback(segments: &[&str]) -> Option<String> {
    let feedback = segments.join("#");
    let feedback = feedback.trim();
    if feedback.is_empty() {
        None
    } else {
        Some(feedback.to_string())
    }
}
