//! Payload classification
//!
//! The answer payload is matched against an ordered rule table; the first rule whose
//! predicate holds decides the question type, and shortanswer catches everything else.
//! Order matters: a payload with both `->` and a newline is matching, because matching
//! is checked before multichoice.
//!
//! | order | type        | predicate                                                    |
//! |-------|-------------|--------------------------------------------------------------|
//! | 1     | truefalse   | exactly `T`, `F`, `TRUE` or `FALSE` (any case)               |
//! | 2     | numerical   | starts with `#`, optional whitespace, then a numeric token   |
//! | 3     | matching    | contains `->`                                                |
//! | 4     | multichoice | contains a newline, or starts with a marker and has `~`/`%`  |
//! | -     | shortanswer | fallback                                                     |

use crate::gift::answers::{
    matching::PAIR_SEPARATOR, parse_matching, parse_multichoice, parse_numerical,
    parse_shortanswer,
};
use crate::gift::ast::{QuestionBody, QuestionType};
use once_cell::sync::Lazy;
use regex::Regex;

static NUMERICAL_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#\s*[\d.+\-]+").unwrap());

const TRUE_VALUES: [&str; 2] = ["T", "TRUE"];
const FALSE_VALUES: [&str; 2] = ["F", "FALSE"];
const CHOICE_MARKERS: [char; 3] = ['=', '~', '%'];

struct Rule {
    kind: QuestionType,
    matches: fn(&str) -> bool,
}

static RULES: [Rule; 4] = [
    Rule {
        kind: QuestionType::TrueFalse,
        matches: is_truefalse,
    },
    Rule {
        kind: QuestionType::Numerical,
        matches: is_numerical,
    },
    Rule {
        kind: QuestionType::Matching,
        matches: is_matching,
    },
    Rule {
        kind: QuestionType::MultiChoice,
        matches: is_multichoice,
    },
];

/// Pick the question type for a trimmed payload. Never returns `Description` or `Unknown`.
pub fn classify(payload: &str) -> QuestionType {
    RULES
        .iter()
        .find(|rule| (rule.matches)(payload))
        .map_or(QuestionType::ShortAnswer, |rule| rule.kind)
}

/// Classify the payload and run the matching answer sub-parser.
pub fn build_body(payload: &str) -> QuestionBody {
    match classify(payload) {
        QuestionType::TrueFalse => QuestionBody::TrueFalse {
            correct: truefalse_value(payload),
        },
        QuestionType::Numerical => QuestionBody::Numerical {
            answers: parse_numerical(payload),
        },
        QuestionType::Matching => QuestionBody::Matching {
            answers: parse_matching(payload),
        },
        QuestionType::MultiChoice => QuestionBody::MultiChoice {
            answers: parse_multichoice(payload),
        },
        QuestionType::ShortAnswer | QuestionType::Description | QuestionType::Unknown => {
            QuestionBody::ShortAnswer {
                answers: parse_shortanswer(payload),
            }
        }
    }
}

fn is_truefalse(payload: &str) -> bool {
    TRUE_VALUES
        .iter()
        .chain(FALSE_VALUES.iter())
        .any(|value| payload.eq_ignore_ascii_case(value))
}

fn truefalse_value(payload: &str) -> bool {
    TRUE_VALUES
        .iter()
        .any(|value| payload.eq_ignore_ascii_case(value))
}

fn is_numerical(payload: &str) -> bool {
    NUMERICAL_START.is_match(payload)
}

fn is_matching(payload: &str) -> bool {
    payload.contains(PAIR_SEPARATOR)
}

fn is_multichoice(payload: &str) -> bool {
    if payload.contains('\n') {
        return true;
    }
    // A single line of `=` answers only is a shortanswer list
    payload.starts_with(CHOICE_MARKERS) && payload.contains(['~', '%'])
}
