//! Multiple choice answers
//!
//! Two physical layouts are accepted:
//!
//! Multi-line, one choice per line:
//!
//!     =Right answer#100%
//!     ~Wrong answer#Feedback for it
//!     %Also accepted
//!
//! Single-line, markers act as separators:
//!
//!     =Right#100% ~Wrong#0% ~Also wrong
//!
//! `=` and `%` mark a correct choice, `~` an incorrect one. In the single-line layout a
//! `%` closes a percentage (`#100%`) and is kept as text only when the accumulated text
//! ends in `#<number>`; every other `%` is a marker. Accumulations without any text are
//! dropped.
//!
//! In the multi-line layout a line holding only a marker still yields a choice, with
//! empty text. Lines that do not start with a marker are ignored.

use crate::gift::answers::feedback::parse_choice;
use crate::gift::ast::Choice;
use logos::Logos;
use once_cell::sync::Lazy;
use regex::Regex;

static OPEN_PERCENTAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\s*\d+(?:\.\d+)?$").unwrap());

/// Tokens of a single-line multichoice payload
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceToken {
    #[token("=")]
    Correct,

    #[token("~")]
    Wrong,

    #[token("%")]
    Weighted,

    // Everything up to the next marker
    #[regex(r"[^=~%]+")]
    Text,
}

impl ChoiceToken {
    pub fn is_marker(&self) -> bool {
        !matches!(self, ChoiceToken::Text)
    }

    /// Whether a choice opened by this marker counts as correct.
    pub fn marks_correct(&self) -> bool {
        matches!(self, ChoiceToken::Correct | ChoiceToken::Weighted)
    }

    fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '=' => Some(ChoiceToken::Correct),
            '~' => Some(ChoiceToken::Wrong),
            '%' => Some(ChoiceToken::Weighted),
            _ => None,
        }
    }
}

pub fn parse_multichoice(payload: &str) -> Vec<Choice> {
    if payload.contains('\n') {
        parse_lines(payload)
    } else {
        parse_inline(payload)
    }
}

fn parse_lines(payload: &str) -> Vec<Choice> {
    payload
        .lines()
        .map(str::trim)
        .filter_map(|line| {
            let mut chars = line.chars();
            let marker = ChoiceToken::from_marker(chars.next()?)?;
            Some(parse_choice(chars.as_str().trim(), marker.marks_correct()))
        })
        .collect()
}

fn parse_inline(payload: &str) -> Vec<Choice> {
    let mut lexer = ChoiceToken::lexer(payload);
    let mut choices = Vec::new();
    let mut marker: Option<ChoiceToken> = None;
    let mut text = String::new();

    while let Some(result) = lexer.next() {
        let slice = lexer.slice();
        match result {
            Ok(ChoiceToken::Weighted) if OPEN_PERCENTAGE.is_match(&text) => {
                text.push_str(slice);
            }
            Ok(token) if token.is_marker() => {
                finish_choice(marker, &text, &mut choices);
                marker = Some(token);
                text.clear();
            }
            _ => text.push_str(slice),
        }
    }
    finish_choice(marker, &text, &mut choices);

    choices
}

fn finish_choice(marker: Option<ChoiceToken>, text: &str, choices: &mut Vec<Choice>) {
    let text = text.trim();
    if let Some(marker) = marker {
        if !text.is_empty() {
            choices.push(parse_choice(text, marker.marks_correct()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(choices: &[Choice]) -> Vec<(&str, bool, Option<f64>)> {
        choices
            .iter()
            .map(|c| (c.text.as_str(), c.correct, c.percentage))
            .collect()
    }

    #[test]
    fn test_tokens() {
        let tokens: Vec<_> = ChoiceToken::lexer("=a ~b%")
            .map(|t| t.unwrap())
            .collect();
        assert_eq!(
            tokens,
            vec![
                ChoiceToken::Correct,
                ChoiceToken::Text,
                ChoiceToken::Wrong,
                ChoiceToken::Text,
                ChoiceToken::Weighted
            ]
        );
    }

    #[test]
    fn test_inline_with_percentages() {
        let choices = parse_multichoice("=Correct#100% ~Wrong#0%");
        assert_eq!(
            summary(&choices),
            vec![("Correct", true, Some(100.0)), ("Wrong", false, Some(0.0))]
        );
    }

    #[test]
    fn test_inline_with_feedback() {
        let choices = parse_multichoice("~Mars#Too small =Jupiter#Right ~Venus");
        assert_eq!(choices.len(), 3);
        assert_eq!(choices[0].feedback.as_deref(), Some("Too small"));
        assert!(choices[1].correct);
        assert_eq!(choices[2].text, "Venus");
        assert_eq!(choices[2].feedback, None);
    }

    #[test]
    fn test_inline_weight_marker_is_correct() {
        let choices = parse_multichoice("~no %maybe");
        assert_eq!(summary(&choices), vec![("no", false, None), ("maybe", true, None)]);
    }

    #[test]
    fn test_inline_percent_after_bare_number_is_marker() {
        let choices = parse_multichoice("~no %50%half");
        assert_eq!(
            summary(&choices),
            vec![("no", false, None), ("50", true, None), ("half", true, None)]
        );
    }

    #[test]
    fn test_inline_percent_in_text_is_marker() {
        let choices = parse_multichoice("=Growth 5% ~Down");
        assert_eq!(summary(&choices), vec![("Growth 5", true, None), ("Down", false, None)]);
    }

    #[test]
    fn test_inline_percent_closes_weight() {
        let choices = parse_multichoice("=Half#33.5%#Close ~Wrong# 0%");
        assert_eq!(
            summary(&choices),
            vec![("Half", true, Some(33.5)), ("Wrong", false, Some(0.0))]
        );
        assert_eq!(choices[0].feedback.as_deref(), Some("Close"));
    }

    #[test]
    fn test_inline_text_before_first_marker_dropped() {
        let choices = parse_multichoice("stray ~a =b");
        assert_eq!(summary(&choices), vec![("a", false, None), ("b", true, None)]);
    }

    #[test]
    fn test_inline_empty_accumulations_dropped() {
        let choices = parse_multichoice("~ ~a = =b");
        assert_eq!(summary(&choices), vec![("a", false, None), ("b", true, None)]);
    }

    #[test]
    fn test_multiline() {
        let payload = "=Right#100%#Good\n~Wrong#Nope\n\n%Partial\nno marker here";
        let choices = parse_multichoice(payload);
        assert_eq!(
            summary(&choices),
            vec![
                ("Right", true, Some(100.0)),
                ("Wrong", false, None),
                ("Partial", true, None)
            ]
        );
        assert_eq!(choices[0].feedback.as_deref(), Some("Good"));
        assert_eq!(choices[1].feedback.as_deref(), Some("Nope"));
    }

    #[test]
    fn test_multiline_bare_marker_keeps_empty_choice() {
        let choices = parse_multichoice("=\n~b");
        assert_eq!(summary(&choices), vec![("", true, None), ("b", false, None)]);
    }

    #[test]
    fn test_multiline_keeps_inner_markers() {
        let choices = parse_multichoice("=a = b\n~c ~ d");
        assert_eq!(
            summary(&choices),
            vec![("a = b", true, None), ("c ~ d", false, None)]
        );
    }
}
