//! Question records
//!
//! A parsed question bank is a flat, ordered list of [`Question`] values. Every question
//! carries the category that was active when it was emitted and exactly one
//! [`QuestionBody`], which holds the type-specific answer payload.
//!
//! Text fields keep the raw markup from the source (HTML-like tags, entities, GIFT
//! escapes). Cleaning them up for display is the renderer's job.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The type tag of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Description,
    TrueFalse,
    Numerical,
    Matching,
    MultiChoice,
    ShortAnswer,
    /// Never produced by the classifier, shortanswer is the catch-all.
    Unknown,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Description => "description",
            QuestionType::TrueFalse => "truefalse",
            QuestionType::Numerical => "numerical",
            QuestionType::Matching => "matching",
            QuestionType::MultiChoice => "multichoice",
            QuestionType::ShortAnswer => "shortanswer",
            QuestionType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Set only when the block opened with `::title::`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub text: String,
    pub category: String,
    #[serde(flatten)]
    pub body: QuestionBody,
}

impl Question {
    pub fn new(text: impl Into<String>, category: impl Into<String>, body: QuestionBody) -> Self {
        Question {
            title: None,
            text: text.into(),
            category: category.into(),
            body,
        }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn kind(&self) -> QuestionType {
        self.body.kind()
    }

    /// `Some` only for truefalse questions.
    pub fn correct(&self) -> Option<bool> {
        match self.body {
            QuestionBody::TrueFalse { correct } => Some(correct),
            _ => None,
        }
    }

    /// The title when present, otherwise the first line of the question text.
    pub fn label(&self) -> &str {
        match &self.title {
            Some(title) => title,
            None => self.text.lines().next().unwrap_or(""),
        }
    }
}

/// Type-specific answer payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionBody {
    Description,
    TrueFalse { correct: bool },
    Numerical { answers: Vec<NumericalAnswer> },
    Matching { answers: Vec<MatchPair> },
    MultiChoice { answers: Vec<Choice> },
    ShortAnswer { answers: Vec<AcceptedAnswer> },
}

impl QuestionBody {
    pub fn kind(&self) -> QuestionType {
        match self {
            QuestionBody::Description => QuestionType::Description,
            QuestionBody::TrueFalse { .. } => QuestionType::TrueFalse,
            QuestionBody::Numerical { .. } => QuestionType::Numerical,
            QuestionBody::Matching { .. } => QuestionType::Matching,
            QuestionBody::MultiChoice { .. } => QuestionType::MultiChoice,
            QuestionBody::ShortAnswer { .. } => QuestionType::ShortAnswer,
        }
    }

    /// Number of entries in the answer list (0 for description and truefalse).
    pub fn answer_count(&self) -> usize {
        match self {
            QuestionBody::Description | QuestionBody::TrueFalse { .. } => 0,
            QuestionBody::Numerical { answers } => answers.len(),
            QuestionBody::Matching { answers } => answers.len(),
            QuestionBody::MultiChoice { answers } => answers.len(),
            QuestionBody::ShortAnswer { answers } => answers.len(),
        }
    }
}

/// An accepted numeric answer, `#value[:tolerance]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericalAnswer {
    pub value: f64,
    pub tolerance: f64,
    /// `value`, or `value ± tolerance` when the tolerance is positive.
    pub text: String,
}

impl NumericalAnswer {
    pub fn new(value: f64, tolerance: f64) -> Self {
        let text = if tolerance > 0.0 {
            format!("{} ± {}", value, tolerance)
        } else {
            format!("{}", value)
        };
        NumericalAnswer {
            value,
            tolerance,
            text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPair {
    pub left: String,
    pub right: String,
}

/// A multichoice option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub text: String,
    pub correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// A shortanswer entry. Every listed answer is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedAnswer {
    pub text: String,
    pub correct: bool,
}

impl AcceptedAnswer {
    pub fn new(text: impl Into<String>) -> Self {
        AcceptedAnswer {
            text: text.into(),
            correct: true,
        }
    }
}
