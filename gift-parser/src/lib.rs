//! # gift
//!
//! A parser for the GIFT question-bank format.
//!
//! File Layout
//!
//! The parser is a straight pipeline, and the layout follows the stages in order:
//! src/gift
//!   ├── decoding         bytes -> text, first candidate encoding that accepts the input
//!   ├── comments         line and block comment removal
//!   ├── segmenting       blank-line separated blocks
//!   ├── directives       $CATEGORY and other `$` control blocks
//!   ├── extraction       title, question text and the braced answer payload
//!   ├── classification   ordered payload -> question type dispatch
//!   ├── answers          per-type answer micro-grammars
//!   ├── parsing          orchestration, category threading and skip diagnostics
//!   └── formats          json, yaml and plain-text summary output
//!
//! The stages are also exposed as composable [transforms](gift::transforms), and
//! [`QuestionBankLoader`](gift::loader::QuestionBankLoader) wraps the common entry points.

pub mod gift;

pub use gift::ast::{Question, QuestionBody, QuestionType};
pub use gift::error::{GiftError, Result};
pub use gift::formats::OutputFormat;
pub use gift::loader::QuestionBankLoader;
pub use gift::parsing::{parse, parse_bytes, ParseReport};
