//! Block segmentation
//!
//! Splits comment-stripped text on runs of one or more blank (whitespace-only) lines.
//! Each block is trimmed and empty blocks are dropped. Blocks keep their ordinal in the
//! output so later diagnostics can point back at them.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// A question-candidate block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Zero-based position among the non-empty blocks.
    pub ordinal: usize,
    pub text: String,
}

impl Block {
    pub fn new(ordinal: usize, text: impl Into<String>) -> Self {
        Block {
            ordinal,
            text: text.into(),
        }
    }
}

pub fn segment(source: &str) -> Vec<Block> {
    BLANK_LINES
        .split(source)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .enumerate()
        .map(|(ordinal, text)| Block::new(ordinal, text))
        .collect()
}
