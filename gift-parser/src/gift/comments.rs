//! Comment stripping
//!
//! Comments are removed from the whole source before it is split into blocks. A blank
//! line that only exists inside a `/* ... */` comment therefore never splits a question,
//! and a `//` inside answer text is stripped as well (no escaping is honored).
//!
//! Line comments go first, then block comments (shortest match, spanning newlines).

use once_cell::sync::Lazy;
use regex::Regex;

static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)//.*$").unwrap());

static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

pub fn strip_comments(source: &str) -> String {
    let without_lines = LINE_COMMENT.replace_all(source, "");
    BLOCK_COMMENT.replace_all(&without_lines, "").into_owned()
}
