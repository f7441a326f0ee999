//! Question extraction
//!
//! Turns a non-directive block into its parts:
//!
//! 1. An optional leading `::title::` (single line, trimmed).
//! 2. The `[html]` format marker, which is removed. It does not change how anything
//!    after it is processed.
//! 3. Without any `{` the block is a description: the whole remainder is the text.
//! 4. Otherwise the block must end with `}`. Text is everything before the first `{`,
//!    the payload everything between that `{` and the final `}`. Nested braces are not
//!    tracked: a `}` inside the payload stays in the payload as long as the block still
//!    ends with the closing brace.
//!
//! A block that fails step 4 is reported as [`Extraction::Skip`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub const HTML_MARKER: &str = "[html]";

static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^::(.*?)::").unwrap());

/// Why a block produced no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// The block has an opening `{` but does not end with `}`.
    MissingClosingBrace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Description {
        title: Option<String>,
        text: String,
    },
    Question {
        title: Option<String>,
        text: String,
        payload: String,
    },
    Skip {
        reason: SkipReason,
        /// Block remainder after title and marker removal.
        remainder: String,
    },
}

pub fn extract(block: &str) -> Extraction {
    let (title, rest) = split_title(block);
    let body = strip_html_marker(rest);
    let body = body.as_ref();

    let Some(open) = body.find('{') else {
        return Extraction::Description {
            title,
            text: body.to_string(),
        };
    };

    if !body.ends_with('}') {
        return Extraction::Skip {
            reason: SkipReason::MissingClosingBrace,
            remainder: body.to_string(),
        };
    }

    let close = body.len() - 1;
    Extraction::Question {
        title,
        text: body[..open].trim().to_string(),
        payload: body[open + 1..close].trim().to_string(),
    }
}

fn split_title(block: &str) -> (Option<String>, &str) {
    match TITLE.captures(block) {
        Some(captures) => {
            let whole = captures.get(0).map_or(0, |m| m.end());
            let title = captures.get(1).map_or("", |m| m.as_str()).trim().to_string();
            (Some(title), block[whole..].trim())
        }
        None => (None, block),
    }
}

fn strip_html_marker(body: &str) -> Cow<'_, str> {
    if !body.contains(HTML_MARKER) {
        return Cow::Borrowed(body);
    }
    tracing::trace!("html format marker present");
    Cow::Owned(body.replace(HTML_MARKER, "").trim().to_string())
}
