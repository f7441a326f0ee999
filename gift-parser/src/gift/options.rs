//! Parser options

use crate::gift::decoding::Encoding;

/// Category assigned to questions that precede any `$CATEGORY:` directive.
pub const DEFAULT_CATEGORY: &str = "Общие вопросы";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    pub default_category: String,
    /// Candidate encodings, tried in order.
    pub encodings: Vec<Encoding>,
}

impl ParserOptions {
    pub fn new() -> Self {
        ParserOptions {
            default_category: DEFAULT_CATEGORY.to_string(),
            encodings: Encoding::DEFAULT_CANDIDATES.to_vec(),
        }
    }

    pub fn with_default_category(mut self, category: impl Into<String>) -> Self {
        self.default_category = category.into();
        self
    }

    pub fn with_encodings(mut self, encodings: impl IntoIterator<Item = Encoding>) -> Self {
        self.encodings = encodings.into_iter().collect();
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::new()
    }
}
