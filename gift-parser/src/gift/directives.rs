//! Directive recognition
//!
//! Blocks starting with `$` configure the parser instead of producing questions.
//! `$CATEGORY:` switches the current category, every other directive is consumed
//! without effect.

pub const CATEGORY_PREFIX: &str = "$CATEGORY:";
pub const DIRECTIVE_MARKER: char = '$';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    /// New category name, trimmed.
    Category(&'a str),
    Ignored,
}

/// Returns `None` when the block is not a directive and should be parsed as a question.
pub fn recognize(block: &str) -> Option<Directive<'_>> {
    if let Some(rest) = block.strip_prefix(CATEGORY_PREFIX) {
        return Some(Directive::Category(rest.trim()));
    }
    if block.starts_with(DIRECTIVE_MARKER) {
        return Some(Directive::Ignored);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_directive() {
        assert_eq!(
            recognize("$CATEGORY:   Math / Algebra  "),
            Some(Directive::Category("Math / Algebra"))
        );
    }

    #[test]
    fn test_empty_category() {
        assert_eq!(recognize("$CATEGORY:"), Some(Directive::Category("")));
    }

    #[test]
    fn test_other_directive_ignored() {
        assert_eq!(recognize("$COURSE: 101"), Some(Directive::Ignored));
        assert_eq!(recognize("$category: lower"), Some(Directive::Ignored));
    }

    #[test]
    fn test_question_is_not_directive() {
        assert_eq!(recognize("What costs $5? {=five}"), None);
        assert_eq!(recognize("::T:: Q {T}"), None);
    }
}
