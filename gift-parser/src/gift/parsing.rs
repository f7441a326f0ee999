//! Parse orchestration
//!
//! Blocks are processed strictly in document order. The only state is the current
//! category, held by a [`BlockParser`] that lives for exactly one run: it starts at the
//! configured default, changes only on `$CATEGORY:` blocks, and is copied into each
//! question as it is emitted, so later directives never relabel earlier questions.
//!
//! Blocks that fail extraction are dropped from the question list and recorded in
//! [`ParseReport::skipped`]; [`parse`] only hands back the questions.

use crate::gift::ast::{Question, QuestionBody};
use crate::gift::classification::build_body;
use crate::gift::comments::strip_comments;
use crate::gift::decoding;
use crate::gift::directives::{self, Directive};
use crate::gift::error::Result;
use crate::gift::extraction::{extract, Extraction, SkipReason};
use crate::gift::options::ParserOptions;
use crate::gift::segmenting::{segment, Block};
use serde::{Deserialize, Serialize};

/// A block that produced no question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedBlock {
    pub ordinal: usize,
    pub reason: SkipReason,
    /// Block text after title and `[html]` marker removal.
    pub source: String,
}

/// Everything one parse run produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseReport {
    pub questions: Vec<Question>,
    pub skipped: Vec<SkippedBlock>,
    /// Non-category `$` directives that were consumed.
    pub ignored_directives: usize,
}

/// A contiguous run of questions sharing one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryRun<'a> {
    pub category: &'a str,
    pub questions: &'a [Question],
}

impl ParseReport {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn category_runs(&self) -> Vec<CategoryRun<'_>> {
        category_runs(&self.questions)
    }
}

/// Group questions into contiguous same-category runs, in document order.
///
/// A category that reappears after a different one starts a new run.
pub fn category_runs(questions: &[Question]) -> Vec<CategoryRun<'_>> {
    questions
        .chunk_by(|a, b| a.category == b.category)
        .map(|run| CategoryRun {
            category: &run[0].category,
            questions: run,
        })
        .collect()
}

/// Single-use parser state for one run over one source.
pub struct BlockParser {
    category: String,
    report: ParseReport,
}

impl BlockParser {
    pub fn new(options: &ParserOptions) -> Self {
        BlockParser {
            category: options.default_category.clone(),
            report: ParseReport::default(),
        }
    }

    pub fn current_category(&self) -> &str {
        &self.category
    }

    pub fn feed(&mut self, block: &Block) {
        match directives::recognize(&block.text) {
            Some(Directive::Category(category)) => {
                tracing::debug!(ordinal = block.ordinal, category, "category changed");
                self.category = category.to_string();
            }
            Some(Directive::Ignored) => {
                tracing::debug!(ordinal = block.ordinal, "ignoring directive");
                self.report.ignored_directives += 1;
            }
            None => self.feed_question(block),
        }
    }

    fn feed_question(&mut self, block: &Block) {
        let question = match extract(&block.text) {
            Extraction::Description { title, text } => {
                Question::new(text, self.category.clone(), QuestionBody::Description).with_title(title)
            }
            Extraction::Question {
                title,
                text,
                payload,
            } => Question::new(text, self.category.clone(), build_body(&payload)).with_title(title),
            Extraction::Skip { reason, remainder } => {
                tracing::debug!(ordinal = block.ordinal, ?reason, "skipping malformed block");
                self.report.skipped.push(SkippedBlock {
                    ordinal: block.ordinal,
                    reason,
                    source: remainder,
                });
                return;
            }
        };
        self.report.questions.push(question);
    }

    pub fn finish(self) -> ParseReport {
        self.report
    }
}

/// Parse already segmented blocks.
pub fn parse_blocks(blocks: &[Block], options: &ParserOptions) -> ParseReport {
    let mut parser = BlockParser::new(options);
    for block in blocks {
        parser.feed(block);
    }
    parser.finish()
}

/// Strip comments, segment and parse decoded source text.
pub fn parse_source(source: &str, options: &ParserOptions) -> ParseReport {
    let blocks = segment(&strip_comments(source));
    parse_blocks(&blocks, options)
}

/// Decode raw bytes with the configured candidates, then parse.
pub fn parse_source_bytes(bytes: &[u8], options: &ParserOptions) -> Result<ParseReport> {
    let source = decoding::decode(bytes, &options.encodings)?;
    Ok(parse_source(&source, options))
}

/// Parse source text with default options, returning only the questions.
pub fn parse(source: &str) -> Vec<Question> {
    parse_source(source, &ParserOptions::default()).questions
}

/// Parse raw bytes with default options, returning only the questions.
pub fn parse_bytes(bytes: &[u8]) -> Result<Vec<Question>> {
    parse_source_bytes(bytes, &ParserOptions::default()).map(|report| report.questions)
}
