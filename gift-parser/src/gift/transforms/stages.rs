//! Individual transformation stages
//!
//! Each stage wraps one parser step and implements [`Runnable`].

use crate::gift::comments::strip_comments;
use crate::gift::decoding::{self, Encoding};
use crate::gift::error::Result;
use crate::gift::options::ParserOptions;
use crate::gift::parsing::{parse_blocks, ParseReport};
use crate::gift::segmenting::{segment, Block};
use crate::gift::transforms::Runnable;

/// Raw bytes → text, first candidate encoding that accepts the input.
pub struct DecodeSource {
    candidates: Vec<Encoding>,
}

impl DecodeSource {
    pub fn new(candidates: Vec<Encoding>) -> Self {
        DecodeSource { candidates }
    }
}

impl Default for DecodeSource {
    fn default() -> Self {
        Self::new(Encoding::DEFAULT_CANDIDATES.to_vec())
    }
}

impl Runnable<Vec<u8>, String> for DecodeSource {
    fn run(&self, input: Vec<u8>) -> Result<String> {
        decoding::decode(&input, &self.candidates)
    }
}

/// Removes `//` and `/* */` comments.
pub struct StripComments;

impl StripComments {
    pub fn new() -> Self {
        StripComments
    }
}

impl Default for StripComments {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, String> for StripComments {
    fn run(&self, input: String) -> Result<String> {
        Ok(strip_comments(&input))
    }
}

/// Splits text into blank-line separated blocks.
pub struct SegmentBlocks;

impl SegmentBlocks {
    pub fn new() -> Self {
        SegmentBlocks
    }
}

impl Default for SegmentBlocks {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, Vec<Block>> for SegmentBlocks {
    fn run(&self, input: String) -> Result<Vec<Block>> {
        Ok(segment(&input))
    }
}

/// Directive handling, extraction and classification over every block.
pub struct ParseBlocks {
    options: ParserOptions,
}

impl ParseBlocks {
    pub fn new(options: ParserOptions) -> Self {
        ParseBlocks { options }
    }
}

impl Default for ParseBlocks {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

impl Runnable<Vec<Block>, ParseReport> for ParseBlocks {
    fn run(&self, input: Vec<Block>) -> Result<ParseReport> {
        Ok(parse_blocks(&input, &self.options))
    }
}
