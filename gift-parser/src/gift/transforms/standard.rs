//! Standard transform definitions
//!
//! Pre-built pipelines with default options, defined as static references using
//! `once_cell::sync::Lazy`. Use [`pipeline`] or [`string_pipeline`] for custom options.

use crate::gift::options::ParserOptions;
use crate::gift::parsing::ParseReport;
use crate::gift::segmenting::Block;
use crate::gift::transforms::stages::{DecodeSource, ParseBlocks, SegmentBlocks, StripComments};
use crate::gift::transforms::Transform;
use once_cell::sync::Lazy;

pub type DecodingTransform = Transform<Vec<u8>, String>;

pub type SegmentingTransform = Transform<String, Vec<Block>>;

pub type SourceTransform = Transform<String, ParseReport>;

pub type BytesTransform = Transform<Vec<u8>, ParseReport>;

/// Bytes → text with the default candidate encodings.
pub static DECODING: Lazy<DecodingTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(DecodeSource::default()));

/// Text → comment-free text.
pub static STRIPPED: Lazy<Transform<String, String>> =
    Lazy::new(|| Transform::from_fn(Ok).then(StripComments::new()));

/// Text → blocks, comments removed before splitting.
pub static SEGMENTED: Lazy<SegmentingTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(StripComments::new())
        .then(SegmentBlocks::new())
});

/// Text → parse report.
///
/// ```rust,ignore
/// let report = STRING_TO_QUESTIONS.run("Q {T}".to_string())?;
/// assert_eq!(report.questions.len(), 1);
/// ```
pub static STRING_TO_QUESTIONS: Lazy<SourceTransform> =
    Lazy::new(|| string_pipeline(&ParserOptions::default()));

/// Bytes → parse report, the full pipeline.
pub static BYTES_TO_QUESTIONS: Lazy<BytesTransform> =
    Lazy::new(|| pipeline(&ParserOptions::default()));

/// Full pipeline for the given options.
pub fn pipeline(options: &ParserOptions) -> BytesTransform {
    Transform::from_fn(Ok)
        .then(DecodeSource::new(options.encodings.clone()))
        .then(StripComments::new())
        .then(SegmentBlocks::new())
        .then(ParseBlocks::new(options.clone()))
}

/// Pipeline for already decoded text.
pub fn string_pipeline(options: &ParserOptions) -> SourceTransform {
    Transform::from_fn(Ok)
        .then_transform(&*SEGMENTED)
        .then(ParseBlocks::new(options.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gift::decoding::Encoding;
    use crate::gift::error::GiftError;

    #[test]
    fn test_decoding() {
        assert_eq!(DECODING.run("Привет".as_bytes().to_vec()).unwrap(), "Привет");
    }

    #[test]
    fn test_stripped() {
        assert_eq!(STRIPPED.run("Q {T} // c".to_string()).unwrap(), "Q {T} ");
    }

    #[test]
    fn test_segmented() {
        let blocks = SEGMENTED.run("A\n\n// only a comment\n\nB".to_string()).unwrap();
        let texts: Vec<&str> = blocks.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "B"]);
    }

    #[test]
    fn test_string_to_questions() {
        let report = STRING_TO_QUESTIONS
            .run("$CATEGORY: X\n\nQ {T}".to_string())
            .unwrap();
        assert_eq!(report.questions.len(), 1);
        assert_eq!(report.questions[0].category, "X");
    }

    #[test]
    fn test_bytes_to_questions() {
        let report = BYTES_TO_QUESTIONS.run(b"Q1 {T}\n\nQ2 {#4}".to_vec()).unwrap();
        assert_eq!(report.questions.len(), 2);
    }

    #[test]
    fn test_custom_pipeline_decode_error() {
        let options = ParserOptions::new().with_encodings([Encoding::Utf8]);
        let err = pipeline(&options).run(vec![0xC0, 0x20]).unwrap_err();
        assert!(matches!(err, GiftError::Decode { attempted } if attempted == vec![Encoding::Utf8]));
    }
}
