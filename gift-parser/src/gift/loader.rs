//! Question bank loading utilities
//!
//! [`QuestionBankLoader`] loads a source from a file, raw bytes or a string and runs the
//! parser pipeline on it. It is used by the CLI and by tests.
//!
//! ```rust,ignore
//! use gift_parser::gift::loader::QuestionBankLoader;
//!
//! let questions = QuestionBankLoader::from_path("bank.gift")?.parse()?;
//!
//! let report = QuestionBankLoader::from_string("Broken {T")
//!     .parse_report()?;
//! assert_eq!(report.skipped.len(), 1);
//! ```

use crate::gift::ast::Question;
use crate::gift::error::{GiftError, Result};
use crate::gift::options::ParserOptions;
use crate::gift::parsing::ParseReport;
use crate::gift::segmenting::Block;
use crate::gift::transforms::standard::{pipeline, string_pipeline, SEGMENTED};
use crate::gift::transforms::stages::DecodeSource;
use crate::gift::transforms::{Runnable, Transform};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
enum Source {
    Bytes(Vec<u8>),
    Text(String),
}

/// Source holder with parse shortcuts.
#[derive(Debug, Clone)]
pub struct QuestionBankLoader {
    source: Source,
    origin: Option<PathBuf>,
    options: ParserOptions,
}

impl QuestionBankLoader {
    /// Read raw bytes from a file. Decoding happens on first use.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| GiftError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded source");
        Ok(QuestionBankLoader {
            source: Source::Bytes(bytes),
            origin: Some(path.to_path_buf()),
            options: ParserOptions::default(),
        })
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        QuestionBankLoader {
            source: Source::Bytes(bytes.into()),
            origin: None,
            options: ParserOptions::default(),
        }
    }

    /// Load already decoded text; encoding candidates are not consulted.
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        QuestionBankLoader {
            source: Source::Text(source.into()),
            origin: None,
            options: ParserOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    /// The file this loader read from, if any.
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// Run a custom transform on the decoded source.
    pub fn with<O: 'static>(&self, transform: &Transform<String, O>) -> Result<O> {
        transform.run(self.decode()?)
    }

    /// Decoded source text.
    pub fn decode(&self) -> Result<String> {
        match &self.source {
            Source::Bytes(bytes) => {
                DecodeSource::new(self.options.encodings.clone()).run(bytes.clone())
            }
            Source::Text(text) => Ok(text.clone()),
        }
    }

    /// Comment-stripped blocks.
    pub fn blocks(&self) -> Result<Vec<Block>> {
        self.with(&*SEGMENTED)
    }

    /// Questions plus skip diagnostics.
    pub fn parse_report(&self) -> Result<ParseReport> {
        match &self.source {
            Source::Bytes(bytes) => pipeline(&self.options).run(bytes.clone()),
            Source::Text(text) => string_pipeline(&self.options).run(text.clone()),
        }
    }

    /// Questions only; skipped blocks are silently dropped.
    pub fn parse(&self) -> Result<Vec<Question>> {
        self.parse_report().map(|report| report.questions)
    }
}
