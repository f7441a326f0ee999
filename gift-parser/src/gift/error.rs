//! Error types
//!
//! Only decoding can fail a parse. Malformed blocks are skipped and reported through
//! [`ParseReport`](crate::gift::parsing::ParseReport), never through this type.

use crate::gift::decoding::Encoding;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GiftError {
    /// No candidate encoding accepted the input bytes.
    #[error("could not decode source with any of: [{}]", join_labels(.attempted))]
    Decode { attempted: Vec<Encoding> },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown encoding label '{0}'")]
    UnknownEncoding(String),

    #[error("unknown output format '{0}'")]
    UnknownFormat(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A pipeline stage failed.
    #[error("Stage '{stage}' failed: {message}")]
    StageFailed { stage: String, message: String },
}

pub type Result<T> = std::result::Result<T, GiftError>;

fn join_labels(encodings: &[Encoding]) -> String {
    encodings
        .iter()
        .map(|encoding| encoding.label())
        .collect::<Vec<_>>()
        .join(", ")
}
