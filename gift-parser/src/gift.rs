//! Main module for gift library functionality

pub mod answers;
pub mod ast;
pub mod classification;
pub mod comments;
pub mod decoding;
pub mod directives;
pub mod error;
pub mod extraction;
pub mod formats;
pub mod loader;
pub mod options;
pub mod parsing;
pub mod segmenting;
pub mod transforms;
