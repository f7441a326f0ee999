//! Shared configuration loader for the gift toolchain.
//!
//! `defaults/gift.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`GiftConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use gift_parser::gift::decoding::Encoding;
use gift_parser::gift::options::ParserOptions;
use gift_parser::OutputFormat;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/gift.default.toml");

/// Top-level configuration consumed by gift applications.
#[derive(Debug, Clone, Deserialize)]
pub struct GiftConfig {
    pub parser: ParserConfig,
    pub output: OutputConfig,
}

/// Mirrors [`ParserOptions`], with encodings kept as labels until validated.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub default_category: String,
    pub encodings: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl GiftConfig {
    /// Resolve encoding labels and build parser options. An empty list is kept as is,
    /// every decode then fails.
    pub fn parser_options(&self) -> Result<ParserOptions, ConfigError> {
        let encodings = self
            .parser
            .encodings
            .iter()
            .map(|label| label.parse::<Encoding>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| ConfigError::Message(format!("parser.encodings: {err}")))?;
        Ok(ParserOptions::new()
            .with_default_category(self.parser.default_category.clone())
            .with_encodings(encodings))
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. from a command-line flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<GiftConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<GiftConfig, ConfigError> {
    Loader::new().build()
}
