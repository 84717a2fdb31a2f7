//! Shared configuration loader for mdembed.
//!
//! `defaults/mdembed.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MdembedConfig`].
//!
//! Transformers, caches, and hooks are code, not configuration: they are wired
//! with [`mdembed::Embedder::builder`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdembed::{HtmlOptions, MarkdownOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdembed.default.toml");

/// Top-level configuration consumed by mdembed applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdembedConfig {
    pub markdown: MarkdownConfig,
    pub html: HtmlConfig,
}

/// Mirrors the comrak extension switches exposed by the markdown adapter.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    pub autolink: bool,
    pub table: bool,
    pub strikethrough: bool,
    pub tasklist: bool,
    /// Empty string disables front matter.
    pub front_matter_delimiter: String,
}

impl From<&MarkdownConfig> for MarkdownOptions {
    fn from(config: &MarkdownConfig) -> Self {
        let delimiter = config.front_matter_delimiter.trim();
        MarkdownOptions {
            autolink: config.autolink,
            table: config.table,
            strikethrough: config.strikethrough,
            tasklist: config.tasklist,
            front_matter_delimiter: (!delimiter.is_empty()).then(|| delimiter.to_string()),
        }
    }
}

impl From<MarkdownConfig> for MarkdownOptions {
    fn from(config: MarkdownConfig) -> Self {
        MarkdownOptions::from(&config)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub raw_html: bool,
}

impl From<&HtmlConfig> for HtmlOptions {
    fn from(config: &HtmlConfig) -> Self {
        HtmlOptions::new(config.raw_html)
    }
}

impl From<HtmlConfig> for HtmlOptions {
    fn from(config: HtmlConfig) -> Self {
        HtmlOptions::from(&config)
    }
}

/// Builds an [`MdembedConfig`] from the embedded defaults plus any user layers.
///
/// Later layers win; [`Loader::set_override`] wins over every file.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// A loader holding only `mdembed.default.toml`.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Add a TOML file that must exist; [`Loader::build`] fails otherwise.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Add a TOML file such as a per-project `mdembed.toml`, skipped when absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. `("markdown.autolink", true)`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge every layer and deserialize the `[markdown]` and `[html]` sections.
    pub fn build(self) -> Result<MdembedConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in configuration, equal to the adapters' `Default` options.
pub fn load_defaults() -> Result<MdembedConfig, ConfigError> {
    Loader::new().build()
}
