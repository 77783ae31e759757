//! Configuration loader for html2kara.
//!
//! `defaults/html2kara.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files and overrides on top of those defaults via [`Loader`] before
//! deserializing into [`Html2KaraConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use html2kara::{ConversionOptions, FormatterConfig};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/html2kara.default.toml");

/// Errors raised while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Invalid(#[from] html2kara::Error),
}

/// Top-level configuration consumed by html2kara applications.
#[derive(Debug, Clone, Deserialize)]
pub struct Html2KaraConfig {
    pub formatter: FormatterSection,
    pub conversion: ConversionSection,
}

/// Mirrors [`FormatterConfig`].
#[derive(Debug, Clone, Deserialize)]
pub struct FormatterSection {
    pub indent: String,
    pub line_break: String,
    pub base_indent_depth: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversionSection {
    pub href_to_direct_link: bool,
    /// Leave text without markup untouched instead of converting it
    pub only_when_html: bool,
}

impl TryFrom<&FormatterSection> for FormatterConfig {
    type Error = html2kara::Error;

    fn try_from(section: &FormatterSection) -> Result<Self, Self::Error> {
        FormatterConfig::new(
            &section.indent,
            &section.line_break,
            section.base_indent_depth,
        )
    }
}

impl From<&ConversionSection> for ConversionOptions {
    fn from(section: &ConversionSection) -> Self {
        ConversionOptions {
            href_to_direct_link: section.href_to_direct_link,
        }
    }
}

impl Html2KaraConfig {
    /// Validated formatter settings
    pub fn formatter_config(&self) -> Result<FormatterConfig, html2kara::Error> {
        FormatterConfig::try_from(&self.formatter)
    }

    pub fn conversion_options(&self) -> ConversionOptions {
        ConversionOptions::from(&self.conversion)
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder, deserialize and validate the configuration.
    pub fn build(self) -> Result<Html2KaraConfig, LoadError> {
        let config: Html2KaraConfig = self.builder.build()?.try_deserialize()?;
        config.formatter_config()?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<Html2KaraConfig, LoadError> {
    Loader::new().build()
}
