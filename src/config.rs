//! Layered configuration for hosts of the formatter.
//!
//! Settings resolve in this order, later layers winning:
//!
//!     1. `defaults/uitk-fmt.default.toml`, embedded at build time
//!     2. `uitk-fmt.toml` in the project directory, if present
//!     3. an explicit configuration file
//!     4. indentation overrides from the command line
//!
//! The result is a [`FmtConfig`]: the [`FormattingOptions`] handed to every format call,
//! and the per-dialect extension lists used to pick a pipeline for a path. The
//! formatters themselves never read configuration.

use crate::dialect::Dialect;
use crate::options::FormattingOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/uitk-fmt.default.toml");

/// Name of the optional per-project configuration file.
pub const PROJECT_FILE: &str = "uitk-fmt.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct FmtConfig {
    pub formatting: FormattingOptions,
    pub markup: DialectConfig,
    pub style: DialectConfig,
}

/// File extensions claimed by one dialect, without the leading dot.
#[derive(Debug, Clone, Deserialize)]
pub struct DialectConfig {
    pub extensions: Vec<String>,
}

impl DialectConfig {
    fn claims(&self, extension: &str) -> bool {
        self.extensions
            .iter()
            .any(|candidate| candidate.trim_start_matches('.').eq_ignore_ascii_case(extension))
    }
}

impl FmtConfig {
    /// The built-in settings alone.
    pub fn builtin() -> Result<Self, ConfigError> {
        Loader::new().load()
    }

    /// Pick the dialect for `path` from the configured extension lists. Markup is
    /// checked first when both lists claim an extension.
    pub fn dialect_for(&self, path: impl AsRef<Path>) -> Option<Dialect> {
        let extension = path.as_ref().extension()?.to_str()?;
        if self.markup.claims(extension) {
            Some(Dialect::Markup)
        } else if self.style.claims(extension) {
            Some(Dialect::Style)
        } else {
            None
        }
    }
}

/// Stacks configuration layers over the embedded defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Layer `<dir>/uitk-fmt.toml` when it exists.
    pub fn project(self, dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(PROJECT_FILE);
        self.layer(&path, false)
    }

    /// Layer a configuration file that must exist.
    pub fn file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Indent with tabs regardless of the file layers.
    pub fn tabs(mut self) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override("formatting.use_spaces", false)?;
        Ok(self)
    }

    /// Force the number of spaces per indent level.
    pub fn indent_size(mut self, size: usize) -> Result<Self, ConfigError> {
        let size = i64::try_from(size).unwrap_or(i64::MAX);
        self.builder = self.builder.set_override("formatting.indent_size", size)?;
        Ok(self)
    }

    pub fn load(self) -> Result<FmtConfig, ConfigError> {
        let config: FmtConfig = self.builder.build()?.try_deserialize()?;
        tracing::debug!(
            use_spaces = config.formatting.use_spaces,
            indent_size = config.formatting.indent_size,
            "resolved configuration"
        );
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
