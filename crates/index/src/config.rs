//! Configuration for index generation.
//!
//! Only the sink is configurable: where the artifact goes and how records are
//! terminated. The normalization pipeline has no knobs. Configuration comes from
//! JSON (`Config::from_json`) or `Config::default()`.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Result;

/// Default configuration constants.
mod defaults {
    /// Artifact file name, relative to the working directory.
    pub const OUTPUT_PATH: &str = "index.csv";
}

/// Record terminator written after each CSV row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\n`.
    #[serde(alias = "LF")]
    Lf,
    /// `\r\n`, as RFC 4180 writers emit.
    #[default]
    #[serde(alias = "CRLF")]
    Crlf,
}

impl LineEnding {
    /// The matching CSV terminator.
    pub const fn terminator(self) -> csv::Terminator {
        match self {
            Self::Lf => csv::Terminator::Any(b'\n'),
            Self::Crlf => csv::Terminator::CRLF,
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Artifact sink settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Parses a JSON configuration document. Missing fields take their defaults.
    ///
    /// ```
    /// use wasm_index::config::{Config, LineEnding};
    ///
    /// let config = Config::from_json(r#"{"output": {"line_ending": "lf"}}"#).unwrap();
    /// assert_eq!(config.output.line_ending, LineEnding::Lf);
    /// assert_eq!(config.output.path.to_str(), Some("index.csv"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`crate::IndexError::Config`] for malformed JSON or unknown variants.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Where and how the artifact is written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Destination file; overwritten on every run.
    #[serde(default = "OutputConfig::default_path")]
    pub path: PathBuf,
    /// Record terminator.
    #[serde(default)]
    pub line_ending: LineEnding,
}

impl OutputConfig {
    fn default_path() -> PathBuf {
        PathBuf::from(defaults::OUTPUT_PATH)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
            line_ending: LineEnding::default(),
        }
    }
}
