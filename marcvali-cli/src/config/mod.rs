//! Configuration module
//!
//! A CLI configuration file is a core [`HyphenatorConfig`] document with an
//! extra `[output]` table. Command-line flags override values from the file.

use std::path::Path;

use anyhow::{Context, Result};
use marcvali_core::HyphenatorConfig;
use serde::{Deserialize, Serialize};

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CliConfig {
    /// Hyphenation, cluster and dictionary settings
    #[serde(flatten)]
    pub hyphenator: HyphenatorConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Parse and validate a TOML configuration
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.hyphenator.validate()?;
        Ok(config)
    }

    /// Read a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration file: {}", path.display()))
    }

    /// Load `path` when given, otherwise fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }
}

/// Commented configuration template written by `generate-config`
pub const CONFIG_TEMPLATE: &str = r#"# marcvali configuration
#
# Command-line flags override the values below.

[hyphenation]
# Minimum characters before the first break
left_min = 2
# Minimum characters after the last break
right_min = 2
# String inserted at each break; "\u00AD" is the invisible soft hyphen
marker = "\u00AD"
# Shortest run of Georgian letters that is segmented in running text
min_run_length = 4

[clusters]
# Consonant pairs kept together at the start of a syllable
add = []
# Default clusters to drop
remove = []

[dictionary]
# Probe $MARCVALI_DICTIONARY and the bundled data/exceptions.json
load_default = true
# Extra JSON dictionaries ({"word": "syl-la-bles"}), merged in order
paths = []

[output]
# text, json or markdown
format = "text"
pretty_json = true
"#;
