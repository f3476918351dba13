//! Dictionary source management for CLI

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use marcvali_core::dictionary::find_default_dictionary;
use marcvali_core::{DictionaryConfig, LoadReport, OverrideDictionary};

/// Where exception entries come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// Found by probing the default locations
    Default(PathBuf),
    /// Named in the configuration or with `--dictionary`
    File(PathBuf),
}

impl DictionarySource {
    /// Get the display name for the dictionary source
    pub fn display_name(&self) -> String {
        match self {
            DictionarySource::Default(path) => format!("Default: {}", path.display()),
            DictionarySource::File(path) => format!("File: {}", path.display()),
        }
    }

    /// Path of the JSON file
    pub fn path(&self) -> &Path {
        match self {
            DictionarySource::Default(path) | DictionarySource::File(path) => path,
        }
    }

    /// Load this source on its own
    pub fn inspect(&self) -> Result<(OverrideDictionary, LoadReport)> {
        let mut dictionary = OverrideDictionary::new();
        let report = dictionary
            .merge_file(self.path())
            .with_context(|| format!("Failed to load dictionary: {}", self.path().display()))?;
        Ok((dictionary, report))
    }
}

/// Sources a hyphenator built from `config` would read, in merge order
pub fn resolve_sources(config: &DictionaryConfig) -> Vec<DictionarySource> {
    let mut sources = Vec::with_capacity(config.paths.len() + 1);
    if config.load_default {
        if let Some(path) = find_default_dictionary() {
            sources.push(DictionarySource::Default(path));
        }
    }
    sources.extend(config.paths.iter().cloned().map(DictionarySource::File));
    sources
}
