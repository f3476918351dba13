//! Hyphenator options shared by several commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use marcvali_core::Hyphenator;

use crate::config::CliConfig;
use crate::dictionary_source::resolve_sources;

/// Options that shape the hyphenator
#[derive(Debug, Clone, Default, Args)]
pub struct HyphenatorArgs {
    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Break marker [default: soft hyphen U+00AD]
    #[arg(short, long, value_name = "STRING")]
    pub marker: Option<String>,

    /// Minimum characters before the first break
    #[arg(long, value_name = "N")]
    pub left_min: Option<usize>,

    /// Minimum characters after the last break
    #[arg(long, value_name = "N")]
    pub right_min: Option<usize>,

    /// Extra exception dictionary (JSON), may be repeated
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Vec<PathBuf>,

    /// Do not load the bundled exception dictionary
    #[arg(long)]
    pub no_default_dictionary: bool,
}

impl HyphenatorArgs {
    /// Read the configuration file, or defaults when none was given
    pub fn load_config(&self) -> Result<CliConfig> {
        let mut config = CliConfig::load_or_default(self.config.as_deref())?;
        self.apply(&mut config);
        Ok(config)
    }

    /// Apply command-line overrides on top of a configuration
    pub fn apply(&self, config: &mut CliConfig) {
        let settings = &mut config.hyphenator;
        if let Some(marker) = &self.marker {
            settings.hyphenation.marker = marker.clone();
        }
        if let Some(left_min) = self.left_min {
            settings.hyphenation.left_min = left_min;
        }
        if let Some(right_min) = self.right_min {
            settings.hyphenation.right_min = right_min;
        }
        if self.no_default_dictionary {
            settings.dictionary.load_default = false;
        }
        settings
            .dictionary
            .paths
            .extend(self.dictionary.iter().cloned());
    }

    /// Build the hyphenator described by `config`
    pub fn build(config: &CliConfig) -> Result<Hyphenator> {
        for source in resolve_sources(&config.hyphenator.dictionary) {
            log::info!("Dictionary source: {}", source.display_name());
        }

        let hyphenator =
            Hyphenator::from_config(&config.hyphenator).context("Failed to create hyphenator")?;
        log::debug!(
            "Hyphenator ready: left_min={}, right_min={}, {} dictionary entries",
            hyphenator.left_min(),
            hyphenator.right_min(),
            hyphenator.dictionary_size()
        );
        Ok(hyphenator)
    }
}
