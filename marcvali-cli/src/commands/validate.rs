//! Validate command implementation

use anyhow::Result;
use clap::{ArgGroup, Args};
use std::path::{Path, PathBuf};

use crate::config::CliConfig;
use crate::dictionary_source::DictionarySource;
use crate::error::CliError;

/// Arguments for the validate command
#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .multiple(true)
        .args(["config", "dictionary"])
))]
pub struct ValidateArgs {
    /// Configuration file to validate
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Exception dictionary to validate
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let mut dictionaries = Vec::new();

        if let Some(path) = &self.config {
            println!("Validating configuration: {}", path.display());
            match CliConfig::load(path) {
                Ok(config) => {
                    let settings = &config.hyphenator;
                    println!("✓ Configuration is valid!");
                    println!(
                        "  Margins: left {}, right {}",
                        settings.hyphenation.left_min, settings.hyphenation.right_min
                    );
                    println!("  Marker: {:?}", settings.hyphenation.marker);
                    println!(
                        "  Clusters: +{} / -{}",
                        settings.clusters.add.len(),
                        settings.clusters.remove.len()
                    );
                    dictionaries.extend(settings.dictionary.paths.iter().cloned());
                }
                Err(e) => {
                    println!("✗ Configuration is invalid!");
                    println!("  Error: {e:#}");
                    return Err(anyhow::anyhow!("Validation failed: {e}"));
                }
            }
        }

        dictionaries.extend(self.dictionary.iter().cloned());
        for path in &dictionaries {
            validate_dictionary(path)?;
        }

        Ok(())
    }
}

fn validate_dictionary(path: &Path) -> Result<()> {
    println!("Validating dictionary: {}", path.display());

    let source = DictionarySource::File(path.to_path_buf());
    let (dictionary, report) = match source.inspect() {
        Ok(loaded) => loaded,
        Err(e) => {
            println!("✗ Dictionary is invalid!");
            println!("  Error: {e:#}");
            return Err(anyhow::anyhow!("Validation failed: {e}"));
        }
    };

    if report.skipped > 0 {
        println!("✗ Dictionary has malformed entries!");
        println!("  Valid entries: {}", report.loaded);
        println!("  Malformed entries: {}", report.skipped);
        return Err(CliError::DictionaryError(format!(
            "{} malformed entries in {}",
            report.skipped,
            path.display()
        ))
        .into());
    }

    println!("✓ Dictionary is valid!");
    println!("  Entries: {}", dictionary.len());
    Ok(())
}
