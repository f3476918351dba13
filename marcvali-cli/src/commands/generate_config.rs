//! Generate configuration template command

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::config::CONFIG_TEMPLATE;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = "marcvali.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        fs::write(&self.output, CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Generated configuration: {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the file to adjust margins, marker and clusters");
        println!(
            "2. Validate it: marcvali validate --config {}",
            self.output.display()
        );
        println!(
            "3. Use it: marcvali hyphenate --config {} -i <FILE>",
            self.output.display()
        );

        Ok(())
    }
}
