//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use marcvali_core::{ClusterSet, ExportFormat};

use crate::output::OutputFormat;

pub mod export;
pub mod generate_config;
pub mod hyphenate;
pub mod options;
pub mod syllables;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Insert break markers into text, HTML or files
    Hyphenate(hyphenate::HyphenateArgs),

    /// Show the syllables of individual words
    Syllables(syllables::SyllablesArgs),

    /// Export words as TeX or Hunspell hyphenation patterns
    Export(export::ExportArgs),

    /// Validate a configuration file or exception dictionary
    Validate(validate::ValidateArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the default harmonic clusters
    Clusters,

    /// List output and export formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        match self {
            Commands::Hyphenate(args) => args.execute(quiet),
            Commands::Syllables(args) => args.execute(),
            Commands::Export(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) {
        match self {
            ListCommands::Clusters => {
                let clusters = ClusterSet::new().to_sorted_vec();
                println!("Harmonic clusters ({}):", clusters.len());
                for row in clusters.chunks(10) {
                    println!("  {}", row.join(" "));
                }
            }
            ListCommands::Formats => {
                println!("Output formats (hyphenate, syllables):");
                for format in OutputFormat::value_variants() {
                    let help = format
                        .to_possible_value()
                        .and_then(|value| value.get_help().map(ToString::to_string))
                        .unwrap_or_default();
                    println!("  {:<10} - {}", format.as_str(), help);
                }
                println!();
                println!("Export formats (export):");
                for format in ExportFormat::ALL {
                    println!("  {:<10} - {}", format.as_str(), format.description());
                }
            }
        }
    }
}
