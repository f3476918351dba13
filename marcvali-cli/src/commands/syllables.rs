//! Syllables command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::options::HyphenatorArgs;
use crate::input::FileReader;
use crate::output::{create_formatter, open_output, OutputFormat, WordRecord};

/// Arguments for the syllables command
#[derive(Debug, Args)]
pub struct SyllablesArgs {
    /// Words to analyze
    #[arg(value_name = "WORD", required_unless_present = "input")]
    pub words: Vec<String>,

    /// Word list file, one word per line
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text, or the config file's output.format]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub hyphenator: HyphenatorArgs,
}

impl SyllablesArgs {
    /// Execute the syllables command
    pub fn execute(&self) -> Result<()> {
        let config = self.hyphenator.load_config()?;
        let hyphenator = HyphenatorArgs::build(&config)?;

        let mut words = self.words.clone();
        if let Some(path) = &self.input {
            words.extend(FileReader::read_word_list(path)?);
        }

        let format = self.format.unwrap_or(config.output.format);
        let writer = open_output(self.output.as_deref())?;
        let mut formatter = create_formatter(format, writer, config.output.pretty_json);

        for word in &words {
            formatter.format_word(&WordRecord::analyze(&hyphenator, word))?;
        }
        formatter.finish()
    }
}
