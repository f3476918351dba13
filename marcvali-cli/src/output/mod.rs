//! Output formatting module

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use marcvali_core::{Boundary, Hyphenator};
use serde::{Deserialize, Serialize};

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text
    #[default]
    Text,
    /// JSON array of records
    Json,
    /// Markdown document
    Markdown,
}

impl OutputFormat {
    /// Name used on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

/// A hyphenated input document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// File path, `<stdin>` or `<text>`
    pub source: String,
    /// Document with break markers inserted
    pub text: String,
}

/// Syllable analysis of a single word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub hyphenated: String,
    pub syllables: Vec<String>,
    pub count: usize,
    pub boundaries: Vec<Boundary>,
}

impl WordRecord {
    /// Analyze `word` with the given hyphenator
    pub fn analyze(hyphenator: &Hyphenator, word: &str) -> Self {
        let syllables = hyphenator.syllables(word);
        Self {
            word: word.to_string(),
            hyphenated: hyphenator.hyphenate(word),
            count: syllables.len(),
            syllables,
            boundaries: hyphenator.boundaries(word),
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Output a hyphenated document
    fn format_document(&mut self, document: &DocumentRecord) -> Result<()>;

    /// Output the analysis of one word
    fn format_word(&mut self, word: &WordRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Destination writer: a buffered file or stdout
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

/// Create the formatter for `format`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
