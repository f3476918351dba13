//! Hyphenate command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use marcvali_core::Hyphenator;

use super::options::HyphenatorArgs;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, open_output, DocumentRecord, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the hyphenate command
#[derive(Debug, Args)]
pub struct HyphenateArgs {
    /// Input files or glob patterns
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Hyphenate this text instead of reading files or stdin
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Treat input as HTML (implied for .html and .htm files)
    #[arg(long)]
    pub html: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text, or the config file's output.format]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub hyphenator: HyphenatorArgs,
}

impl HyphenateArgs {
    /// Execute the hyphenate command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        let config = self.hyphenator.load_config()?;
        let hyphenator = HyphenatorArgs::build(&config)?;

        let format = self.format.unwrap_or(config.output.format);
        let writer = open_output(self.output.as_deref())?;
        let mut formatter = create_formatter(format, writer, config.output.pretty_json);

        if let Some(text) = &self.text {
            let mut document = self.hyphenate_document(&hyphenator, "<text>", text, self.html);
            // inline text prints as a line, the way echo would
            if format == OutputFormat::Text && !document.text.ends_with('\n') {
                document.text.push('\n');
            }
            formatter.format_document(&document)?;
        } else if !self.input.is_empty() {
            let files = resolve_patterns(&self.input)?;
            log::info!("Found {} files to hyphenate", files.len());

            let mut progress = ProgressReporter::new(quiet || self.output.is_none());
            progress.init_files(files.len() as u64);

            for file in &files {
                log::debug!("Hyphenating file: {}", file.display());
                let content = FileReader::read_text(file)?;
                let html = self.html || FileReader::is_html(file);
                let source = file.display().to_string();
                let document = self.hyphenate_document(&hyphenator, &source, &content, html);
                formatter.format_document(&document)?;
                progress.file_completed(&source);
            }

            progress.finish();
        } else {
            let content = FileReader::read_stdin()?;
            let document = self.hyphenate_document(&hyphenator, "<stdin>", &content, self.html);
            formatter.format_document(&document)?;
        }

        formatter.finish()?;

        if let Some(path) = &self.output {
            log::info!("Output written to {}", path.display());
        }
        Ok(())
    }

    fn hyphenate_document(
        &self,
        hyphenator: &Hyphenator,
        source: &str,
        content: &str,
        html: bool,
    ) -> DocumentRecord {
        let text = if html {
            hyphenator.hyphenate_html(content)
        } else {
            hyphenator.hyphenate_text(content)
        };
        DocumentRecord {
            source: source.to_string(),
            text,
        }
    }
}
