//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use crate::error::CliError;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read all of stdin, refusing an interactive terminal
    pub fn read_stdin() -> Result<String> {
        let mut stdin = io::stdin();
        if stdin.is_terminal() {
            return Err(CliError::NoInput.into());
        }

        let mut content = String::new();
        stdin
            .read_to_string(&mut content)
            .context("Failed to read from stdin")?;
        Ok(content)
    }

    /// Read one word per line, skipping blank lines and `#` comments
    pub fn read_word_list(path: &Path) -> Result<Vec<String>> {
        let content = Self::read_text(path)?;
        Ok(parse_word_list(&content))
    }

    /// Whether the file should be processed as HTML
    pub fn is_html(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
            .unwrap_or(false)
    }
}

fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
