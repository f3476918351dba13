//! Plain text output formatter

use super::{DocumentRecord, OutputFormatter, WordRecord};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter
///
/// Documents are written back as-is; words become one tab-separated line
/// of word, `-`-joined syllables and syllable count.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, document: &DocumentRecord) -> Result<()> {
        self.writer.write_all(document.text.as_bytes())?;
        Ok(())
    }

    fn format_word(&mut self, word: &WordRecord) -> Result<()> {
        writeln!(
            self.writer,
            "{}\t{}\t{}",
            word.word,
            word.syllables.join("-"),
            word.count
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
