//! Markdown output formatter

use super::{DocumentRecord, OutputFormatter, WordRecord};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - documents as sections, words as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    document_count: usize,
    word_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document_count: 0,
            word_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, document: &DocumentRecord) -> Result<()> {
        self.document_count += 1;
        writeln!(self.writer, "## {}", document.source)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", document.text.trim_end())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_word(&mut self, word: &WordRecord) -> Result<()> {
        if self.word_count == 0 {
            writeln!(self.writer, "| Word | Syllables | Count |")?;
            writeln!(self.writer, "|------|-----------|-------|")?;
        }
        self.word_count += 1;
        writeln!(
            self.writer,
            "| {} | {} | {} |",
            word.word,
            word.syllables.join(" · "),
            word.count
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        if self.word_count > 0 {
            writeln!(self.writer, "*Total words: {}*", self.word_count)?;
        } else {
            writeln!(self.writer, "*Total documents: {}*", self.document_count)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
