//! JSON output formatter

use super::{DocumentRecord, OutputFormatter, WordRecord};
use anyhow::Result;
use serde_json::Value;
use std::io::Write;

/// JSON formatter - outputs every record as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<Value>,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
            pretty: true,
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, document: &DocumentRecord) -> Result<()> {
        self.records.push(serde_json::to_value(document)?);
        Ok(())
    }

    fn format_word(&mut self, word: &WordRecord) -> Result<()> {
        self.records.push(serde_json::to_value(word)?);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marcvali_core::Hyphenator;

    #[test]
    fn test_words_as_array() {
        let hyphenator = Hyphenator::with_marker("-").unwrap();
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer);
            formatter
                .format_word(&WordRecord::analyze(&hyphenator, "გამარჯობა"))
                .unwrap();
            formatter.finish().unwrap();
        }

        let records: Vec<WordRecord> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].hyphenated, "გა-მარ-ჯო-ბა");
        assert_eq!(records[0].count, 4);
    }

    #[test]
    fn test_boundary_rules_serialized_snake_case() {
        let hyphenator = Hyphenator::with_marker("-").unwrap();
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer).pretty(false);
            formatter
                .format_word(&WordRecord::analyze(&hyphenator, "მთავრობა"))
                .unwrap();
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("\"rule\":\"default_split\""));
        assert!(output.contains("\"rule\":\"single_consonant\""));
        assert!(output.ends_with("]\n"));
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer).pretty(false);
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "[]\n");
    }

    #[test]
    fn test_documents() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer);
            formatter
                .format_document(&DocumentRecord {
                    source: "<stdin>".into(),
                    text: "თბი-ლი-სი".into(),
                })
                .unwrap();
            formatter.finish().unwrap();
        }

        let records: Vec<DocumentRecord> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(records[0].source, "<stdin>");
        assert_eq!(records[0].text, "თბი-ლი-სი");
    }
}
