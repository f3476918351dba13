//! Export command implementation

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use marcvali_core::ExportFormat;

use super::options::HyphenatorArgs;
use crate::input::FileReader;
use crate::output::open_output;

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Words to export
    #[arg(value_name = "WORD", required_unless_present = "input")]
    pub words: Vec<String>,

    /// Word list file, one word per line
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Pattern format: tex or hunspell
    #[arg(short, long, value_name = "FORMAT", default_value = "tex")]
    pub format: ExportFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub hyphenator: HyphenatorArgs,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> Result<()> {
        let config = self.hyphenator.load_config()?;
        let hyphenator = HyphenatorArgs::build(&config)?;

        let mut words = self.words.clone();
        if let Some(path) = &self.input {
            words.extend(FileReader::read_word_list(path)?);
        }
        log::info!("Exporting {} words as {}", words.len(), self.format);

        let mut writer = open_output(self.output.as_deref())?;
        for word in &words {
            writeln!(writer, "{}", hyphenator.export(word, self.format))?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn export(format: ExportFormat, words: &[&str]) -> String {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("patterns.txt");

        ExportArgs {
            words: words.iter().map(|w| w.to_string()).collect(),
            input: None,
            format,
            output: Some(output.clone()),
            hyphenator: HyphenatorArgs {
                no_default_dictionary: true,
                ..Default::default()
            },
        }
        .execute()
        .unwrap();

        fs::read_to_string(output).unwrap()
    }

    #[test]
    fn test_tex_patterns() {
        assert_eq!(
            export(ExportFormat::Tex, &["საქართველო", "მთავრობა"]),
            ".სა1ქარ1თვე1ლო.\n.მთავ1რო1ბა.\n"
        );
    }

    #[test]
    fn test_hunspell_patterns() {
        assert_eq!(
            export(ExportFormat::Hunspell, &["საქართველო", "და"]),
            "სა=ქარ=თვე=ლო\nდა\n"
        );
    }
}
