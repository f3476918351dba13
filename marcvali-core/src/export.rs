//! Hyphenation pattern formats used by typesetting tools

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HyphenError;

/// Supported pattern formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// TeX pattern, e.g. `.სა1ქარ1თვე1ლო.`
    Tex,
    /// Hunspell hyphenation, e.g. `სა=ქარ=თვე=ლო`
    Hunspell,
}

impl ExportFormat {
    /// Every supported format
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Tex, ExportFormat::Hunspell];

    /// Format name
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Tex => "tex",
            ExportFormat::Hunspell => "hunspell",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            ExportFormat::Tex => "TeX pattern, syllables joined by '1' between dots",
            ExportFormat::Hunspell => "Hunspell hyphenation, syllables joined by '='",
        }
    }

    /// Render syllables in this format
    pub fn render<S: AsRef<str>>(&self, syllables: &[S]) -> String {
        match self {
            ExportFormat::Tex => tex_pattern(syllables),
            ExportFormat::Hunspell => hunspell_pattern(syllables),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = HyphenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tex" => Ok(ExportFormat::Tex),
            "hunspell" => Ok(ExportFormat::Hunspell),
            other => Err(HyphenError::Configuration(format!(
                "unknown export format '{other}' (expected tex or hunspell)"
            ))),
        }
    }
}

/// `.` + syllables joined by `1` + `.`
pub fn tex_pattern<S: AsRef<str>>(syllables: &[S]) -> String {
    let mut pattern = String::from(".");
    for (i, syllable) in syllables.iter().enumerate() {
        if i > 0 {
            pattern.push('1');
        }
        pattern.push_str(syllable.as_ref());
    }
    pattern.push('.');
    pattern
}

/// Syllables joined by `=`
pub fn hunspell_pattern<S: AsRef<str>>(syllables: &[S]) -> String {
    syllables
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join("=")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tex_pattern() {
        assert_eq!(tex_pattern(&["სა", "ქარ", "თვე", "ლო"]), ".სა1ქარ1თვე1ლო.");
        assert_eq!(tex_pattern(&["არა"]), ".არა.");
    }

    #[test]
    fn test_hunspell_pattern() {
        assert_eq!(hunspell_pattern(&["სა", "ქარ", "თვე", "ლო"]), "სა=ქარ=თვე=ლო");
        assert_eq!(hunspell_pattern(&["არა"]), "არა");
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("tex".parse::<ExportFormat>().unwrap(), ExportFormat::Tex);
        assert_eq!(" Hunspell ".parse::<ExportFormat>().unwrap(), ExportFormat::Hunspell);
        assert!("hyph".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_render_matches_free_functions() {
        let syllables = vec!["მთავ".to_string(), "რო".to_string(), "ბა".to_string()];
        assert_eq!(ExportFormat::Tex.render(&syllables), ".მთავ1რო1ბა.");
        assert_eq!(ExportFormat::Hunspell.render(&syllables), "მთავ=რო=ბა");
        assert_eq!(ExportFormat::Tex.to_string(), "tex");
    }
}
