//! Break marker handling and word canonicalization

use std::fmt;

use crate::error::{HyphenError, Result};

/// U+00AD SOFT HYPHEN, the default marker
pub const SOFT_HYPHEN: char = '\u{00AD}';

/// U+200B ZERO WIDTH SPACE, treated as a leftover break opportunity
pub const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// Separator used by dictionary files; also the compound-word hyphen
pub const DICTIONARY_SEPARATOR: char = '-';

/// Punctuation dropped from a word before dictionary lookup
///
/// The ASCII hyphen is not listed: it marks compound words.
pub const LOOKUP_PUNCTUATION: [char; 20] = [
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '_', '`', '~', '(',
    ')',
];

/// The string inserted at syllable boundaries
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BreakMarker(String);

impl Default for BreakMarker {
    fn default() -> Self {
        Self(SOFT_HYPHEN.to_string())
    }
}

impl fmt::Display for BreakMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl BreakMarker {
    /// Create a marker, rejecting the empty string
    pub fn new(marker: impl Into<String>) -> Result<Self> {
        let marker = marker.into();
        if marker.is_empty() {
            return Err(HyphenError::Configuration(
                "break marker must not be empty".into(),
            ));
        }
        Ok(Self(marker))
    }

    /// The soft hyphen marker
    pub fn soft_hyphen() -> Self {
        Self::default()
    }

    /// Marker text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Remove prior hyphenation from text
    ///
    /// Soft hyphens and zero-width spaces always go, as does the configured
    /// marker. A literal `-` survives unless it is the configured marker.
    pub fn strip(&self, text: &str) -> String {
        let cleaned: String = text
            .chars()
            .filter(|&ch| ch != SOFT_HYPHEN && ch != ZERO_WIDTH_SPACE)
            .collect();

        cleaned.replace(&self.0, "")
    }

    /// Canonical dictionary key for a word
    pub fn canonicalize(&self, word: &str) -> String {
        canonical_key(&self.strip(word))
    }
}

/// Drop lookup punctuation and always-stripped marks from a word
pub fn canonical_key(word: &str) -> String {
    word.chars()
        .filter(|ch| {
            *ch != SOFT_HYPHEN && *ch != ZERO_WIDTH_SPACE && !LOOKUP_PUNCTUATION.contains(ch)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_marker_rejected() {
        assert!(BreakMarker::new("").is_err());
        assert_eq!(BreakMarker::new("|").unwrap().as_str(), "|");
    }

    #[test]
    fn test_strip_soft_hyphen_and_zwsp() {
        let marker = BreakMarker::default();
        assert_eq!(marker.strip("სა\u{00AD}ქარ\u{200B}თვე\u{00AD}ლო"), "საქართველო");
    }

    #[test]
    fn test_hyphen_marker_is_stripped() {
        let marker = BreakMarker::new("-").unwrap();
        assert_eq!(marker.strip("სა-ქარ-თვე-ლო"), "საქართველო");
        assert_eq!(marker.strip("სა\u{00AD}ქარ"), "საქარ");
    }

    #[test]
    fn test_hyphen_kept_under_other_markers() {
        assert_eq!(
            BreakMarker::default().strip("ქართულ-ინგლისური"),
            "ქართულ-ინგლისური"
        );
    }

    #[test]
    fn test_custom_marker_stripped() {
        let marker = BreakMarker::new("|").unwrap();
        assert_eq!(marker.strip("სა|ქარ|თვე|ლო"), "საქართველო");
        // compound hyphen survives a custom marker as well
        assert_eq!(marker.strip("ა|ბა-და"), "აბა-და");
    }

    #[test]
    fn test_canonicalize_drops_punctuation_keeps_hyphen() {
        let marker = BreakMarker::default();
        assert_eq!(marker.canonicalize("(საქართველო)!"), "საქართველო");
        assert_eq!(marker.canonicalize("ჩრდილო-აღმოსავლეთი,"), "ჩრდილო-აღმოსავლეთი");
        assert_eq!(canonical_key("სა\u{00AD}ქარ.თვე"), "საქართვე");
    }

    #[test]
    fn test_display() {
        assert_eq!(BreakMarker::new("=").unwrap().to_string(), "=");
    }
}
