//! Georgian letter classification
//!
//! The rule engine only distinguishes vowels from everything else, but the
//! text walker and the cluster set also need to know whether a character
//! belongs to the Mkhedruli letter block at all.

/// First letter of the Georgian block handled by the engine (ა)
pub const GEORGIAN_FIRST: char = '\u{10D0}';

/// Last letter of the Georgian block handled by the engine (ჰ)
pub const GEORGIAN_LAST: char = '\u{10F0}';

/// The five Georgian vowel letters
pub const DEFAULT_VOWELS: [char; 5] = ['ა', 'ე', 'ი', 'ო', 'უ'];

/// Classification of a single character for syllabification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LetterClass {
    /// Syllable nucleus
    Vowel,
    /// Georgian letter that is not a vowel
    Consonant,
    /// Anything outside the Georgian block
    Other,
}

/// Check whether a character lies in the Georgian letter block
#[inline]
pub fn is_georgian_letter(ch: char) -> bool {
    (GEORGIAN_FIRST..=GEORGIAN_LAST).contains(&ch)
}

/// Check whether a non-empty string consists of Georgian letters only
pub fn is_georgian(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_georgian_letter)
}

/// Vowel inventory, fixed when the engine is constructed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    vowels: [char; 5],
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            vowels: DEFAULT_VOWELS,
        }
    }
}

impl Alphabet {
    /// Create the standard Georgian alphabet
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a character
    #[inline]
    pub fn classify(&self, ch: char) -> LetterClass {
        if self.vowels.contains(&ch) {
            LetterClass::Vowel
        } else if is_georgian_letter(ch) {
            LetterClass::Consonant
        } else {
            LetterClass::Other
        }
    }

    /// Check if character is a vowel
    #[inline]
    pub fn is_vowel(&self, ch: char) -> bool {
        matches!(self.classify(ch), LetterClass::Vowel)
    }

    /// Check if character is a Georgian consonant
    #[inline]
    pub fn is_consonant(&self, ch: char) -> bool {
        matches!(self.classify(ch), LetterClass::Consonant)
    }

    /// The vowel letters
    pub fn vowels(&self) -> &[char] {
        &self.vowels
    }
}
