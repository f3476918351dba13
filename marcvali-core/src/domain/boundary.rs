//! Syllable boundary value objects

use serde::{Deserialize, Serialize};

use crate::error::{HyphenError, Result};

/// Default minimum number of characters before the first break
pub const DEFAULT_LEFT_MIN: usize = 2;

/// Default minimum number of characters after the last break
pub const DEFAULT_RIGHT_MIN: usize = 2;

/// Which rule proposed a boundary
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryRule {
    /// Two adjacent vowels (V|V)
    Hiatus,
    /// A lone consonant opens the next syllable (V|CV)
    SingleConsonant,
    /// A doubled consonant is split across syllables (VC|CV)
    Gemination,
    /// A harmonic cluster opens the next syllable (V..|CCV)
    HarmonicCluster,
    /// The first consonant of a run closes the syllable (VC|C..V)
    DefaultSplit,
    /// Taken from an exception dictionary entry
    Dictionary,
}

impl BoundaryRule {
    /// Short name used in logs and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryRule::Hiatus => "hiatus",
            BoundaryRule::SingleConsonant => "single-consonant",
            BoundaryRule::Gemination => "gemination",
            BoundaryRule::HarmonicCluster => "harmonic-cluster",
            BoundaryRule::DefaultSplit => "default-split",
            BoundaryRule::Dictionary => "dictionary",
        }
    }
}

/// A syllable boundary inside a word
///
/// `offset` counts characters, not bytes: a break is inserted before the
/// character at that index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boundary {
    /// Character offset of the break
    pub offset: usize,
    /// Rule that produced the break
    pub rule: BoundaryRule,
}

impl Boundary {
    /// Create a new boundary
    pub fn new(offset: usize, rule: BoundaryRule) -> Self {
        Self { offset, rule }
    }
}

/// Anti-orphan margins
///
/// A break at `p` in a word of `len` characters is allowed only when
/// `p >= left` and `len - p >= right`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    left: usize,
    right: usize,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: DEFAULT_LEFT_MIN,
            right: DEFAULT_RIGHT_MIN,
        }
    }
}

impl Margins {
    /// Create margins, rejecting zero values
    pub fn new(left: usize, right: usize) -> Result<Self> {
        if left == 0 {
            return Err(HyphenError::Configuration(
                "left_min must be greater than 0".into(),
            ));
        }
        if right == 0 {
            return Err(HyphenError::Configuration(
                "right_min must be greater than 0".into(),
            ));
        }
        Ok(Self { left, right })
    }

    /// Minimum characters before a break
    pub fn left(&self) -> usize {
        self.left
    }

    /// Minimum characters after a break
    pub fn right(&self) -> usize {
        self.right
    }

    /// Shortest word that can hold a break at all
    pub fn min_word_len(&self) -> usize {
        self.left + self.right
    }

    /// Anti-orphan check for a single candidate offset
    #[inline]
    pub fn allows(&self, offset: usize, word_len: usize) -> bool {
        offset >= self.left && word_len.saturating_sub(offset) >= self.right && offset <= word_len
    }
}
