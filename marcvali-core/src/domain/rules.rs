//! Phonological rule engine
//!
//! Boundaries are derived from the distance between consecutive vowels:
//!
//! - no consonant between them: break between the vowels (hiatus)
//! - one consonant: the consonant opens the next syllable
//! - two or more consonants, in priority order:
//!   1. a doubled consonant is split in the middle
//!   2. a harmonic cluster at the tail of the run opens the next syllable
//!   3. otherwise the first consonant closes the current syllable
//!
//! Every candidate then has to pass the anti-orphan margins. A word whose
//! candidates are all rejected is returned as a single syllable.
//!
//! All offsets are character offsets into a decoded `&[char]`.

use smallvec::SmallVec;

use crate::domain::alphabet::Alphabet;
use crate::domain::boundary::{Boundary, BoundaryRule, Margins};
use crate::domain::clusters::ClusterSet;

/// Boundaries of a single word; most words have fewer than eight
pub type BoundaryList = SmallVec<[Boundary; 8]>;

/// Rule-based syllabifier
#[derive(Clone, Debug, Default)]
pub struct RuleEngine {
    alphabet: Alphabet,
    clusters: ClusterSet,
    margins: Margins,
}

impl RuleEngine {
    /// Create an engine with default alphabet, clusters and margins
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine from its parts
    pub fn with_parts(alphabet: Alphabet, clusters: ClusterSet, margins: Margins) -> Self {
        Self {
            alphabet,
            clusters,
            margins,
        }
    }

    /// The alphabet used for vowel detection
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The harmonic cluster set
    pub fn clusters(&self) -> &ClusterSet {
        &self.clusters
    }

    /// Mutable access to the harmonic cluster set
    pub fn clusters_mut(&mut self) -> &mut ClusterSet {
        &mut self.clusters
    }

    /// The anti-orphan margins
    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Replace the anti-orphan margins
    pub fn set_margins(&mut self, margins: Margins) {
        self.margins = margins;
    }

    /// One candidate per consecutive vowel pair, before margin filtering
    pub fn candidates(&self, word: &[char]) -> BoundaryList {
        let vowels: SmallVec<[usize; 16]> = word
            .iter()
            .enumerate()
            .filter(|&(_, &ch)| self.alphabet.is_vowel(ch))
            .map(|(i, _)| i)
            .collect();

        vowels
            .windows(2)
            .map(|pair| self.candidate_between(word, pair[0], pair[1]))
            .collect()
    }

    /// Accepted boundaries, strictly increasing
    pub fn boundaries(&self, word: &[char]) -> BoundaryList {
        if word.len() < self.margins.min_word_len() {
            return BoundaryList::new();
        }

        self.candidates(word)
            .into_iter()
            .filter(|boundary| self.margins.allows(boundary.offset, word.len()))
            .collect()
    }

    /// Split a word into syllables
    ///
    /// Concatenating the result always reproduces `word`.
    pub fn syllables(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let boundaries = self.boundaries(&chars);
        split_at(&chars, boundaries.iter().map(|b| b.offset))
    }

    /// Insert `marker` at every accepted boundary
    pub fn hyphenate(&self, word: &str, marker: &str) -> String {
        let chars: Vec<char> = word.chars().collect();
        let boundaries = self.boundaries(&chars);
        join_at(&chars, boundaries.iter().map(|b| b.offset), marker)
    }

    fn candidate_between(&self, word: &[char], v1: usize, v2: usize) -> Boundary {
        let between = &word[v1 + 1..v2];

        match between.len() {
            0 => Boundary::new(v1 + 1, BoundaryRule::Hiatus),
            1 => Boundary::new(v1 + 1, BoundaryRule::SingleConsonant),
            distance => {
                if let Some(j) = between.windows(2).position(|pair| pair[0] == pair[1]) {
                    return Boundary::new(v1 + 1 + j + 1, BoundaryRule::Gemination);
                }

                // Only the pair directly in front of the second vowel counts
                let tail = &between[distance - 2..];
                if self.clusters.contains_pair(tail[0], tail[1]) {
                    Boundary::new(v2 - 2, BoundaryRule::HarmonicCluster)
                } else {
                    Boundary::new(v1 + 2, BoundaryRule::DefaultSplit)
                }
            }
        }
    }
}

/// Rebuild a word with `marker` inserted at the given (increasing) offsets
pub(crate) fn join_at(
    chars: &[char],
    offsets: impl IntoIterator<Item = usize>,
    marker: &str,
) -> String {
    let mut result = String::with_capacity(chars.len() * 3 + marker.len() * 4);
    let mut next = offsets.into_iter().peekable();
    for (i, &ch) in chars.iter().enumerate() {
        if next.peek() == Some(&i) {
            result.push_str(marker);
            next.next();
        }
        result.push(ch);
    }
    result
}

/// Cut a character slice at the given (increasing) offsets
pub(crate) fn split_at(chars: &[char], offsets: impl IntoIterator<Item = usize>) -> Vec<String> {
    let mut syllables = Vec::new();
    let mut start = 0;
    for offset in offsets {
        syllables.push(chars[start..offset].iter().collect());
        start = offset;
    }
    syllables.push(chars[start..].iter().collect());
    syllables
}
