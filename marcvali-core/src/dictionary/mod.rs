//! Exception dictionary consulted before the rule engine
//!
//! Entries map a canonical word (no break markers, no lookup punctuation) to
//! its syllables. Files use `-` between syllables:
//!
//! ```json
//! { "საქართველო": "სა-ქარ-თვე-ლო" }
//! ```
//!
//! Bulk loads never fail half-way: a bad entry is skipped, logged and counted
//! in the returned [`LoadReport`].

pub mod loader;

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde_json::{Map, Value};
use smallvec::SmallVec;

use crate::domain::boundary::{Boundary, BoundaryRule};
use crate::domain::marker::{
    canonical_key, DICTIONARY_SEPARATOR, LOOKUP_PUNCTUATION, SOFT_HYPHEN, ZERO_WIDTH_SPACE,
};
use crate::domain::rules::BoundaryList;
use crate::error::{HyphenError, Result};

pub use loader::{default_locations, find_default_dictionary, DICTIONARY_ENV_VAR};

/// Outcome of a bulk load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Entries inserted or replaced
    pub loaded: usize,
    /// Malformed entries that were ignored
    pub skipped: usize,
}

impl LoadReport {
    fn absorb(&mut self, other: LoadReport) {
        self.loaded += other.loaded;
        self.skipped += other.skipped;
    }
}

/// Word → syllables overrides
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideDictionary {
    entries: HashMap<String, Vec<String>>,
}

impl OverrideDictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace one entry
    ///
    /// `hyphenated` uses `-` between syllables and must spell the same
    /// letters as `word`.
    pub fn insert(&mut self, word: &str, hyphenated: &str) -> Result<()> {
        let (key, syllables) = parse_entry(word, hyphenated)?;
        self.entries.insert(key, syllables);
        Ok(())
    }

    /// Remove an entry, returning whether one was present
    pub fn remove(&mut self, word: &str) -> bool {
        self.entries.remove(&canonical_key(word)).is_some()
    }

    /// Syllables for an already canonical word
    pub fn lookup(&self, canonical: &str) -> Option<&[String]> {
        self.entries.get(canonical).map(Vec::as_slice)
    }

    /// Whether the canonical word has an override
    pub fn contains(&self, canonical: &str) -> bool {
        self.entries.contains_key(canonical)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Merge word/segmentation pairs; later pairs win
    pub fn extend<I, K, V>(&mut self, entries: I) -> LoadReport
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut report = LoadReport::default();
        for (word, hyphenated) in entries {
            match self.insert(word.as_ref(), hyphenated.as_ref()) {
                Ok(()) => report.loaded += 1,
                Err(e) => {
                    log::warn!("Skipping dictionary entry '{}': {}", word.as_ref(), e);
                    report.skipped += 1;
                }
            }
        }
        report
    }

    /// Merge a parsed JSON object
    ///
    /// Entries whose value is not a string are skipped.
    pub fn merge_json_map(&mut self, map: Map<String, Value>) -> LoadReport {
        let mut report = LoadReport::default();
        let mut strings = Vec::with_capacity(map.len());

        for (word, value) in map {
            match value {
                Value::String(hyphenated) => strings.push((word, hyphenated)),
                other => {
                    log::warn!(
                        "Skipping dictionary entry '{}': expected a string, found {}",
                        word,
                        json_kind(&other)
                    );
                    report.skipped += 1;
                }
            }
        }

        report.absorb(self.extend(strings));
        report
    }

    /// Merge a JSON document; the top level must be an object
    pub fn merge_json_str(&mut self, json: &str) -> Result<LoadReport> {
        let value: Value = serde_json::from_str(json)?;
        match value {
            Value::Object(map) => Ok(self.merge_json_map(map)),
            other => Err(HyphenError::Dictionary(format!(
                "expected a JSON object at the top level, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Merge a JSON dictionary file
    pub fn merge_file(&mut self, path: &Path) -> Result<LoadReport> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            HyphenError::Dictionary(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let report = self.merge_json_str(&content)?;
        log::debug!(
            "Merged dictionary {} ({} loaded, {} skipped)",
            path.display(),
            report.loaded,
            report.skipped
        );
        Ok(report)
    }

    /// Entries in file form (`-` between syllables), sorted by word
    pub fn export(&self) -> BTreeMap<String, String> {
        let separator = DICTIONARY_SEPARATOR.to_string();
        self.entries
            .iter()
            .map(|(word, syllables)| (word.clone(), syllables.join(separator.as_str())))
            .collect()
    }

    /// Serialize the dictionary to pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.export())?)
    }
}

/// Boundaries that reproduce `syllables` inside `word`
///
/// Only letters are matched against the syllables. Punctuation and compound
/// hyphens stay attached to the syllable they follow, so no marker lands
/// next to a literal `-` and none drops a character of `word`.
pub fn override_boundaries(word: &[char], syllables: &[String]) -> BoundaryList {
    let mut ends: SmallVec<[usize; 8]> = syllables
        .iter()
        .scan(0, |letters, syllable| {
            *letters += syllable.chars().count();
            Some(*letters)
        })
        .collect();
    ends.pop();

    let mut boundaries = BoundaryList::new();
    let mut pending = ends.into_iter().peekable();
    let mut letters = 0;

    for (i, &ch) in word.iter().enumerate() {
        if !is_entry_letter(ch) {
            continue;
        }
        letters += 1;
        if pending.peek() == Some(&letters) {
            pending.next();
            let offset = i + 1 + word[i + 1..]
                .iter()
                .take_while(|&&next| !is_entry_letter(next))
                .count();
            if offset < word.len() {
                boundaries.push(Boundary::new(offset, BoundaryRule::Dictionary));
            }
        }
    }

    boundaries
}

fn is_entry_letter(ch: char) -> bool {
    ch != DICTIONARY_SEPARATOR
        && ch != SOFT_HYPHEN
        && ch != ZERO_WIDTH_SPACE
        && !LOOKUP_PUNCTUATION.contains(&ch)
}

fn parse_entry(word: &str, hyphenated: &str) -> Result<(String, Vec<String>)> {
    let key = canonical_key(word);
    if key.is_empty() {
        return Err(HyphenError::Dictionary("empty word".into()));
    }
    if hyphenated.is_empty() {
        return Err(HyphenError::Dictionary("empty segmentation".into()));
    }

    let syllables: Vec<String> = hyphenated
        .split(DICTIONARY_SEPARATOR)
        .map(str::to_string)
        .collect();
    if syllables.iter().any(String::is_empty) {
        return Err(HyphenError::Dictionary(format!(
            "empty syllable in '{hyphenated}'"
        )));
    }

    let letters: String = key.chars().filter(|&ch| ch != DICTIONARY_SEPARATOR).collect();
    if syllables.concat() != letters {
        return Err(HyphenError::Dictionary(format!(
            "segmentation '{hyphenated}' does not spell '{key}'"
        )));
    }

    Ok((key, syllables))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
