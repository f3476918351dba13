//! The hyphenator facade
//!
//! A [`Hyphenator`] owns everything a segmentation depends on: the rule
//! engine with its margins and cluster set, the exception dictionary and the
//! break marker. Segmentation takes `&self`; configuration takes `&mut self`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::HyphenatorConfig;
use crate::dictionary::{loader, override_boundaries, LoadReport, OverrideDictionary};
use crate::domain::alphabet::{self, Alphabet};
use crate::domain::boundary::{Boundary, Margins};
use crate::domain::marker::{canonical_key, BreakMarker};
use crate::domain::rules::{join_at, split_at, BoundaryList, RuleEngine};
use crate::error::{HyphenError, Result};
use crate::export::{self, ExportFormat};
use crate::text::{walk_html, walk_text, MIN_RUN_CHARS};

/// Batches smaller than this are hyphenated on the calling thread
#[cfg(feature = "parallel")]
const PARALLEL_BATCH_MIN: usize = 512;

/// Georgian hyphenator
///
/// # Examples
///
/// ```
/// use marcvali_core::Hyphenator;
///
/// let mut hyphenator = Hyphenator::new();
/// hyphenator.set_marker("-");
///
/// assert_eq!(hyphenator.hyphenate("საქართველო"), "სა-ქარ-თვე-ლო");
/// assert_eq!(hyphenator.syllables("მთავრობა"), vec!["მთავ", "რო", "ბა"]);
/// ```
#[derive(Debug, Clone)]
pub struct Hyphenator {
    engine: RuleEngine,
    dictionary: OverrideDictionary,
    marker: BreakMarker,
    min_run_length: usize,
}

impl Default for Hyphenator {
    fn default() -> Self {
        Self {
            engine: RuleEngine::new(),
            dictionary: OverrideDictionary::new(),
            marker: BreakMarker::default(),
            min_run_length: MIN_RUN_CHARS,
        }
    }
}

impl Hyphenator {
    /// Rules-only hyphenator using the soft hyphen
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules-only hyphenator using a custom marker
    pub fn with_marker(marker: impl Into<String>) -> Result<Self> {
        Ok(Self {
            marker: BreakMarker::new(marker)?,
            ..Self::default()
        })
    }

    /// Create a builder
    pub fn builder() -> HyphenatorBuilder {
        HyphenatorBuilder::new()
    }

    /// Build a hyphenator from a validated configuration
    ///
    /// Explicit dictionary paths must load; the default dictionary is
    /// optional.
    pub fn from_config(config: &HyphenatorConfig) -> Result<Self> {
        config.validate()?;

        let alphabet = Alphabet::new();
        let clusters = config.cluster_set(&alphabet)?;
        let engine = RuleEngine::with_parts(alphabet, clusters, config.margins()?);

        let mut hyphenator = Self {
            engine,
            dictionary: OverrideDictionary::new(),
            marker: config.marker()?,
            min_run_length: config.hyphenation.min_run_length,
        };

        if config.dictionary.load_default {
            hyphenator.load_default_library();
        }
        for path in &config.dictionary.paths {
            hyphenator.load_library_file(path)?;
        }

        Ok(hyphenator)
    }

    // ---- segmentation ----

    /// Insert the marker at every syllable boundary of a word
    ///
    /// Prior markers are stripped first, so already hyphenated input comes
    /// back segmented the same way.
    pub fn hyphenate(&self, word: &str) -> String {
        let chars = self.prepare(word);
        self.render(&chars)
    }

    /// Hyphenate every Georgian run in free text
    ///
    /// Runs shorter than the minimum run length and all non-Georgian text
    /// are copied unchanged.
    pub fn hyphenate_text(&self, text: &str) -> String {
        let cleaned = self.marker.strip(text);
        walk_text(&cleaned, self.min_run_length, |run| {
            let chars: Vec<char> = run.chars().collect();
            self.render(&chars)
        })
    }

    /// Hyphenate the text nodes of an HTML fragment
    ///
    /// Tags, comments and the content of `script`, `style`, `code`, `pre`
    /// and `textarea` elements are copied verbatim.
    pub fn hyphenate_html(&self, html: &str) -> String {
        walk_html(html, |text| self.hyphenate_text(text))
    }

    /// Syllables of a word, prior markers removed
    pub fn syllables(&self, word: &str) -> Vec<String> {
        let chars = self.prepare(word);
        if chars.is_empty() {
            return Vec::new();
        }
        let boundaries = self.word_boundaries(&chars);
        split_at(&chars, boundaries.iter().map(|b| b.offset))
    }

    /// Number of syllables; 0 for an empty word
    pub fn count_syllables(&self, word: &str) -> usize {
        self.syllables(word).len()
    }

    /// Number of break points inserted into a word
    pub fn hyphenation_points(&self, word: &str) -> usize {
        let chars = self.prepare(word);
        self.word_boundaries(&chars).len()
    }

    /// Accepted boundaries with the rule that produced each
    ///
    /// Offsets index the word's characters after prior markers are removed.
    pub fn boundaries(&self, word: &str) -> Vec<Boundary> {
        let chars = self.prepare(word);
        self.word_boundaries(&chars).into_vec()
    }

    /// Hyphenate a batch of words, preserving order
    pub fn hyphenate_words<S>(&self, words: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        if words.len() >= PARALLEL_BATCH_MIN {
            return words
                .par_iter()
                .map(|word| self.hyphenate(word.as_ref()))
                .collect();
        }

        words.iter().map(|word| self.hyphenate(word.as_ref())).collect()
    }

    /// Remove prior hyphenation from text
    pub fn unhyphenate(&self, text: &str) -> String {
        self.marker.strip(text)
    }

    /// Whether text is non-empty and made of Georgian letters only
    pub fn is_georgian(&self, text: &str) -> bool {
        alphabet::is_georgian(text)
    }

    /// Whether a word is long enough to receive any break
    pub fn can_hyphenate(&self, word: &str) -> bool {
        !word.is_empty() && word.chars().count() >= self.engine.margins().min_word_len()
    }

    // ---- configuration ----

    /// Current break marker
    pub fn marker(&self) -> &str {
        self.marker.as_str()
    }

    /// Minimum characters before the first break
    pub fn left_min(&self) -> usize {
        self.engine.margins().left()
    }

    /// Minimum characters after the last break
    pub fn right_min(&self) -> usize {
        self.engine.margins().right()
    }

    /// Shortest Georgian run segmented in free text
    pub fn min_run_length(&self) -> usize {
        self.min_run_length
    }

    /// Set the left margin; zero is ignored
    pub fn set_left_min(&mut self, value: usize) -> &mut Self {
        match Margins::new(value, self.right_min()) {
            Ok(margins) => self.engine.set_margins(margins),
            Err(e) => log::warn!("Ignoring left_min {}: {}", value, e),
        }
        self
    }

    /// Set the right margin; zero is ignored
    pub fn set_right_min(&mut self, value: usize) -> &mut Self {
        match Margins::new(self.left_min(), value) {
            Ok(margins) => self.engine.set_margins(margins),
            Err(e) => log::warn!("Ignoring right_min {}: {}", value, e),
        }
        self
    }

    /// Set the break marker; the empty string is ignored
    pub fn set_marker(&mut self, marker: &str) -> &mut Self {
        match BreakMarker::new(marker) {
            Ok(marker) => self.marker = marker,
            Err(e) => log::warn!("Ignoring marker: {}", e),
        }
        self
    }

    /// Set the minimum run length for free text; zero is ignored
    pub fn set_min_run_length(&mut self, value: usize) -> &mut Self {
        if value == 0 {
            log::warn!("Ignoring min_run_length 0: must be greater than 0");
        } else {
            self.min_run_length = value;
        }
        self
    }

    // ---- exception dictionary ----

    /// Add or replace one exception; malformed entries are ignored
    pub fn add_exception(&mut self, word: &str, hyphenated: &str) -> &mut Self {
        if let Err(e) = self.dictionary.insert(word, hyphenated) {
            log::warn!("Ignoring exception '{}': {}", word, e);
        }
        self
    }

    /// Remove an exception, returning whether one existed
    pub fn remove_exception(&mut self, word: &str) -> bool {
        self.dictionary.remove(word)
    }

    /// Merge word/segmentation pairs
    pub fn load_library<I, K, V>(&mut self, entries: I) -> LoadReport
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.dictionary.extend(entries)
    }

    /// Merge a JSON dictionary document
    pub fn load_library_json(&mut self, json: &str) -> Result<LoadReport> {
        self.dictionary.merge_json_str(json)
    }

    /// Merge a JSON dictionary file
    pub fn load_library_file(&mut self, path: impl AsRef<Path>) -> Result<LoadReport> {
        self.dictionary.merge_file(path.as_ref())
    }

    /// Merge the first dictionary found in the default locations
    ///
    /// Never fails; returns `None` when nothing was loaded.
    pub fn load_default_library(&mut self) -> Option<LoadReport> {
        loader::load_default(&mut self.dictionary).map(|(_, report)| report)
    }

    /// Current exceptions in file form, sorted by word
    pub fn export_dictionary(&self) -> BTreeMap<String, String> {
        self.dictionary.export()
    }

    /// Number of exceptions
    pub fn dictionary_size(&self) -> usize {
        self.dictionary.len()
    }

    /// Read access to the exception dictionary
    pub fn dictionary(&self) -> &OverrideDictionary {
        &self.dictionary
    }

    // ---- harmonic clusters ----

    /// Harmonic clusters, sorted
    pub fn harmonic_clusters(&self) -> Vec<String> {
        self.engine.clusters().to_sorted_vec()
    }

    /// Add a harmonic cluster; anything but two Georgian consonants is ignored
    pub fn add_harmonic_cluster(&mut self, cluster: &str) -> &mut Self {
        let alphabet = self.engine.alphabet().clone();
        if let Err(e) = self.engine.clusters_mut().insert(cluster, &alphabet) {
            log::warn!("Ignoring cluster: {}", e);
        }
        self
    }

    /// Remove a harmonic cluster, returning whether it was present
    pub fn remove_harmonic_cluster(&mut self, cluster: &str) -> bool {
        self.engine.clusters_mut().remove(cluster)
    }

    // ---- export formats ----

    /// TeX pattern for a word, e.g. `.სა1ქარ1თვე1ლო.`
    pub fn tex_pattern(&self, word: &str) -> String {
        export::tex_pattern(&self.syllables(word))
    }

    /// Hunspell hyphenation for a word, e.g. `სა=ქარ=თვე=ლო`
    pub fn hunspell_pattern(&self, word: &str) -> String {
        export::hunspell_pattern(&self.syllables(word))
    }

    /// Render a word in the given pattern format
    pub fn export(&self, word: &str, format: ExportFormat) -> String {
        format.render(&self.syllables(word))
    }

    // ---- internals ----

    fn prepare(&self, word: &str) -> Vec<char> {
        self.marker.strip(word).chars().collect()
    }

    fn render(&self, chars: &[char]) -> String {
        let boundaries = self.word_boundaries(chars);
        join_at(chars, boundaries.iter().map(|b| b.offset), self.marker.as_str())
    }

    /// Dictionary first, rules on a miss
    fn word_boundaries(&self, chars: &[char]) -> BoundaryList {
        if !self.dictionary.is_empty() {
            let word: String = chars.iter().collect();
            if let Some(syllables) = self.dictionary.lookup(&canonical_key(&word)) {
                return override_boundaries(chars, syllables);
            }
        }
        self.engine.boundaries(chars)
    }
}

/// Validating builder for [`Hyphenator`]
///
/// Unlike the `set_*` methods, invalid values are reported by [`build`].
///
/// [`build`]: HyphenatorBuilder::build
#[derive(Debug, Clone)]
pub struct HyphenatorBuilder {
    config: HyphenatorConfig,
    exceptions: Vec<(String, String)>,
}

impl Default for HyphenatorBuilder {
    fn default() -> Self {
        let mut config = HyphenatorConfig::default();
        config.dictionary.load_default = false;
        Self {
            config,
            exceptions: Vec::new(),
        }
    }
}

impl HyphenatorBuilder {
    /// Create a builder with default settings and no dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: HyphenatorConfig) -> Self {
        Self {
            config,
            exceptions: Vec::new(),
        }
    }

    /// Minimum characters before the first break
    pub fn left_min(mut self, value: usize) -> Self {
        self.config.hyphenation.left_min = value;
        self
    }

    /// Minimum characters after the last break
    pub fn right_min(mut self, value: usize) -> Self {
        self.config.hyphenation.right_min = value;
        self
    }

    /// Break marker
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.config.hyphenation.marker = marker.into();
        self
    }

    /// Shortest Georgian run segmented in free text
    pub fn min_run_length(mut self, value: usize) -> Self {
        self.config.hyphenation.min_run_length = value;
        self
    }

    /// Add a harmonic cluster
    pub fn cluster(mut self, cluster: impl Into<String>) -> Self {
        self.config.clusters.add.push(cluster.into());
        self
    }

    /// Drop a default harmonic cluster
    pub fn without_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.config.clusters.remove.push(cluster.into());
        self
    }

    /// Add an exception entry
    pub fn exception(mut self, word: impl Into<String>, hyphenated: impl Into<String>) -> Self {
        self.exceptions.push((word.into(), hyphenated.into()));
        self
    }

    /// Merge a dictionary file at build time
    pub fn dictionary_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.dictionary.paths.push(path.into());
        self
    }

    /// Probe the default dictionary locations at build time
    pub fn load_default_dictionary(mut self, enabled: bool) -> Self {
        self.config.dictionary.load_default = enabled;
        self
    }

    /// Validate and build
    pub fn build(self) -> Result<Hyphenator> {
        let mut hyphenator = Hyphenator::from_config(&self.config)?;
        for (word, hyphenated) in &self.exceptions {
            hyphenator
                .dictionary
                .insert(word, hyphenated)
                .map_err(|e| match e {
                    HyphenError::Dictionary(msg) => {
                        HyphenError::Dictionary(format!("exception '{word}': {msg}"))
                    }
                    other => other,
                })?;
        }
        Ok(hyphenator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::boundary::BoundaryRule;

    fn dashed() -> Hyphenator {
        Hyphenator::with_marker("-").unwrap()
    }

    #[test]
    fn test_default_marker_is_soft_hyphen() {
        let hyphenator = Hyphenator::new();
        assert_eq!(hyphenator.marker(), "\u{00AD}");
        assert_eq!(
            hyphenator.hyphenate("საქართველო"),
            "სა\u{00AD}ქარ\u{00AD}თვე\u{00AD}ლო"
        );
    }

    #[test]
    fn test_rehyphenation_is_stable() {
        let hyphenator = Hyphenator::new();
        let once = hyphenator.hyphenate("დედაქალაქი");
        assert_eq!(hyphenator.hyphenate(&once), once);
        assert_eq!(hyphenator.unhyphenate(&once), "დედაქალაქი");
    }

    #[test]
    fn test_text_example() {
        assert_eq!(
            dashed().hyphenate_text("საქართველო არის ლამაზი"),
            "სა-ქარ-თვე-ლო არის ლა-მა-ზი"
        );
    }

    #[test]
    fn test_dictionary_precedence() {
        let mut hyphenator = dashed();
        assert_eq!(hyphenator.hyphenate("მთავრობა"), "მთავ-რო-ბა");

        hyphenator.add_exception("მთავრობა", "მთა-ვრო-ბა");
        assert_eq!(hyphenator.hyphenate("მთავრობა"), "მთა-ვრო-ბა");
        assert_eq!(hyphenator.hyphenate("მთავრობა,"), "მთა-ვრო-ბა,");
        assert_eq!(
            hyphenator.boundaries("მთავრობა")[0].rule,
            BoundaryRule::Dictionary
        );

        assert!(hyphenator.remove_exception("მთავრობა"));
        assert!(!hyphenator.remove_exception("მთავრობა"));
        assert_eq!(hyphenator.hyphenate("მთავრობა"), "მთავ-რო-ბა");
    }

    #[test]
    fn test_invalid_exception_ignored() {
        let mut hyphenator = dashed();
        hyphenator
            .add_exception("დედა", "დე-დი")
            .add_exception("", "ა");
        assert_eq!(hyphenator.dictionary_size(), 0);
    }

    #[test]
    fn test_setters_chain_and_ignore_invalid() {
        let mut hyphenator = dashed();
        hyphenator.set_left_min(0).set_right_min(0).set_marker("");
        assert_eq!(hyphenator.left_min(), 2);
        assert_eq!(hyphenator.right_min(), 2);
        assert_eq!(hyphenator.marker(), "-");

        hyphenator.set_left_min(3).set_right_min(3).set_marker("|");
        assert_eq!(hyphenator.hyphenate("საქართველო"), "საქარ|თველო");
    }

    #[test]
    fn test_syllable_counts() {
        let hyphenator = dashed();
        assert_eq!(hyphenator.count_syllables("საქართველო"), 4);
        assert_eq!(hyphenator.count_syllables("არა"), 1);
        assert_eq!(hyphenator.count_syllables(""), 0);
        assert_eq!(hyphenator.hyphenation_points("საქართველო"), 3);
        assert_eq!(hyphenator.hyphenation_points("არა"), 0);
    }

    #[test]
    fn test_validation_helpers() {
        let hyphenator = Hyphenator::new();
        assert!(hyphenator.is_georgian("საქართველო"));
        assert!(!hyphenator.is_georgian("საქართველო!"));
        assert!(!hyphenator.is_georgian(""));

        assert!(hyphenator.can_hyphenate("დედა"));
        assert!(!hyphenator.can_hyphenate("არა"));
        assert!(!hyphenator.can_hyphenate(""));
    }

    #[test]
    fn test_cluster_management() {
        let mut hyphenator = dashed();
        assert_eq!(hyphenator.harmonic_clusters().len(), 67);

        hyphenator.add_harmonic_cluster("ვრ").add_harmonic_cluster("აბ");
        assert_eq!(hyphenator.harmonic_clusters().len(), 68);
        assert_eq!(hyphenator.hyphenate("მთავრობა"), "მთა-ვრო-ბა");

        assert!(hyphenator.remove_harmonic_cluster("ვრ"));
        assert!(!hyphenator.remove_harmonic_cluster("ვრ"));
    }

    #[test]
    fn test_export_formats() {
        let hyphenator = Hyphenator::new();
        assert_eq!(hyphenator.tex_pattern("საქართველო"), ".სა1ქარ1თვე1ლო.");
        assert_eq!(hyphenator.hunspell_pattern("საქართველო"), "სა=ქარ=თვე=ლო");
        assert_eq!(
            hyphenator.export("მთავრობა", ExportFormat::Hunspell),
            "მთავ=რო=ბა"
        );
    }

    #[test]
    fn test_hyphenate_words_keeps_order() {
        let hyphenator = dashed();
        let words = vec!["საქართველო"; 600]
            .into_iter()
            .chain(["არა", "ბლოკი"])
            .collect::<Vec<_>>();

        let result = hyphenator.hyphenate_words(&words);
        assert_eq!(result.len(), 602);
        assert_eq!(result[0], "სა-ქარ-თვე-ლო");
        assert_eq!(result[600], "არა");
        assert_eq!(result[601], "ბლო-კი");
    }

    #[test]
    fn test_builder_validates() {
        assert!(Hyphenator::builder().left_min(0).build().is_err());
        assert!(Hyphenator::builder().marker("").build().is_err());
        assert!(matches!(
            Hyphenator::builder().cluster("ააა").build(),
            Err(HyphenError::InvalidCluster(_))
        ));
        assert!(matches!(
            Hyphenator::builder().exception("დედა", "დე-დი").build(),
            Err(HyphenError::Dictionary(_))
        ));

        let hyphenator = Hyphenator::builder()
            .marker("-")
            .cluster("ვრ")
            .exception("დედაქალაქი", "დედა-ქალაქი")
            .build()
            .unwrap();
        assert_eq!(hyphenator.hyphenate("მთავრობა"), "მთა-ვრო-ბა");
        assert_eq!(hyphenator.hyphenate("დედაქალაქი"), "დედა-ქალაქი");
        assert_eq!(hyphenator.dictionary_size(), 1);
    }

    #[test]
    fn test_builder_skips_default_dictionary() {
        let hyphenator = Hyphenator::builder().build().unwrap();
        assert_eq!(hyphenator.dictionary_size(), 0);
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Hyphenator>();
    }
}
