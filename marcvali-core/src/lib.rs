//! Georgian syllabification and hyphenation
//!
//! This crate splits Georgian words into syllables and inserts a break
//! marker (a soft hyphen by default) at every syllable boundary. Boundaries
//! come from a small phonological rule set driven by the distance between
//! vowels, refined by harmonic consonant clusters and doubled consonants,
//! and guarded by anti-orphan margins. An exception dictionary overrides the
//! rules for known words.
//!
//! # Architecture
//!
//! - **Domain layer** ([`domain`]): letter classes, clusters, markers and the
//!   rule engine. Pure, no I/O.
//! - **Dictionary** ([`dictionary`]): word overrides and default-location
//!   probing.
//! - **Text walkers** ([`text`]): plain text and HTML traversal.
//! - **Facade** ([`Hyphenator`]): owns the configuration and ties the rest
//!   together.
//!
//! # Example
//!
//! ```rust
//! use marcvali_core::Hyphenator;
//!
//! let mut hyphenator = Hyphenator::new();
//! hyphenator.set_marker("-");
//!
//! assert_eq!(
//!     hyphenator.hyphenate_text("საქართველო არის ლამაზი"),
//!     "სა-ქარ-თვე-ლო არის ლა-მა-ზი"
//! );
//!
//! hyphenator.add_exception("მთავრობა", "მთა-ვრო-ბა");
//! assert_eq!(hyphenator.hyphenate("მთავრობა"), "მთა-ვრო-ბა");
//! ```

pub mod config;
pub mod dictionary;
pub mod domain;
pub mod error;
pub mod export;
pub mod hyphenator;
pub mod text;

use std::sync::OnceLock;

pub use config::{ClusterConfig, DictionaryConfig, HyphenationConfig, HyphenatorConfig};
pub use dictionary::{LoadReport, OverrideDictionary, DICTIONARY_ENV_VAR};
pub use domain::*;
pub use error::{HyphenError, Result};
pub use export::ExportFormat;
pub use hyphenator::{Hyphenator, HyphenatorBuilder};

static DEFAULT_HYPHENATOR: OnceLock<Hyphenator> = OnceLock::new();

fn default_hyphenator() -> &'static Hyphenator {
    DEFAULT_HYPHENATOR.get_or_init(Hyphenator::new)
}

/// Hyphenate a word with the soft hyphen, rules only
pub fn hyphenate(word: &str) -> String {
    default_hyphenator().hyphenate(word)
}

/// Syllables of a word, rules only
pub fn syllables(word: &str) -> Vec<String> {
    default_hyphenator().syllables(word)
}

/// Hyphenate free text with the soft hyphen, rules only
pub fn hyphenate_text(text: &str) -> String {
    default_hyphenator().hyphenate_text(text)
}
