//! Syllabification domain
//!
//! Pure logic with no I/O: letter classification, harmonic clusters,
//! boundary value objects, break-marker handling and the rule engine itself.

pub mod alphabet;
pub mod boundary;
pub mod clusters;
pub mod marker;
pub mod rules;

pub use alphabet::{is_georgian, is_georgian_letter, Alphabet, LetterClass};
pub use boundary::{Boundary, BoundaryRule, Margins, DEFAULT_LEFT_MIN, DEFAULT_RIGHT_MIN};
pub use clusters::{ClusterSet, DEFAULT_CLUSTERS};
pub use marker::{canonical_key, BreakMarker, SOFT_HYPHEN, ZERO_WIDTH_SPACE};
pub use rules::{BoundaryList, RuleEngine};
