//! Harmonic consonant clusters
//!
//! A harmonic cluster is a two-consonant onset that is never split. When the
//! consonant run between two vowels ends in one of these pairs, the break is
//! placed in front of the pair so that it opens the next syllable.

use std::collections::HashSet;

use crate::domain::alphabet::Alphabet;
use crate::error::{HyphenError, Result};

/// Clusters recognised out of the box
pub const DEFAULT_CLUSTERS: [&str; 67] = [
    "ბლ", "ბრ", "ბღ", "ბზ", "გდ", "გლ", "გმ", "გნ", "გვ", "გზ", "გრ", "დრ", "თლ", "თრ", "თღ",
    "კლ", "კმ", "კნ", "კრ", "კვ", "მტ", "პლ", "პრ", "ჟღ", "რგ", "რლ", "რმ", "სწ", "სხ", "ტკ",
    "ტპ", "ტრ", "ფლ", "ფრ", "ფქ", "ფშ", "ქლ", "ქნ", "ქვ", "ქრ", "ღლ", "ღრ", "ყლ", "ყრ", "შთ",
    "შპ", "ჩქ", "ჩრ", "ცლ", "ცნ", "ცრ", "ცვ", "ძგ", "ძვ", "ძღ", "წლ", "წრ", "წნ", "წკ", "ჭკ",
    "ჭრ", "ჭყ", "ხლ", "ხმ", "ხნ", "ხვ", "ჯგ",
];

/// Set of two-consonant clusters with O(1) lookup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClusterSet {
    pairs: HashSet<(char, char)>,
}

impl Default for ClusterSet {
    fn default() -> Self {
        let alphabet = Alphabet::new();
        let pairs = DEFAULT_CLUSTERS
            .iter()
            .filter_map(|cluster| parse_cluster(cluster, &alphabet).ok())
            .collect();
        Self { pairs }
    }
}

impl ClusterSet {
    /// Create a set holding the default clusters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set
    pub fn empty() -> Self {
        Self {
            pairs: HashSet::new(),
        }
    }

    /// Check whether `first` followed by `second` is a harmonic cluster
    #[inline]
    pub fn contains_pair(&self, first: char, second: char) -> bool {
        self.pairs.contains(&(first, second))
    }

    /// Check whether a two-character string is a harmonic cluster
    pub fn contains(&self, cluster: &str) -> bool {
        let mut chars = cluster.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(first), Some(second), None) => self.contains_pair(first, second),
            _ => false,
        }
    }

    /// Add a cluster, validating it against the alphabet
    ///
    /// Returns `Ok(true)` if the cluster was newly added.
    pub fn insert(&mut self, cluster: &str, alphabet: &Alphabet) -> Result<bool> {
        let pair = parse_cluster(cluster, alphabet)?;
        Ok(self.pairs.insert(pair))
    }

    /// Remove a cluster, returning whether it was present
    pub fn remove(&mut self, cluster: &str) -> bool {
        let mut chars = cluster.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(first), Some(second), None) => self.pairs.remove(&(first, second)),
            _ => false,
        }
    }

    /// Number of clusters
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// All clusters as strings, sorted
    pub fn to_sorted_vec(&self) -> Vec<String> {
        let mut clusters: Vec<String> = self
            .pairs
            .iter()
            .map(|&(first, second)| [first, second].iter().collect())
            .collect();
        clusters.sort();
        clusters
    }
}

fn parse_cluster(cluster: &str, alphabet: &Alphabet) -> Result<(char, char)> {
    let mut chars = cluster.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(first), Some(second), None)
            if alphabet.is_consonant(first) && alphabet.is_consonant(second) =>
        {
            Ok((first, second))
        }
        _ => Err(HyphenError::InvalidCluster(cluster.to_string())),
    }
}
