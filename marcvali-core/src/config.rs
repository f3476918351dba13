//! File-based hyphenator configuration
//!
//! ```toml
//! [hyphenation]
//! left_min = 2
//! right_min = 2
//! marker = "\u00AD"
//! min_run_length = 4
//!
//! [clusters]
//! add = ["ვრ"]
//! remove = []
//!
//! [dictionary]
//! load_default = true
//! paths = ["extra.json"]
//! ```
//!
//! Every section and field is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::alphabet::Alphabet;
use crate::domain::boundary::{Margins, DEFAULT_LEFT_MIN, DEFAULT_RIGHT_MIN};
use crate::domain::clusters::ClusterSet;
use crate::domain::marker::{BreakMarker, SOFT_HYPHEN};
use crate::error::{HyphenError, Result};
use crate::text::MIN_RUN_CHARS;

/// Complete hyphenator configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HyphenatorConfig {
    /// Segmentation parameters
    #[serde(default)]
    pub hyphenation: HyphenationConfig,

    /// Adjustments to the harmonic cluster set
    #[serde(default)]
    pub clusters: ClusterConfig,

    /// Exception dictionaries to load
    #[serde(default)]
    pub dictionary: DictionaryConfig,
}

/// `[hyphenation]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HyphenationConfig {
    /// Minimum characters before the first break
    pub left_min: usize,

    /// Minimum characters after the last break
    pub right_min: usize,

    /// String inserted at each break
    pub marker: String,

    /// Shortest Georgian run segmented by the text walker
    pub min_run_length: usize,
}

impl Default for HyphenationConfig {
    fn default() -> Self {
        Self {
            left_min: DEFAULT_LEFT_MIN,
            right_min: DEFAULT_RIGHT_MIN,
            marker: SOFT_HYPHEN.to_string(),
            min_run_length: MIN_RUN_CHARS,
        }
    }
}

/// `[clusters]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// Extra harmonic clusters
    pub add: Vec<String>,

    /// Default clusters to drop
    pub remove: Vec<String>,
}

/// `[dictionary]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Probe the default dictionary locations
    pub load_default: bool,

    /// Additional JSON dictionaries, merged in order
    pub paths: Vec<PathBuf>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            load_default: true,
            paths: Vec::new(),
        }
    }
}

impl HyphenatorConfig {
    /// Parse a TOML document and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: HyphenatorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content).map_err(|e| match e {
            HyphenError::Toml(inner) => HyphenError::Configuration(format!(
                "Failed to parse {}: {}",
                path.display(),
                inner
            )),
            other => other,
        })?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every value without building anything
    pub fn validate(&self) -> Result<()> {
        self.margins()?;
        self.marker()?;

        if self.hyphenation.min_run_length == 0 {
            return Err(HyphenError::Configuration(
                "min_run_length must be greater than 0".into(),
            ));
        }

        self.cluster_set(&Alphabet::new())?;
        Ok(())
    }

    pub(crate) fn margins(&self) -> Result<Margins> {
        Margins::new(self.hyphenation.left_min, self.hyphenation.right_min)
    }

    pub(crate) fn marker(&self) -> Result<BreakMarker> {
        BreakMarker::new(self.hyphenation.marker.clone())
    }

    /// Default clusters with `remove` applied, then `add`
    pub(crate) fn cluster_set(&self, alphabet: &Alphabet) -> Result<ClusterSet> {
        let mut clusters = ClusterSet::new();
        for cluster in &self.clusters.remove {
            if !clusters.remove(cluster) {
                log::debug!("Cluster '{}' is not in the default set", cluster);
            }
        }
        for cluster in &self.clusters.add {
            clusters.insert(cluster, alphabet)?;
        }
        Ok(clusters)
    }
}
