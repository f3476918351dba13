//! Error types for hyphenation

use thiserror::Error;

/// Errors raised while configuring a hyphenator or loading its data
///
/// Segmentation itself never fails: words that cannot be split come back
/// unchanged.
#[derive(Debug, Error)]
pub enum HyphenError {
    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Harmonic cluster that is not exactly two Georgian consonants
    #[error("Invalid harmonic cluster '{0}': expected two Georgian consonants")]
    InvalidCluster(String),

    /// Dictionary source could not be used
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// I/O failure while reading a dictionary or configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON dictionary
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML configuration
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration could not be rendered as TOML
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Result type for hyphenation operations
pub type Result<T> = std::result::Result<T, HyphenError>;
