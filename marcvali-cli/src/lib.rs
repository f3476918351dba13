//! marcvali CLI library
//!
//! This library provides the command-line interface for the marcvali
//! Georgian hyphenation engine.

pub mod commands;
pub mod config;
pub mod dictionary_source;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
