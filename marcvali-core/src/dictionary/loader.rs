//! Default dictionary location probing
//!
//! The first existing file wins. A missing or unreadable default dictionary
//! is not an error: the hyphenator keeps working with rules only.

use std::env;
use std::path::{Path, PathBuf};

use super::{LoadReport, OverrideDictionary};

/// Environment variable pointing at a dictionary file
pub const DICTIONARY_ENV_VAR: &str = "MARCVALI_DICTIONARY";

/// Relative location of the bundled dictionary
pub const DEFAULT_DICTIONARY_PATH: &str = "data/exceptions.json";

/// Candidate dictionary paths, in probing order
pub fn default_locations() -> Vec<PathBuf> {
    let mut locations = Vec::with_capacity(4);

    if let Some(path) = env::var_os(DICTIONARY_ENV_VAR) {
        if !path.is_empty() {
            locations.push(PathBuf::from(path));
        }
    }

    locations.push(PathBuf::from(DEFAULT_DICTIONARY_PATH));

    if let Some(exe_dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        locations.push(exe_dir.join(DEFAULT_DICTIONARY_PATH));
    }

    // Development layout: the crate's own data directory
    locations.push(Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DICTIONARY_PATH));

    locations
}

/// First candidate that exists on disk
pub fn find_default_dictionary() -> Option<PathBuf> {
    default_locations().into_iter().find(|path| path.is_file())
}

/// Merge the default dictionary into `dictionary` if one can be found
///
/// Returns the path that was used. Failures are logged, never returned.
pub fn load_default(dictionary: &mut OverrideDictionary) -> Option<(PathBuf, LoadReport)> {
    let Some(path) = find_default_dictionary() else {
        log::warn!("Dictionary not found, using rules only");
        return None;
    };

    match dictionary.merge_file(&path) {
        Ok(report) => {
            log::info!(
                "Dictionary loaded from {} ({} words)",
                path.display(),
                dictionary.len()
            );
            Some((path, report))
        }
        Err(e) => {
            log::warn!(
                "Could not load dictionary {} ({}), using rules only",
                path.display(),
                e
            );
            None
        }
    }
}
