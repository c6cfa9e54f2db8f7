//! Configuration utility functions.

use std::path::{Path, PathBuf};

use super::{CONFIG_FILE, ConfigError};

/// Locate the config file for a run started in `start`.
///
/// An explicitly named file must exist (relative names resolve against
/// `start`). Otherwise `folio.toml` is searched upward and may be absent.
///
/// # Example
/// ```text
/// /home/user/blog/posts/drafts/  ← start
/// /home/user/blog/folio.toml     ← found!
/// ```
pub fn resolve_config_file(
    start: &Path,
    explicit: Option<&Path>,
) -> Result<Option<PathBuf>, ConfigError> {
    match explicit {
        Some(name) => {
            let path = start.join(name);
            if path.is_file() {
                Ok(Some(path))
            } else {
                Err(ConfigError::NotFound(name.to_path_buf()))
            }
        }
        None => Ok(find_config_file_from(start, Path::new(CONFIG_FILE))),
    }
}

/// Walk up from `start` until a directory contains `config_name`.
///
/// An absolute `config_name` is returned as-is when it exists.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================
