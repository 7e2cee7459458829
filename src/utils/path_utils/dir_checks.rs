use super::expansion::expand_tilde;
use crate::errors::CloudPhotoError;
use std::fs;
use std::path::{Path, PathBuf};

/// Checks if a directory exists and is readable.
///
/// # Errors
///
/// Returns `CloudPhotoError::Access` if the directory does not exist or cannot be read.
pub fn check_readable_dir(dir: &Path) -> Result<PathBuf, CloudPhotoError> {
    let expanded_path = expand_tilde(dir)?;

    if expanded_path.is_dir()
        && fs::metadata(&expanded_path).is_ok()
        && fs::read_dir(&expanded_path).is_ok()
    {
        Ok(expanded_path)
    } else {
        Err(CloudPhotoError::Access(format!(
            "Directory {} not available",
            dir.display()
        )))
    }
}

/// Checks if a directory is writable, creating it if it doesn't exist.
///
/// # Errors
///
/// Returns `CloudPhotoError::Access` if the directory cannot be created, does not
/// resolve to a directory, or a test write fails.
pub fn check_writable_dir(dir: &Path) -> Result<PathBuf, CloudPhotoError> {
    let expanded_path = expand_tilde(dir)?;

    if !expanded_path.exists() {
        fs::create_dir_all(&expanded_path).map_err(|e| {
            CloudPhotoError::Access(format!(
                "Failed to create directory {}: {e}",
                expanded_path.display()
            ))
        })?;
    }

    if !expanded_path.is_dir() {
        return Err(CloudPhotoError::Access(format!(
            "{} is not a directory",
            expanded_path.display()
        )));
    }

    match tempfile::tempfile_in(&expanded_path) {
        Ok(_) => Ok(expanded_path),
        Err(e) => Err(CloudPhotoError::Access(format!(
            "Directory {} not available: {e}",
            expanded_path.display()
        ))),
    }
}
