//! Directory scanning functionality
//!
//! This module contains functions for walking the directory tree and
//! locating the buildable directory.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::debug;
use walkdir::WalkDir;

use crate::constants::MARKER_FILENAME;
use crate::errors::directory_not_found_error;

/// Information about a source file found during scanning
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    /// The path to the file
    pub path: PathBuf,
    /// The filename of the file
    pub filename: String,
}

impl SourceFile {
    /// Creates a new SourceFile from a path
    ///
    /// # Errors
    /// Returns an error if the filename cannot be extracted or converted to a string
    pub fn new(path: PathBuf) -> Result<Self> {
        let filename = path
            .file_name()
            .ok_or_else(|| anyhow!("Failed to get filename from path: {}", path.display()))?
            .to_str()
            .ok_or_else(|| anyhow!("Invalid filename: {}", path.display()))?
            .to_string();

        Ok(SourceFile { path, filename })
    }
}

/// Finds the buildable directory beneath a root directory
///
/// Walks the tree top-down and returns the first directory that directly
/// contains the marker file. The search stops at the first hit; directories
/// visited later are never considered, even if they carry a marker of their
/// own. A tree without any marker yields `Ok(None)`.
///
/// # Arguments
/// * `root` - The root directory to scan
///
/// # Returns
/// * `Result<Option<PathBuf>>` - The buildable directory, if any
///
/// # Errors
/// Returns an error if the root is not an existing directory
pub fn find_buildable_directory(root: &Path) -> Result<Option<PathBuf>> {
    if !root.is_dir() {
        return Err(directory_not_found_error(root.to_path_buf()).into());
    }

    debug!("Scanning for marker directories under: {}", root.display());

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
    {
        if !entry.file_type().is_dir() {
            continue;
        }
        if entry.path().join(MARKER_FILENAME).is_file() {
            debug!("Marker found in: {}", entry.path().display());
            return Ok(Some(entry.path().to_path_buf()));
        }
    }

    Ok(None)
}
