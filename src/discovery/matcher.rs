//! Source file matching functionality
//!
//! This module contains functions for matching files against the source
//! naming convention.

use std::path::Path;

use anyhow::Result;
use log::debug;
use walkdir::WalkDir;

use crate::constants::SOURCE_MARKER;

use super::scanner::SourceFile;

/// Checks if a filename follows the source naming convention
///
/// The convention is a plain substring match, so `AppBase.js`,
/// `AppBase.js.bak` and `xBase.json` all qualify.
pub fn is_source_file(filename: &str) -> bool {
    filename.contains(SOURCE_MARKER)
}

/// Collects all source files beneath a buildable directory
///
/// Walks the directory's subtree and returns every file whose name contains
/// the source marker, in traversal order. Hidden files are not skipped.
///
/// # Arguments
/// * `directory` - The buildable directory to walk
///
/// # Returns
/// * `Result<Vec<SourceFile>>` - The source files found
pub fn collect_source_files(directory: &Path) -> Result<Vec<SourceFile>> {
    debug!("Collecting source files under: {}", directory.display());

    let files: Vec<SourceFile> = WalkDir::new(directory)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .map(is_source_file)
                .unwrap_or(false)
        })
        .filter_map(|entry| SourceFile::new(entry.into_path()).ok())
        .collect();

    debug!("Found {} source files", files.len());

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{File, create_dir_all};
    use tempfile::tempdir;

    #[test]
    fn test_is_source_file() {
        assert!(is_source_file("AppBase.js"));
        assert!(is_source_file("Base.js"));
        // The marker can appear anywhere in the name, extension included.
        assert!(is_source_file("AppBase.js.bak"));
        assert!(is_source_file("xBase.json"));

        assert!(!is_source_file("App.js"));
        assert!(!is_source_file("AppModule.js"));
        assert!(!is_source_file("base.js"));
    }

    #[test]
    fn test_collect_source_files_recursive() {
        let root = tempdir().unwrap();
        let nested = root.path().join("components/deep");
        create_dir_all(&nested).unwrap();
        File::create(root.path().join("AppBase.js")).unwrap();
        File::create(nested.join("ButtonBase.js")).unwrap();
        File::create(root.path().join("readme.md")).unwrap();
        File::create(nested.join("helper.js")).unwrap();

        let files = collect_source_files(root.path()).unwrap();
        let mut names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["AppBase.js", "ButtonBase.js"]);
    }

    #[test]
    fn test_collect_source_files_empty_tree() {
        let root = tempdir().unwrap();
        create_dir_all(root.path().join("empty")).unwrap();

        let files = collect_source_files(root.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_collect_source_files_ignores_matching_directories() {
        let root = tempdir().unwrap();
        // A directory named like a source file is not collected.
        create_dir_all(root.path().join("FolderBase.js")).unwrap();

        let files = collect_source_files(root.path()).unwrap();
        assert!(files.is_empty());
    }
}
