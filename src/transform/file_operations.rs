//! Variant writing functionality
//!
//! This module contains the function that runs a full transformation of a
//! single source file: load, derive, and write both variants.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::debug;

use crate::errors::file_operation_error;

use super::core::Transformer;

/// Result of transforming a single source file
#[derive(Debug, Clone)]
pub struct TransformResult {
    /// The source path
    pub source_path: PathBuf,
    /// The path the ESM variant was written to
    pub esm_path: PathBuf,
    /// The path the CommonJS variant was written to
    pub commonjs_path: PathBuf,
    /// Whether the variants were actually written
    pub written: bool,
}

/// Transforms one source file into its ESM and CommonJS variants
///
/// Both output files are overwritten without backup if they already exist.
/// When `run_execution` is false the outputs are derived but nothing is
/// written.
///
/// # Arguments
/// * `path` - The source file to transform
/// * `run_execution` - Whether to actually write the variants (true) or just simulate (false)
///
/// # Returns
/// * `Result<TransformResult>` - The derived output paths or an error
///
/// # Errors
/// Returns an error if the source cannot be read or a variant cannot be written
pub fn transform_file(path: &Path, run_execution: bool) -> Result<TransformResult> {
    let transformer = Transformer::load(path)?;
    let esm_path = transformer.esm_target()?;
    let commonjs_path = transformer.commonjs_target()?;

    if !run_execution {
        debug!(
            "Simulating transform: {} -> {} + {}",
            path.display(),
            esm_path.display(),
            commonjs_path.display()
        );
        return Ok(TransformResult {
            source_path: path.to_path_buf(),
            esm_path,
            commonjs_path,
            written: false,
        });
    }

    debug!(
        "Writing ESM variant: {} -> {}",
        path.display(),
        esm_path.display()
    );
    fs::write(&esm_path, transformer.esm_variant())
        .map_err(|e| file_operation_error(e, esm_path.clone(), "write"))?;

    debug!(
        "Writing CommonJS variant: {} -> {}",
        path.display(),
        commonjs_path.display()
    );
    fs::write(&commonjs_path, transformer.commonjs_variant())
        .map_err(|e| file_operation_error(e, commonjs_path.clone(), "write"))?;

    Ok(TransformResult {
        source_path: path.to_path_buf(),
        esm_path,
        commonjs_path,
        written: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::read_to_string;
    use tempfile::tempdir;

    #[test]
    fn test_transform_file_writes_both_variants() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("AppBase.js");
        fs::write(&source, "const x = 1;").unwrap();

        let result = transform_file(&source, true).unwrap();
        assert!(result.written);
        assert_eq!(result.esm_path, dir.path().join("AppModule.js"));
        assert_eq!(result.commonjs_path, dir.path().join("App.js"));

        assert_eq!(
            read_to_string(result.esm_path).unwrap(),
            "export const x = 1;"
        );
        assert_eq!(
            read_to_string(result.commonjs_path).unwrap(),
            "const x = 1; module.exports = { x };"
        );
    }

    #[test]
    fn test_transform_file_without_declaration() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("EmptyBase.js");
        fs::write(&source, "let x = 1;").unwrap();

        let result = transform_file(&source, true).unwrap();

        // No declaration keyword anywhere: the ESM variant is the original
        // text, the CommonJS variant collapses to an empty file.
        assert_eq!(
            read_to_string(dir.path().join("EmptyModule.js")).unwrap(),
            "let x = 1;"
        );
        assert_eq!(read_to_string(dir.path().join("Empty.js")).unwrap(), "");
    }

    #[test]
    fn test_transform_file_overwrites_existing_outputs() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("AppBase.js");
        fs::write(&source, "const x = 1;").unwrap();
        fs::write(dir.path().join("AppModule.js"), "stale").unwrap();
        fs::write(dir.path().join("App.js"), "stale").unwrap();

        transform_file(&source, true).unwrap();

        assert_eq!(
            read_to_string(dir.path().join("AppModule.js")).unwrap(),
            "export const x = 1;"
        );
        assert_eq!(
            read_to_string(dir.path().join("App.js")).unwrap(),
            "const x = 1; module.exports = { x };"
        );
    }

    #[test]
    fn test_transform_file_is_idempotent() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("AppBase.js");
        fs::write(&source, "const x = 1;").unwrap();

        transform_file(&source, true).unwrap();
        let first_esm = read_to_string(dir.path().join("AppModule.js")).unwrap();
        let first_common = read_to_string(dir.path().join("App.js")).unwrap();

        transform_file(&source, true).unwrap();
        assert_eq!(
            read_to_string(dir.path().join("AppModule.js")).unwrap(),
            first_esm
        );
        assert_eq!(read_to_string(dir.path().join("App.js")).unwrap(), first_common);
    }

    #[test]
    fn test_transform_file_dry_run_writes_nothing() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("AppBase.js");
        fs::write(&source, "const x = 1;").unwrap();

        let result = transform_file(&source, false).unwrap();
        assert!(!result.written);
        assert!(!dir.path().join("AppModule.js").exists());
        assert!(!dir.path().join("App.js").exists());
    }

    #[test]
    fn test_transform_file_missing_source() {
        let dir = tempdir().unwrap();
        let result = transform_file(&dir.path().join("GhostBase.js"), true);
        assert!(result.is_err());
    }
}
