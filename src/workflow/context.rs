//! Workflow context
//!
//! This module defines the context carried through a build run.

use std::path::PathBuf;

/// Represents a planned transformation for dry-run mode
#[derive(Debug, Clone)]
pub struct PlannedTransform {
    /// The source file
    pub source: PathBuf,
    /// The derived ESM output path
    pub esm_destination: PathBuf,
    /// The derived CommonJS output path
    pub commonjs_destination: PathBuf,
}

/// Context for a build run
///
/// This struct accumulates statistics and, in dry-run mode, the list of
/// planned transformations.
#[derive(Debug, Clone)]
pub struct WorkflowContext {
    /// The buildable directory the run settled on, if any
    pub buildable_directory: Option<PathBuf>,
    /// Whether variants were actually written (false) or just planned (true)
    pub dry_run: bool,
    /// Statistics about the run
    pub stats: WorkflowStats,
    /// Planned transformations for dry-run mode
    pub planned_transforms: Vec<PlannedTransform>,
}

/// Statistics about a build run
#[derive(Debug, Clone, Default)]
pub struct WorkflowStats {
    /// Number of source files found
    pub files_found: usize,
    /// Number of files transformed
    pub files_transformed: usize,
    /// Number of errors
    pub errors: usize,
}

impl WorkflowContext {
    /// Creates a new workflow context
    pub fn new(dry_run: bool) -> Self {
        WorkflowContext {
            buildable_directory: None,
            dry_run,
            stats: WorkflowStats::default(),
            planned_transforms: Vec::new(),
        }
    }

    /// Adds a planned transformation to the context
    pub fn add_planned_transform(&mut self, transform: PlannedTransform) {
        self.planned_transforms.push(transform);
    }

    /// Increments the number of files transformed
    pub fn increment_files_transformed(&mut self) {
        self.stats.files_transformed += 1;
    }

    /// Increments the number of errors
    pub fn increment_errors(&mut self) {
        self.stats.errors += 1;
    }
}
