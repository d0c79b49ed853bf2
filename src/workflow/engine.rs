//! Workflow engine
//!
//! This module contains the engine that orchestrates a build run.

use std::path::PathBuf;

use anyhow::Result;
use log::{debug, error, info};

use crate::discovery::{collect_source_files, find_buildable_directory};
use crate::transform::transform_file;

use super::context::{PlannedTransform, WorkflowContext};

/// Options for a build run
#[derive(Debug, Clone)]
pub struct ProcessingOptions {
    /// Root directory to scan for buildable folders
    pub root: PathBuf,
    /// Whether to actually write the variants (true) or just simulate them (false)
    pub dry_run: bool,
}

/// Runs a build over a directory tree
///
/// This function orchestrates the workflow steps:
/// 1. Find the buildable directory (the first one carrying a marker file)
/// 2. Collect every source file beneath it
/// 3. Transform each source file into its ESM and CommonJS variants
///
/// Transformations run sequentially, in traversal order. A failing file is
/// logged and counted, then the run continues with the next file.
///
/// # Arguments
/// * `options` - Options for the build run
///
/// # Returns
/// * `Result<WorkflowContext>` - The workflow context with statistics or an error
///
/// # Errors
/// Returns an error if the root directory cannot be traversed
pub fn run_build(options: ProcessingOptions) -> Result<WorkflowContext> {
    let mut context = WorkflowContext::new(options.dry_run);

    // Step 1: Find the buildable directory
    let buildable = match find_buildable_directory(&options.root)? {
        Some(directory) => directory,
        None => {
            info!(
                "No buildable directory found under {}",
                options.root.display()
            );
            return Ok(context);
        }
    };
    debug!("Building directory: {}", buildable.display());
    context.buildable_directory = Some(buildable.clone());

    // Step 2: Collect the source files
    let files = collect_source_files(&buildable)?;
    context.stats.files_found = files.len();

    if files.is_empty() {
        info!("No source files found in {}", buildable.display());
        return Ok(context);
    }

    info!(
        "Transforming {} files{}...",
        files.len(),
        if options.dry_run { " (dry run)" } else { "" }
    );

    // Step 3: Transform each file
    for file in files {
        info!("Executing transform for {}", file.path.display());

        match transform_file(&file.path, !options.dry_run) {
            Ok(result) => {
                context.increment_files_transformed();
                if options.dry_run {
                    context.add_planned_transform(PlannedTransform {
                        source: result.source_path,
                        esm_destination: result.esm_path,
                        commonjs_destination: result.commonjs_path,
                    });
                }
            }
            Err(e) => {
                // A failing file does not stop the run.
                error!("Failed to transform {}: {e}", file.path.display());
                context.increment_errors();
            }
        }
    }

    info!(
        "Finished transforming {} of {} files",
        context.stats.files_transformed, context.stats.files_found
    );

    // Display detailed output for planned transforms in dry-run mode
    if options.dry_run && !context.planned_transforms.is_empty() {
        println!("\nDetailed plan of transformations:");
        println!("================================");

        for transform in &context.planned_transforms {
            println!("Source: {}", transform.source.display());
            println!("  ESM:      {}", transform.esm_destination.display());
            println!("  CommonJS: {}", transform.commonjs_destination.display());
        }

        println!("\nSummary:");
        println!("--------");
        println!(
            "  Files to be transformed: {}",
            context.planned_transforms.len()
        );
        println!("\nRun without --dry flag to write these files.");
    }

    Ok(context)
}
