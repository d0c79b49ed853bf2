//! File discovery module
//!
//! This module contains components for locating the buildable directory
//! and the source files beneath it.

mod matcher;
mod scanner;

pub use matcher::{collect_source_files, is_source_file};
pub use scanner::{SourceFile, find_buildable_directory};
