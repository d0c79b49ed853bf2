//! Source transformation module
//!
//! This module contains components for generating the ESM and CommonJS
//! variants of a source file and writing them to their derived paths.

mod core;
mod file_operations;
mod path_handling;

pub use core::Transformer;
pub use file_operations::{TransformResult, transform_file};
