//! Workflow module
//!
//! This module contains components for orchestrating a build run.

mod context;
mod engine;

pub use context::{PlannedTransform, WorkflowContext, WorkflowStats};
pub use engine::{ProcessingOptions, run_build};
