// src/output/mod.rs
//! Output handling with clear separation of planning and execution.
//!
//! Planning (building an `OutputPlan` and naming files) is pure; only
//! `deliver` touches the filesystem.

mod paths;
mod types;
mod writer;

// Re-export the public interface
pub use paths::{moment_file_name, moment_path};
pub use types::{DeliveryTarget, OutputPlan, OutputReport};
pub use writer::deliver;
