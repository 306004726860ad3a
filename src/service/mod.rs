//! Service layer for the update run
//!
//! Sequences the build and push steps for every image, separating the
//! orchestration from the CLI layer in main.rs.

pub mod update;

pub use update::{UpdateResult, UpdateService};
