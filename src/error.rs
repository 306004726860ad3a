//! Errors with a dedicated console report
//!
//! Engine and config failures stay as plain `anyhow` errors; the variants
//! here are the ones `main` reports itself.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpdateError {
    /// Build context directory is absent (or not a directory)
    #[error("directory '{}' does not exist", .path.display())]
    MissingContext { path: PathBuf },
}
