//! Output writers for flamegraph data.
//!
//! This module handles writing data to disk in various formats:
//! - JSON profiles (pretty and compact)
//! - Folded stacks
//! - Text summaries

pub mod folded;
pub mod json;
pub mod schema;
pub mod summary;

// Re-export main functions
pub use folded::{folded_lines, write_folded};
pub use json::{profile_to_string, read_profile, write_profile};
pub use schema::FlameProfile;
pub use summary::generate_text_summary;

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Create missing parent directories of an output file
fn create_parent_dirs(path: &Path) -> Result<(), OutputError> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };

    if !parent.as_os_str().is_empty() && !parent.exists() {
        debug!("Creating parent directories: {}", parent.display());
        std::fs::create_dir_all(parent).map_err(|e| {
            OutputError::InvalidPath(format!(
                "Cannot create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    Ok(())
}
