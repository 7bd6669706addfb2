//! Log parsing and input schema definitions.
//!
//! This module handles:
//! - Parsing preprocessed V8 profiler JSON
//! - Validating the top-level log shape
//! - Defining the code table and tick model

pub mod schema;
pub mod v8_log;

// Re-export main types
pub use schema::{CodeRef, Tick, V8Log};
pub use v8_log::{human_file_size, parse_log, read_log};
