//! Symbol classification for profiler frames.
//!
//! Turns raw code table entries into human-readable names tagged with
//! their category, and computes the script path prefix shared by a log.

pub mod prefix;
pub mod symbol;

// Re-export main types and functions
pub use prefix::{directory_prefix, shared_prefix};
pub use symbol::{classify, CodeCategory, GeneratedKind, ScriptTier};
