//! Flamegraph construction from sorted stacks.
//!
//! This module merges sorted stacks into per-depth bar tables,
//! delta-encodes them for transport and checks decoded tables.

pub mod generator;
pub mod levels;
pub mod merger;
pub mod validate;

// Re-export main types
pub use generator::{build_flame_graph, build_sorted_stacks, FlameGraph, FlameOptions};
pub use levels::{Bar, DeltaLevels, LevelTable, Levels};
pub use merger::merge_stacks;
pub use validate::validate_levels;
