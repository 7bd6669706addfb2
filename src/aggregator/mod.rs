//! Aggregation of log ticks into encoded stacks and metrics.
//!
//! This module transforms parsed ticks into:
//! - Interned names and integer-coded stacks (for flamegraph merging)
//! - Hot frame analysis (functions in the most samples)
//! - Flamegraph shape statistics

pub mod metrics;
pub mod names;
pub mod stack_builder;

// Re-export main types and functions
pub use metrics::{calculate_hot_frames, calculate_level_stats, HotFrame, LevelStats};
pub use names::{NameId, NameTable};
pub use stack_builder::{encode_stacks, sort_stacks, EncodedStack, EncodedStacks};
