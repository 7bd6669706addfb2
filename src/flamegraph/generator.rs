//! End-to-end flamegraph generation.
//!
//! Runs the pipeline stages in order, each to completion:
//! classify and encode, sort, merge. The result owns the names and levels
//! and is handed to the output writers as a whole.

use super::levels::Levels;
use super::merger::merge_stacks;
use crate::aggregator::{encode_stacks, sort_stacks, EncodedStacks, NameId};
use crate::classifier::shared_prefix;
use crate::parser::V8Log;
use log::{debug, info};
use std::time::Instant;

/// Pipeline options
#[derive(Debug, Clone)]
pub struct FlameOptions {
    /// Replace the directory shared by all scripts with a placeholder
    pub shorten_paths: bool,
}

impl Default for FlameOptions {
    fn default() -> Self {
        Self {
            shorten_paths: true,
        }
    }
}

impl FlameOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shorten_paths(mut self, shorten_paths: bool) -> Self {
        self.shorten_paths = shorten_paths;
        self
    }
}

/// Result of the pipeline for one log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlameGraph {
    /// Display names, indexed by name id
    pub names: Vec<String>,

    /// Bars per depth, with absolute starts
    pub levels: Levels,

    /// Total number of samples in the log
    pub num_ticks: usize,
}

impl FlameGraph {
    /// Merge stacks that are already sorted, taking over their names
    pub fn from_sorted_stacks(encoded: EncodedStacks) -> Self {
        let start = Instant::now();
        let levels = merge_stacks(&encoded.stacks);
        debug!("Merge took {:.2?}", start.elapsed());

        Self {
            names: encoded.names,
            levels,
            num_ticks: encoded.stacks.len(),
        }
    }

    /// Number of levels
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Display name of a name id
    pub fn name(&self, name_id: NameId) -> Option<&str> {
        self.names.get(name_id as usize).map(String::as_str)
    }
}

/// Encode and sort the stacks of a log
///
/// **Public** - first half of the pipeline, shared with exporters that
/// work on stacks rather than bars
pub fn build_sorted_stacks(log: &V8Log, options: &FlameOptions) -> EncodedStacks {
    let start = Instant::now();

    let prefix = if options.shorten_paths {
        shared_prefix(log.code.iter().flatten())
    } else {
        None
    };

    let mut encoded = encode_stacks(log, prefix.as_deref());
    debug!("Encoding took {:.2?}", start.elapsed());

    let start = Instant::now();
    sort_stacks(&mut encoded.stacks);
    debug!("Sorting took {:.2?}", start.elapsed());

    encoded
}

/// Build a flamegraph from a parsed log
///
/// **Public** - main entry point for flamegraph generation
///
/// Never fails: malformed frames become `(unknown)` and an empty log gives
/// an empty graph with zero ticks.
pub fn build_flame_graph(log: &V8Log, options: &FlameOptions) -> FlameGraph {
    let encoded = build_sorted_stacks(log, options);
    let graph = FlameGraph::from_sorted_stacks(encoded);

    info!(
        "Flamegraph built: {} ticks, {} names, {} levels",
        graph.num_ticks,
        graph.names.len(),
        graph.depth()
    );

    graph
}
