//! Output JSON schema definitions for flamegraph profiles.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::flamegraph::{DeltaLevels, FlameGraph};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::FlamegraphError;
use serde::{Deserialize, Serialize};

/// Top-level profile structure written to JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlameProfile {
    /// Schema version for compatibility checking
    pub version: String,

    /// Display names, indexed by name id
    pub names: Vec<String>,

    /// Per level, flat `[deltaStart, length, nameId, ...]` triples
    pub levels: DeltaLevels,

    /// Total number of samples
    pub num_ticks: usize,

    /// Timestamp when profile was generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
}

impl FlameProfile {
    /// Delta-encode a flamegraph for output
    pub fn from_graph(graph: &FlameGraph) -> Result<Self, FlamegraphError> {
        use chrono::Utc;

        Ok(Self {
            version: SCHEMA_VERSION.to_string(),
            names: graph.names.clone(),
            levels: graph.levels.encode_deltas()?,
            num_ticks: graph.num_ticks,
            generated_at: Some(Utc::now().to_rfc3339()),
        })
    }

    /// Decode back into absolute bar positions
    pub fn to_graph(&self) -> Result<FlameGraph, FlamegraphError> {
        Ok(FlameGraph {
            names: self.names.clone(),
            levels: self.levels.decode_deltas()?,
            num_ticks: self.num_ticks,
        })
    }
}
