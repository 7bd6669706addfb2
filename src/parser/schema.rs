//! Input data model for preprocessed V8 profiler logs.
//!
//! These mirror the JSON written by `node --prof-process --preprocess`.
//! Only the fields the flamegraph pipeline reads are modeled.

use serde::{Deserialize, Serialize};

/// One entry of the log's code table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRef {
    /// Category tag (`CPP`, `SHARED_LIB`, `CODE`, `JS`)
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Refinement tag (optimization tier or stub subtype)
    #[serde(default, rename = "kind", skip_serializing_if = "Option::is_none")]
    pub sub_kind: Option<String>,

    /// Raw symbol name as recorded by the profiler
    #[serde(default, rename = "name", skip_serializing_if = "Option::is_none")]
    pub raw_name: Option<String>,
}

impl CodeRef {
    pub fn new(kind: &str, sub_kind: Option<&str>, raw_name: &str) -> Self {
        Self {
            kind: Some(kind.to_string()),
            sub_kind: sub_kind.map(str::to_string),
            raw_name: Some(raw_name.to_string()),
        }
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn sub_kind(&self) -> Option<&str> {
        self.sub_kind.as_deref()
    }

    /// Raw name, empty when the profiler recorded none
    pub fn raw_name(&self) -> &str {
        self.raw_name.as_deref().unwrap_or("")
    }
}

/// One profiler tick
///
/// `frames` is the raw interleaved array: code index, companion value,
/// code index, companion value, ... listed leaf first.
/// Entries that were not integers are stored as `-1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tick {
    pub frames: Vec<i64>,
}

impl Tick {
    pub fn new(frames: Vec<i64>) -> Self {
        Self { frames }
    }

    /// Code table indices of this tick, leaf first
    pub fn code_indices(&self) -> impl DoubleEndedIterator<Item = i64> + '_ {
        self.frames.chunks(2).map(|pair| pair[0])
    }

    /// Number of frames in this tick's stack
    pub fn depth(&self) -> usize {
        self.frames.len().div_ceil(2)
    }
}

/// A fully loaded log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct V8Log {
    /// Code table; absent entries are `None`
    pub code: Vec<Option<CodeRef>>,

    /// Samples in recording order
    pub ticks: Vec<Tick>,
}

impl V8Log {
    /// Look up a code table entry, `None` for absent or out of range indices
    pub fn code_at(&self, index: i64) -> Option<&CodeRef> {
        let index = usize::try_from(index).ok()?;
        self.code.get(index).and_then(Option::as_ref)
    }

    pub fn num_ticks(&self) -> usize {
        self.ticks.len()
    }
}
