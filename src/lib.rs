//! v8-flame
//!
//! Converts sampled V8 CPU profiler logs into a compact, leveled
//! flamegraph representation for interactive renderers.
//!
//! The pipeline runs in four stages, each over the whole log:
//! classify frames into names, encode ticks as integer stacks, sort the
//! stacks, and merge them into per-depth bars. Bars are delta-encoded for
//! output.
//!
//! ## Getting Started
//!
//! ```bash
//! node --prof app.js
//! node --prof-process --preprocess isolate-*.log > v8.json
//! v8-flame convert --input v8.json --output flame.json --summary
//! ```

pub mod aggregator;
pub mod classifier;
pub mod commands;
pub mod flamegraph;
pub mod output;
pub mod parser;
pub mod utils;
