use crate::utils::config::DEFAULT_TOP_FRAMES;
use std::path::PathBuf;

/// Arguments for the convert command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    /// Preprocessed V8 log to read
    pub input: PathBuf,

    /// Output path for the JSON flamegraph profile
    pub output_json: PathBuf,

    /// Output path for folded stacks (optional)
    pub output_folded: Option<PathBuf>,

    /// Write JSON without pretty printing
    pub compact: bool,

    /// Replace the directory shared by all scripts with a placeholder
    pub shorten_paths: bool,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Number of hot frames in the summary
    pub top_frames: usize,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output_json: PathBuf::from("flame.json"),
            output_folded: None,
            compact: false,
            shorten_paths: true,
            print_summary: false,
            top_frames: DEFAULT_TOP_FRAMES,
        }
    }
}
