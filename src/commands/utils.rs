use crate::flamegraph::validate_levels;
use crate::output::read_profile;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a flamegraph profile JSON file
///
/// Decodes the delta-encoded levels and checks their structure.
pub fn validate_profile_file(file_path: &Path) -> Result<()> {
    println!("Validating profile: {}", file_path.display());

    let profile = read_profile(file_path)?;
    let graph = profile
        .to_graph()
        .context("Profile levels could not be decoded")?;

    validate_levels(&graph.levels, graph.names.len(), graph.num_ticks)
        .context("Profile levels are inconsistent")?;

    println!("✓ Valid profile JSON");
    println!("  Version: {}", profile.version);
    println!("  Ticks: {}", graph.num_ticks);
    println!("  Names: {}", graph.names.len());
    println!("  Levels: {}", graph.levels.len());
    println!("  Bars: {}", graph.levels.bar_count());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("v8-flame Profile Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string       - Schema version (e.g., '1.0.0')");
        println!("  names: array          - Frame names, index = name id");
        println!("  levels: array         - One flat array per depth, root first");
        println!("    [deltaStart, length, nameId, ...]");
        println!("    deltaStart: number  - Gap since the previous bar's end");
        println!("    length: number      - Samples covered by the bar");
        println!("    nameId: number      - Index into names");
        println!("  numTicks: number      - Total number of samples");
        println!("  generatedAt: string?  - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("v8-flame v{}", env!("CARGO_PKG_VERSION"));
    println!("Profile Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Converts V8 CPU profiler logs into leveled flamegraph data.");
}
