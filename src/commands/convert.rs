//! Convert command implementation.
//!
//! The convert command:
//! 1. Reads and parses the V8 log
//! 2. Encodes and sorts stacks
//! 3. Merges stacks into flamegraph levels
//! 4. Writes output files
//! 5. Prints a summary (optional)

use super::models::ConvertArgs;
use crate::aggregator::{calculate_hot_frames, calculate_level_stats};
use crate::flamegraph::{build_sorted_stacks, FlameGraph, FlameOptions};
use crate::output::{generate_text_summary, write_folded, write_profile, FlameProfile};
use crate::parser::read_log;
use crate::utils::config::MAX_TOP_FRAMES;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the convert command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unreadable or structurally invalid log
/// * File write errors
///
/// # Example
/// ```ignore
/// let args = ConvertArgs {
///     input: PathBuf::from("v8-processed.json"),
///     output_json: PathBuf::from("flame.json"),
///     ..Default::default()
/// };
///
/// execute_convert(args)?;
/// ```
pub fn execute_convert(args: ConvertArgs) -> Result<FlameGraph> {
    let start_time = Instant::now();

    info!("Starting conversion of: {}", args.input.display());

    // Step 1: Parse log
    info!("Step 1/4: Parsing log...");
    let log = read_log(&args.input)
        .with_context(|| format!("Failed to read log {}", args.input.display()))?;

    debug!("Parsed log: {} code entries, {} ticks", log.code.len(), log.num_ticks());

    // Step 2: Encode and sort stacks
    info!("Step 2/4: Processing stacks...");
    let options = FlameOptions::new().with_shorten_paths(args.shorten_paths);
    let encoded = build_sorted_stacks(&log, &options);

    let hot_frames = if args.print_summary {
        calculate_hot_frames(&encoded.stacks, &encoded.names, args.top_frames)
    } else {
        Vec::new()
    };

    if let Some(folded_path) = &args.output_folded {
        write_folded(&encoded, folded_path).context("Failed to write folded stacks")?;
        info!("✓ Folded stacks written to: {}", folded_path.display());
    }

    // Step 3: Merge
    info!("Step 3/4: Merging stacks...");
    let graph = FlameGraph::from_sorted_stacks(encoded);
    let stats = calculate_level_stats(&graph.levels);
    info!("Flamegraph shape: {}", stats.summary());

    // Step 4: Write outputs
    info!("Step 4/4: Writing output files...");
    let profile = FlameProfile::from_graph(&graph).context("Failed to encode flamegraph")?;
    write_profile(&profile, &args.output_json, args.compact)
        .context("Failed to write flamegraph JSON")?;

    info!("✓ Profile written to: {}", args.output_json.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("FLAMEGRAPH SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Input: {}", args.input.display());
        println!("Names: {}", graph.names.len());
        println!(
            "\n{}",
            generate_text_summary(&hot_frames, &stats, graph.num_ticks, args.top_frames)
        );
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Conversion completed in {:.2}s", elapsed.as_secs_f64());

    Ok(graph)
}

/// Validate convert arguments
///
/// **Public** - can be called before execute_convert for early validation
pub fn validate_args(args: &ConvertArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input log path cannot be empty");
    }

    if args.output_json.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.output_json == args.input {
        anyhow::bail!("Output path would overwrite the input log");
    }

    if args.output_folded.as_ref() == Some(&args.input) {
        anyhow::bail!("Folded output path would overwrite the input log");
    }

    if args.top_frames == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top_frames > MAX_TOP_FRAMES {
        anyhow::bail!("top is too large (max {})", MAX_TOP_FRAMES);
    }

    Ok(())
}
