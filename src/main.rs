//! v8-flame CLI
//!
//! Converts preprocessed V8 CPU profiler logs into compact flamegraph data.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use v8_flame::commands::{
    display_schema, display_version, execute_convert, validate_args, validate_profile_file,
    ConvertArgs,
};
use v8_flame::utils::config::DEFAULT_TOP_FRAMES;

/// v8-flame - Flamegraph data from V8 profiler logs
#[derive(Parser, Debug)]
#[command(name = "v8-flame")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a preprocessed V8 log (`node --prof-process --preprocess`)
    Convert {
        /// Path to the preprocessed log JSON
        #[arg(short, long, env = "V8_FLAME_INPUT")]
        input: PathBuf,

        /// Output path for the flamegraph JSON
        #[arg(short, long, env = "V8_FLAME_OUTPUT", default_value = "flame.json")]
        output: PathBuf,

        /// Output path for folded stacks (optional)
        #[arg(long)]
        folded: Option<PathBuf>,

        /// Write JSON without pretty printing
        #[arg(long)]
        compact: bool,

        /// Keep full script paths instead of shortening the shared directory
        #[arg(long)]
        keep_paths: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Number of hot functions in the summary
        #[arg(long, default_value_t = DEFAULT_TOP_FRAMES)]
        top: usize,
    },

    /// Validate a flamegraph profile JSON file
    Validate {
        /// Path to profile JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Convert {
            input,
            output,
            folded,
            compact,
            keep_paths,
            summary,
            top,
        } => {
            let args = ConvertArgs {
                input,
                output_json: output,
                output_folded: folded,
                compact,
                shorten_paths: !keep_paths,
                print_summary: summary,
                top_frames: top,
            };

            // Validate args first
            validate_args(&args)?;

            execute_convert(args)?;
        }

        Commands::Validate { file } => {
            validate_profile_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
