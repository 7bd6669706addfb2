//! Main parser for preprocessed V8 logs.
//!
//! Validates the top-level shape once, then reads code entries and ticks
//! leniently: a malformed entry is logged and degraded, never fatal.

use super::schema::{CodeRef, Tick, V8Log};
use crate::utils::error::ParseError;
use log::{debug, info, warn};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parse a V8 log from a JSON value
///
/// **Public** - main entry point for parsing
///
/// # Errors
/// * `ParseError::InvalidFormat` - top level is not an object, or `code` /
///   `ticks` are present but not arrays
pub fn parse_log(raw_log: Value) -> Result<V8Log, ParseError> {
    let Value::Object(mut obj) = raw_log else {
        return Err(ParseError::InvalidFormat(
            "Log must be a JSON object with `code` and `ticks`".to_string(),
        ));
    };

    let code = match obj.remove("code") {
        None | Some(Value::Null) => {
            warn!("Log has no code table, every frame will be unknown");
            Vec::new()
        }
        Some(Value::Array(entries)) => parse_code_table(entries),
        Some(other) => {
            return Err(ParseError::InvalidFormat(format!(
                "`code` must be an array, found {}",
                json_type_name(&other)
            )))
        }
    };

    let ticks = match obj.remove("ticks") {
        None | Some(Value::Null) => {
            warn!("Log has no ticks");
            Vec::new()
        }
        Some(Value::Array(entries)) => parse_ticks(entries),
        Some(other) => {
            return Err(ParseError::InvalidFormat(format!(
                "`ticks` must be an array, found {}",
                json_type_name(&other)
            )))
        }
    };

    debug!("Parsed {} code entries and {} ticks", code.len(), ticks.len());

    Ok(V8Log { code, ticks })
}

/// Read and parse a V8 log file
///
/// **Public** - used by the convert command
pub fn read_log(input_path: impl AsRef<Path>) -> Result<V8Log, ParseError> {
    let input_path = input_path.as_ref();

    let size = std::fs::metadata(input_path)?.len();
    info!(
        "Loading {} ({})",
        input_path.display(),
        human_file_size(size)
    );

    let file = File::open(input_path)?;
    let raw_log: Value = serde_json::from_reader(BufReader::new(file))?;

    parse_log(raw_log)
}

/// Parse the code table, turning malformed entries into absent ones
///
/// **Private** - internal helper for parse_log
fn parse_code_table(entries: Vec<Value>) -> Vec<Option<CodeRef>> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            if entry.is_null() {
                return None;
            }
            match serde_json::from_value::<CodeRef>(entry) {
                Ok(code) => Some(code),
                Err(e) => {
                    warn!("Failed to parse code entry {}: {}", index, e);
                    None
                }
            }
        })
        .collect()
}

/// Parse ticks, turning malformed ones into empty stacks
///
/// **Private** - internal helper for parse_log
fn parse_ticks(entries: Vec<Value>) -> Vec<Tick> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| match entry.get("s") {
            Some(Value::Array(frames)) => Tick::new(frames.iter().map(frame_index).collect()),
            _ => {
                warn!("Tick {} has no frame array, treating as empty", index);
                Tick::default()
            }
        })
        .collect()
}

/// Read one raw frame value; anything that is not an integer is unresolvable
fn frame_index(value: &Value) -> i64 {
    value.as_i64().unwrap_or(-1)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Format a byte count for log messages
pub fn human_file_size(size: u64) -> String {
    const UNITS: [&str; 4] = ["B", "kB", "MB", "GB"];

    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{} {}", (value * 100.0).round() / 100.0, UNITS[unit])
}
