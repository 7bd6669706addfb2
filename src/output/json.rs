//! JSON profile output writer.
//!
//! Writes FlameProfile structs to JSON files, pretty or compact.

use super::schema::FlameProfile;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a profile to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `profile` - Profile data to write
/// * `output_path` - Path to output JSON file
/// * `compact` - Skip pretty printing
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let profile = FlameProfile::from_graph(&graph)?;
/// write_profile(&profile, "flame.json", false)?;
/// ```
pub fn write_profile(
    profile: &FlameProfile,
    output_path: impl AsRef<Path>,
    compact: bool,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing profile to: {}", output_path.display());

    super::validate_path(output_path)?;
    super::create_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    let serialized = if compact {
        serde_json::to_writer(&mut writer, profile)
    } else {
        serde_json::to_writer_pretty(&mut writer, profile)
    };
    serialized.map_err(OutputError::SerializationFailed)?;

    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "Profile written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Serialize a profile to a compact JSON string
///
/// **Public** - useful for tests and embedding
pub fn profile_to_string(profile: &FlameProfile) -> Result<String, OutputError> {
    serde_json::to_string(profile).map_err(OutputError::SerializationFailed)
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read a profile from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_profile(input_path: impl AsRef<Path>) -> Result<FlameProfile, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading profile from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    let profile: FlameProfile = serde_json::from_reader(std::io::BufReader::new(file))
        .map_err(OutputError::SerializationFailed)?;

    debug!(
        "Profile loaded: version {}, {} ticks, {} levels",
        profile.version,
        profile.num_ticks,
        profile.levels.len()
    );

    Ok(profile)
}
