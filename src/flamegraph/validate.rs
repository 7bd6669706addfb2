//! Structural checks for flamegraph levels.
//!
//! Used when reading a profile back from disk, where the levels did not
//! come from the merge and may be corrupt.

use super::levels::{Bar, Levels};
use crate::utils::error::FlamegraphError;

/// Check that levels describe a well-formed flamegraph
///
/// **Public** - used by the validate command
///
/// Verifies, level by level:
/// - bars are non-empty, sorted by start and do not overlap
/// - bars lie inside `[0, num_ticks)`
/// - name ids index into the names list
/// - every bar below the root is nested inside a bar of the level above
///
/// # Errors
/// * `FlamegraphError::InvalidLevels` - describes the first violation found
pub fn validate_levels(
    levels: &Levels,
    num_names: usize,
    num_ticks: usize,
) -> Result<(), FlamegraphError> {
    let mut parents: &[Bar] = &[];

    for (level, bars) in levels.iter().enumerate() {
        let mut prev_end = 0;
        let mut parent_index = 0;

        for (index, bar) in bars.iter().enumerate() {
            let at = || format!("bar {} at level {}", index, level);

            if bar.length == 0 {
                return Err(invalid(format!("{} is empty", at())));
            }
            if bar.start < prev_end {
                return Err(invalid(format!("{} overlaps the previous bar", at())));
            }
            if bar.end() > num_ticks {
                return Err(invalid(format!(
                    "{} ends at {} past {} ticks",
                    at(),
                    bar.end(),
                    num_ticks
                )));
            }
            if bar.name_id as usize >= num_names {
                return Err(invalid(format!(
                    "{} has name id {} but there are {} names",
                    at(),
                    bar.name_id,
                    num_names
                )));
            }

            if level > 0 {
                // Parents are sorted too, so the search only moves forward
                while parent_index < parents.len() && parents[parent_index].end() <= bar.start {
                    parent_index += 1;
                }
                let nested = parents
                    .get(parent_index)
                    .is_some_and(|parent| parent.contains(bar));
                if !nested {
                    return Err(invalid(format!("{} has no enclosing parent bar", at())));
                }
            }

            prev_end = bar.end();
        }

        parents = bars.as_slice();
    }

    Ok(())
}

fn invalid(message: String) -> FlamegraphError {
    FlamegraphError::InvalidLevels(message)
}
