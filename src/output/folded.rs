//! Folded stack output writer.
//!
//! Format: "root;child;leaf count", one line per distinct stack.
//! This is the input format of most flamegraph renderers.

use crate::aggregator::{EncodedStack, EncodedStacks};
use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Build folded lines from sorted stacks
///
/// **Public** - identical stacks must be adjacent, as after sorting
///
/// Empty stacks are skipped. A `;` inside a name is replaced by `:` so
/// that it cannot be mistaken for a frame separator.
pub fn folded_lines(encoded: &EncodedStacks) -> Vec<String> {
    let mut lines = Vec::new();
    let mut stacks = encoded.stacks.iter().filter(|s| !s.is_empty()).peekable();

    while let Some(stack) = stacks.next() {
        let mut count = 1;
        while stacks.peek().is_some_and(|next| *next == stack) {
            stacks.next();
            count += 1;
        }
        lines.push(format!("{} {}", join_names(stack, &encoded.names), count));
    }

    lines
}

fn join_names(stack: &EncodedStack, names: &[String]) -> String {
    stack
        .iter()
        .map(|&id| {
            names
                .get(id as usize)
                .map_or_else(String::new, |name| name.replace(';', ":"))
        })
        .collect::<Vec<_>>()
        .join(";")
}

/// Write folded stacks to a file
///
/// **Public** - main entry point for folded output
///
/// # Returns
/// Number of lines written
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_folded(
    encoded: &EncodedStacks,
    output_path: impl AsRef<Path>,
) -> Result<usize, OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing folded stacks to: {}", output_path.display());

    super::validate_path(output_path)?;
    super::create_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    let lines = folded_lines(encoded);
    for line in &lines {
        writeln!(writer, "{}", line).map_err(OutputError::WriteFailed)?;
    }
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!("Folded stacks written successfully ({} lines)", lines.len());

    Ok(lines.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn encoded() -> EncodedStacks {
        EncodedStacks {
            names: vec!["main".to_string(), "a;b".to_string(), "c".to_string()],
            stacks: vec![vec![], vec![0], vec![0, 1], vec![0, 1], vec![0, 2]],
        }
    }

    #[test]
    fn test_folded_lines_counts_adjacent_stacks() {
        assert_eq!(
            folded_lines(&encoded()),
            vec!["main 1", "main;a:b 2", "main;c 1"]
        );
    }

    #[test]
    fn test_write_folded() {
        let temp_file = NamedTempFile::new().unwrap();

        let written = write_folded(&encoded(), temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(written, 3);
        assert_eq!(content, "main 1\nmain;a:b 2\nmain;c 1\n");
    }
}
