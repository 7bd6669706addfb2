//! Plain-text summary of a flamegraph for terminal output.

use crate::aggregator::{HotFrame, LevelStats};

/// Render hot frames and shape statistics as a table
///
/// **Public** - printed by `convert --summary`
pub fn generate_text_summary(
    hot_frames: &[HotFrame],
    stats: &LevelStats,
    num_ticks: usize,
    max_lines: usize,
) -> String {
    let mut lines = vec![
        format!("Samples: {}", num_ticks),
        stats.summary(),
        String::new(),
        format!(
            "  {:<60} {:>10} {:>7} {:>10} {:>7}",
            "Function (hottest first)", "TOTAL", "%", "SELF", "%"
        ),
        format!("  {}", "-".repeat(98)),
    ];

    for frame in hot_frames.iter().take(max_lines) {
        lines.push(format!(
            "  {:<60} {:>10} {:>6.1}% {:>10} {:>6.1}%",
            truncate_name(&frame.name, 60),
            frame.total_samples,
            frame.total_percentage,
            frame.self_samples,
            frame.self_percentage
        ));
    }

    if hot_frames.len() > max_lines {
        lines.push(String::new());
        lines.push(format!(
            "   (Showing top {} of {} functions)",
            max_lines,
            hot_frames.len()
        ));
    }

    lines.join("\n")
}

/// Keep the tail of long names, where the file and line live
fn truncate_name(name: &str, max_chars: usize) -> String {
    let count = name.chars().count();
    if count <= max_chars {
        return name.to_string();
    }

    let tail: String = name.chars().skip(count - (max_chars - 3)).collect();
    format!("...{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(name: &str, total: usize) -> HotFrame {
        HotFrame {
            name_id: 0,
            name: name.to_string(),
            total_samples: total,
            self_samples: 0,
            total_percentage: 50.0,
            self_percentage: 0.0,
        }
    }

    #[test]
    fn test_summary_lists_frames() {
        let frames = vec![frame("main", 4), frame("render", 2)];
        let summary = generate_text_summary(&frames, &LevelStats::default(), 8, 10);

        assert!(summary.starts_with("Samples: 8"));
        assert!(summary.contains("main"));
        assert!(summary.contains("render"));
        assert!(!summary.contains("Showing top"));
    }

    #[test]
    fn test_summary_truncates_list() {
        let frames = vec![frame("a", 3), frame("b", 2), frame("c", 1)];
        let summary = generate_text_summary(&frames, &LevelStats::default(), 3, 2);

        assert!(summary.contains("(Showing top 2 of 3 functions)"));
        assert!(!summary.lines().any(|line| line.trim_start().starts_with("c ")));
    }

    #[test]
    fn test_truncate_name_keeps_tail() {
        assert_eq!(truncate_name("short", 10), "short");
        assert_eq!(truncate_name("abcdefghijkl", 8), "...hijkl");
    }
}
