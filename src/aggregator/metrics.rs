//! Calculate hot frames and shape statistics.
//!
//! Hot frames are the functions present in the most samples. Total counts
//! a sample once per function even when it recurses; self counts samples
//! where the function is the leaf.

use super::names::NameId;
use super::stack_builder::EncodedStack;
use crate::flamegraph::Levels;
use log::debug;

/// A function ranked by sample count
#[derive(Debug, Clone, PartialEq)]
pub struct HotFrame {
    pub name_id: NameId,
    pub name: String,

    /// Samples with this function anywhere on the stack
    pub total_samples: usize,

    /// Samples with this function as the leaf
    pub self_samples: usize,

    /// Percentage of all samples (total)
    pub total_percentage: f64,

    /// Percentage of all samples (self)
    pub self_percentage: f64,
}

/// Rank functions by the number of samples they appear in
///
/// **Public** - main entry point for hot frame analysis
///
/// # Arguments
/// * `stacks` - Encoded stacks, in any order
/// * `names` - Names indexed by name id
/// * `top_n` - Number of frames to return
///
/// # Returns
/// Frames sorted by total samples (descending), ties by name id
pub fn calculate_hot_frames(
    stacks: &[EncodedStack],
    names: &[String],
    top_n: usize,
) -> Vec<HotFrame> {
    debug!("Calculating top {} hot frames from {} stacks", top_n, stacks.len());

    let mut total = vec![0usize; names.len()];
    let mut own = vec![0usize; names.len()];
    // Sample number (1-based) that last counted each name
    let mut last_counted = vec![0usize; names.len()];

    for (sample, stack) in stacks.iter().enumerate() {
        let sample = sample + 1;
        for &name_id in stack {
            let id = name_id as usize;
            if id < names.len() && last_counted[id] != sample {
                last_counted[id] = sample;
                total[id] += 1;
            }
        }
        if let Some(&leaf) = stack.last() {
            if let Some(count) = own.get_mut(leaf as usize) {
                *count += 1;
            }
        }
    }

    let mut ranked: Vec<usize> = (0..names.len()).filter(|&id| total[id] > 0).collect();
    ranked.sort_by(|&a, &b| total[b].cmp(&total[a]).then(a.cmp(&b)));

    ranked
        .into_iter()
        .take(top_n)
        .map(|id| HotFrame {
            name_id: id as NameId,
            name: names[id].clone(),
            total_samples: total[id],
            self_samples: own[id],
            total_percentage: percentage(total[id], stacks.len()),
            self_percentage: percentage(own[id], stacks.len()),
        })
        .collect()
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole > 0 {
        (part as f64 / whole as f64) * 100.0
    } else {
        0.0
    }
}

/// Shape statistics of a flamegraph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelStats {
    /// Number of levels
    pub depth: usize,

    /// Bars across all levels
    pub total_bars: usize,

    /// Level with the most bars
    pub widest_level: usize,

    /// Bars on the widest level
    pub widest_level_bars: usize,
}

impl LevelStats {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Depth: {} | Bars: {} | Widest: level {} ({} bars)",
            self.depth, self.total_bars, self.widest_level, self.widest_level_bars
        )
    }
}

/// Calculate shape statistics of a flamegraph
pub fn calculate_level_stats(levels: &Levels) -> LevelStats {
    // Ties keep the shallowest level
    let (widest_level, widest_level_bars) = levels
        .iter()
        .map(Vec::len)
        .enumerate()
        .fold((0, 0), |best, (level, bars)| {
            if bars > best.1 {
                (level, bars)
            } else {
                best
            }
        });

    LevelStats {
        depth: levels.len(),
        total_bars: levels.bar_count(),
        widest_level,
        widest_level_bars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flamegraph::Bar;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_calculate_hot_frames() {
        let stacks = vec![vec![0, 1], vec![0, 1, 2], vec![0, 2], vec![0]];
        let hot = calculate_hot_frames(&stacks, &names(&["main", "a", "b"]), 2);

        assert_eq!(hot.len(), 2);
        assert_eq!(hot[0].name, "main");
        assert_eq!(hot[0].total_samples, 4);
        assert_eq!(hot[0].self_samples, 1);
        assert_eq!(hot[0].total_percentage, 100.0);
        assert_eq!(hot[1].name, "a");
        assert_eq!(hot[1].total_samples, 2);
        assert_eq!(hot[1].self_samples, 1);
        assert_eq!(hot[1].self_percentage, 25.0);
    }

    #[test]
    fn test_recursion_counts_sample_once() {
        let stacks = vec![vec![0, 1, 1, 1]];
        let hot = calculate_hot_frames(&stacks, &names(&["main", "fib"]), 10);

        assert_eq!(hot[1].name, "fib");
        assert_eq!(hot[1].total_samples, 1);
        assert_eq!(hot[1].self_samples, 1);
    }

    #[test]
    fn test_hot_frames_empty() {
        let hot = calculate_hot_frames(&[], &[], 5);
        assert!(hot.is_empty());
    }

    #[test]
    fn test_calculate_level_stats() {
        let levels = Levels::from(vec![
            vec![Bar::new(0, 3, 0)],
            vec![Bar::new(0, 1, 1), Bar::new(1, 2, 2)],
            vec![Bar::new(1, 1, 1), Bar::new(2, 1, 2)],
        ]);

        let stats = calculate_level_stats(&levels);

        assert_eq!(stats.depth, 3);
        assert_eq!(stats.total_bars, 5);
        assert_eq!(stats.widest_level, 1);
        assert_eq!(stats.widest_level_bars, 2);
    }
}
