//! Merge sorted stacks into leveled bars.
//!
//! Starting from the whole sample range at depth 0, each region is split
//! into maximal runs of samples with the same name at that depth. Every run
//! becomes a bar, and runs that still have deeper frames are queued as a
//! region one level down. A work queue replaces recursion, so deep profiles
//! cannot exhaust the call stack.

use super::levels::{Bar, Levels};
use crate::aggregator::EncodedStack;
use log::debug;
use std::collections::VecDeque;

/// A region of sorted samples still to be split at one depth
#[derive(Debug, Clone, Copy)]
struct Task {
    level: usize,
    /// First sample of the region
    left: usize,
    /// One past the last sample of the region
    right: usize,
}

/// Build the flamegraph levels from lexicographically sorted stacks
///
/// **Public** - main entry point for merging
///
/// Stacks must have been sorted with
/// [`sort_stacks`](crate::aggregator::sort_stacks); otherwise samples with a
/// common prefix are not adjacent and bars get split.
///
/// Regions are processed first-in first-out, so each level is filled from
/// left to right and bars come out sorted by start.
pub fn merge_stacks(stacks: &[EncodedStack]) -> Levels {
    let mut levels = Levels::new();

    if stacks.is_empty() {
        return levels;
    }

    let mut queue = VecDeque::new();
    queue.push_back(Task {
        level: 0,
        left: 0,
        right: stacks.len(),
    });

    while let Some(Task { level, left, right }) = queue.pop_front() {
        let mut i = left;

        while i < right {
            // Samples too shallow for this depth contribute nothing here
            let Some(&name_id) = stacks[i].get(level) else {
                i += 1;
                continue;
            };

            let start = i;
            let mut has_children = false;
            while i < right && stacks[i].get(level) == Some(&name_id) {
                has_children |= stacks[i].len() > level + 1;
                i += 1;
            }

            levels.push(level, Bar::new(start, i - start, name_id));

            if has_children {
                queue.push_back(Task {
                    level: level + 1,
                    left: start,
                    right: i,
                });
            }
        }
    }

    debug!(
        "Merged {} stacks into {} bars over {} levels",
        stacks.len(),
        levels.bar_count(),
        levels.len()
    );

    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_two_children() {
        // [A, B] and [A, C]
        let levels = merge_stacks(&[vec![0, 1], vec![0, 2]]);

        assert_eq!(levels.len(), 2);
        assert_eq!(levels.level(0), &[Bar::new(0, 2, 0)]);
        assert_eq!(levels.level(1), &[Bar::new(0, 1, 1), Bar::new(1, 1, 2)]);
    }

    #[test]
    fn test_merge_empty_input() {
        assert!(merge_stacks(&[]).is_empty());
    }

    #[test]
    fn test_merge_only_empty_stacks() {
        assert!(merge_stacks(&[vec![]]).is_empty());
    }

    #[test]
    fn test_merge_skips_shallow_stacks() {
        let levels = merge_stacks(&[vec![0], vec![0, 1], vec![0, 1, 2], vec![0, 1, 2]]);

        assert_eq!(levels.level(0), &[Bar::new(0, 4, 0)]);
        assert_eq!(levels.level(1), &[Bar::new(1, 3, 1)]);
        assert_eq!(levels.level(2), &[Bar::new(2, 2, 2)]);
    }

    #[test]
    fn test_merge_orders_bars_across_subtrees() {
        let stacks = vec![
            vec![0, 1, 3],
            vec![0, 2, 3],
            vec![4, 5],
            vec![4, 5, 6],
        ];
        let levels = merge_stacks(&stacks);

        assert_eq!(levels.level(0), &[Bar::new(0, 2, 0), Bar::new(2, 2, 4)]);
        assert_eq!(
            levels.level(1),
            &[Bar::new(0, 1, 1), Bar::new(1, 1, 2), Bar::new(2, 2, 5)]
        );
        assert_eq!(
            levels.level(2),
            &[Bar::new(0, 1, 3), Bar::new(1, 1, 3), Bar::new(3, 1, 6)]
        );
    }

    #[test]
    fn test_merge_deep_stack_does_not_recurse() {
        let deep: EncodedStack = (0..50_000).collect();
        let levels = merge_stacks(&[deep]);

        assert_eq!(levels.len(), 50_000);
        assert_eq!(levels.level(49_999), &[Bar::new(0, 1, 49_999)]);
    }
}
