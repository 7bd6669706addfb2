//! Build integer-coded stacks from the ticks of a log.
//!
//! Each tick becomes one stack of name ids, root first. Stacks are then
//! sorted so that stacks sharing a prefix are adjacent, which is what the
//! flamegraph merge relies on.
//!
//! Example: ticks `[render, main]` and `[layout, main]` (leaf first) encode
//! to `[0, 1]` and `[0, 2]` with names `["main", "render", "layout"]`.

use super::names::{NameId, NameTable};
use crate::classifier::classify;
use crate::parser::V8Log;
use log::debug;

/// Name ids of one sample, root at index 0
pub type EncodedStack = Vec<NameId>;

/// Output of stack encoding
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedStacks {
    /// Display names, indexed by name id
    pub names: Vec<String>,

    /// One stack per tick, in tick order
    pub stacks: Vec<EncodedStack>,
}

/// Encode every tick of a log as a stack of name ids
///
/// **Public** - main entry point for stack building
///
/// # Arguments
/// * `log` - Parsed log
/// * `shared_prefix` - Script directory prefix to shorten, if any
///
/// # Algorithm
/// 1. Walk each tick's code indices from the root (last) to the leaf (first)
/// 2. Classify each referenced code entry
/// 3. Intern the name, reusing the id of names seen before
pub fn encode_stacks(log: &V8Log, shared_prefix: Option<&str>) -> EncodedStacks {
    debug!("Encoding {} ticks", log.ticks.len());

    let mut table = NameTable::new();

    // Classification is pure, so each code entry is classified once
    let mut by_code: Vec<Option<NameId>> = vec![None; log.code.len()];
    let mut unresolved: Option<NameId> = None;

    let stacks: Vec<EncodedStack> = log
        .ticks
        .iter()
        .map(|tick| {
            tick.code_indices()
                .rev()
                .map(|index| {
                    let slot = match usize::try_from(index) {
                        Ok(i) if i < by_code.len() => &mut by_code[i],
                        _ => &mut unresolved,
                    };

                    *slot.get_or_insert_with(|| {
                        table.intern(&classify(log.code_at(index), shared_prefix))
                    })
                })
                .collect()
        })
        .collect();

    debug!("Encoded {} stacks with {} distinct names", stacks.len(), table.len());

    EncodedStacks {
        names: table.into_names(),
        stacks,
    }
}

/// Sort stacks lexicographically by name id, shorter prefix first
///
/// **Public** - required before merging
///
/// Ids are assigned in first-seen order, so this groups identical names
/// together rather than sorting them alphabetically.
pub fn sort_stacks(stacks: &mut [EncodedStack]) {
    // Slice ordering compares element-wise and puts a strict prefix first
    stacks.sort_unstable();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{CodeRef, Tick};

    fn log_with(code: Vec<Option<CodeRef>>, ticks: Vec<Vec<i64>>) -> V8Log {
        V8Log {
            code,
            ticks: ticks.into_iter().map(Tick::new).collect(),
        }
    }

    #[test]
    fn test_encode_reverses_to_root_first() {
        let log = log_with(
            vec![
                Some(CodeRef::new("JS", Some("Opt"), "main")),
                Some(CodeRef::new("JS", Some("Opt"), "render")),
                Some(CodeRef::new("JS", Some("Opt"), "layout")),
            ],
            vec![vec![1, 4, 0, 8], vec![2, 0, 0, 0]],
        );

        let encoded = encode_stacks(&log, None);

        assert_eq!(encoded.names, vec!["main", "render", "layout"]);
        assert_eq!(encoded.stacks, vec![vec![0, 1], vec![0, 2]]);
    }

    #[test]
    fn test_encode_keeps_unknown_frames() {
        let log = log_with(
            vec![None, Some(CodeRef::new("SHARED_LIB", None, "/lib/libc.so"))],
            vec![vec![0, 0, 1, 0, 99, 0, -1, 0]],
        );

        let encoded = encode_stacks(&log, None);

        assert_eq!(encoded.names, vec!["(unknown)", "(lib) /lib/libc.so"]);
        assert_eq!(encoded.stacks, vec![vec![0, 0, 1, 0]]);
    }

    #[test]
    fn test_encode_odd_length_frames() {
        let log = log_with(
            vec![
                Some(CodeRef::new("JS", Some("Opt"), "a")),
                Some(CodeRef::new("JS", Some("Opt"), "b")),
            ],
            vec![vec![1, 0, 0]],
        );

        let encoded = encode_stacks(&log, None);

        assert_eq!(encoded.stacks, vec![vec![0, 1]]);
        assert_eq!(encoded.names, vec!["a", "b"]);
    }

    #[test]
    fn test_sort_stacks_prefix_first() {
        let mut stacks: Vec<EncodedStack> =
            vec![vec![0, 2], vec![1], vec![0, 1, 3], vec![0], vec![0, 1]];

        sort_stacks(&mut stacks);

        assert_eq!(
            stacks,
            vec![vec![0], vec![0, 1], vec![0, 1, 3], vec![0, 2], vec![1]]
        );
    }
}
