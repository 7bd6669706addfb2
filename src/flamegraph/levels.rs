//! Leveled bar tables and their delta encoding.
//!
//! `Levels` holds absolute sample positions. `DeltaLevels` is the transport
//! form where each bar start is stored relative to the end of the previous
//! bar on the same level. Keeping the two as separate types means the
//! codec cannot be applied twice to the same data.

use crate::aggregator::NameId;
use crate::utils::error::FlamegraphError;
use serde::{Deserialize, Serialize};

/// A run of samples sharing the same stack prefix at one depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bar {
    /// Index of the first sample, in sorted stack order
    pub start: usize,

    /// Number of samples in the run
    pub length: usize,

    pub name_id: NameId,
}

impl Bar {
    pub fn new(start: usize, length: usize, name_id: NameId) -> Self {
        Self {
            start,
            length,
            name_id,
        }
    }

    /// One past the last sample of the run
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn contains(&self, other: &Bar) -> bool {
        other.start >= self.start && other.end() <= self.end()
    }
}

/// Bars of one depth, sorted by start
pub type LevelTable = Vec<Bar>;

/// Bar tables indexed by depth, root at 0
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Levels(Vec<LevelTable>);

impl Levels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of materialized levels
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bars at `level`; levels never reached are empty
    pub fn level(&self, level: usize) -> &[Bar] {
        self.0.get(level).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LevelTable> {
        self.0.iter()
    }

    /// Total number of bars across all levels
    pub fn bar_count(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }

    /// Append a bar, materializing the level table on first use
    pub fn push(&mut self, level: usize, bar: Bar) {
        if self.0.len() <= level {
            self.0.resize_with(level + 1, Vec::new);
        }
        self.0[level].push(bar);
    }

    pub fn into_inner(self) -> Vec<LevelTable> {
        self.0
    }

    /// Rewrite each bar start as the gap since the previous bar's end
    ///
    /// # Errors
    /// * `FlamegraphError::InvalidLevels` - a bar starts before the previous
    ///   one ends, so the gap would be negative
    pub fn encode_deltas(&self) -> Result<DeltaLevels, FlamegraphError> {
        let mut encoded = Vec::with_capacity(self.0.len());

        for (level_index, level) in self.0.iter().enumerate() {
            let mut flat = Vec::with_capacity(level.len() * 3);
            let mut prev_end = 0usize;

            for (bar_index, bar) in level.iter().enumerate() {
                let delta = bar.start.checked_sub(prev_end).ok_or_else(|| {
                    FlamegraphError::InvalidLevels(format!(
                        "bar {} at level {} overlaps the previous bar",
                        bar_index, level_index
                    ))
                })?;

                flat.extend([delta as u64, bar.length as u64, u64::from(bar.name_id)]);
                prev_end = bar.end();
            }

            encoded.push(flat);
        }

        Ok(DeltaLevels(encoded))
    }
}

impl From<Vec<LevelTable>> for Levels {
    fn from(levels: Vec<LevelTable>) -> Self {
        Self(levels)
    }
}

impl<'a> IntoIterator for &'a Levels {
    type Item = &'a LevelTable;
    type IntoIter = std::slice::Iter<'a, LevelTable>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Delta-encoded levels: per level a flat `[delta, length, nameId, ...]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeltaLevels(pub Vec<Vec<u64>>);

impl DeltaLevels {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Restore absolute bar starts
    ///
    /// # Errors
    /// * `FlamegraphError::TruncatedLevel` - a level is not made of triples
    /// * `FlamegraphError::Overflow` - a position does not fit in memory
    pub fn decode_deltas(&self) -> Result<Levels, FlamegraphError> {
        let mut levels = Vec::with_capacity(self.0.len());

        for (level_index, flat) in self.0.iter().enumerate() {
            if flat.len() % 3 != 0 {
                return Err(FlamegraphError::TruncatedLevel {
                    level: level_index,
                    len: flat.len(),
                });
            }

            let overflow = |bar: usize| FlamegraphError::Overflow {
                level: level_index,
                bar,
            };

            let mut table = Vec::with_capacity(flat.len() / 3);
            let mut running_end = 0usize;

            for (bar_index, triple) in flat.chunks_exact(3).enumerate() {
                let delta = usize::try_from(triple[0]).map_err(|_| overflow(bar_index))?;
                let length = usize::try_from(triple[1]).map_err(|_| overflow(bar_index))?;
                let name_id = NameId::try_from(triple[2]).map_err(|_| overflow(bar_index))?;

                let start = running_end
                    .checked_add(delta)
                    .ok_or_else(|| overflow(bar_index))?;
                running_end = start
                    .checked_add(length)
                    .ok_or_else(|| overflow(bar_index))?;

                table.push(Bar::new(start, length, name_id));
            }

            levels.push(table);
        }

        Ok(Levels(levels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_levels() -> Levels {
        Levels::from(vec![
            vec![Bar::new(0, 4, 0)],
            vec![Bar::new(0, 2, 1), Bar::new(3, 1, 2)],
        ])
    }

    #[test]
    fn test_encode_deltas() {
        let encoded = sample_levels().encode_deltas().unwrap();
        assert_eq!(encoded.0, vec![vec![0, 4, 0], vec![0, 2, 1, 1, 1, 2]]);
    }

    #[test]
    fn test_decode_restores_levels() {
        let levels = sample_levels();
        let decoded = levels.encode_deltas().unwrap().decode_deltas().unwrap();
        assert_eq!(decoded, levels);
    }

    #[test]
    fn test_encode_rejects_overlap() {
        let levels = Levels::from(vec![vec![Bar::new(0, 3, 0), Bar::new(2, 1, 1)]]);
        assert!(matches!(
            levels.encode_deltas(),
            Err(FlamegraphError::InvalidLevels(_))
        ));
    }

    #[test]
    fn test_decode_rejects_truncated_level() {
        let encoded = DeltaLevels(vec![vec![0, 1, 0], vec![0, 1]]);
        assert!(matches!(
            encoded.decode_deltas(),
            Err(FlamegraphError::TruncatedLevel { level: 1, len: 2 })
        ));
    }

    #[test]
    fn test_decode_rejects_overflow() {
        let encoded = DeltaLevels(vec![vec![u64::MAX, 1, 0]]);
        assert!(encoded.decode_deltas().is_err());
    }

    #[test]
    fn test_push_materializes_levels() {
        let mut levels = Levels::new();
        levels.push(0, Bar::new(0, 1, 0));
        levels.push(2, Bar::new(0, 1, 1));

        assert_eq!(levels.len(), 3);
        assert!(levels.level(1).is_empty());
        assert!(levels.level(9).is_empty());
        assert_eq!(levels.bar_count(), 2);
    }

    #[test]
    fn test_serialized_form_is_flat() {
        let encoded = sample_levels().encode_deltas().unwrap();
        let json = serde_json::to_string(&encoded).unwrap();
        assert_eq!(json, "[[0,4,0],[0,2,1,1,1,2]]");
    }
}
