//! Name interning.
//!
//! Every distinct display name gets a small dense id in first-seen order.
//! Ids index into the names list written to the output.

use std::collections::HashMap;

/// Id of an interned name
pub type NameId = u32;

/// Append-only table of display names
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    names: Vec<String>,
    ids: HashMap<String, NameId>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id of `name`, assigning the next id if it is new
    pub fn intern(&mut self, name: &str) -> NameId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }

        let id = self.names.len() as NameId;
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }

    pub fn get(&self, id: NameId) -> Option<&str> {
        self.names.get(id as usize).map(String::as_str)
    }

    pub fn id_of(&self, name: &str) -> Option<NameId> {
        self.ids.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Consume the table, keeping names in id order
    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_assigns_first_seen_ids() {
        let mut table = NameTable::new();

        assert_eq!(table.intern("main"), 0);
        assert_eq!(table.intern("render"), 1);
        assert_eq!(table.intern("main"), 0);
        assert_eq!(table.intern("(unknown)"), 2);

        assert_eq!(table.len(), 3);
        assert_eq!(table.get(1), Some("render"));
        assert_eq!(table.get(7), None);
        assert_eq!(table.id_of("(unknown)"), Some(2));
        assert_eq!(table.into_names(), vec!["main", "render", "(unknown)"]);
    }
}
