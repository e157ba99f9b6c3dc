//! `Name -> ConstructId` mapping, populated by every named top-level
//! construct (Interface, Mixin, Namespace, Dictionary, Enum, Typedef,
//! Callback) as it finishes parsing.
//!
//! Backed by `IndexMap` with an `rustc-hash` hasher rather than
//! `std::collections::HashMap`: lookups are on the hot path of every
//! `ArgumentList`'s dictionary-type check, and `IndexMap` additionally
//! gives declaration-order iteration for `keys()` without a second
//! structure.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::constructs::ConstructId;

/// Caller-shareable mapping from declared name to the construct that
/// defines it. Last write wins: re-inserting a name updates the target
/// `ConstructId` without disturbing iteration order, matching partial
/// definitions overwriting in declaration order.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: IndexMap<String, ConstructId, FxBuildHasher>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    pub fn get(&self, name: &str) -> Option<ConstructId> {
        self.entries.get(name).copied()
    }

    pub fn insert(&mut self, name: impl Into<String>, id: ConstructId) {
        self.entries.insert(name.into(), id);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declared names in the order they were first inserted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ConstructId)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins_without_reordering() {
        let mut table = SymbolTable::new();
        table.insert("A", ConstructId::new(0));
        table.insert("B", ConstructId::new(1));
        table.insert("A", ConstructId::new(2));
        assert_eq!(table.get("A"), Some(ConstructId::new(2)));
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_contains_and_len() {
        let mut table = SymbolTable::new();
        assert!(table.is_empty());
        table.insert("Foo", ConstructId::new(0));
        assert!(table.contains("Foo"));
        assert!(!table.contains("Bar"));
        assert_eq!(table.len(), 1);
    }
}
