//! Outcome caches keyed by canonical position.
//!
//! - `MemoTable`: single-owner table, the solver's default
//! - `SharedMemoTable`: concurrent table that several solvers can share
//!
//! Outcomes are pure functions of the key, so concurrent duplicate inserts
//! always write the same value.

use std::hash::{BuildHasherDefault, Hash};
use std::sync::Arc;

use dashmap::DashMap;
use rustc_hash::{FxHashMap, FxHasher};

use crate::core::Outcome;

type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// Storage for decided outcomes.
///
/// Absent keys mean "not yet known".
pub trait OutcomeCache<K> {
    /// Look up a decided outcome.
    fn get(&self, key: &K) -> Option<Outcome>;

    /// Record a decided outcome.
    fn insert(&mut self, key: K, outcome: Outcome);

    /// Number of cached positions.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget everything.
    fn clear(&mut self);
}

/// Single-owner memo table.
#[derive(Clone, Debug)]
pub struct MemoTable<K> {
    entries: FxHashMap<K, Outcome>,
}

impl<K: Eq + Hash> MemoTable<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<K: Eq + Hash> Default for MemoTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> OutcomeCache<K> for MemoTable<K> {
    fn get(&self, key: &K) -> Option<Outcome> {
        self.entries.get(key).copied()
    }

    fn insert(&mut self, key: K, outcome: Outcome) {
        self.entries.insert(key, outcome);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Thread-safe memo table using DashMap.
///
/// `clone_ref` (and `Clone`) hand out another handle to the same table.
#[derive(Debug)]
pub struct SharedMemoTable<K: Eq + Hash> {
    table: Arc<DashMap<K, Outcome, FxBuildHasher>>,
}

impl<K: Eq + Hash> SharedMemoTable<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: Arc::new(DashMap::with_hasher(FxBuildHasher::default())),
        }
    }

    /// Clone the table reference (shares underlying data).
    #[must_use]
    pub fn clone_ref(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }

    /// Whether two handles point at the same table.
    #[must_use]
    pub fn shares_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.table, &other.table)
    }

    /// Record an outcome through a shared reference. Last writer wins.
    pub fn store(&self, key: K, outcome: Outcome) {
        self.table.insert(key, outcome);
    }

    #[must_use]
    pub fn lookup(&self, key: &K) -> Option<Outcome> {
        self.table.get(key).map(|entry| *entry.value())
    }
}

impl<K: Eq + Hash> Clone for SharedMemoTable<K> {
    fn clone(&self) -> Self {
        self.clone_ref()
    }
}

impl<K: Eq + Hash> Default for SharedMemoTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> OutcomeCache<K> for SharedMemoTable<K> {
    fn get(&self, key: &K) -> Option<Outcome> {
        self.lookup(key)
    }

    fn insert(&mut self, key: K, outcome: Outcome) {
        self.store(key, outcome);
    }

    fn len(&self) -> usize {
        self.table.len()
    }

    fn clear(&mut self) {
        self.table.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memo_table_insert_get() {
        let mut table: MemoTable<u32> = MemoTable::new();
        assert!(table.is_empty());
        assert_eq!(table.get(&1), None);

        table.insert(1, Outcome::Win);
        table.insert(2, Outcome::Loss);

        assert_eq!(table.get(&1), Some(Outcome::Win));
        assert_eq!(table.get(&2), Some(Outcome::Loss));
        assert_eq!(table.len(), 2);

        table.clear();
        assert!(table.is_empty());
    }

    #[test]
    fn test_shared_table_handles_see_same_data() {
        let table: SharedMemoTable<u32> = SharedMemoTable::new();
        let mut other = table.clone_ref();

        other.insert(7, Outcome::Draw);

        assert!(table.shares_with(&other));
        assert_eq!(table.lookup(&7), Some(Outcome::Draw));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_shared_table_concurrent_inserts() {
        let table: SharedMemoTable<u32> = SharedMemoTable::new();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                let handle = table.clone_ref();
                scope.spawn(move || {
                    for key in 0..100 {
                        let outcome = if key % 2 == 0 { Outcome::Win } else { Outcome::Loss };
                        handle.store(key, outcome);
                    }
                });
            }
        });

        assert_eq!(table.len(), 100);
        assert_eq!(table.lookup(&10), Some(Outcome::Win));
        assert_eq!(table.lookup(&11), Some(Outcome::Loss));
    }
}
