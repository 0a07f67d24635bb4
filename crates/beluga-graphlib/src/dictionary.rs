//! First-seen dense index assignment.

use hashbrown::Equivalent;
use rustc_hash::FxBuildHasher;
use std::hash::Hash;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Maps keys to dense indices `0..len` in first-seen order.
///
/// Clustering uses this twice: once to give vertex identities dense
/// union-find slots, once to renumber set representatives into contiguous
/// cluster indices.
#[derive(Debug, Clone)]
pub struct Dictionary<K> {
    index: HashMap<K, usize>,
}

impl<K> Default for Dictionary<K> {
    fn default() -> Self {
        Self {
            index: HashMap::default(),
        }
    }
}

impl<K: Eq + Hash> Dictionary<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Index of `key`, assigning the next dense one on first sight.
    pub fn index_of(&mut self, key: K) -> usize {
        let next = self.index.len();
        *self.index.entry(key).or_insert(next)
    }

    /// Index of `key` if it has been seen.
    pub fn get<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.index.get(key).copied()
    }
}
