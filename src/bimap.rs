use std::{
    borrow::Borrow,
    collections::HashMap,
    fmt::{self, Debug},
    hash::{BuildHasher, Hash},
};

use tracing::trace;

pub mod iter;
pub use iter::{IntoIter, Iter, Keys, Values};

/// A bidirectional hash table: a one-to-one association between keys `K` and values `V`,
/// searchable from either side.
///
/// `forward` and `inverse` are exact transposes of each other after every mutation.
/// Inserting a pair that reuses a key or a value evicts whatever pair previously held it,
/// so no stale entry is ever left reachable from one side only.
#[derive(Clone)]
pub struct BiMap<K, V, S = ahash::RandomState> {
    forward: HashMap<K, V, S>,
    inverse: HashMap<V, K, S>,
}

impl<K, V> BiMap<K, V, ahash::RandomState> {
    pub fn new() -> Self {
        Self::with_hasher(ahash::RandomState::default())
    }

    /// Both sides are pre-sized to hold at least `capacity` pairs.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, ahash::RandomState::default())
    }
}

impl<K, V, S: Clone> BiMap<K, V, S> {
    pub fn with_hasher(hash_builder: S) -> Self {
        BiMap {
            forward: HashMap::with_hasher(hash_builder.clone()),
            inverse: HashMap::with_hasher(hash_builder),
        }
    }

    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        BiMap {
            forward: HashMap::with_capacity_and_hasher(capacity, hash_builder.clone()),
            inverse: HashMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }
}

impl<K, V, S> BiMap<K, V, S> {
    /// Number of pairs. Both sides always hold the same count.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.forward.len(), self.inverse.len());
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.forward.capacity().min(self.inverse.capacity())
    }

    pub fn hasher(&self) -> &S {
        self.forward.hasher()
    }

    pub fn clear(&mut self) {
        trace!(removed = self.forward.len(), "clearing bimap");
        self.forward.clear();
        self.inverse.clear();
    }

    /// Visits every `(key, value)` pair in arbitrary order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.forward.iter(),
        }
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            inner: self.forward.keys(),
        }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values {
            inner: self.forward.values(),
        }
    }

    /// Swaps the two directions without copying anything.
    pub fn into_reversed(self) -> BiMap<V, K, S> {
        BiMap {
            forward: self.inverse,
            inverse: self.forward,
        }
    }
}

impl<K, V, S> BiMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Associates `key` with `value`.
    ///
    /// If `key` was bound to some other value, or `value` to some other key, those pairs
    /// are removed from both sides first. Re-inserting an existing pair changes nothing.
    pub fn insert(&mut self, key: K, value: V) {
        let mut evicted = 0;
        if let Some(old_value) = self.forward.remove(&key) {
            self.inverse.remove(&old_value);
            evicted += usize::from(old_value != value);
        }
        if let Some(old_key) = self.inverse.remove(&value) {
            self.forward.remove(&old_key);
            evicted += 1;
        }
        if evicted > 0 {
            trace!(evicted, len = self.forward.len(), "insert displaced existing pairs");
        }

        self.forward.insert(key.clone(), value.clone());
        self.inverse.insert(value, key);
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.get(key)
    }

    pub fn get_inverse<Q>(&self, value: &Q) -> Option<&K>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inverse.get(value)
    }

    /// Like [`get`](Self::get), but an absent key reads as `V::default()`.
    /// Use `get` when a stored default has to be told apart from absence.
    pub fn get_or_default<Q>(&self, key: &Q) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Default,
    {
        self.get(key).cloned().unwrap_or_default()
    }

    pub fn get_inverse_or_default<Q>(&self, value: &Q) -> K
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        K: Default,
    {
        self.get_inverse(value).cloned().unwrap_or_default()
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.contains_key(key)
    }

    pub fn contains_inverse<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inverse.contains_key(value)
    }

    /// Removes `key` and its value from both sides. Absent keys are a no-op.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let value = self.forward.remove(key)?;
        self.inverse.remove(&value);
        Some(value)
    }

    pub fn remove_inverse<Q>(&mut self, value: &Q) -> Option<K>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let key = self.inverse.remove(value)?;
        self.forward.remove(&key);
        Some(key)
    }

    /// Removes every pair for which `predicate` returns `true`.
    pub fn remove_if<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        let inverse = &mut self.inverse;
        let before = self.forward.len();
        self.forward.retain(|key, value| {
            if predicate(key, value) {
                inverse.remove(value);
                false
            } else {
                true
            }
        });
        trace!(removed = before - self.forward.len(), "remove_if");
    }

    /// Structural equality on keys, with values compared by `eq` rather than `PartialEq`.
    pub fn eq_by<W, T, F>(&self, other: &BiMap<K, W, T>, mut eq: F) -> bool
    where
        T: BuildHasher,
        F: FnMut(&V, &W) -> bool,
    {
        self.forward.len() == other.forward.len()
            && self.forward.iter().all(|(key, value)| {
                other
                    .forward
                    .get(key)
                    .map_or(false, |other_value| eq(value, other_value))
            })
    }

    /// Inserts every pair of `self` into `dst`, which keeps its unrelated entries.
    pub fn copy_into<T: BuildHasher>(&self, dst: &mut BiMap<K, V, T>) {
        for (key, value) in self.iter() {
            dst.insert(key.clone(), value.clone());
        }
    }

    /// A fresh map with keys and values swapped. `self` is left untouched.
    pub fn reversed(&self) -> BiMap<V, K, S>
    where
        S: Clone,
    {
        self.clone().into_reversed()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.forward.reserve(additional);
        self.inverse.reserve(additional);
    }

    pub fn shrink_to_fit(&mut self) {
        self.forward.shrink_to_fit();
        self.inverse.shrink_to_fit();
    }
}

impl<K, V, S: Default> Default for BiMap<K, V, S> {
    fn default() -> Self {
        BiMap {
            forward: HashMap::default(),
            inverse: HashMap::default(),
        }
    }
}

impl<K: Debug, V: Debug, S> Debug for BiMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.forward.iter()).finish()
    }
}

// the inverse side is the transpose of the forward side, so comparing one is enough
impl<K, V, S> PartialEq for BiMap<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.forward == other.forward
    }
}

impl<K, V, S> Eq for BiMap<K, V, S>
where
    K: Eq + Hash,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S> Extend<(K, V)> for BiMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, pairs: I) {
        for (key, value) in pairs {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V, S> Extend<(&'a K, &'a V)> for BiMap<K, V, S>
where
    K: Eq + Hash + Copy,
    V: Eq + Hash + Copy,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, pairs: I) {
        self.extend(pairs.into_iter().map(|(&key, &value)| (key, value)));
    }
}

impl<K, V, S> FromIterator<(K, V)> for BiMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut bimap = BiMap::default();
        bimap.extend(pairs);
        bimap
    }
}

/// Pairs are inserted in the source map's iteration order, so when two keys share a value
/// the surviving key is whichever the source visits last.
impl<K, V, H, S> From<HashMap<K, V, H>> for BiMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    fn from(pairs: HashMap<K, V, H>) -> Self {
        let mut bimap = BiMap::default();
        bimap.reserve(pairs.len());
        bimap.extend(pairs);
        bimap
    }
}

impl<'a, K, V, S> IntoIterator for &'a BiMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> IntoIterator for BiMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.forward.into_iter(),
        }
    }
}
