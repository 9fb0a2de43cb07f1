use std::{collections::hash_map, iter::FusedIterator};

// each call to `BiMap::iter`/`keys`/`values` hands out a fresh traversal of the forward side.
// iteration order is whatever the backing table yields and may change after any mutation.

/// Borrowing iterator over `(key, value)` pairs, returned by [`BiMap::iter`](super::BiMap::iter).
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    pub(super) inner: hash_map::Iter<'a, K, V>,
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

#[derive(Debug)]
pub struct Keys<'a, K, V> {
    pub(super) inner: hash_map::Keys<'a, K, V>,
}

impl<'a, K, V> Clone for Keys<'a, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a, K, V> FusedIterator for Keys<'a, K, V> {}

#[derive(Debug)]
pub struct Values<'a, K, V> {
    pub(super) inner: hash_map::Values<'a, K, V>,
}

impl<'a, K, V> Clone for Values<'a, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> ExactSizeIterator for Values<'a, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a, K, V> FusedIterator for Values<'a, K, V> {}

/// Owning iterator, drains the forward side and drops the inverse one.
#[derive(Debug)]
pub struct IntoIter<K, V> {
    pub(super) inner: hash_map::IntoIter<K, V>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

#[cfg(test)]
mod tests {
    use super::super::BiMap;
    use itertools::Itertools;

    fn sample() -> BiMap<&'static str, u32> {
        [("one", 1), ("two", 2), ("three", 3)].into_iter().collect()
    }

    #[test]
    fn iter_keys_values_agree() {
        let bimap = sample();

        let pairs = bimap.iter().sorted_by_key(|(_, v)| **v).collect_vec();
        assert_eq!(pairs, vec![(&"one", &1), (&"two", &2), (&"three", &3)]);
        assert_eq!(bimap.keys().sorted().collect_vec(), vec![&"one", &"three", &"two"]);
        assert_eq!(bimap.values().copied().sorted().collect_vec(), vec![1, 2, 3]);

        // keys and values come out of the same traversal, so they line up
        let zipped = bimap.keys().zip(bimap.values()).collect_vec();
        assert_eq!(zipped, bimap.iter().collect_vec());
    }

    #[test]
    fn each_call_starts_a_fresh_traversal() {
        let mut bimap = sample();
        let mut iter = bimap.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.clone().count(), 2);
        assert_eq!(bimap.iter().count(), 3);

        bimap.insert("four", 4);
        assert_eq!(bimap.keys().len(), 4);
        assert_eq!(bimap.values().len(), 4);
    }

    #[test]
    fn exhausted_iterators_stay_exhausted() {
        let bimap: BiMap<u8, u8> = BiMap::new();
        let mut keys = bimap.keys();
        assert_eq!(keys.next(), None);
        assert_eq!(keys.next(), None);
    }

    #[test]
    fn into_iter_yields_owned_pairs() {
        let bimap: BiMap<String, u32> = (1..=3).map(|i| (i.to_string(), i)).collect();

        let mut owned = Vec::new();
        for (key, value) in bimap {
            owned.push((key, value));
        }
        owned.sort();
        assert_eq!(
            owned,
            vec![("1".to_string(), 1), ("2".to_string(), 2), ("3".to_string(), 3)]
        );
    }

    #[test]
    fn borrowed_into_iter_matches_iter() {
        let bimap = sample();
        let mut total = 0;
        for (_, value) in &bimap {
            total += value;
        }
        assert_eq!(total, 6);
    }
}
