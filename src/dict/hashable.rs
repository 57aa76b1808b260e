use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use derive_more::{Deref, DerefMut, From};
use indexmap::IndexMap;
use serde_derive::{Deserialize, Serialize};

/// A mapping that can live in a `HashSet` or be used as a `HashMap` key.
///
/// The hash is taken over the `(key, hash(value))` pairs sorted by key at the
/// time `hash` is called, so it only depends on the contents and not on
/// insertion order. Iteration keeps insertion order.
///
/// Mutating a map while it sits inside a hashed collection breaks that
/// collection, same as with any other key type.
#[derive(Clone, Debug, Serialize, Deserialize, Deref, DerefMut, From)]
#[serde(transparent)]
pub struct HashableDict<K, V>
where
    K: Hash + Eq,
{
    dict: IndexMap<K, V>,
}

impl<K: Hash + Eq, V> Default for HashableDict<K, V> {
    fn default() -> Self {
        Self {
            dict: IndexMap::new(),
        }
    }
}

impl<K: Hash + Eq, V> HashableDict<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_inner(self) -> IndexMap<K, V> {
        self.dict
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for HashableDict<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.dict == other.dict
    }
}

impl<K: Hash + Eq, V: Eq> Eq for HashableDict<K, V> {}

fn value_hash<V: Hash>(value: &V) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

impl<K, V> Hash for HashableDict<K, V>
where
    K: Hash + Eq + Ord,
    V: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut pairs: Vec<(&K, u64)> = self.dict.iter().map(|(k, v)| (k, value_hash(v))).collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        pairs.len().hash(state);
        for (k, vh) in pairs {
            k.hash(state);
            vh.hash(state);
        }
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for HashableDict<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            dict: iter.into_iter().collect(),
        }
    }
}
