use std::collections::{HashMap, hash_map};

use crate::{Index, Text, Value};

/// A decoded dictionary: text keys mapped to values.
///
/// Entry order is not preserved. Inserting a key that is already present
/// replaces the previous value, which is how duplicate keys on the wire are
/// resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dict {
    map: HashMap<Text, Value>,
}

impl Dict {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Inserts an entry, returning the value it replaced.
    #[inline]
    pub fn insert(&mut self, key: impl Into<Text>, value: impl Into<Value>) -> Option<Value> {
        self.map.insert(key.into(), value.into())
    }

    #[inline]
    pub fn get<I: Index + ?Sized>(&self, key: &I) -> Option<&Value> {
        self.map.get(key.key_bytes())
    }

    #[inline]
    pub fn get_mut<I: Index + ?Sized>(&mut self, key: &I) -> Option<&mut Value> {
        self.map.get_mut(key.key_bytes())
    }

    #[inline]
    pub fn contains_key<I: Index + ?Sized>(&self, key: &I) -> bool {
        self.map.contains_key(key.key_bytes())
    }

    #[inline]
    pub fn remove<I: Index + ?Sized>(&mut self, key: &I) -> Option<Value> {
        self.map.remove(key.key_bytes())
    }

    #[inline]
    pub fn iter(&self) -> hash_map::Iter<'_, Text, Value> {
        self.map.iter()
    }

    #[inline]
    pub fn keys(&self) -> hash_map::Keys<'_, Text, Value> {
        self.map.keys()
    }

    #[inline]
    pub fn values(&self) -> hash_map::Values<'_, Text, Value> {
        self.map.values()
    }

    #[inline]
    pub fn into_inner(self) -> HashMap<Text, Value> {
        self.map
    }
}

impl From<HashMap<Text, Value>> for Dict {
    #[inline]
    fn from(map: HashMap<Text, Value>) -> Self {
        Self { map }
    }
}

impl<K: Into<Text>, V: Into<Value>> FromIterator<(K, V)> for Dict {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            map: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<Text>, V: Into<Value>> Extend<(K, V)> for Dict {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for Dict {
    type Item = (Text, Value);
    type IntoIter = hash_map::IntoIter<Text, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dict {
    type Item = (&'a Text, &'a Value);
    type IntoIter = hash_map::Iter<'a, Text, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}
