//! SlotTable: minimal associative container with generational slot storage.
//!
//! A `hashbrown::HashTable` index points into a `slotmap::SlotMap` that owns
//! the entries. Each entry caches its hash so the index can be rebuilt
//! without calling `K: Hash` again. Iteration follows slot order, which is
//! fully determined by the sequence of operations applied to the table.

use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use hashbrown::hash_table::Entry as IndexEntry;
use hashbrown::HashTable;
use slotmap::{DefaultKey, SlotMap};
use std::collections::hash_map::RandomState;

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
    hash: u64,
}

pub struct SlotTable<K, V, S = RandomState> {
    hasher: S,
    index: HashTable<DefaultKey>,
    slots: SlotMap<DefaultKey, Entry<K, V>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InsertError {
    #[error("key already present in table")]
    DuplicateKey,
}

impl<K, V> SlotTable<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }
}

impl<K, V> Default for SlotTable<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the entries of a `SlotTable`, in slot order.
pub struct Iter<'a, K, V> {
    it: slotmap::basic::Iter<'a, DefaultKey, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(_, e)| (&e.key, &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<K, V, S> SlotTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Clone + Default,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            index: HashTable::new(),
            hasher,
            slots: SlotMap::with_key(),
        }
    }

    fn make_hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    fn find_slot<Q>(&self, q: &Q) -> Option<DefaultKey>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(q);
        self.index
            .find(hash, |&k| {
                self.slots
                    .get(k)
                    .map(|e| e.key.borrow() == q)
                    .unwrap_or(false)
            })
            .copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let k = self.find_slot(q)?;
        self.slots.get(k).map(|e| &e.value)
    }

    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.find_slot(q).is_some()
    }

    /// Insert `key -> value`, replacing the value of an existing entry in
    /// place. Returns the previous value when the key was already present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.make_hash(&key);
        match self.index.entry(
            hash,
            |&kk| self.slots.get(kk).map(|e| e.key == key).unwrap_or(false),
            |&kk| self.slots.get(kk).map(|e| e.hash).unwrap_or(0),
        ) {
            IndexEntry::Occupied(o) => {
                let slot = *o.get();
                self.slots
                    .get_mut(slot)
                    .map(|e| core::mem::replace(&mut e.value, value))
            }
            IndexEntry::Vacant(v) => {
                let k = self.slots.insert(Entry { key, value, hash });
                let _ = v.insert(k);
                None
            }
        }
    }

    /// Insert only when `key` is absent; the table is untouched otherwise.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<(), InsertError> {
        let hash = self.make_hash(&key);
        match self.index.entry(
            hash,
            |&kk| self.slots.get(kk).map(|e| e.key == key).unwrap_or(false),
            |&kk| self.slots.get(kk).map(|e| e.hash).unwrap_or(0),
        ) {
            IndexEntry::Occupied(_) => Err(InsertError::DuplicateKey),
            IndexEntry::Vacant(v) => {
                let k = self.slots.insert(Entry { key, value, hash });
                let _ = v.insert(k);
                Ok(())
            }
        }
    }

    pub fn remove<Q>(&mut self, q: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(q);
        let slots = &self.slots;
        let found = self
            .index
            .find_entry(hash, |&k| {
                slots
                    .get(k)
                    .map(|e| e.key.borrow() == q)
                    .unwrap_or(false)
            })
            .ok()?;
        let (k, _) = found.remove();
        let entry = self.slots.remove(k)?;
        Some((entry.key, entry.value))
    }

    pub fn clear(&mut self) {
        self.index.clear();
        self.slots.clear();
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            it: self.slots.iter(),
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a SlotTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Clone + Default,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
