//! StringAssociation: a store of strings keyed by their own reversal.

use crate::slot_table::SlotTable;
use core::fmt;
use core::hash::BuildHasher;
use std::collections::hash_map::RandomState;
use tracing::{debug, trace};

/// Key under which `value` is stored: its `char`s in reverse order.
pub fn derive_key(value: &str) -> String {
    value.chars().rev().collect()
}

/// Association of `reversed -> original` strings.
///
/// Callers only ever supply values; keys are derived with [`derive_key`]
/// on every insertion and value-based removal. Queries hand out owned
/// snapshots or shared borrows, never mutable access to the table.
pub struct StringAssociation<S = RandomState> {
    entries: SlotTable<String, String, S>,
}

impl StringAssociation {
    pub fn new() -> Self {
        Self {
            entries: SlotTable::new(),
        }
    }
}

impl Default for StringAssociation {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StringAssociation<S>
where
    S: BuildHasher + Clone + Default,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            entries: SlotTable::with_hasher(hasher),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// True when `value` is stored under its derived key.
    pub fn contains_value(&self, value: &str) -> bool {
        self.entries
            .get(derive_key(value).as_str())
            .is_some_and(|v| v == value)
    }

    pub fn value_for_key(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Owned `(key, value)` pairs in table order.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Whether every stored key is the reversal of its value. Only
    /// `uppercase_all_keys` can make this false.
    pub fn is_consistent(&self) -> bool {
        self.entries.iter().all(|(k, v)| *k == derive_key(v))
    }

    /// All values, ascending.
    pub fn values_sorted(&self) -> Vec<String> {
        let mut values: Vec<String> = self.entries.iter().map(|(_, v)| v.clone()).collect();
        values.sort();
        values
    }

    /// All keys, descending.
    pub fn keys_sorted_descending(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.iter().map(|(k, _)| k.clone()).collect();
        keys.sort_unstable_by(|a, b| b.cmp(a));
        keys
    }

    pub fn smallest_key(&self) -> Option<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).min()
    }

    /// Largest stored *value* (not key).
    pub fn largest_value(&self) -> Option<&str> {
        self.entries.iter().map(|(_, v)| v.as_str()).max()
    }

    /// Uppercased copies of every key, in no particular order.
    pub fn keys_uppercased(&self) -> Vec<String> {
        self.entries.iter().map(|(k, _)| k.to_uppercase()).collect()
    }

    pub fn count_distinct_values(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, v)| v.as_str())
            .collect::<hashbrown::HashSet<&str>>()
            .len()
    }

    /// Store `value` under its reversal, replacing any entry with that key.
    /// `None` and whitespace-only values are ignored.
    pub fn add_value<'a>(&mut self, value: impl Into<Option<&'a str>>) {
        match value.into() {
            Some(v) if !v.trim().is_empty() => self.put(v.to_owned()),
            other => trace!(value = ?other, "ignoring absent or blank value"),
        }
    }

    pub fn remove_by_key<'a>(&mut self, key: impl Into<Option<&'a str>>) {
        if let Some(k) = key.into() {
            let removed = self.entries.remove(k);
            trace!(key = k, removed = removed.is_some(), "remove by key");
        }
    }

    /// Remove the entry whose key is the reversal of `value`.
    pub fn remove_by_value<'a>(&mut self, value: impl Into<Option<&'a str>>) {
        if let Some(v) = value.into() {
            let key = derive_key(v);
            let removed = self.entries.remove(key.as_str());
            trace!(key = %key, removed = removed.is_some(), "remove by value");
        }
    }

    /// Replace the whole content with the `Display` renderings of `items`.
    ///
    /// `None` items are skipped. Renderings are stored as-is, blank ones
    /// included; later items overwrite earlier ones on key collision.
    pub fn reset_from<I, T>(&mut self, items: Option<I>)
    where
        I: IntoIterator<Item = Option<T>>,
        T: fmt::Display,
    {
        self.entries.clear();
        for item in items.into_iter().flatten().flatten() {
            self.put(item.to_string());
        }
        debug!(len = self.entries.len(), "reset store");
    }

    /// Replace every key with its uppercase form, keeping values.
    ///
    /// When several keys uppercase to the same string, the entry that comes
    /// last in table order wins. Values are left untouched, so the reversal
    /// relation no longer holds for keys containing cased letters.
    pub fn uppercase_all_keys(&mut self) {
        let mut upper: SlotTable<String, String, S> =
            SlotTable::with_hasher(S::default());
        for (k, v) in self.entries.iter() {
            upper.insert(k.to_uppercase(), v.clone());
        }
        let before = self.entries.len();
        self.entries = upper;
        debug!(before, after = self.entries.len(), "uppercased keys");
    }

    /// Whether every candidate equals some stored value. An absent or empty
    /// candidate list is vacuously true; an absent candidate never matches.
    pub fn contains_all_values<'a, I, C>(&self, candidates: Option<I>) -> bool
    where
        I: IntoIterator<Item = C>,
        C: Into<Option<&'a str>>,
    {
        candidates
            .into_iter()
            .flatten()
            .all(|c| match c.into() {
                Some(c) => self.entries.iter().any(|(_, v)| v == c),
                None => false,
            })
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        debug!("cleared store");
    }

    fn put(&mut self, value: String) {
        let key = derive_key(&value);
        trace!(key = %key, value = %value, "insert");
        self.entries.insert(key, value);
    }
}

impl<S> fmt::Debug for StringAssociation<S>
where
    S: BuildHasher + Clone + Default,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<T, S> Extend<T> for StringAssociation<S>
where
    T: fmt::Display,
    S: BuildHasher + Clone + Default,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            let rendered = item.to_string();
            self.add_value(rendered.as_str());
        }
    }
}

impl<T> FromIterator<T> for StringAssociation
where
    T: fmt::Display,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}
