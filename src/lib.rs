//! reversed-string-map: a single-threaded store of strings keyed by their
//! own reversal.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep the `key == reverse(value)` relation impossible to break
//!   from outside by never letting callers name a key on insertion.
//! - Layers:
//!   - SlotTable<K, V, S>: minimal associative container. A hash index
//!     over generational slot storage, exposing only insert, lookup,
//!     remove, iterate, clear and len.
//!   - StringAssociation<S>: public store. Derives every key with
//!     `derive_key`, answers sorted/extreme/count queries from snapshots of
//!     the table, and performs bulk reset and key uppercasing.
//!
//! Constraints
//! - Single-threaded; no interior mutability, no locking.
//! - Unique keys. Inserting a value whose reversal is already a key
//!   replaces that entry's value in place.
//! - Store operations never fail. Absent or blank arguments are no-ops,
//!   scalar queries on an empty store return `None`, collection queries
//!   return empty `Vec`s.
//!
//! Iteration order
//! - The table iterates in slot order. Slot order depends only on the
//!   sequence of inserts and removals applied, so "last in table order"
//!   is a deterministic tie-breaker for `uppercase_all_keys`.
//!
//! Hasher
//! - Each table entry stores a precomputed `u64` hash; the index is never
//!   rebuilt through `K: Hash`. The hasher is chosen at construction with
//!   `with_hasher` and defaults to `RandomState`.
//!
//! Notes and non-goals
//! - No persistence, no concurrency, no I/O.
//! - `uppercase_all_keys` is deliberately one-way: it leaves values alone,
//!   so `is_consistent` reports `false` afterwards for any key with cased
//!   letters.
//! - Logging goes through `tracing`; the crate never installs a subscriber.

pub mod slot_table;
mod slot_table_proptest;
mod string_association;

// Public surface
pub use slot_table::InsertError;
pub use string_association::{derive_key, StringAssociation};
