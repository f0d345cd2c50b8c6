//! Insert-or-update helpers for hash maps.
//!
//! All traits are implemented for [`HashMap`] with any hasher, so they work
//! with `FxHashMap` as well as the standard map.

use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

/// Get-or-insert and update-or-insert operations.
pub trait MapExt<K, V> {
    /// Value at `key`, inserting `value` first if the key is absent.
    fn get_or_add(&mut self, key: K, value: V) -> &mut V;

    /// Value at `key`, inserting `factory()` first if the key is absent.
    ///
    /// The factory only runs when the key is absent.
    fn get_or_add_with<F>(&mut self, key: K, factory: F) -> &mut V
    where
        F: FnOnce() -> V;

    /// Update the value at `key` in place with `transform`, or insert `value`
    /// untransformed if the key is absent.
    fn update_or_add<T>(&mut self, key: K, transform: T, value: V) -> &mut V
    where
        T: FnOnce(&mut V);

    /// Like [`update_or_add`](MapExt::update_or_add), creating the new value
    /// lazily.
    fn update_or_add_with<T, F>(&mut self, key: K, transform: T, factory: F) -> &mut V
    where
        T: FnOnce(&mut V),
        F: FnOnce() -> V;
}

impl<K, V, S> MapExt<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn get_or_add(&mut self, key: K, value: V) -> &mut V {
        self.entry(key).or_insert(value)
    }

    fn get_or_add_with<F>(&mut self, key: K, factory: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        self.entry(key).or_insert_with(factory)
    }

    fn update_or_add<T>(&mut self, key: K, transform: T, value: V) -> &mut V
    where
        T: FnOnce(&mut V),
    {
        self.entry(key).and_modify(transform).or_insert(value)
    }

    fn update_or_add_with<T, F>(&mut self, key: K, transform: T, factory: F) -> &mut V
    where
        T: FnOnce(&mut V),
        F: FnOnce() -> V,
    {
        self.entry(key).and_modify(transform).or_insert_with(factory)
    }
}

/// Append to per-key lists.
pub trait ListMapExt<K, V> {
    /// Push `value` onto the list at `key`, creating the list if needed.
    fn add_to(&mut self, key: K, value: V);
}

impl<K, V, S> ListMapExt<K, V> for HashMap<K, Vec<V>, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn add_to(&mut self, key: K, value: V) {
        self.entry(key).or_default().push(value);
    }
}

/// Insert into per-key sets.
pub trait SetMapExt<K, V> {
    /// Insert `value` into the set at `key`, creating the set if needed.
    ///
    /// Returns `true` if the value was not already present.
    fn add_to_set(&mut self, key: K, value: V) -> bool;
}

impl<K, V, S> SetMapExt<K, V> for HashMap<K, HashSet<V>, S>
where
    K: Eq + Hash,
    V: Eq + Hash,
    S: BuildHasher,
{
    fn add_to_set(&mut self, key: K, value: V) -> bool {
        self.entry(key).or_default().insert(value)
    }
}

/// Counting helpers for maps of signed counters.
///
/// An absent key counts as zero, so incrementing it stores the step itself.
pub trait CounterExt<K> {
    /// Add one to the counter at `key` and return the new count.
    fn increment(&mut self, key: K) -> i64 {
        self.increment_by(key, 1)
    }

    /// Add `step` to the counter at `key` and return the new count.
    fn increment_by(&mut self, key: K, step: i64) -> i64;

    /// Add one to the counter of every key, once per occurrence.
    fn increment_all<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
    {
        self.increment_all_by(keys, 1);
    }

    /// Add `step` to the counter of every key, once per occurrence.
    fn increment_all_by<I>(&mut self, keys: I, step: i64)
    where
        I: IntoIterator<Item = K>,
    {
        for key in keys {
            self.increment_by(key, step);
        }
    }

    /// Add each paired step to the counter of its key.
    fn increment_pairs<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, i64)>,
    {
        for (key, step) in pairs {
            self.increment_by(key, step);
        }
    }
}

impl<K, S> CounterExt<K> for HashMap<K, i64, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn increment_by(&mut self, key: K, step: i64) -> i64 {
        let count = self.entry(key).or_insert(0);
        *count += step;
        *count
    }
}
