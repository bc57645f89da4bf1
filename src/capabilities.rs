//! Narrow views over a store.
//!
//! Code that only writes takes a `Setter`, code that only reads takes a
//! `Getter`, and so on. `KVStore` implements all of them.

use crate::error::Result;

pub trait Setter<K, V> {
    fn set(&self, key: K, value: V);
}

pub trait Getter<K, V> {
    fn get(&self, key: &K) -> Result<V>;
}

pub trait Updater<K, V> {
    fn update(&self, key: K, value: V) -> Result<()>;
}

pub trait Deleter<K, V> {
    /// Returns the removed value.
    fn delete(&self, key: &K) -> Result<V>;
}

pub trait Exister<K> {
    fn exists(&self, key: &K) -> bool;
}

/// Seeds `"foo" -> 1` using nothing but the write capability.
pub fn store_things<S: Setter<String, i64>>(store: &S) {
    store.set("foo".to_string(), 1);
}
