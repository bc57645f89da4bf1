use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::capabilities::{Deleter, Exister, Getter, Setter, Updater};
use crate::error::{KVError, Result};

/// Thread-safe in-memory map. Cloning hands out another handle to the same data.
pub struct KVStore<K, V> {
    inner: Arc<RwLock<HashMap<K, V>>>,
}

impl<K, V> Clone for KVStore<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: Eq + Hash, V> Default for KVStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// Helpers below take the map out of a guard the caller already holds.
fn contains<K: Eq + Hash, V>(data: &HashMap<K, V>, key: &K) -> bool {
    data.contains_key(key)
}

impl<K: Eq + Hash, V> KVStore<K, V> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    // A panic under the lock can't leave the map half-written, so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<K, V>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<K, V>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set(&self, key: K, value: V) {
        let mut store = self.write();
        store.insert(key, value);
    }

    pub fn get(&self, key: &K) -> Result<V>
    where
        V: Clone,
    {
        let store = self.read();
        store.get(key).cloned().ok_or(KVError::NotFound)
    }

    pub fn exists(&self, key: &K) -> bool {
        let store = self.read();
        contains(&*store, key)
    }

    /// Overwrites an existing key. The check and the write share one write lock.
    pub fn update(&self, key: K, value: V) -> Result<()> {
        let mut store = self.write();
        if !contains(&*store, &key) {
            return Err(KVError::NotFound);
        }
        store.insert(key, value);
        Ok(())
    }

    pub fn delete(&self, key: &K) -> Result<V> {
        let mut store = self.write();
        store.remove(key).ok_or(KVError::NotFound)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl<K: Eq + Hash, V> Setter<K, V> for KVStore<K, V> {
    fn set(&self, key: K, value: V) {
        KVStore::set(self, key, value)
    }
}

impl<K: Eq + Hash, V: Clone> Getter<K, V> for KVStore<K, V> {
    fn get(&self, key: &K) -> Result<V> {
        KVStore::get(self, key)
    }
}

impl<K: Eq + Hash, V> Updater<K, V> for KVStore<K, V> {
    fn update(&self, key: K, value: V) -> Result<()> {
        KVStore::update(self, key, value)
    }
}

impl<K: Eq + Hash, V> Deleter<K, V> for KVStore<K, V> {
    fn delete(&self, key: &K) -> Result<V> {
        KVStore::delete(self, key)
    }
}

impl<K: Eq + Hash, V> Exister<K> for KVStore<K, V> {
    fn exists(&self, key: &K) -> bool {
        KVStore::exists(self, key)
    }
}
