//! Per-record mutual exclusion for the mutating operations.
//!
//! Each key (event id / player id) maps to its own `tokio::sync::Mutex<()>`.
//! Entries are dropped once nobody holds or waits on them.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex};

use tokio::sync::OwnedMutexGuard;

pub struct KeyedLocks<K> {
    locks: Mutex<HashMap<K, Arc<tokio::sync::Mutex<()>>>>,
}

impl<K: Eq + Hash + Clone + Ord> KeyedLocks<K> {
    pub fn new() -> Self {
        Self {
            locks: Mutex::new(HashMap::new()),
        }
    }

    fn slot(&self, key: &K) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
        // Forget slots only referenced by the map itself.
        locks.retain(|_, slot| Arc::strong_count(slot) > 1);
        Arc::clone(locks.entry(key.clone()).or_default())
    }

    pub async fn lock(&self, key: &K) -> OwnedMutexGuard<()> {
        self.slot(key).lock_owned().await
    }

    /// Lock several keys in ascending order (duplicates locked once), so two
    /// callers with overlapping sets cannot deadlock.
    pub async fn lock_all(&self, keys: &[K]) -> Vec<OwnedMutexGuard<()>> {
        let mut keys = keys.to_vec();
        keys.sort();
        keys.dedup();
        let mut guards = Vec::with_capacity(keys.len());
        for key in &keys {
            guards.push(self.lock(key).await);
        }
        guards
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.locks.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl<K: Eq + Hash + Clone + Ord> Default for KeyedLocks<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn same_key_is_exclusive() {
        let locks = Arc::new(KeyedLocks::<u32>::new());
        let guard = locks.lock(&1).await;

        let contender = tokio::spawn({
            let locks = Arc::clone(&locks);
            async move {
                let _g = locks.lock(&1).await;
            }
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!contender.is_finished());

        drop(guard);
        tokio::time::timeout(Duration::from_secs(1), contender)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn different_keys_do_not_block() {
        let locks = KeyedLocks::<u32>::new();
        let _a = locks.lock(&1).await;
        let b = tokio::time::timeout(Duration::from_millis(100), locks.lock(&2)).await;
        assert!(b.is_ok());
    }

    #[tokio::test]
    async fn lock_all_dedups_keys() {
        let locks = KeyedLocks::<u32>::new();
        let guards = tokio::time::timeout(Duration::from_millis(100), locks.lock_all(&[3, 1, 3]))
            .await
            .unwrap();
        assert_eq!(guards.len(), 2);
    }

    #[tokio::test]
    async fn released_slots_are_forgotten() {
        let locks = KeyedLocks::<u32>::new();
        drop(locks.lock(&1).await);
        drop(locks.lock(&2).await);
        let _g = locks.lock(&3).await;
        assert_eq!(locks.len(), 1);
    }
}
