//! In-memory key-value backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{KvStore, StoreError};

/// A `HashMap`-backed store, optionally capped by a byte quota.
///
/// Clones share the same backing map, so a test can keep one handle while
/// the planner owns another. The quota counts the summed byte length of all
/// keys and values, which is enough to exercise capacity handling without
/// modeling a real backend's accounting.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<HashMap<String, String>>>,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    /// Creates an unbounded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that refuses writes once it would hold more than
    /// `quota_bytes` of key and value data.
    #[must_use]
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            records: Arc::default(),
            quota_bytes: Some(quota_bytes),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut records = self.lock();
        if let Some(quota) = self.quota_bytes {
            let occupied: usize = records
                .iter()
                .filter(|(existing, _)| existing.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if occupied + key.len() + value.len() > quota {
                return Err(StoreError::CapacityExceeded {
                    key: key.to_string(),
                });
            }
        }
        records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_remove_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.put("k", "v1").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v1".to_string()));

        store.put("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v2".to_string()));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);

        // removing again is fine
        store.remove("k").unwrap();
    }

    #[test]
    fn test_clones_share_the_backing_map() {
        let store = MemoryStore::new();
        let observer = store.clone();

        store.put("shared", "yes").unwrap();
        assert_eq!(observer.get("shared").unwrap(), Some("yes".to_string()));
    }

    #[test]
    fn test_quota_refuses_oversized_writes() {
        let store = MemoryStore::with_quota(16);
        store.put("a", "12345").unwrap();

        let err = store.put("b", "x".repeat(32).as_str()).unwrap_err();
        match err {
            StoreError::CapacityExceeded { key } => assert_eq!(key, "b"),
            other => panic!("Expected CapacityExceeded, got: {other:?}"),
        }

        // the failed write left existing data intact
        assert_eq!(store.get("a").unwrap(), Some("12345".to_string()));
        assert_eq!(store.get("b").unwrap(), None);
    }

    #[test]
    fn test_quota_allows_replacing_a_large_value() {
        let store = MemoryStore::with_quota(12);
        store.put("k", "0123456789").unwrap();

        // replacement is accounted against the new value, not old plus new
        store.put("k", "abcdefghij").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("abcdefghij".to_string()));
    }
}
