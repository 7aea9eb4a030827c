//! Item Cache
//!
//! A map from id to item behind one reader/writer lock for the whole map.
//! Entries are small clones and every critical section is a single map
//! operation, so the lock is never held across a store call.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::models::Item;

// == Item Cache ==
/// Shared id -> item mirror.
///
/// No invalidation crosses process boundaries; an entry may be stale if
/// another process changed the row since it was cached.
#[derive(Debug, Default)]
pub struct ItemCache {
    entries: RwLock<HashMap<i64, Item>>,
}

impl ItemCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    // == Get ==
    /// Returns a copy of the cached item, taking only the read lock.
    pub async fn get(&self, id: i64) -> Option<Item> {
        self.entries.read().await.get(&id).cloned()
    }

    // == Put ==
    /// Inserts or overwrites the entry keyed by `item.id`.
    pub async fn put(&self, item: Item) {
        self.entries.write().await.insert(item.id, item);
    }

    // == Delete ==
    /// Removes `id`; returns whether an entry was present.
    pub async fn delete(&self, id: i64) -> bool {
        self.entries.write().await.remove(&id).is_some()
    }

    /// Number of cached entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if nothing is cached.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_cache_new() {
        let cache = ItemCache::new();
        assert_eq!(cache.len().await, 0);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let cache = ItemCache::new();

        cache.put(Item::new(1, "one")).await;

        assert_eq!(cache.get(1).await, Some(Item::new(1, "one")));
        assert_eq!(cache.get(2).await, None);
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let cache = ItemCache::new();

        cache.put(Item::new(1, "old")).await;
        cache.put(Item::new(1, "new")).await;

        assert_eq!(cache.get(1).await.unwrap().title, "new");
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let cache = ItemCache::new();
        cache.put(Item::new(5, "five")).await;

        assert!(cache.delete(5).await);
        assert!(cache.get(5).await.is_none());
        assert!(!cache.delete(5).await, "second delete is a no-op");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_same_id_hammering() {
        let cache = Arc::new(ItemCache::new());
        let mut handles = Vec::new();

        for task in 0..16 {
            let cache = Arc::clone(&cache);
            handles.push(tokio::spawn(async move {
                for round in 0..200 {
                    match (task + round) % 3 {
                        0 => cache.put(Item::new(1, format!("t{}-r{}", task, round))).await,
                        1 => {
                            if let Some(item) = cache.get(1).await {
                                assert_eq!(item.id, 1);
                            }
                        }
                        _ => {
                            cache.delete(1).await;
                        }
                    }
                }
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert!(cache.len().await <= 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_distinct_ids_no_lost_entries() {
        let cache = Arc::new(ItemCache::new());
        let mut handles = Vec::new();

        for task in 0..8i64 {
            let cache = Arc::clone(&cache);
            handles.push(tokio::spawn(async move {
                for n in 0..100i64 {
                    let id = task * 1000 + n;
                    cache.put(Item::new(id, id.to_string())).await;
                }
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(cache.len().await, 800);
        assert_eq!(cache.get(7099).await, Some(Item::new(7099, "7099")));
    }
}
