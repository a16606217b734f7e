//! Bounded LRU cache with per-entry TTL (spec §4.3), shared by
//! `SecretsClient`/`ConfigClient` to avoid per-call cloud fetches.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

struct Entry<V> {
    value: V,
    inserted_at: Instant,
    ttl: Duration,
    /// Monotonically increasing "clock" stamp, bumped on every access.
    /// The lowest stamp among live entries is the eviction candidate.
    last_used: u64,
}

impl<V> Entry<V> {
    fn expired(&self) -> bool {
        self.inserted_at.elapsed() >= self.ttl
    }
}

struct State<V> {
    entries: HashMap<String, Entry<V>>,
    clock: u64,
}

/// Shared, concurrency-safe LRU+TTL cache.
///
/// Capacity is never exceeded: inserting into a full cache evicts the least
/// recently used entry first. Expired entries are treated as absent and
/// purged lazily on access. Concurrent `get`/`put` never corrupt state;
/// a race between a stale read and a concurrent update resolves
/// last-writer-wins.
pub struct LruTtlCache<V> {
    capacity: usize,
    default_ttl: Duration,
    state: Mutex<State<V>>,
}

impl<V: Clone> LruTtlCache<V> {
    pub fn new(capacity: usize, default_ttl: Duration) -> Self {
        Self {
            capacity,
            default_ttl,
            state: Mutex::new(State {
                entries: HashMap::new(),
                clock: 0,
            }),
        }
    }

    /// `(hit, value)` — `hit` is false for a miss or an expired entry, which
    /// is purged as a side effect.
    pub async fn get(&self, key: &str) -> (bool, Option<V>) {
        let mut state = self.state.lock().await;
        state.clock += 1;
        let clock = state.clock;
        let Some(entry) = state.entries.get_mut(key) else {
            return (false, None);
        };
        if entry.expired() {
            state.entries.remove(key);
            return (false, None);
        }
        entry.last_used = clock;
        (true, Some(entry.value.clone()))
    }

    pub async fn put(&self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let mut state = self.state.lock().await;
        state.clock += 1;
        let clock = state.clock;
        let key = key.into();

        if !state.entries.contains_key(&key) && state.entries.len() >= self.capacity {
            if let Some(lru_key) = state
                .entries
                .iter()
                .min_by_key(|(_, e)| e.last_used)
                .map(|(k, _)| k.clone())
            {
                state.entries.remove(&lru_key);
            }
        }

        state.entries.insert(
            key,
            Entry {
                value,
                inserted_at: Instant::now(),
                ttl: ttl.unwrap_or(self.default_ttl),
                last_used: clock,
            },
        );
    }

    pub async fn invalidate(&self, key: &str) {
        let mut state = self.state.lock().await;
        state.entries.remove(key);
    }

    pub async fn clear(&self) {
        let mut state = self.state.lock().await;
        state.entries.clear();
    }
}

impl<V> Default for LruTtlCache<V>
where
    V: Clone,
{
    fn default() -> Self {
        Self::new(500, Duration::from_secs(5 * 60))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn miss_then_hit() {
        let cache: LruTtlCache<String> = LruTtlCache::new(10, Duration::from_secs(60));
        let (hit, _) = cache.get("k").await;
        assert!(!hit);
        cache.put("k", "v".to_string(), None).await;
        let (hit, value) = cache.get("k").await;
        assert!(hit);
        assert_eq!(value.unwrap(), "v");
    }

    #[tokio::test]
    async fn capacity_evicts_least_recently_used() {
        let cache: LruTtlCache<i32> = LruTtlCache::new(2, Duration::from_secs(60));
        cache.put("a", 1, None).await;
        cache.put("b", 2, None).await;
        // touch "a" so "b" becomes the LRU entry
        let _ = cache.get("a").await;
        cache.put("c", 3, None).await;

        let (hit_a, _) = cache.get("a").await;
        let (hit_b, _) = cache.get("b").await;
        let (hit_c, _) = cache.get("c").await;
        assert!(hit_a);
        assert!(!hit_b, "b should have been evicted as the LRU entry");
        assert!(hit_c);
    }

    #[tokio::test]
    async fn expired_entries_are_treated_as_absent() {
        let cache: LruTtlCache<i32> = LruTtlCache::new(10, Duration::from_millis(10));
        cache.put("k", 1, Some(Duration::from_millis(1))).await;
        tokio::time::sleep(Duration::from_millis(20)).await;
        let (hit, _) = cache.get("k").await;
        assert!(!hit);
    }

    #[tokio::test]
    async fn invalidate_and_clear() {
        let cache: LruTtlCache<i32> = LruTtlCache::new(10, Duration::from_secs(60));
        cache.put("a", 1, None).await;
        cache.put("b", 2, None).await;
        cache.invalidate("a").await;
        assert!(!cache.get("a").await.0);
        assert!(cache.get("b").await.0);
        cache.clear().await;
        assert!(!cache.get("b").await.0);
    }
}
