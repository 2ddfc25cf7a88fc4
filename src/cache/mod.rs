//! Bounded paste-summary cache with LRU and TTL eviction
//!
//! Process-local and best-effort: callers must tolerate misses. The cache
//! is an injectable component rather than a hidden singleton so tests get
//! isolated instances. Capacity eviction is O(1) via `lru::LruCache`;
//! age eviction is lazy, performed on the next operation that touches the
//! cache.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::analysis::DeckContextSummary;

/// Capacity and age bounds for the summary cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    pub capacity: usize,
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 500,
            ttl: Duration::from_secs(4 * 60 * 60),
        }
    }
}

struct CacheEntry {
    summary: DeckContextSummary,
    inserted_at: Instant,
}

/// Thread-safe deck-hash → summary cache.
pub struct SummaryCache {
    inner: Mutex<LruCache<String, CacheEntry>>,
    ttl: Duration,
}

impl SummaryCache {
    /// Creates a cache with the given bounds. A zero capacity is clamped
    /// to one entry; `CacheConfig` validation rejects it earlier.
    pub fn new(config: CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.capacity.max(1)).expect("nonzero capacity");
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
            ttl: config.ttl,
        }
    }

    /// Looks up a summary by deck hash.
    ///
    /// A hit refreshes the entry's recency. An entry past its TTL is
    /// evicted here and reported as a miss.
    pub fn get(&self, deck_hash: &str) -> Option<DeckContextSummary> {
        let mut inner = self.inner.lock().expect("cache mutex poisoned");

        let expired = inner
            .peek(deck_hash)
            .is_some_and(|entry| entry.inserted_at.elapsed() > self.ttl);
        if expired {
            inner.pop(deck_hash);
            debug!(deck_hash, "summary cache entry expired");
            return None;
        }

        inner.get(deck_hash).map(|entry| entry.summary.clone())
    }

    /// Inserts a summary, evicting expired entries first and then the
    /// least-recently-used entry if still at capacity.
    pub fn set(&self, deck_hash: impl Into<String>, summary: DeckContextSummary) {
        let deck_hash = deck_hash.into();
        let mut inner = self.inner.lock().expect("cache mutex poisoned");

        let stale: Vec<String> = inner
            .iter()
            .filter(|(_, entry)| entry.inserted_at.elapsed() > self.ttl)
            .map(|(hash, _)| hash.clone())
            .collect();
        for hash in stale {
            inner.pop(&hash);
            debug!(deck_hash = %hash, "summary cache entry expired");
        }

        if inner.len() == inner.cap().get() && !inner.contains(&deck_hash) {
            if let Some((evicted, _)) = inner.pop_lru() {
                debug!(deck_hash = %evicted, "summary cache evicted LRU entry");
            }
        }

        inner.put(
            deck_hash,
            CacheEntry {
                summary,
                inserted_at: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("cache mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Format;

    fn summary(hash: &str) -> DeckContextSummary {
        DeckContextSummary {
            deck_hash: hash.to_string(),
            format: Format::Commander,
            commander: None,
            colors: String::new(),
            land_count: 0,
            curve_histogram: [0; 5],
            ramp: 0,
            removal: 0,
            draw: 0,
            board_wipes: 0,
            archetype_tags: vec![],
            warning_flags: vec![],
            card_names: vec![],
            card_count: 0,
        }
    }

    fn cache(capacity: usize, ttl: Duration) -> SummaryCache {
        SummaryCache::new(CacheConfig { capacity, ttl })
    }

    #[test]
    fn test_get_after_set() {
        let cache = cache(10, Duration::from_secs(60));
        cache.set("h1", summary("h1"));
        assert_eq!(cache.get("h1").unwrap().deck_hash, "h1");
    }

    #[test]
    fn test_miss_is_none() {
        let cache = cache(10, Duration::from_secs(60));
        assert!(cache.get("absent").is_none());
    }

    #[test]
    fn test_capacity_evicts_least_recently_inserted() {
        let cache = cache(3, Duration::from_secs(60));
        cache.set("h1", summary("h1"));
        cache.set("h2", summary("h2"));
        cache.set("h3", summary("h3"));
        cache.set("h4", summary("h4"));

        assert!(cache.get("h1").is_none());
        assert!(cache.get("h4").is_some());
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_get_refreshes_recency() {
        let cache = cache(3, Duration::from_secs(60));
        cache.set("h1", summary("h1"));
        cache.set("h2", summary("h2"));
        cache.set("h3", summary("h3"));

        // Touch h1 so h2 becomes the eviction candidate.
        assert!(cache.get("h1").is_some());
        cache.set("h4", summary("h4"));

        assert!(cache.get("h1").is_some());
        assert!(cache.get("h2").is_none());
    }

    #[test]
    fn test_ttl_expiry_reports_miss() {
        let cache = cache(10, Duration::from_millis(0));
        cache.set("h1", summary("h1"));
        std::thread::sleep(Duration::from_millis(5));
        assert!(cache.get("h1").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_set_sweeps_expired_entries() {
        let cache = cache(10, Duration::from_millis(0));
        cache.set("h1", summary("h1"));
        cache.set("h2", summary("h2"));
        std::thread::sleep(Duration::from_millis(5));

        cache.set("h3", summary("h3"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_overwrite_same_key_does_not_evict_others() {
        let cache = cache(2, Duration::from_secs(60));
        cache.set("h1", summary("h1"));
        cache.set("h2", summary("h2"));
        cache.set("h2", summary("h2"));

        assert!(cache.get("h1").is_some());
        assert!(cache.get("h2").is_some());
    }
}
