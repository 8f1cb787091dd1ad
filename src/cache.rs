// TTL cache for availability lookups, layered over any catalog. Sits
// between the search front-end and the supplier-facing fetch so repeated
// searches for the same stay window do not hammer the backend.

use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::catalog::{CatalogError, RoomTypeCatalog};
use crate::model::{HotelAvailability, StayWindow};

#[derive(Debug, Default)]
struct CacheStats {
    items_count: AtomicUsize,
    hit_count: AtomicUsize,
    miss_count: AtomicUsize,
    expired_count: AtomicUsize,
    eviction_count: AtomicUsize,
}

// Snapshot of the cache counters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CacheStatsReport {
    pub items_count: usize,
    pub hit_count: usize,
    pub miss_count: usize,
    pub expired_count: usize,
    pub eviction_count: usize,
}

#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub default_ttl_seconds: u64,
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl_seconds: 300,
            max_entries: 1024,
        }
    }
}

struct CacheEntry {
    hotels: Vec<HotelAvailability>,
    created_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.ttl
    }
}

fn cache_key(stay: &StayWindow) -> String {
    format!("{}:{}", stay.check_in, stay.nights)
}

// Caching decorator around a catalog. Successful fetches are stored per
// stay window; errors are never cached.
pub struct CachedCatalog<C> {
    inner: C,
    entries: DashMap<String, CacheEntry>,
    config: Mutex<CacheConfig>,
    stats: CacheStats,
}

impl<C: RoomTypeCatalog> CachedCatalog<C> {
    pub fn new(inner: C, config: CacheConfig) -> Self {
        Self {
            inner,
            entries: DashMap::new(),
            config: Mutex::new(config),
            stats: CacheStats::default(),
        }
    }

    pub fn stats(&self) -> CacheStatsReport {
        CacheStatsReport {
            items_count: self.stats.items_count.load(Ordering::SeqCst),
            hit_count: self.stats.hit_count.load(Ordering::SeqCst),
            miss_count: self.stats.miss_count.load(Ordering::SeqCst),
            expired_count: self.stats.expired_count.load(Ordering::SeqCst),
            eviction_count: self.stats.eviction_count.load(Ordering::SeqCst),
        }
    }

    pub fn set_default_ttl(&self, ttl: Duration) {
        self.config.lock().default_ttl_seconds = ttl.as_secs();
    }

    pub fn invalidate_all(&self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.stats.items_count.store(0, Ordering::SeqCst);
        self.stats.eviction_count.fetch_add(count, Ordering::SeqCst);
        count
    }

    fn lookup(&self, key: &str) -> Option<Vec<HotelAvailability>> {
        let expired = match self.entries.get(key) {
            Some(entry) if entry.is_expired() => true,
            Some(entry) => {
                self.stats.hit_count.fetch_add(1, Ordering::SeqCst);
                return Some(entry.hotels.clone());
            }
            None => false,
        };

        if expired {
            self.entries.remove(key);
            self.stats.items_count.fetch_sub(1, Ordering::SeqCst);
            self.stats.expired_count.fetch_add(1, Ordering::SeqCst);
        }
        self.stats.miss_count.fetch_add(1, Ordering::SeqCst);
        None
    }

    fn store(&self, key: String, hotels: Vec<HotelAvailability>) {
        let (ttl, max_entries) = {
            let config = self.config.lock();
            (
                Duration::from_secs(config.default_ttl_seconds),
                config.max_entries,
            )
        };

        if self.entries.len() >= max_entries {
            self.evict_oldest();
        }

        let inserted_new = self
            .entries
            .insert(
                key,
                CacheEntry {
                    hotels,
                    created_at: Instant::now(),
                    ttl,
                },
            )
            .is_none();
        if inserted_new {
            self.stats.items_count.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn evict_oldest(&self) {
        let oldest_key = self
            .entries
            .iter()
            .min_by_key(|entry| entry.value().created_at)
            .map(|entry| entry.key().clone());

        if let Some(key) = oldest_key {
            if self.entries.remove(&key).is_some() {
                self.stats.items_count.fetch_sub(1, Ordering::SeqCst);
                self.stats.eviction_count.fetch_add(1, Ordering::SeqCst);
            }
        }
    }
}

#[async_trait]
impl<C: RoomTypeCatalog> RoomTypeCatalog for CachedCatalog<C> {
    async fn fetch_availability(
        &self,
        stay: &StayWindow,
    ) -> Result<Vec<HotelAvailability>, CatalogError> {
        let key = cache_key(stay);

        if let Some(hotels) = self.lookup(&key) {
            debug!(%key, hotels = hotels.len(), "availability cache hit");
            return Ok(hotels);
        }

        debug!(%key, "availability cache miss");
        let hotels = self.inner.fetch_availability(stay).await?;
        self.store(key, hotels.clone());
        Ok(hotels)
    }
}
