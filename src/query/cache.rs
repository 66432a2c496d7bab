use lru::LruCache;
use parking_lot::RwLock;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use crate::concordance::results::ConcordanceResult;

/// Result cache for avoiding recomputation when identical requests recur.
/// Entries are immutable once written and never invalidated.
pub struct ConcordanceCache {
    pub cache: RwLock<LruCache<ConcordanceKey, ConcordanceResult>>,
    pub size_limit: usize,
    pub hit_count: AtomicUsize,
    pub miss_count: AtomicUsize,
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct ConcordanceKey {
    pub text_fingerprint: u64,
    pub query: Vec<String>,
    pub width: usize,
    pub max_lines: usize,
}

/// Stable within-process fingerprint of a source text, so cache keys
/// stay bounded no matter how large the text is.
pub fn fingerprint(text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}

impl ConcordanceCache {
    pub fn new(size_limit: usize) -> Self {
        let cap = NonZeroUsize::new(size_limit.max(1)).unwrap_or(NonZeroUsize::MIN);
        ConcordanceCache {
            cache: RwLock::new(LruCache::new(cap)),
            size_limit,
            hit_count: AtomicUsize::new(0),
            miss_count: AtomicUsize::new(0),
        }
    }

    pub fn get(&self, key: &ConcordanceKey) -> Option<ConcordanceResult> {
        let mut cache = self.cache.write();
        if let Some(result) = cache.get(key) {
            self.hit_count.fetch_add(1, Ordering::Relaxed);
            Some(result.clone())
        } else {
            self.miss_count.fetch_add(1, Ordering::Relaxed);
            None
        }
    }

    pub fn put(&self, key: ConcordanceKey, result: ConcordanceResult) {
        let mut cache = self.cache.write();
        cache.put(key, result);
    }

    pub fn clear(&self) {
        let mut cache = self.cache.write();
        cache.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hit_count: self.hit_count.load(Ordering::Relaxed),
            miss_count: self.miss_count.load(Ordering::Relaxed),
            size: self.cache.read().len(),
            capacity: self.size_limit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CacheStats {
    pub hit_count: usize,
    pub miss_count: usize,
    pub size: usize,
    pub capacity: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hit_count + self.miss_count;
        if total == 0 {
            0.0
        } else {
            self.hit_count as f64 / total as f64
        }
    }
}
