//! Load-once cache for deferred feature modules.
//!
//! Gated behind the `cache` feature and backed by [`lru::LruCache`]. The
//! router stores each successfully loaded [`FeatureModule`] under its route
//! path, so a deferred route is fetched on first navigation only and every
//! later navigation is served from memory.
//!
//! The cache also tracks which paths have a load in flight, so a second
//! navigation to a path that is still loading does not start another fetch.
//!
//! # Examples
//!
//! ```
//! use gpui_lazy_router::cache::ModuleCache;
//! use gpui_lazy_router::FeatureModule;
//!
//! let mut cache = ModuleCache::new();
//! assert!(cache.get("orders").is_none());
//!
//! cache.insert("orders", FeatureModule::new("orders"));
//! assert_eq!(cache.get("orders").unwrap().name(), "orders");
//! assert_eq!(cache.stats().hits, 1);
//! assert_eq!(cache.stats().misses, 1);
//! ```

use crate::module::FeatureModule;
use crate::{debug_log, trace_log};
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Counters for cache effectiveness.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Lookups served from the cache.
    pub hits: usize,
    /// Lookups that found nothing.
    pub misses: usize,
    /// Modules stored after a successful load.
    pub loads: usize,
    /// Loads that finished with an error.
    pub failures: usize,
    /// Full invalidations (via [`ModuleCache::clear`]).
    pub invalidations: usize,
}

impl CacheStats {
    /// Hit rate in `0.0..=1.0`; `0.0` when nothing was looked up yet.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache of loaded feature modules keyed by normalised route path.
#[derive(Debug)]
pub struct ModuleCache {
    modules: LruCache<String, Arc<FeatureModule>>,
    in_flight: HashSet<String>,
    stats: CacheStats,
}

impl ModuleCache {
    const DEFAULT_CAPACITY: usize = 64;

    /// Create a cache with the default capacity (64 modules).
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a cache holding at most `capacity` modules.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            modules: LruCache::new(cap),
            in_flight: HashSet::new(),
            stats: CacheStats::default(),
        }
    }

    /// Look up the module loaded for `path`.
    pub fn get(&mut self, path: &str) -> Option<Arc<FeatureModule>> {
        if let Some(module) = self.modules.get(path) {
            self.stats.hits += 1;
            trace_log!("Module cache hit for '{}'", path);
            Some(Arc::clone(module))
        } else {
            self.stats.misses += 1;
            trace_log!("Module cache miss for '{}'", path);
            None
        }
    }

    /// Whether `path` has a cached module, without touching stats or LRU order.
    pub fn contains(&self, path: &str) -> bool {
        self.modules.contains(path)
    }

    /// Store a loaded module and clear the path's in-flight mark.
    pub fn insert(&mut self, path: impl Into<String>, module: FeatureModule) -> Arc<FeatureModule> {
        let path = path.into();
        let module = Arc::new(module);
        self.in_flight.remove(&path);
        self.stats.loads += 1;
        debug_log!("Caching module '{}' for path '{}'", module.name(), path);
        if let Some((evicted, _)) = self.modules.push(path.clone(), Arc::clone(&module)) {
            if evicted != path {
                debug_log!("Evicted module for path '{}'", evicted);
            }
        }
        module
    }

    /// Mark a load for `path` as started.
    ///
    /// Returns `false` if a load for that path is already running.
    pub fn begin_load(&mut self, path: &str) -> bool {
        self.in_flight.insert(path.to_string())
    }

    /// Whether a load for `path` is running.
    pub fn is_loading(&self, path: &str) -> bool {
        self.in_flight.contains(path)
    }

    /// Record a failed load; the path can be loaded again on next navigation.
    pub fn fail_load(&mut self, path: &str) {
        self.in_flight.remove(path);
        self.stats.failures += 1;
    }

    /// Drop every cached module. In-flight marks are kept so running loads
    /// still complete into the fresh cache.
    pub fn clear(&mut self) {
        let len = self.modules.len();
        self.modules.clear();
        self.stats.invalidations += 1;
        debug_log!(
            "Module cache cleared: {} entries removed ({} total invalidations, hit rate: {:.1}%)",
            len,
            self.stats.invalidations,
            self.stats.hit_rate() * 100.0
        );
    }

    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Reset all counters to zero.
    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl Default for ModuleCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ModuleCache {
    fn clone(&self) -> Self {
        let mut modules = LruCache::new(self.modules.cap());
        // Oldest first so the clone keeps the same recency order.
        for (path, module) in self.modules.iter().rev() {
            modules.put(path.clone(), Arc::clone(module));
        }
        Self {
            modules,
            in_flight: self.in_flight.clone(),
            stats: self.stats.clone(),
        }
    }
}
