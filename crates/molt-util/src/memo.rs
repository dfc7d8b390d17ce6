//! Memoizing cache keyed by a caller-supplied hashable argument.
//!
//! [`Memo`] wraps a function and caches its results by argument. The
//! key is the argument itself (`K: Hash + Eq`), never a stringified
//! rendering of it, so structurally different arguments cannot collide.
//!
//! For multi-argument functions, use a tuple as `K`.
//!
//! # Example
//!
//! ```
//! use molt_util::memoize;
//!
//! let mut square = memoize(|n: &u64| n * n);
//! assert_eq!(square.call(12), 144);
//! assert_eq!(square.call(12), 144);
//! assert_eq!(square.stats().hits, 1);
//! assert_eq!(square.stats().misses, 1);
//! ```

use indexmap::IndexMap;
use std::hash::Hash;

use crate::config::{ConfigError, MemoConfig};

/// Hit/miss counters for a [`Memo`] cache.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Calls answered from the cache.
    pub hits: u64,
    /// Calls that ran the wrapped function.
    pub misses: u64,
    /// Entries dropped to respect [`MemoConfig::capacity`].
    pub evictions: u64,
}

impl MemoStats {
    /// Fraction of calls answered from the cache, or 0.0 before any call.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// A function wrapped with a result cache.
///
/// The cache belongs to this instance and lives until the `Memo` is
/// dropped or [`clear`](Self::clear)ed. Calls take `&mut self`; wrap the
/// `Memo` in a lock to share it between threads.
pub struct Memo<K, V, F> {
    func: F,
    cache: IndexMap<K, V>,
    config: MemoConfig,
    stats: MemoStats,
}

/// Wrap `func` in an unbounded [`Memo`].
pub fn memoize<K, V, F>(func: F) -> Memo<K, V, F>
where
    K: Hash + Eq,
{
    Memo {
        func,
        cache: IndexMap::new(),
        config: MemoConfig::default(),
        stats: MemoStats::default(),
    }
}

impl<K, V, F> Memo<K, V, F>
where
    K: Hash + Eq,
{
    /// Wrap `func` with an explicit configuration.
    pub fn with_config(func: F, config: MemoConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..memoize(func)
        })
    }

    /// The cached argument→result mapping, oldest entry first.
    pub fn cache(&self) -> &IndexMap<K, V> {
        &self.cache
    }

    /// Hit/miss counters since construction.
    pub fn stats(&self) -> MemoStats {
        self.stats
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drop every cached result. Counters are kept.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Drop one cached result, returning it if present.
    pub fn forget(&mut self, key: &K) -> Option<V> {
        self.cache.shift_remove(key)
    }

    fn lookup(&mut self, key: &K) -> Option<&V> {
        let found = self.cache.get(key);
        if found.is_some() {
            self.stats.hits += 1;
        }
        found
    }

    fn store(&mut self, key: K, value: V) {
        self.stats.misses += 1;
        if let Some(capacity) = self.config.capacity {
            while self.cache.len() >= capacity {
                self.cache.shift_remove_index(0);
                self.stats.evictions += 1;
            }
        }
        self.cache.insert(key, value);
    }
}

impl<K, V, F> Memo<K, V, F>
where
    K: Hash + Eq,
    V: Clone,
    F: FnMut(&K) -> V,
{
    /// Return the cached result for `key`, computing it on first use.
    pub fn call(&mut self, key: K) -> V {
        if let Some(hit) = self.lookup(&key) {
            return hit.clone();
        }
        let value = (self.func)(&key);
        self.store(key, value.clone());
        value
    }
}

impl<K, V, E, F> Memo<K, V, F>
where
    K: Hash + Eq,
    V: Clone,
    F: FnMut(&K) -> Result<V, E>,
{
    /// Fallible variant of [`call`](Memo::call).
    ///
    /// Errors are returned to the caller and never cached, so the next
    /// call with the same key runs the function again.
    pub fn try_call(&mut self, key: K) -> Result<V, E> {
        if let Some(hit) = self.lookup(&key) {
            return Ok(hit.clone());
        }
        let value = (self.func)(&key)?;
        self.store(key, value.clone());
        Ok(value)
    }
}

impl<K, V, F> std::fmt::Debug for Memo<K, V, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memo")
            .field("cached", &self.cache.len())
            .field("config", &self.config)
            .field("stats", &self.stats)
            .finish()
    }
}
