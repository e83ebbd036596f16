//! LRU cache for derived image data
//!
//! Memoizes expensive derived representations (encoded thumbnails,
//! pre-scaled tiles) behind a fixed entry budget. Strict least-recently-
//! used eviction keeps hot entries resident while bounding memory; that
//! ordering is a correctness requirement for the callers, not a
//! heuristic.

use std::hash::Hash;
use std::num::NonZeroUsize;

use log::debug;
use lru::LruCache;

use crate::region::PixelRect;

/// Default entry capacity
pub const DEFAULT_CACHE_CAPACITY: usize = 10_000;

/// Cache key for a derived representation of a document region
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ThumbnailKey {
    /// Owning document identity; keeps documents from colliding in a
    /// shared cache
    pub doc_id: String,
    /// Source region the representation was derived from
    pub region: PixelRect,
    /// Scale factor (stored as millionths for stable hashing)
    pub scale_millionths: u32,
}

impl ThumbnailKey {
    #[must_use]
    pub fn new(doc_id: impl Into<String>, region: PixelRect, scale: f32) -> Self {
        Self {
            doc_id: doc_id.into(),
            region,
            scale_millionths: (scale * 1_000_000.0) as u32,
        }
    }
}

/// Encoded thumbnails keyed by document region
pub type ThumbnailCache = RenderCache<ThumbnailKey, String>;

/// Capacity-bounded key/value store with least-recently-used eviction.
///
/// `get` and `insert` promote the touched key; eviction always removes
/// the least-recently-touched entry; inserting over an existing key
/// never evicts. One owned instance per document or process, with all
/// mutation funneled through these methods. Callers clear it when the
/// owning document closes.
pub struct RenderCache<K, V> {
    inner: LruCache<K, V>,
}

impl<K: Hash + Eq, V> RenderCache<K, V> {
    /// Cache with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Cache with the given capacity; zero is clamped to one entry
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: LruCache::new(
                NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::new(1).expect("1 is non-zero")),
            ),
        }
    }

    /// Get a cached value, promoting the key in the LRU order
    #[must_use]
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    /// Check for a key without promoting it
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.inner.contains(key)
    }

    /// Insert a value, promoting the key and evicting the least-recently-
    /// used entry if a new key would exceed capacity
    pub fn insert(&mut self, key: K, value: V) {
        if self.inner.len() == self.capacity() && !self.inner.contains(&key) {
            debug!("cache full: evicting least-recently-used entry");
        }
        self.inner.put(key, value);
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Number of live entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Entry capacity fixed at construction
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.cap().get()
    }
}

impl<K: Hash + Eq, V> Default for RenderCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
