//! In-memory TTL cache
//!
//! Memoizes supplier responses for a bounded time. Keys are SHA-256 digests
//! of (api kind, query, sorted keyword parameters), so the same logical
//! request hits the same entry regardless of parameter order.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use sha2::{Digest, Sha256};

/// Default entry lifetime: 6 hours, matching upstream API quotas.
pub const DEFAULT_TTL: Duration = Duration::from_secs(6 * 60 * 60);

/// Deterministic cache key for a supplier request.
///
/// Parameters are sorted before hashing, so `[("a","1"),("b","2")]` and
/// `[("b","2"),("a","1")]` digest identically.
#[must_use]
pub fn cache_key(kind: &str, query: &str, params: &[(&str, &str)]) -> String {
    let sorted: BTreeMap<&str, &str> = params.iter().copied().collect();
    let mut hasher = Sha256::new();
    hasher.update(kind.as_bytes());
    hasher.update(b":");
    hasher.update(query.as_bytes());
    for (k, v) in sorted {
        hasher.update(b":");
        hasher.update(k.as_bytes());
        hasher.update(b"=");
        hasher.update(v.as_bytes());
    }
    format!("{:x}", hasher.finalize())
}

/// Thread-safe map of digest key to value with a per-cache TTL.
///
/// Expired entries are dropped lazily on read and swept on insert once the
/// map grows past a threshold; there is no background task.
pub struct TtlCache<V> {
    entries: RwLock<HashMap<String, (V, Instant)>>,
    ttl: Duration,
}

const SWEEP_THRESHOLD: usize = 256;

impl<V: Clone> TtlCache<V> {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Fetch a live entry, or `None` when absent or expired.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<V> {
        {
            let entries = self.entries.read();
            match entries.get(key) {
                Some((value, stored)) if stored.elapsed() < self.ttl => {
                    return Some(value.clone());
                }
                Some(_) => {} // expired, fall through to remove
                None => return None,
            }
        }
        self.entries.write().remove(key);
        None
    }

    pub fn insert(&self, key: String, value: V) {
        let mut entries = self.entries.write();
        if entries.len() >= SWEEP_THRESHOLD {
            let ttl = self.ttl;
            entries.retain(|_, (_, stored)| stored.elapsed() < ttl);
        }
        entries.insert(key, (value, Instant::now()));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
