//! Product source contract
//!
//! Implementations adapt vendor APIs into the unified [`Product`] shape.
//! The ranking core only ever sees this trait.

use tracing::debug;

use modista_core::{Gender, Product};

use crate::cache::{cache_key, TtlCache};

/// A supplier of unified product records.
///
/// Implementations own their own transport, rate limiting, and retry
/// policy; callers treat a failed fetch as an empty candidate set rather
/// than an error worth surfacing.
pub trait ProductSource: Send + Sync {
    /// Keyword search, optionally restricted to a gender tag.
    fn search(
        &self,
        query: &str,
        limit: usize,
        gender: Option<Gender>,
    ) -> anyhow::Result<Vec<Product>>;

    /// Fetch by category label.
    fn by_category(
        &self,
        category: &str,
        limit: usize,
        gender: Option<Gender>,
    ) -> anyhow::Result<Vec<Product>>;

    /// Currently popular products, supplier-defined.
    fn trending(&self, limit: usize, gender: Option<Gender>) -> anyhow::Result<Vec<Product>>;
}

/// Wraps any [`ProductSource`] with the in-memory TTL cache.
pub struct CachedSource<S> {
    inner: S,
    cache: TtlCache<Vec<Product>>,
}

impl<S: ProductSource> CachedSource<S> {
    #[must_use]
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: TtlCache::default(),
        }
    }

    #[must_use]
    pub fn with_cache(inner: S, cache: TtlCache<Vec<Product>>) -> Self {
        Self { inner, cache }
    }

    fn cached(
        &self,
        key: String,
        fetch: impl FnOnce() -> anyhow::Result<Vec<Product>>,
    ) -> anyhow::Result<Vec<Product>> {
        if let Some(hit) = self.cache.get(&key) {
            debug!(%key, "supply cache hit");
            return Ok(hit);
        }
        let products = fetch()?;
        self.cache.insert(key, products.clone());
        Ok(products)
    }
}

impl<S: ProductSource> ProductSource for CachedSource<S> {
    fn search(
        &self,
        query: &str,
        limit: usize,
        gender: Option<Gender>,
    ) -> anyhow::Result<Vec<Product>> {
        let limit_s = limit.to_string();
        let gender_s = gender.map(|g| g.to_string()).unwrap_or_default();
        let key = cache_key(
            "search",
            query,
            &[("limit", &limit_s), ("gender", &gender_s)],
        );
        self.cached(key, || self.inner.search(query, limit, gender))
    }

    fn by_category(
        &self,
        category: &str,
        limit: usize,
        gender: Option<Gender>,
    ) -> anyhow::Result<Vec<Product>> {
        let limit_s = limit.to_string();
        let gender_s = gender.map(|g| g.to_string()).unwrap_or_default();
        let key = cache_key(
            "category",
            category,
            &[("limit", &limit_s), ("gender", &gender_s)],
        );
        self.cached(key, || self.inner.by_category(category, limit, gender))
    }

    fn trending(&self, limit: usize, gender: Option<Gender>) -> anyhow::Result<Vec<Product>> {
        let limit_s = limit.to_string();
        let gender_s = gender.map(|g| g.to_string()).unwrap_or_default();
        let key = cache_key(
            "trending",
            "",
            &[("limit", &limit_s), ("gender", &gender_s)],
        );
        self.cached(key, || self.inner.trending(limit, gender))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Source that counts how often it is actually hit.
    struct CountingSource {
        calls: AtomicUsize,
    }

    impl CountingSource {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }

        fn produce(&self) -> anyhow::Result<Vec<Product>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![Product::new("1", "Hoodie", "Streetwear")])
        }
    }

    impl ProductSource for CountingSource {
        fn search(
            &self,
            _query: &str,
            _limit: usize,
            _gender: Option<Gender>,
        ) -> anyhow::Result<Vec<Product>> {
            self.produce()
        }

        fn by_category(
            &self,
            _category: &str,
            _limit: usize,
            _gender: Option<Gender>,
        ) -> anyhow::Result<Vec<Product>> {
            self.produce()
        }

        fn trending(
            &self,
            _limit: usize,
            _gender: Option<Gender>,
        ) -> anyhow::Result<Vec<Product>> {
            self.produce()
        }
    }

    #[test]
    fn test_repeat_search_served_from_cache() {
        let source = CachedSource::new(CountingSource::new());
        let first = source.search("shirt", 20, Some(Gender::Male)).unwrap();
        let second = source.search("shirt", 20, Some(Gender::Male)).unwrap();
        assert_eq!(first.len(), second.len());
        assert_eq!(source.inner.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_different_requests_miss() {
        let source = CachedSource::new(CountingSource::new());
        source.search("shirt", 20, None).unwrap();
        source.search("jacket", 20, None).unwrap();
        source.by_category("shirt", 20, None).unwrap();
        assert_eq!(source.inner.calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_errors_not_cached() {
        struct FailingSource;
        impl ProductSource for FailingSource {
            fn search(&self, _: &str, _: usize, _: Option<Gender>) -> anyhow::Result<Vec<Product>> {
                anyhow::bail!("upstream down")
            }
            fn by_category(
                &self,
                _: &str,
                _: usize,
                _: Option<Gender>,
            ) -> anyhow::Result<Vec<Product>> {
                anyhow::bail!("upstream down")
            }
            fn trending(&self, _: usize, _: Option<Gender>) -> anyhow::Result<Vec<Product>> {
                anyhow::bail!("upstream down")
            }
        }

        let source = CachedSource::new(FailingSource);
        assert!(source.search("shirt", 20, None).is_err());
        assert!(source.cache.is_empty());
    }
}
