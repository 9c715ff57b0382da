//! Post-scoring result filters
//!
//! Filters are applied strictly after scoring and sorting. Each one is a
//! pure conjunctive predicate over a product, so application order does not
//! change the final subset.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::product::Product;

/// Price bucket labels as used on the wire ("0-1000", "10000+", ...).
///
/// Buckets are half-open on the upper end except the last, which is
/// unbounded: <1000, [1000,2500), [2500,5000), [5000,10000), >=10000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PriceRange {
    #[default]
    All,
    Under1000,
    From1000To2500,
    From2500To5000,
    From5000To10000,
    Over10000,
}

impl PriceRange {
    /// Whether `price` falls inside this bucket. `All` matches everything.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        match self {
            PriceRange::All => true,
            PriceRange::Under1000 => price < 1000.0,
            PriceRange::From1000To2500 => (1000.0..2500.0).contains(&price),
            PriceRange::From2500To5000 => (2500.0..5000.0).contains(&price),
            PriceRange::From5000To10000 => (5000.0..10_000.0).contains(&price),
            PriceRange::Over10000 => price >= 10_000.0,
        }
    }

    #[must_use]
    pub fn as_label(&self) -> &'static str {
        match self {
            PriceRange::All => "all",
            PriceRange::Under1000 => "0-1000",
            PriceRange::From1000To2500 => "1000-2500",
            PriceRange::From2500To5000 => "2500-5000",
            PriceRange::From5000To10000 => "5000-10000",
            PriceRange::Over10000 => "10000+",
        }
    }
}

impl std::str::FromStr for PriceRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" | "" => Ok(PriceRange::All),
            "0-1000" => Ok(PriceRange::Under1000),
            "1000-2500" => Ok(PriceRange::From1000To2500),
            "2500-5000" => Ok(PriceRange::From2500To5000),
            "5000-10000" => Ok(PriceRange::From5000To10000),
            "10000+" => Ok(PriceRange::Over10000),
            other => Err(Error::Validation(format!("unknown price range: {other}"))),
        }
    }
}

impl TryFrom<String> for PriceRange {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Error> {
        s.parse()
    }
}

impl From<PriceRange> for String {
    fn from(r: PriceRange) -> String {
        r.as_label().to_string()
    }
}

/// Active result filters. The string fields use "all" as a no-op sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSet {
    #[serde(default = "all_sentinel")]
    pub category: String,
    #[serde(default)]
    pub price_range: PriceRange,
    #[serde(default = "all_sentinel")]
    pub source: String,
}

fn all_sentinel() -> String {
    "all".to_string()
}

impl Default for FilterSet {
    fn default() -> Self {
        Self {
            category: all_sentinel(),
            price_range: PriceRange::All,
            source: all_sentinel(),
        }
    }
}

impl FilterSet {
    /// True when every filter is the "all" sentinel.
    #[must_use]
    pub fn is_passthrough(&self) -> bool {
        self.category.eq_ignore_ascii_case("all")
            && self.price_range == PriceRange::All
            && self.source.eq_ignore_ascii_case("all")
    }

    /// Whether a single product passes every active filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.eq_ignore_ascii_case("all")
            && !product.category.eq_ignore_ascii_case(&self.category)
        {
            return false;
        }
        if !self.price_range.contains(product.price) {
            return false;
        }
        if !self.source.eq_ignore_ascii_case("all")
            && !product.source.eq_ignore_ascii_case(&self.source)
        {
            return false;
        }
        true
    }

    /// Subset `products` to those passing every active filter, preserving order.
    #[must_use]
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        if self.is_passthrough() {
            return products;
        }
        products.into_iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(category: &str, price: f64, source: &str) -> Product {
        Product::new("p", "t", category)
            .with_price(price)
            .with_source(source)
    }

    #[test]
    fn test_price_range_labels_roundtrip() {
        for label in ["all", "0-1000", "1000-2500", "2500-5000", "5000-10000", "10000+"] {
            let r: PriceRange = label.parse().unwrap();
            assert_eq!(r.as_label(), label);
        }
        assert!("cheap".parse::<PriceRange>().is_err());
    }

    #[test]
    fn test_price_bucket_boundaries() {
        assert!(PriceRange::Under1000.contains(999.99));
        assert!(!PriceRange::Under1000.contains(1000.0));
        assert!(PriceRange::From1000To2500.contains(1000.0));
        assert!(!PriceRange::From1000To2500.contains(2500.0));
        assert!(PriceRange::Over10000.contains(10_000.0));
    }

    #[test]
    fn test_category_filter_case_insensitive() {
        let f = FilterSet {
            category: "casual wear".into(),
            ..Default::default()
        };
        assert!(f.matches(&product("Casual Wear", 10.0, "amazon")));
        assert!(!f.matches(&product("Formal Wear", 10.0, "amazon")));
    }

    #[test]
    fn test_passthrough() {
        let f = FilterSet::default();
        assert!(f.is_passthrough());
        let products = vec![product("a", 1.0, "x"), product("b", 2.0, "y")];
        assert_eq!(f.apply(products).len(), 2);
    }

    #[test]
    fn test_filters_conjunct() {
        let f = FilterSet {
            category: "Casual Wear".into(),
            price_range: PriceRange::From1000To2500,
            source: "amazon".into(),
        };
        assert!(f.matches(&product("Casual Wear", 1500.0, "Amazon")));
        assert!(!f.matches(&product("Casual Wear", 1500.0, "platzi")));
        assert!(!f.matches(&product("Casual Wear", 500.0, "amazon")));
    }

    #[test]
    fn test_apply_idempotent() {
        let f = FilterSet {
            source: "amazon".into(),
            ..Default::default()
        };
        let products = vec![
            product("a", 1.0, "amazon"),
            product("b", 2.0, "platzi"),
            product("c", 3.0, "amazon"),
        ];
        let once = f.apply(products);
        let twice = f.apply(once.clone());
        assert_eq!(once.len(), 2);
        assert_eq!(once.len(), twice.len());
    }
}
