//! Shared tie-handling and ordering helpers for the aggregators.
//!
//! Nothing here breaks ties: every key that reaches an extreme is kept.

use coordinate_catalog::{BrandName, Category, Price};

/// One brand at one price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandPrice {
    pub brand: BrandName,
    pub price: Price,
}

/// One category at one price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPrice {
    pub category: Category,
    pub price: Price,
}

/// One-pass minimum/maximum tracker that remembers every key at each extreme.
#[derive(Debug, Clone)]
pub struct Extremes<K, V> {
    min: V,
    max: V,
    at_min: Vec<K>,
    at_max: Vec<K>,
}

impl<K: Clone, V: Ord + Copy> Extremes<K, V> {
    /// Start tracking from a first observation.
    pub fn start(key: K, value: V) -> Self {
        Self {
            min: value,
            max: value,
            at_min: vec![key.clone()],
            at_max: vec![key],
        }
    }

    /// Scan a sequence; `None` when it is empty.
    pub fn scan(items: impl IntoIterator<Item = (K, V)>) -> Option<Self> {
        let mut iter = items.into_iter();
        let (key, value) = iter.next()?;
        let mut extremes = Self::start(key, value);
        for (key, value) in iter {
            extremes.observe(key, value);
        }
        Some(extremes)
    }

    pub fn observe(&mut self, key: K, value: V) {
        if value < self.min {
            self.min = value;
            self.at_min.clear();
            self.at_min.push(key.clone());
        } else if value == self.min {
            self.at_min.push(key.clone());
        }

        if value > self.max {
            self.max = value;
            self.at_max.clear();
            self.at_max.push(key);
        } else if value == self.max {
            self.at_max.push(key);
        }
    }

    pub fn min(&self) -> V {
        self.min
    }

    pub fn max(&self) -> V {
        self.max
    }

    pub fn at_min(&self) -> &[K] {
        &self.at_min
    }

    pub fn at_max(&self) -> &[K] {
        &self.at_max
    }

    /// Consume the tracker, keeping only the keys at the minimum.
    pub fn into_min(self) -> (V, Vec<K>) {
        (self.min, self.at_min)
    }
}

/// Sort by brand name ascending and drop repeated entries for the same brand.
///
/// A brand listing two products at the same extreme price is reported once.
pub fn sort_by_brand(mut prices: Vec<BrandPrice>) -> Vec<BrandPrice> {
    prices.sort_by(|a, b| a.brand.cmp(&b.brand).then(a.price.cmp(&b.price)));
    prices.dedup_by(|a, b| a.brand == b.brand);
    prices
}

/// Sort by category name ascending (`ACCESSORY`, `BAG`, ..., `TOP`).
pub fn sort_by_category_name(prices: &mut [CategoryPrice]) {
    prices.sort_by_key(|p| p.category.as_str());
}

/// Collapse a requested category list into distinct entries, first occurrence wins.
pub fn distinct_categories(categories: &[Category]) -> Vec<Category> {
    let mut seen = Vec::with_capacity(categories.len());
    for category in categories {
        if !seen.contains(category) {
            seen.push(*category);
        }
    }
    seen
}

/// Comma-joined category names, used in error messages.
pub fn category_list(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
