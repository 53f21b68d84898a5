use std::sync::atomic::{AtomicU64, Ordering};

/// Shared creation counters for a set of categories.
///
/// Categories hold an `Arc` to the registry they were built against, so every
/// category built from the same registry sees the same totals. Separate
/// registries never interfere with each other.
#[derive(Debug, Default)]
pub struct CatalogCounters {
    categories: AtomicU64,
    products: AtomicU64,
}

impl CatalogCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of categories constructed since the last reset.
    pub fn category_count(&self) -> u64 {
        self.categories.load(Ordering::SeqCst)
    }

    /// Number of products added (across all categories) since the last reset.
    pub fn product_count(&self) -> u64 {
        self.products.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.categories.store(0, Ordering::SeqCst);
        self.products.store(0, Ordering::SeqCst);
    }

    pub(crate) fn record_category(&self) {
        self.categories.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn record_product(&self) {
        self.products.fetch_add(1, Ordering::SeqCst);
    }
}
