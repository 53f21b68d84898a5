//! Catalog context: the shared counters plus the optional creation hook.

use std::sync::Arc;

use storefront_core::DomainResult;

use crate::category::Category;
use crate::counters::CatalogCounters;
use crate::product::{CreationHookFn, NewProduct, Product};

/// Hook that emits one `info` event per constructed product.
pub fn tracing_hook() -> CreationHookFn {
    Arc::new(|product: &Product| {
        tracing::info!(
            kind = %product.variant_kind(),
            signature = %product.signature(),
            "product created"
        );
    })
}

/// Entry point wiring products and categories to one counter registry.
#[derive(Clone, Default)]
pub struct Catalog {
    counters: Arc<CatalogCounters>,
    on_create: Option<CreationHookFn>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `hook` for every product built through this catalog.
    pub fn with_creation_hook(mut self, hook: CreationHookFn) -> Self {
        self.on_create = Some(hook);
        self
    }

    pub fn counters(&self) -> &Arc<CatalogCounters> {
        &self.counters
    }

    pub fn product(&self, new: NewProduct) -> DomainResult<Product> {
        Product::create(new, self.on_create.as_ref())
    }

    pub fn category(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        products: impl IntoIterator<Item = Product>,
    ) -> Category {
        Category::new(name, description, products, self.counters.clone())
    }
}

impl core::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Catalog")
            .field("counters", &self.counters)
            .field("on_create", &self.on_create.is_some())
            .finish()
    }
}
