use std::sync::Arc;

use storefront_core::DomainResult;

use crate::counters::CatalogCounters;
use crate::product::Product;

/// An owning, append-only collection of products.
#[derive(Debug)]
pub struct Category {
    name: String,
    description: String,
    products: Vec<Product>,
    counters: Arc<CatalogCounters>,
}

impl Category {
    /// Build a category and add `products` one by one, in order.
    ///
    /// Counts as exactly one category regardless of how many products are
    /// supplied; each product counts once, as with [`Category::add_product`].
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        products: impl IntoIterator<Item = Product>,
        counters: Arc<CatalogCounters>,
    ) -> Self {
        let mut category = Self {
            name: name.into(),
            description: description.into(),
            products: Vec::new(),
            counters,
        };

        for product in products {
            category.add_product(product);
        }
        category.counters.record_category();

        category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Append a product; insertion order is preserved.
    pub fn add_product(&mut self, product: Product) {
        tracing::debug!(category = %self.name, product = %product.name(), "product added");
        self.products.push(product);
        self.counters.record_product();
    }

    /// Append a product given as a JSON object.
    ///
    /// Nothing is added or counted when the value is rejected.
    pub fn add_value(&mut self, value: serde_json::Value) -> DomainResult<()> {
        let product = Product::from_value(value)?;
        self.add_product(product);
        Ok(())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// One product text per line, in insertion order.
    pub fn products_text(&self) -> String {
        self.products
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Mean unit price; `0.0` for an empty category.
    pub fn middle_price(&self) -> f64 {
        if self.products.is_empty() {
            return 0.0;
        }
        let total: f64 = self.products.iter().map(Product::price).sum();
        total / self.products.len() as f64
    }

    /// Sum of all owned quantities, saturating at the `i64` bounds.
    pub fn total_quantity(&self) -> i64 {
        self.products
            .iter()
            .map(Product::quantity)
            .fold(0i64, i64::saturating_add)
    }

    pub fn counters(&self) -> &Arc<CatalogCounters> {
        &self.counters
    }

    pub fn category_count(&self) -> u64 {
        self.counters.category_count()
    }

    pub fn product_count(&self) -> u64 {
        self.counters.product_count()
    }

    /// Zero both shared counters. Test isolation only.
    pub fn reset_counters(&self) {
        self.counters.reset();
    }
}

impl<'a> IntoIterator for &'a Category {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}, total products: {} units",
            self.name,
            self.total_quantity()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_products() -> Vec<Product> {
        vec![
            Product::new("Product 1", "Desc 1", 100.0, 5).unwrap(),
            Product::new("Product 2", "Desc 2", 200.0, 3).unwrap(),
        ]
    }

    #[test]
    fn new_category_keeps_fields_and_order() {
        let counters = Arc::new(CatalogCounters::new());
        let category = Category::new("Test", "Description", sample_products(), counters);

        assert_eq!(category.name(), "Test");
        assert_eq!(category.description(), "Description");
        assert_eq!(category.len(), 2);
        assert_eq!(category.products(), sample_products().as_slice());
    }

    #[test]
    fn construction_counts_one_category_and_each_product() {
        let counters = Arc::new(CatalogCounters::new());

        let first = Category::new("Category 1", "Desc 1", sample_products(), counters.clone());
        assert_eq!(first.category_count(), 1);
        assert_eq!(first.product_count(), 2);

        let single = vec![Product::new("Single", "Desc", 50.0, 1).unwrap()];
        let _second = Category::new("Category 2", "Desc 2", single, counters.clone());
        assert_eq!(counters.category_count(), 2);
        assert_eq!(counters.product_count(), 3);
        assert_eq!(first.product_count(), 3);
    }

    #[test]
    fn add_product_appends_and_counts() {
        let counters = Arc::new(CatalogCounters::new());
        let mut category = Category::new("Empty", "Desc", Vec::new(), counters.clone());
        assert!(category.is_empty());

        category.add_product(Product::new("A", "Desc", 10.0, 1).unwrap());
        category.add_product(Product::new("B", "Desc", 20.0, 2).unwrap());

        let names: Vec<&str> = category.iter().map(Product::name).collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(counters.product_count(), 2);
        assert_eq!(counters.category_count(), 1);
    }

    #[test]
    fn add_value_rejects_non_product_without_counting() {
        let counters = Arc::new(CatalogCounters::new());
        let mut category = Category::new("Cat", "Desc", Vec::new(), counters.clone());

        let err = category.add_value(serde_json::json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, storefront_core::DomainError::TypeMismatch(_)));
        assert!(category.is_empty());
        assert_eq!(counters.product_count(), 0);

        category
            .add_value(serde_json::json!({
                "name": "Lamp",
                "description": "LED",
                "price": 15.0,
                "quantity": 4
            }))
            .unwrap();
        assert_eq!(category.len(), 1);
        assert_eq!(counters.product_count(), 1);
    }

    #[test]
    fn products_text_joins_lines_in_order() {
        let counters = Arc::new(CatalogCounters::new());
        let category = Category::new("Cat", "Desc", sample_products(), counters);

        assert_eq!(
            category.products_text(),
            "Product 1, 100.0 rub. Remaining: 5 units\nProduct 2, 200.0 rub. Remaining: 3 units"
        );
    }

    #[test]
    fn middle_price_handles_empty_category() {
        let counters = Arc::new(CatalogCounters::new());
        let category = Category::new("Empty", "Desc", Vec::new(), counters);
        assert_eq!(category.middle_price(), 0.0);
    }

    #[test]
    fn middle_price_is_arithmetic_mean() {
        let counters = Arc::new(CatalogCounters::new());
        let products = [100.0, 200.0, 300.0]
            .into_iter()
            .map(|price| Product::new("P", "D", price, 1).unwrap());
        let category = Category::new("Cat", "Desc", products, counters);
        assert_eq!(category.middle_price(), 200.0);
    }

    #[test]
    fn display_sums_quantities() {
        let counters = Arc::new(CatalogCounters::new());
        let category = Category::new("Electronics", "Desc", sample_products(), counters);
        assert_eq!(category.to_string(), "Electronics, total products: 8 units");
    }

    #[test]
    fn total_quantity_saturates_instead_of_overflowing() {
        let counters = Arc::new(CatalogCounters::new());
        let mut huge = Product::new("Huge", "Desc", 1.0, 1).unwrap();
        huge.set_quantity(i64::MAX);
        let category = Category::new("Bulk", "Desc", vec![huge.clone(), huge], counters);

        assert_eq!(category.total_quantity(), i64::MAX);
        assert_eq!(
            category.to_string(),
            format!("Bulk, total products: {} units", i64::MAX)
        );
    }

    #[test]
    fn categories_share_the_registry_they_were_built_with() {
        let counters = Arc::new(CatalogCounters::new());
        let first = Category::new("First", "Desc", sample_products(), counters.clone());
        let second = Category::new("Second", "Desc", Vec::new(), counters.clone());

        assert!(Arc::ptr_eq(first.counters(), &counters));
        assert!(Arc::ptr_eq(first.counters(), second.counters()));
        assert_eq!(second.counters().product_count(), 2);
    }

    #[test]
    fn reset_counters_zeroes_shared_state() {
        let counters = Arc::new(CatalogCounters::new());
        let category = Category::new("Cat", "Desc", sample_products(), counters.clone());

        category.reset_counters();
        assert_eq!(counters.category_count(), 0);
        assert_eq!(counters.product_count(), 0);
        assert_eq!(category.len(), 2);
    }

    #[test]
    fn iterating_a_reference_yields_products() {
        let counters = Arc::new(CatalogCounters::new());
        let category = Category::new("Cat", "Desc", sample_products(), counters);

        let mut total = 0;
        for product in &category {
            total += product.quantity();
        }
        assert_eq!(total, category.total_quantity());
    }
}
