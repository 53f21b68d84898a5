use std::sync::Arc;

use serde::{Deserialize, Serialize};

use storefront_core::{Describable, DomainError, DomainResult, HasPrice, Price};

use crate::variant::{LawnGrassSpec, SmartphoneSpec, Variant, VariantKind};

/// Currency unit used in product text.
pub const CURRENCY_UNIT: &str = "rub";

/// Side effect invoked once for every successfully constructed product.
pub type CreationHookFn = Arc<dyn Fn(&Product) + Send + Sync>;

/// Structured input for building a product.
///
/// Price and quantity are kept raw here; they are validated when the product
/// is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(default)]
    pub variant: Variant,
}

impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            quantity,
            variant: Variant::Base,
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }
}

/// A sellable item: fixed name/description, validated price, stock quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    name: String,
    description: String,
    price: Price,
    quantity: i64,
    variant: Variant,
}

impl Product {
    /// Build a plain product.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> DomainResult<Self> {
        Self::create(NewProduct::new(name, description, price, quantity), None)
    }

    pub fn smartphone(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
        spec: SmartphoneSpec,
    ) -> DomainResult<Self> {
        Self::create(
            NewProduct::new(name, description, price, quantity)
                .with_variant(Variant::Smartphone(spec)),
            None,
        )
    }

    pub fn lawn_grass(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
        spec: LawnGrassSpec,
    ) -> DomainResult<Self> {
        Self::create(
            NewProduct::new(name, description, price, quantity)
                .with_variant(Variant::LawnGrass(spec)),
            None,
        )
    }

    /// Validate `new` and build the product, then run `hook` (if any) on it.
    ///
    /// The hook only runs for products that passed validation.
    pub fn create(new: NewProduct, hook: Option<&CreationHookFn>) -> DomainResult<Self> {
        let price = Price::new(new.price)?;
        if new.quantity <= 0 {
            return Err(DomainError::invalid_quantity(new.quantity));
        }

        let product = Self {
            name: new.name,
            description: new.description,
            price,
            quantity: new.quantity,
            variant: new.variant,
        };

        if let Some(hook) = hook {
            hook(&product);
        }

        Ok(product)
    }

    /// Build a product, folding it into a same-named product from `existing`.
    ///
    /// On a name match the result carries the summed quantity and the higher of
    /// the two prices. Both products must be of the same kind, and the merged
    /// quantity must stay positive.
    pub fn new_product(new: NewProduct, existing: &[Product]) -> DomainResult<Self> {
        let mut product = Self::create(new, None)?;

        if let Some(found) = existing.iter().find(|p| p.name == product.name) {
            if found.variant_kind() != product.variant_kind() {
                return Err(DomainError::type_mismatch(format!(
                    "cannot merge {} into {} '{}'",
                    product.variant_kind(),
                    found.variant_kind(),
                    product.name
                )));
            }

            let quantity = product.quantity.checked_add(found.quantity).ok_or_else(|| {
                DomainError::InvalidQuantity(format!(
                    "merged quantity overflows ({} + {})",
                    product.quantity, found.quantity
                ))
            })?;
            if quantity <= 0 {
                return Err(DomainError::invalid_quantity(quantity));
            }

            product.quantity = quantity;
            if found.price > product.price {
                product.price = found.price;
            }
        }

        Ok(product)
    }

    /// Build a product from a JSON object shaped like [`NewProduct`].
    pub fn from_value(value: serde_json::Value) -> DomainResult<Self> {
        let new: NewProduct = serde_json::from_value(value)
            .map_err(|e| DomainError::type_mismatch(format!("expected a product object: {e}")))?;
        Self::create(new, None)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price.value()
    }

    /// Replace the price; on rejection the previous price is kept.
    pub fn set_price(&mut self, value: f64) -> DomainResult<()> {
        match Price::new(value) {
            Ok(price) => {
                self.price = price;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(product = %self.name, value, "rejected price update");
                Err(err)
            }
        }
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Quantity is only checked at construction.
    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    pub fn variant_kind(&self) -> VariantKind {
        self.variant.kind()
    }

    /// Stock value: price times quantity.
    pub fn total_value(&self) -> f64 {
        self.price.value() * self.quantity as f64
    }

    /// Combined stock value of two products of the same kind.
    pub fn combine(&self, other: &Product) -> DomainResult<f64> {
        if self.variant_kind() != other.variant_kind() {
            return Err(DomainError::type_mismatch(format!(
                "cannot combine {} with {}",
                self.variant_kind(),
                other.variant_kind()
            )));
        }
        Ok(self.total_value() + other.total_value())
    }

    /// Constructor-style rendering, e.g. `Smartphone('Galaxy', 'Flagship', 180000.0, 5)`.
    pub fn signature(&self) -> String {
        format!(
            "{}('{}', '{}', {}, {})",
            self.variant_kind(),
            self.name,
            self.description,
            self.price,
            self.quantity
        )
    }
}

impl HasPrice for Product {
    fn price(&self) -> f64 {
        Product::price(self)
    }

    fn set_price(&mut self, value: f64) -> DomainResult<()> {
        Product::set_price(self, value)
    }
}

impl Describable for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}, {} {}. Remaining: {} units",
            self.name, self.price, CURRENCY_UNIT, self.quantity
        )
    }
}
