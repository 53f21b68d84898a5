//! Catalog domain module.
//!
//! Products (with their variants) and the categories that own them, plus the
//! shared counters tracking how many of each were created. Pure domain logic:
//! no IO, no storage.

pub mod catalog;
pub mod category;
pub mod counters;
pub mod product;
pub mod variant;

pub use catalog::{Catalog, tracing_hook};
pub use category::Category;
pub use counters::CatalogCounters;
pub use product::{CURRENCY_UNIT, CreationHookFn, NewProduct, Product};
pub use variant::{LawnGrassSpec, SmartphoneSpec, Variant, VariantKind};
