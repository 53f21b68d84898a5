//! `storefront-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod capability;
pub mod error;
pub mod value_object;

pub use capability::{Describable, HasPrice};
pub use error::{DomainError, DomainResult};
pub use value_object::{Price, ValueObject};
