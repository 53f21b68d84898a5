//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure is synchronous and returned to the caller as-is; nothing in
/// the domain layer retries or swallows these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A price was zero, negative or not a finite number.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// A product was constructed with a zero or negative quantity.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// A value had the wrong kind (non-product input, or mixed product variants).
    #[error("type mismatch: {0}")]
    TypeMismatch(String),
}

impl DomainError {
    pub fn invalid_price(value: f64) -> Self {
        Self::InvalidPrice(format!("price must be greater than zero (got {value:?})"))
    }

    /// Zero and negative quantities get distinct diagnostics.
    pub fn invalid_quantity(value: i64) -> Self {
        if value == 0 {
            Self::InvalidQuantity("product with zero quantity cannot be added".to_string())
        } else {
            Self::InvalidQuantity(format!("quantity cannot be negative (got {value})"))
        }
    }

    pub fn type_mismatch(msg: impl Into<String>) -> Self {
        Self::TypeMismatch(msg.into())
    }
}
