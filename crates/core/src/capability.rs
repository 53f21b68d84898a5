//! Small capability traits shared by sellable things.

/// Anything that carries a validated unit price.
pub trait HasPrice {
    /// Current unit price.
    fn price(&self) -> f64;

    /// Replace the unit price. Non-positive values are rejected and leave the
    /// previous price in place.
    fn set_price(&mut self, value: f64) -> crate::DomainResult<()>;
}

/// Anything with a human-facing name and description.
pub trait Describable {
    fn name(&self) -> &str;

    fn description(&self) -> &str;
}
