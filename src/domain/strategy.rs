//! # Cost Strategy Contract
//!
//! The polymorphic seam of the crate.
//!
//! A [`CostStrategy`] is a self-contained, side-effect-free computation
//! unit: it binds its inputs at construction and exposes a cost and a
//! description derived from them. The aggregation service consumes
//! strategies exclusively through this trait, so new strategy families
//! can be added without touching the aggregator.
//!
//! # Contract
//!
//! - [`CostStrategy::cost`] must return a non-negative value and must
//!   never fail on an already-constructed instance. Input validation
//!   belongs in the constructor.
//! - [`CostStrategy::describe`] must be a pure function of the bound
//!   input; printing or logging the result is the caller's concern.

use rust_decimal::Decimal;
use std::fmt;

/// Trait for cost strategies.
///
/// Implementations bind an immutable input bundle at construction and
/// compute a cost and description from it. Both operations are pure:
/// no side effects, no I/O, no failure path.
///
/// # Examples
///
/// ```
/// use freight_quote::{CostStrategy, Shipment, ShippingSpeed};
/// use rust_decimal::Decimal;
///
/// let shipment = Shipment::new(ShippingSpeed::Express, "Pune", 4.0).unwrap();
/// let strategy: &dyn CostStrategy = &shipment;
///
/// assert_eq!(strategy.cost(), Decimal::from(120));
/// assert!(strategy.describe().contains("Pune"));
/// ```
pub trait CostStrategy: Send + Sync + fmt::Debug {
    /// Computes the cost for this strategy instance.
    ///
    /// Always non-negative, evaluated fresh on every call.
    fn cost(&self) -> Decimal;

    /// Produces a human-readable description of this strategy instance.
    fn describe(&self) -> String;

    /// Returns the name of this strategy family.
    fn name(&self) -> &'static str;
}
