//! # Domain Entities
//!
//! Concrete strategy instances that bind validated inputs to a variant.
//!
//! - [`Shipment`]: shipping cost by destination, weight, and speed
//! - [`Payment`]: charge settled through a payment method
//!
//! Both implement [`CostStrategy`](crate::domain::strategy::CostStrategy)
//! and are immutable once constructed.

pub mod payment;
pub mod shipment;

pub use payment::Payment;
pub use shipment::Shipment;
