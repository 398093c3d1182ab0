//! # Domain Layer
//!
//! Core business concepts: the cost-strategy contract, validated value
//! objects, and the concrete strategy instances.
//!
//! ## Modules
//!
//! - [`errors`] — [`DomainError`](errors::DomainError) and result alias
//! - [`strategy`] — the [`CostStrategy`](strategy::CostStrategy) contract
//! - [`value_objects`] — immutable validated inputs and variant tags
//! - [`entities`] — [`Shipment`](entities::Shipment) and
//!   [`Payment`](entities::Payment) strategy instances

pub mod entities;
pub mod errors;
pub mod strategy;
pub mod value_objects;
