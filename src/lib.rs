//! # Freight Quote
//!
//! An extensible cost-strategy aggregation engine.
//!
//! The crate generalizes one recurring shape: a set of interchangeable
//! cost strategies (shipping methods, payment charges) selected
//! polymorphically, and an aggregation service that treats them
//! uniformly — registering them in order, describing each one, and
//! summing their costs. Everything is synchronous and in-process: no
//! persistence, no network I/O.
//!
//! ## Architecture
//!
//! - [`domain`] — the [`CostStrategy`] contract, validated value objects
//!   ([`Destination`], [`Weight`], [`Amount`]), variant tags
//!   ([`ShippingSpeed`], [`PaymentMethod`]), and the concrete strategy
//!   instances ([`Shipment`], [`Payment`]).
//! - [`application`] — the [`CostAggregationService`] (and its
//!   lock-guarded sibling [`SharedCostAggregator`]) plus pure
//!   notification rendering.
//!
//! ## Examples
//!
//! ```
//! use freight_quote::{CostAggregationService, Shipment, ShippingSpeed};
//! use rust_decimal::Decimal;
//!
//! let mut service = CostAggregationService::new();
//! service.add(Box::new(
//!     Shipment::new(ShippingSpeed::Standard, "Delhi", 12.0).unwrap(),
//! ));
//! service.add(Box::new(
//!     Shipment::new(ShippingSpeed::Express, "Pune", 4.0).unwrap(),
//! ));
//! service.add(Box::new(
//!     Shipment::new(ShippingSpeed::Pickup, "Mumbai", 12.0).unwrap(),
//! ));
//!
//! assert_eq!(service.len(), 3);
//! assert_eq!(service.total_cost(), Decimal::from(300));
//!
//! for line in service.describe_all() {
//!     println!("{line}");
//! }
//! ```

pub mod application;
pub mod domain;

pub use application::services::cost_aggregation::{CostAggregationService, SharedCostAggregator};
pub use application::services::notification::{
    EmailChannel, MessageChannel, NotificationService, SmsChannel,
};
pub use domain::entities::{Payment, Shipment};
pub use domain::errors::{DomainError, DomainResult};
pub use domain::strategy::CostStrategy;
pub use domain::value_objects::{
    Amount, Destination, PaymentMethod, RateCard, ShippingSpeed, Weight,
};
