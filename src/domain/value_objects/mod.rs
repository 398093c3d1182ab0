//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Input Types
//!
//! - [`Destination`]: non-empty destination identifier
//! - [`Weight`]: non-negative shipment weight in kilograms
//! - [`Amount`]: non-negative monetary amount
//!
//! ## Variant Tags
//!
//! - [`ShippingSpeed`]: Standard, Express, or Pickup
//! - [`PaymentMethod`]: CreditCard, Paypal, Upi, or NetBanking
//!
//! ## Configuration
//!
//! - [`RateCard`]: per-speed shipping rate table
//!
//! All value objects are created once, validated at construction, and
//! never mutated afterward.

pub mod amount;
pub mod destination;
pub mod enums;
pub mod rate_card;
pub mod weight;

pub use amount::Amount;
pub use destination::Destination;
pub use enums::{ParseEnumError, PaymentMethod, ShippingSpeed};
pub use rate_card::RateCard;
pub use weight::Weight;
