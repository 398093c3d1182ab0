//! # Rate Card
//!
//! Per-speed shipping rate configuration.
//!
//! The default card carries the standard table: Rs. 15/kg standard,
//! Rs. 30/kg express, free store pickup. Custom cards are validated so
//! a shipment cost can never go negative.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::enums::ShippingSpeed;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-kilogram shipping rates, keyed by [`ShippingSpeed`].
///
/// Serde-enabled so callers can load a card from configuration.
///
/// # Examples
///
/// ```
/// use freight_quote::{RateCard, ShippingSpeed};
/// use rust_decimal::Decimal;
///
/// let card = RateCard::default();
/// assert_eq!(card.rate_for(ShippingSpeed::Standard), Decimal::from(15));
///
/// let custom = RateCard::new(
///     Decimal::from(20),
///     Decimal::from(40),
///     Decimal::ZERO,
/// ).unwrap();
/// assert_eq!(custom.rate_for(ShippingSpeed::Express), Decimal::from(40));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateCard {
    /// Rate per kg for standard delivery.
    standard: Decimal,
    /// Rate per kg for express delivery.
    express: Decimal,
    /// Rate per kg for store pickup.
    pickup: Decimal,
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            standard: Decimal::from(15),
            express: Decimal::from(30),
            pickup: Decimal::ZERO,
        }
    }
}

impl RateCard {
    /// Creates a new validated rate card.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`] if any rate is negative.
    pub fn new(standard: Decimal, express: Decimal, pickup: Decimal) -> DomainResult<Self> {
        for (name, rate) in [
            ("standard", standard),
            ("express", express),
            ("pickup", pickup),
        ] {
            if rate.is_sign_negative() && !rate.is_zero() {
                return Err(DomainError::invalid_input(format!(
                    "{name} rate must be non-negative, got {rate}"
                )));
            }
        }
        Ok(Self {
            standard,
            express,
            pickup,
        })
    }

    /// Returns the rate per kilogram for the given speed.
    #[inline]
    #[must_use]
    pub fn rate_for(&self, speed: ShippingSpeed) -> Decimal {
        match speed {
            ShippingSpeed::Standard => self.standard,
            ShippingSpeed::Express => self.express,
            ShippingSpeed::Pickup => self.pickup,
        }
    }
}
