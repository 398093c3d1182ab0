//! # Shipment
//!
//! Shipping cost strategy instance.
//!
//! A shipment binds a [`Destination`], a [`Weight`], and a
//! [`ShippingSpeed`] at construction, and computes its cost from the
//! speed's per-kilogram rate. With the default [`RateCard`]:
//!
//! - STANDARD: cost = weight × 15
//! - EXPRESS: cost = weight × 30
//! - PICKUP: cost = 0

use crate::domain::errors::DomainResult;
use crate::domain::strategy::CostStrategy;
use crate::domain::value_objects::{Destination, RateCard, ShippingSpeed, Weight};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A shipment priced by destination, weight, and delivery speed.
///
/// # Invariants
///
/// - Weight is non-negative, destination is non-empty (enforced by the
///   value-object constructors)
/// - Inputs are bound once at construction and never mutated
///
/// # Examples
///
/// ```
/// use freight_quote::{CostStrategy, Shipment, ShippingSpeed};
/// use rust_decimal::Decimal;
///
/// let shipment = Shipment::new(ShippingSpeed::Standard, "Delhi", 12.0).unwrap();
/// assert_eq!(shipment.cost(), Decimal::from(180));
/// assert_eq!(
///     shipment.describe(),
///     "Standard shipping to Delhi (12 kg): Rs. 180",
/// );
///
/// assert!(Shipment::new(ShippingSpeed::Standard, "Delhi", -1.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    /// Delivery speed variant.
    speed: ShippingSpeed,
    /// Where the shipment goes.
    destination: Destination,
    /// Shipment weight in kilograms.
    weight: Weight,
    /// Rate table used for pricing.
    rates: RateCard,
}

impl Shipment {
    /// Creates a new validated shipment priced with the default rates.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`](crate::DomainError::InvalidInput)
    /// if the destination is empty or the weight is negative or
    /// non-finite.
    pub fn new(
        speed: ShippingSpeed,
        destination: impl Into<String>,
        weight_kg: f64,
    ) -> DomainResult<Self> {
        Ok(Self::from_parts(
            speed,
            Destination::new(destination)?,
            Weight::new(weight_kg)?,
        ))
    }

    /// Creates a shipment from already-validated parts.
    #[must_use]
    pub fn from_parts(speed: ShippingSpeed, destination: Destination, weight: Weight) -> Self {
        Self {
            speed,
            destination,
            weight,
            rates: RateCard::default(),
        }
    }

    /// Creates a standard-speed shipment.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Shipment::new`].
    pub fn standard(destination: impl Into<String>, weight_kg: f64) -> DomainResult<Self> {
        Self::new(ShippingSpeed::Standard, destination, weight_kg)
    }

    /// Creates an express-speed shipment.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Shipment::new`].
    pub fn express(destination: impl Into<String>, weight_kg: f64) -> DomainResult<Self> {
        Self::new(ShippingSpeed::Express, destination, weight_kg)
    }

    /// Creates a store-pickup shipment.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Shipment::new`].
    pub fn pickup(destination: impl Into<String>, weight_kg: f64) -> DomainResult<Self> {
        Self::new(ShippingSpeed::Pickup, destination, weight_kg)
    }

    /// Replaces the rate card used for pricing.
    #[must_use]
    pub fn with_rates(mut self, rates: RateCard) -> Self {
        self.rates = rates;
        self
    }

    /// Returns the delivery speed.
    #[inline]
    #[must_use]
    pub fn speed(&self) -> ShippingSpeed {
        self.speed
    }

    /// Returns the destination.
    #[inline]
    #[must_use]
    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Returns the weight.
    #[inline]
    #[must_use]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns the rate card used for pricing.
    #[inline]
    #[must_use]
    pub fn rates(&self) -> &RateCard {
        &self.rates
    }
}

impl CostStrategy for Shipment {
    fn cost(&self) -> Decimal {
        self.weight
            .get()
            .saturating_mul(self.rates.rate_for(self.speed))
    }

    fn describe(&self) -> String {
        format!(
            "{} to {} ({} kg): Rs. {}",
            self.speed.label(),
            self.destination,
            self.weight,
            self.cost()
        )
    }

    fn name(&self) -> &'static str {
        "Shipment"
    }
}

impl fmt::Display for Shipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}
