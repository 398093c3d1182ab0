//! # Weight
//!
//! Non-negative shipment weight in kilograms.
//!
//! Weights are stored as [`Decimal`] for exact rate arithmetic; the
//! lossy `f64` conversion happens once, at the construction boundary.

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A shipment weight in kilograms.
///
/// # Invariants
///
/// - Must be finite and non-negative
///
/// # Examples
///
/// ```
/// use freight_quote::Weight;
/// use rust_decimal::Decimal;
///
/// let weight = Weight::new(12.0).unwrap();
/// assert_eq!(weight.get(), Decimal::from(12));
///
/// assert!(Weight::new(-1.0).is_err());
/// assert!(Weight::new(f64::NAN).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Weight(Decimal);

impl Weight {
    /// Creates a new validated weight from kilograms.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`] if the value is negative,
    /// NaN, or infinite.
    pub fn new(kilograms: f64) -> DomainResult<Self> {
        let value = Decimal::from_f64(kilograms).ok_or_else(|| {
            DomainError::invalid_input(format!("weight must be a finite number, got {kilograms}"))
        })?;
        Self::from_decimal(value)
    }

    /// Creates a new validated weight from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`] if the value is negative.
    pub fn from_decimal(value: Decimal) -> DomainResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::invalid_input(format!(
                "weight must be non-negative, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the zero weight.
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the underlying decimal value.
    #[inline]
    #[must_use]
    pub fn get(self) -> Decimal {
        self.0
    }

    /// Returns true if the weight is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
