//! # Amount
//!
//! Non-negative monetary amount.

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary amount.
///
/// The currency unit is the caller's convention (descriptions quote
/// rupees); the type only guarantees the value is finite and
/// non-negative.
///
/// # Examples
///
/// ```
/// use freight_quote::Amount;
/// use rust_decimal::Decimal;
///
/// let amount = Amount::new(150.0).unwrap();
/// assert_eq!(amount.get(), Decimal::from(150));
///
/// assert!(Amount::new(-0.01).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Amount(Decimal);

impl Amount {
    /// Creates a new validated amount.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`] if the value is negative,
    /// NaN, or infinite.
    pub fn new(value: f64) -> DomainResult<Self> {
        let value = Decimal::from_f64(value).ok_or_else(|| {
            DomainError::invalid_input(format!("amount must be a finite number, got {value}"))
        })?;
        Self::from_decimal(value)
    }

    /// Creates a new validated amount from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`] if the value is negative.
    pub fn from_decimal(value: Decimal) -> DomainResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::invalid_input(format!(
                "amount must be non-negative, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the zero amount.
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

    /// Returns true if the amount is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
