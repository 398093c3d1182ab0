//! # Domain Enums
//!
//! Variant tags for the built-in strategy families.
//!
//! - [`ShippingSpeed`] - Standard, Express, or store Pickup delivery
//! - [`PaymentMethod`] - CreditCard, Paypal, Upi, or NetBanking
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`,
//! `Hash`, `Display`, `FromStr`, and Serde traits.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an enum from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEnumError {
    /// The value did not match any variant of the named enum.
    #[error("invalid {0} value: {1}")]
    InvalidValue(&'static str, String),
}

/// Shipping delivery speed.
///
/// Each variant encodes a fixed linear rate per kilogram; the table
/// lives in [`RateCard::default`](super::RateCard::default).
///
/// # Examples
///
/// ```
/// use freight_quote::ShippingSpeed;
/// use rust_decimal::Decimal;
///
/// assert_eq!(ShippingSpeed::Standard.rate_per_kg(), Decimal::from(15));
/// assert_eq!(ShippingSpeed::Express.to_string(), "EXPRESS");
/// assert!(ShippingSpeed::Pickup.is_free());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum ShippingSpeed {
    /// Standard ground delivery.
    Standard = 0,
    /// Expedited delivery.
    Express = 1,
    /// Customer collects at the store; no delivery cost.
    Pickup = 2,
}

impl ShippingSpeed {
    /// Returns the default rate per kilogram for this speed.
    #[inline]
    #[must_use]
    pub fn rate_per_kg(self) -> Decimal {
        super::RateCard::default().rate_for(self)
    }

    /// Returns true if this speed carries no delivery cost.
    #[inline]
    #[must_use]
    pub const fn is_free(self) -> bool {
        matches!(self, Self::Pickup)
    }

    /// Returns a human-readable label for descriptions.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard shipping",
            Self::Express => "Express shipping",
            Self::Pickup => "Store pickup",
        }
    }
}

impl fmt::Display for ShippingSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "STANDARD"),
            Self::Express => write!(f, "EXPRESS"),
            Self::Pickup => write!(f, "PICKUP"),
        }
    }
}

impl FromStr for ShippingSpeed {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "STANDARD" => Ok(Self::Standard),
            "EXPRESS" => Ok(Self::Express),
            "PICKUP" | "STORE_PICKUP" => Ok(Self::Pickup),
            _ => Err(ParseEnumError::InvalidValue("ShippingSpeed", s.to_string())),
        }
    }
}

/// Payment method used to settle a charge.
///
/// # Examples
///
/// ```
/// use freight_quote::PaymentMethod;
///
/// assert_eq!(PaymentMethod::CreditCard.to_string(), "CREDIT_CARD");
/// assert_eq!(PaymentMethod::Upi.label(), "UPI");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum PaymentMethod {
    /// Credit card charge.
    CreditCard = 0,
    /// PayPal transfer.
    Paypal = 1,
    /// Unified Payments Interface transfer.
    Upi = 2,
    /// Direct net-banking transfer.
    NetBanking = 3,
}

impl PaymentMethod {
    /// Returns a human-readable label for descriptions.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::Paypal => "PayPal",
            Self::Upi => "UPI",
            Self::NetBanking => "Net Banking",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreditCard => write!(f, "CREDIT_CARD"),
            Self::Paypal => write!(f, "PAYPAL"),
            Self::Upi => write!(f, "UPI"),
            Self::NetBanking => write!(f, "NET_BANKING"),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "CREDIT_CARD" | "CREDITCARD" => Ok(Self::CreditCard),
            "PAYPAL" => Ok(Self::Paypal),
            "UPI" => Ok(Self::Upi),
            "NET_BANKING" | "NETBANKING" => Ok(Self::NetBanking),
            _ => Err(ParseEnumError::InvalidValue("PaymentMethod", s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod shipping_speed_tests {
        use super::*;

        #[test]
        fn display_all_variants() {
            assert_eq!(ShippingSpeed::Standard.to_string(), "STANDARD");
            assert_eq!(ShippingSpeed::Express.to_string(), "EXPRESS");
            assert_eq!(ShippingSpeed::Pickup.to_string(), "PICKUP");
        }

        #[test]
        fn from_str_valid() {
            assert_eq!(
                "standard".parse::<ShippingSpeed>().unwrap(),
                ShippingSpeed::Standard
            );
            assert_eq!(
                "EXPRESS".parse::<ShippingSpeed>().unwrap(),
                ShippingSpeed::Express
            );
            assert_eq!(
                "store-pickup".parse::<ShippingSpeed>().unwrap(),
                ShippingSpeed::Pickup
            );
        }

        #[test]
        fn from_str_invalid() {
            assert!("OVERNIGHT".parse::<ShippingSpeed>().is_err());
            assert!("".parse::<ShippingSpeed>().is_err());
        }

        #[test]
        fn rate_table() {
            assert_eq!(ShippingSpeed::Standard.rate_per_kg(), Decimal::from(15));
            assert_eq!(ShippingSpeed::Express.rate_per_kg(), Decimal::from(30));
            assert_eq!(ShippingSpeed::Pickup.rate_per_kg(), Decimal::ZERO);
        }

        #[test]
        fn is_free() {
            assert!(ShippingSpeed::Pickup.is_free());
            assert!(!ShippingSpeed::Standard.is_free());
            assert!(!ShippingSpeed::Express.is_free());
        }

        #[test]
        fn repr_values() {
            assert_eq!(ShippingSpeed::Standard as u8, 0);
            assert_eq!(ShippingSpeed::Express as u8, 1);
            assert_eq!(ShippingSpeed::Pickup as u8, 2);
        }

        #[test]
        fn serde_values() {
            assert_eq!(
                serde_json::to_string(&ShippingSpeed::Standard).unwrap(),
                "\"STANDARD\""
            );
            let parsed: ShippingSpeed = serde_json::from_str("\"PICKUP\"").unwrap();
            assert_eq!(parsed, ShippingSpeed::Pickup);
        }
    }

    mod payment_method_tests {
        use super::*;

        #[test]
        fn display_all_variants() {
            assert_eq!(PaymentMethod::CreditCard.to_string(), "CREDIT_CARD");
            assert_eq!(PaymentMethod::Paypal.to_string(), "PAYPAL");
            assert_eq!(PaymentMethod::Upi.to_string(), "UPI");
            assert_eq!(PaymentMethod::NetBanking.to_string(), "NET_BANKING");
        }

        #[test]
        fn from_str_valid() {
            assert_eq!(
                "credit-card".parse::<PaymentMethod>().unwrap(),
                PaymentMethod::CreditCard
            );
            assert_eq!(
                "NETBANKING".parse::<PaymentMethod>().unwrap(),
                PaymentMethod::NetBanking
            );
            assert_eq!("upi".parse::<PaymentMethod>().unwrap(), PaymentMethod::Upi);
        }

        #[test]
        fn from_str_invalid() {
            let err = "CASH".parse::<PaymentMethod>().unwrap_err();
            assert_eq!(err.to_string(), "invalid PaymentMethod value: CASH");
        }

        #[test]
        fn labels() {
            assert_eq!(PaymentMethod::CreditCard.label(), "Credit Card");
            assert_eq!(PaymentMethod::Paypal.label(), "PayPal");
            assert_eq!(PaymentMethod::NetBanking.label(), "Net Banking");
        }

        #[test]
        fn serde_roundtrip() {
            for method in [
                PaymentMethod::CreditCard,
                PaymentMethod::Paypal,
                PaymentMethod::Upi,
                PaymentMethod::NetBanking,
            ] {
                let json = serde_json::to_string(&method).unwrap();
                let deserialized: PaymentMethod = serde_json::from_str(&json).unwrap();
                assert_eq!(method, deserialized);
            }
        }
    }
}
