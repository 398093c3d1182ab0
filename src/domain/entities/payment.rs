//! # Payment
//!
//! Payment charge strategy instance.
//!
//! Binds a [`PaymentMethod`] to an [`Amount`] at construction. The
//! strategy's cost is the charged amount itself; the description is the
//! settlement line, returned as a value rather than printed.

use crate::domain::errors::DomainResult;
use crate::domain::strategy::CostStrategy;
use crate::domain::value_objects::{Amount, PaymentMethod};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A charge settled through a specific payment method.
///
/// # Examples
///
/// ```
/// use freight_quote::{CostStrategy, Payment, PaymentMethod};
/// use rust_decimal::Decimal;
///
/// let payment = Payment::new(PaymentMethod::Upi, 150.0).unwrap();
/// assert_eq!(payment.cost(), Decimal::from(150));
/// assert_eq!(payment.describe(), "Paid Rs. 150 using UPI");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Settlement method variant.
    method: PaymentMethod,
    /// The charged amount.
    amount: Amount,
}

impl Payment {
    /// Creates a new validated payment.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`](crate::DomainError::InvalidInput)
    /// if the amount is negative or non-finite.
    pub fn new(method: PaymentMethod, amount: f64) -> DomainResult<Self> {
        Ok(Self::from_parts(method, Amount::new(amount)?))
    }

    /// Creates a payment from an already-validated amount.
    #[must_use]
    pub fn from_parts(method: PaymentMethod, amount: Amount) -> Self {
        Self { method, amount }
    }

    /// Returns the payment method.
    #[inline]
    #[must_use]
    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    /// Returns the charged amount.
    #[inline]
    #[must_use]
    pub fn amount(&self) -> Amount {
        self.amount
    }
}

impl CostStrategy for Payment {
    fn cost(&self) -> Decimal {
        self.amount.get()
    }

    fn describe(&self) -> String {
        format!("Paid Rs. {} using {}", self.amount, self.method.label())
    }

    fn name(&self) -> &'static str {
        "Payment"
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;

    #[test]
    fn cost_equals_amount() {
        let payment = Payment::new(PaymentMethod::CreditCard, 100.0).unwrap();
        assert_eq!(payment.cost(), Decimal::from(100));
        assert_eq!(payment.amount(), Amount::new(100.0).unwrap());
    }

    #[test]
    fn zero_amount_accepted() {
        let payment = Payment::new(PaymentMethod::Paypal, 0.0).unwrap();
        assert_eq!(payment.cost(), Decimal::ZERO);
    }

    #[test]
    fn negative_amount_rejected() {
        let result = Payment::new(PaymentMethod::Upi, -150.0);
        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn describe_format() {
        let payment = Payment::new(PaymentMethod::CreditCard, 100.0).unwrap();
        assert_eq!(payment.describe(), "Paid Rs. 100 using Credit Card");

        let payment = Payment::new(PaymentMethod::NetBanking, 250.5).unwrap();
        assert_eq!(payment.describe(), "Paid Rs. 250.5 using Net Banking");
    }

    #[test]
    fn display_matches_describe() {
        let payment = Payment::new(PaymentMethod::Paypal, 200.0).unwrap();
        assert_eq!(payment.to_string(), payment.describe());
    }

    #[test]
    fn strategy_name() {
        let payment = Payment::new(PaymentMethod::Upi, 1.0).unwrap();
        assert_eq!(payment.name(), "Payment");
    }

    #[test]
    fn serde_roundtrip() {
        let payment = Payment::new(PaymentMethod::NetBanking, 42.0).unwrap();
        let json = serde_json::to_string(&payment).unwrap();
        let deserialized: Payment = serde_json::from_str(&json).unwrap();
        assert_eq!(payment, deserialized);
    }
}
