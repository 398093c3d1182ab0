//! # Destination
//!
//! Validated destination identifier for shipments.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A shipment destination.
///
/// Wraps a non-empty string identifier (city, region, depot code).
/// Leading and trailing whitespace is trimmed at construction.
///
/// # Invariants
///
/// - Must not be empty or whitespace-only
///
/// # Examples
///
/// ```
/// use freight_quote::Destination;
///
/// let destination = Destination::new("Delhi").unwrap();
/// assert_eq!(destination.as_str(), "Delhi");
///
/// assert!(Destination::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Destination(String);

impl Destination {
    /// Creates a new validated destination.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`] if the identifier is empty
    /// or whitespace-only.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_input(
                "destination must not be empty",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the destination as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Destination {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Destination {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
