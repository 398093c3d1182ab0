//! # Cost Aggregation Service
//!
//! Ordered registration and uniform driving of cost strategies.
//!
//! This module provides [`CostAggregationService`], the owner of an
//! ordered collection of [`CostStrategy`] instances, and
//! [`SharedCostAggregator`], a coarse lock-guarded handle for callers
//! that append and read from multiple threads.
//!
//! # Examples
//!
//! ```
//! use freight_quote::{CostAggregationService, Payment, PaymentMethod, Shipment};
//! use rust_decimal::Decimal;
//!
//! let mut service = CostAggregationService::new();
//! service.add(Box::new(Shipment::standard("Delhi", 12.0).unwrap()));
//! service.add(Box::new(Payment::new(PaymentMethod::Upi, 20.0).unwrap()));
//!
//! let descriptions: Vec<String> = service.describe_all().collect();
//! assert_eq!(descriptions.len(), 2);
//! assert_eq!(service.total_cost(), Decimal::from(200));
//! ```

use crate::domain::strategy::CostStrategy;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, trace};

/// Owner of an ordered collection of cost strategies.
///
/// The service has exactly one steady state: it holds N strategies,
/// reachable only by monotonic append. Insertion order is preserved,
/// duplicates are allowed, and there is no identity deduplication.
/// Reads never mutate: the total is summed fresh on every call.
#[derive(Debug, Default)]
pub struct CostAggregationService {
    strategies: Vec<Box<dyn CostStrategy>>,
}

impl CostAggregationService {
    /// Creates a new empty service.
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Creates a new empty service with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            strategies: Vec::with_capacity(capacity),
        }
    }

    /// Appends a strategy to the collection.
    ///
    /// Always succeeds: a well-formed strategy carries validated inputs,
    /// and the collection has no upper bound.
    pub fn add(&mut self, strategy: Box<dyn CostStrategy>) {
        debug!(
            strategy = strategy.name(),
            count = self.strategies.len() + 1,
            "registering cost strategy"
        );
        self.strategies.push(strategy);
    }

    /// Returns the number of registered strategies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Returns true if no strategies are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Iterates over the registered strategies in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn CostStrategy> {
        self.strategies.iter().map(|s| &**s)
    }

    /// Produces the description of each strategy in insertion order.
    ///
    /// The sequence is lazy, finite, and restartable: each call returns
    /// a fresh iterator over current contents. Pure read; printing the
    /// lines is the caller's concern.
    pub fn describe_all(&self) -> impl Iterator<Item = String> + '_ {
        self.strategies.iter().map(|s| s.describe())
    }

    /// Computes the total cost across all strategies.
    ///
    /// Sums each strategy's cost in insertion order, evaluated fresh on
    /// every call. Returns zero for an empty service. Addition saturates
    /// at `Decimal::MAX`, keeping the operation total.
    #[must_use]
    pub fn total_cost(&self) -> Decimal {
        let total = self
            .strategies
            .iter()
            .fold(Decimal::ZERO, |acc, s| acc.saturating_add(s.cost()));
        trace!(%total, count = self.strategies.len(), "computed total cost");
        total
    }
}

/// A cloneable, thread-safe handle to a [`CostAggregationService`].
///
/// Append and read operations are guarded by a single mutex scoped to
/// the aggregator instance (coarse-grained: one lock per aggregator,
/// not per entry), since strategies themselves are immutable.
///
/// # Examples
///
/// ```
/// use freight_quote::{SharedCostAggregator, Shipment};
/// use rust_decimal::Decimal;
///
/// let aggregator = SharedCostAggregator::new();
/// aggregator.add(Box::new(Shipment::express("Pune", 4.0).unwrap()));
///
/// assert_eq!(aggregator.total_cost(), Decimal::from(120));
/// assert_eq!(aggregator.descriptions().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedCostAggregator {
    inner: Arc<Mutex<CostAggregationService>>,
}

impl SharedCostAggregator {
    /// Creates a new empty shared aggregator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(CostAggregationService::new())),
        }
    }

    /// Appends a strategy under the aggregator's lock.
    pub fn add(&self, strategy: Box<dyn CostStrategy>) {
        self.inner.lock().add(strategy);
    }

    /// Returns the number of registered strategies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns true if no strategies are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns a snapshot of all descriptions in insertion order.
    ///
    /// Materialized to a `Vec` because the lock cannot outlive the call.
    #[must_use]
    pub fn descriptions(&self) -> Vec<String> {
        self.inner.lock().describe_all().collect()
    }

    /// Computes the total cost under the aggregator's lock.
    #[must_use]
    pub fn total_cost(&self) -> Decimal {
        self.inner.lock().total_cost()
    }
}
