//! # Application Services
//!
//! Services that drive domain strategies uniformly.
//!
//! - [`CostAggregationService`]: ordered strategy registration,
//!   per-item descriptions, and total-cost computation
//! - [`SharedCostAggregator`]: lock-guarded handle for concurrent callers
//! - [`NotificationService`]: pure notification rendering over a
//!   pluggable [`MessageChannel`]

pub mod cost_aggregation;
pub mod notification;

pub use cost_aggregation::{CostAggregationService, SharedCostAggregator};
pub use notification::{EmailChannel, MessageChannel, NotificationService, SmsChannel};
