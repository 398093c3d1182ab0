//! # Application Layer
//!
//! Services that orchestrate domain strategies.

pub mod services;
