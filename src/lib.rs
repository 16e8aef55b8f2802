//! hostwatch - host resource monitor with webhook alerts
//!
//! This library provides periodic sampling of CPU load, RAM usage and CPU
//! temperature, a threshold/cooldown alert policy, and fire-and-forget
//! webhook delivery.
//!
//! # Modules
//!
//! - [`alerts`]: Alert policy, cooldown state and notification delivery
//! - [`config`]: Configuration system
//! - [`domain`]: Metric, sample and temperature types
//! - [`error`]: Error types
//! - [`sampler`]: Host metric sampling and temperature probes
//! - [`services`]: Check loop orchestration

pub mod alerts;
pub mod config;
pub mod domain;
pub mod error;
pub mod sampler;
pub mod services;

#[cfg(test)]
pub mod mock;

pub use error::{AppError, Result};
