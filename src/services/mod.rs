//! Service layer for the check loop
//!
//! Services tie the sampler, the alert policy and notification delivery
//! together.

pub mod alert_service;
pub mod monitor;

pub use alert_service::AlertService;
pub use monitor::{Monitor, MonitorConfig};
