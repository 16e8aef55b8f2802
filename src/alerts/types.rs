//! Alert system domain types
//!
//! Thresholds, per-metric cooldown state and fired alerts.

use super::template::MessageTemplate;
use crate::domain::Metric;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// Threshold for one metric
#[derive(Debug, Clone, PartialEq)]
pub struct Threshold {
    /// Level the metric must strictly exceed
    pub limit: i64,
    /// Message rendered when the threshold fires
    pub template: MessageTemplate,
}

impl Threshold {
    /// Create a new threshold
    pub fn new(limit: i64, template: MessageTemplate) -> Self {
        Self { limit, template }
    }

    /// Whether a value crosses this threshold
    pub fn is_exceeded_by(&self, value: f64) -> bool {
        value > self.limit as f64
    }
}

/// Thresholds for every metric
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdConfig {
    pub cpu: Threshold,
    pub ram: Threshold,
    pub temperature: Threshold,
}

impl ThresholdConfig {
    /// Threshold for a metric
    pub fn for_metric(&self, metric: Metric) -> &Threshold {
        match metric {
            Metric::Cpu => &self.cpu,
            Metric::Ram => &self.ram,
            Metric::Temperature => &self.temperature,
        }
    }
}

/// Last alert instant per metric
///
/// `None` means the metric has never alerted, which always passes the
/// cooldown gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CooldownState {
    cpu: Option<Instant>,
    ram: Option<Instant>,
    temperature: Option<Instant>,
}

impl CooldownState {
    /// Fresh state where nothing has alerted yet
    pub fn new() -> Self {
        Self::default()
    }

    /// When a metric last alerted
    pub fn last_alert(&self, metric: Metric) -> Option<Instant> {
        *self.slot(metric)
    }

    /// Record that a metric alerted at `now`
    pub fn record(&mut self, metric: Metric, now: Instant) {
        *self.slot_mut(metric) = Some(now);
    }

    fn slot(&self, metric: Metric) -> &Option<Instant> {
        match metric {
            Metric::Cpu => &self.cpu,
            Metric::Ram => &self.ram,
            Metric::Temperature => &self.temperature,
        }
    }

    fn slot_mut(&mut self, metric: Metric) -> &mut Option<Instant> {
        match metric {
            Metric::Cpu => &mut self.cpu,
            Metric::Ram => &mut self.ram,
            Metric::Temperature => &mut self.temperature,
        }
    }
}

/// A triggered alert, ready for delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Metric that crossed its threshold
    pub metric: Metric,
    /// Live value at evaluation time
    pub value: f64,
    /// Configured threshold
    pub threshold: i64,
    /// Rendered notification text
    pub message: String,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
