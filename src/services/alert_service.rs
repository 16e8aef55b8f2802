//! Alert service
//!
//! Evaluates samples and hands triggered alerts to the delivery sink.

use crate::alerts::{Alert, AlertManager, AlertSink};
use crate::domain::Sample;
use std::time::Instant;

/// Alert service for the check loop
pub struct AlertService<K: AlertSink> {
    manager: AlertManager,
    sink: K,
}

impl<K: AlertSink> AlertService<K> {
    /// Create a new alert service
    pub fn new(manager: AlertManager, sink: K) -> Self {
        Self { manager, sink }
    }

    /// Evaluate a sample and dispatch whatever fired
    ///
    /// Cooldowns are already updated when this returns; delivery happens
    /// elsewhere and its outcome is never fed back.
    pub fn handle(&mut self, sample: &Sample, now: Instant) -> Vec<Alert> {
        let alerts = self.manager.evaluate(sample, now);

        for alert in &alerts {
            log::info!(
                "{} alert: {:.*}{} exceeds threshold {}{}",
                alert.metric,
                alert.metric.precision(),
                alert.value,
                alert.metric.unit(),
                alert.threshold,
                alert.metric.unit()
            );
            self.sink.dispatch(alert);
        }

        alerts
    }

    /// Alert manager
    pub fn manager(&self) -> &AlertManager {
        &self.manager
    }

    /// Delivery sink
    pub fn sink(&self) -> &K {
        &self.sink
    }
}
