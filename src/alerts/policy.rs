//! Threshold and cooldown alerting policy
//!
//! Decides, for one sample, which metrics alert. Each metric is handled on
//! its own: it must strictly exceed its threshold, and strictly more than the
//! cooldown must have passed since its last alert. A firing metric records
//! `now` immediately, whatever later happens to delivery.
//!
//! There is no resolve/hysteresis step. A metric that stays above its
//! threshold alerts again every time the cooldown expires.

use super::types::{Alert, CooldownState, ThresholdConfig};
use crate::domain::{Metric, Sample};
use std::time::{Duration, Instant};

/// Inputs to the policy that do not change after startup
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyConfig {
    /// Per-metric thresholds and templates
    pub thresholds: ThresholdConfig,
    /// Minimum time between two alerts for the same metric
    pub cooldown: Duration,
}

/// Evaluate one sample against every metric
pub fn evaluate(
    sample: &Sample,
    config: &PolicyConfig,
    state: &mut CooldownState,
    now: Instant,
) -> Vec<Alert> {
    Metric::ALL
        .iter()
        .filter_map(|&metric| evaluate_metric(metric, sample, config, state, now))
        .collect()
}

fn evaluate_metric(
    metric: Metric,
    sample: &Sample,
    config: &PolicyConfig,
    state: &mut CooldownState,
    now: Instant,
) -> Option<Alert> {
    // Unavailable readings never trigger
    let value = sample.value(metric)?;
    let threshold = config.thresholds.for_metric(metric);

    if !threshold.is_exceeded_by(value) {
        return None;
    }

    if !cooldown_elapsed(state.last_alert(metric), now, config.cooldown) {
        log::debug!("{} above threshold but still cooling down", metric);
        return None;
    }

    state.record(metric, now);

    Some(Alert {
        metric,
        value,
        threshold: threshold.limit,
        message: threshold.template.render(metric, value, threshold.limit),
    })
}

fn cooldown_elapsed(last: Option<Instant>, now: Instant, cooldown: Duration) -> bool {
    match last {
        None => true,
        Some(last) => now.saturating_duration_since(last) > cooldown,
    }
}
