//! Alert manager implementation
//!
//! Owns the policy configuration and the cooldown state for the process.

use super::policy::{self, PolicyConfig};
use super::types::{Alert, CooldownState};
use crate::domain::Sample;
use std::time::Instant;

/// Alert manager
///
/// Wraps the stateless policy with the one mutable piece it needs.
pub struct AlertManager {
    config: PolicyConfig,
    state: CooldownState,
}

impl AlertManager {
    /// Create a new alert manager with nothing alerted yet
    pub fn new(config: PolicyConfig) -> Self {
        Self {
            config,
            state: CooldownState::new(),
        }
    }

    /// Evaluate a sample and return the alerts that fired
    pub fn evaluate(&mut self, sample: &Sample, now: Instant) -> Vec<Alert> {
        policy::evaluate(sample, &self.config, &mut self.state, now)
    }

    /// Policy configuration
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Current cooldown state
    pub fn state(&self) -> &CooldownState {
        &self.state
    }
}
