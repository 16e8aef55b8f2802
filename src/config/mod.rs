//! Configuration system
//!
//! Handles TOML config file parsing and environment variable merging.
//! Everything here is resolved once at startup and read-only afterwards.

pub mod builder;
pub mod env;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::alerts::{MessageTemplate, Threshold, ThresholdConfig};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default check interval (1 minute)
pub const DEFAULT_CHECK_INTERVAL_MS: u64 = 60_000;
/// Default alert cooldown (5 minutes)
pub const DEFAULT_ALERT_COOLDOWN_MS: u64 = 300_000;

/// Endpoint value shipped in sample `.env` files; treated as unconfigured
pub const WEBHOOK_PLACEHOLDER: &str = "YOUR_DISCORD_WEBHOOK_URL_HERE";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Notification endpoint
    pub webhook: WebhookConfig,
    /// Alert thresholds
    pub thresholds: ThresholdsConfig,
    /// Alert message templates
    pub messages: MessagesConfig,
    /// Check interval and alert cooldown
    pub schedule: ScheduleConfig,
}

impl Config {
    /// Validate values that cannot be expressed in the types
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.schedule.check_interval().duration.is_zero() {
            return Err(ConfigError::invalid(
                "check_interval",
                "interval must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Build the per-metric threshold table used by the alert policy
    pub fn threshold_config(&self) -> ThresholdConfig {
        let t = &self.thresholds;
        let m = &self.messages;
        ThresholdConfig {
            cpu: Threshold::new(t.cpu_percent, MessageTemplate::new(&m.cpu)),
            ram: Threshold::new(t.ram_percent, MessageTemplate::new(&m.ram)),
            temperature: Threshold::new(t.temp_celsius, MessageTemplate::new(&m.temperature)),
        }
    }
}

/// Webhook configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct WebhookConfig {
    /// Endpoint URL; empty disables delivery
    pub url: String,
}

impl WebhookConfig {
    /// Whether the URL points somewhere real
    pub fn is_configured(&self) -> bool {
        let url = self.url.trim();
        !url.is_empty() && url != WEBHOOK_PLACEHOLDER
    }
}

/// Threshold configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThresholdsConfig {
    /// CPU load percent that must be exceeded
    pub cpu_percent: i64,
    /// RAM usage percent that must be exceeded
    pub ram_percent: i64,
    /// CPU temperature in Celsius that must be exceeded
    pub temp_celsius: i64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            cpu_percent: 80,
            ram_percent: 80,
            temp_celsius: 85,
        }
    }
}

/// Message templates, one per metric
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MessagesConfig {
    pub cpu: String,
    pub ram: String,
    pub temperature: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            cpu: "🚨 High CPU Alert! Current: {currentLoad}%, Threshold: {threshold}%".to_string(),
            ram: "⚠️ High RAM Alert! Current: {currentUsage}%, Threshold: {threshold}%"
                .to_string(),
            temperature: "🌡️ High CPU Temp! Current: {currentTemp}°C (Threshold: {threshold}°C)"
                .to_string(),
        }
    }
}

/// Interval and cooldown settings
///
/// A minutes setting takes precedence over a milliseconds setting.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ScheduleConfig {
    pub check_interval_minutes: Option<u64>,
    pub check_interval_ms: Option<u64>,
    pub alert_cooldown_minutes: Option<u64>,
    pub alert_cooldown_ms: Option<u64>,
}

impl ScheduleConfig {
    /// Resolve the check interval
    pub fn check_interval(&self) -> ResolvedDuration {
        ResolvedDuration::resolve(
            self.check_interval_minutes,
            self.check_interval_ms,
            DEFAULT_CHECK_INTERVAL_MS,
        )
    }

    /// Resolve the alert cooldown
    pub fn alert_cooldown(&self) -> ResolvedDuration {
        ResolvedDuration::resolve(
            self.alert_cooldown_minutes,
            self.alert_cooldown_ms,
            DEFAULT_ALERT_COOLDOWN_MS,
        )
    }
}

/// Which setting a resolved duration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationSource {
    Minutes,
    Milliseconds,
    Default,
}

impl fmt::Display for DurationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minutes => write!(f, "minutes setting"),
            Self::Milliseconds => write!(f, "milliseconds setting"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// A duration together with the setting it was resolved from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDuration {
    pub duration: Duration,
    pub source: DurationSource,
}

impl ResolvedDuration {
    fn resolve(minutes: Option<u64>, millis: Option<u64>, default_ms: u64) -> Self {
        match (minutes, millis) {
            (Some(min), _) => Self {
                duration: Duration::from_secs(min.saturating_mul(60)),
                source: DurationSource::Minutes,
            },
            (None, Some(ms)) => Self {
                duration: Duration::from_millis(ms),
                source: DurationSource::Milliseconds,
            },
            (None, None) => Self {
                duration: Duration::from_millis(default_ms),
                source: DurationSource::Default,
            },
        }
    }

    pub fn as_millis(&self) -> u128 {
        self.duration.as_millis()
    }
}

impl fmt::Display for ResolvedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} minutes ({} ms) - (Source: {})",
            self.duration.as_secs_f64() / 60.0,
            self.as_millis(),
            self.source
        )
    }
}
