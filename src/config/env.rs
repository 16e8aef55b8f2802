//! Environment variable overrides
//!
//! Variables are read through a lookup function so callers can supply the
//! process environment or a fixed map.

use crate::config::Config;
use crate::error::ConfigError;

pub const WEBHOOK_URL: &str = "WEBHOOK_URL";
pub const DISCORD_WEBHOOK_URL: &str = "DISCORD_WEBHOOK_URL";
pub const CPU_THRESHOLD_PERCENT: &str = "CPU_THRESHOLD_PERCENT";
pub const RAM_THRESHOLD_PERCENT: &str = "RAM_THRESHOLD_PERCENT";
pub const TEMP_THRESHOLD_CELSIUS: &str = "TEMP_THRESHOLD_CELSIUS";
pub const CHECK_INTERVAL_MINUTES: &str = "CHECK_INTERVAL_MINUTES";
pub const CHECK_INTERVAL_MS: &str = "CHECK_INTERVAL_MS";
pub const ALERT_COOLDOWN_MINUTES: &str = "ALERT_COOLDOWN_MINUTES";
pub const ALERT_COOLDOWN_MS: &str = "ALERT_COOLDOWN_MS";
pub const CPU_THRESHOLD_MESSAGE: &str = "CPU_THRESHOLD_MESSAGE";
pub const RAM_THRESHOLD_MESSAGE: &str = "RAM_THRESHOLD_MESSAGE";
pub const TEMP_THRESHOLD_MESSAGE: &str = "TEMP_THRESHOLD_MESSAGE";
/// Path to a TOML configuration file
pub const CONFIG_PATH: &str = "HOSTWATCH_CONFIG";

/// Lookup against the process environment, treating empty values as unset
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Apply every recognized variable on top of `config`
pub fn apply<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = get(WEBHOOK_URL).or_else(|| get(DISCORD_WEBHOOK_URL)) {
        config.webhook.url = url;
    }

    if let Some(v) = get(CPU_THRESHOLD_PERCENT) {
        config.thresholds.cpu_percent = parse_int(CPU_THRESHOLD_PERCENT, &v)?;
    }
    if let Some(v) = get(RAM_THRESHOLD_PERCENT) {
        config.thresholds.ram_percent = parse_int(RAM_THRESHOLD_PERCENT, &v)?;
    }
    if let Some(v) = get(TEMP_THRESHOLD_CELSIUS) {
        config.thresholds.temp_celsius = parse_int(TEMP_THRESHOLD_CELSIUS, &v)?;
    }

    let schedule = &mut config.schedule;
    if let Some(v) = get(CHECK_INTERVAL_MINUTES) {
        schedule.check_interval_minutes = Some(parse_int(CHECK_INTERVAL_MINUTES, &v)?);
    }
    if let Some(v) = get(CHECK_INTERVAL_MS) {
        schedule.check_interval_ms = Some(parse_int(CHECK_INTERVAL_MS, &v)?);
    }
    if let Some(v) = get(ALERT_COOLDOWN_MINUTES) {
        schedule.alert_cooldown_minutes = Some(parse_int(ALERT_COOLDOWN_MINUTES, &v)?);
    }
    if let Some(v) = get(ALERT_COOLDOWN_MS) {
        schedule.alert_cooldown_ms = Some(parse_int(ALERT_COOLDOWN_MS, &v)?);
    }

    if let Some(v) = lookup(CPU_THRESHOLD_MESSAGE) {
        config.messages.cpu = v;
    }
    if let Some(v) = lookup(RAM_THRESHOLD_MESSAGE) {
        config.messages.ram = v;
    }
    if let Some(v) = lookup(TEMP_THRESHOLD_MESSAGE) {
        config.messages.temperature = v;
    }

    Ok(())
}

fn parse_int<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::invalid(key, format!("expected an integer, got '{}'", value)))
}
