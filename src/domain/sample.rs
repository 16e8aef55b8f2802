//! Point-in-time host readings

use super::{Celsius, Metric};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One synchronous reading of every monitored metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Global CPU load percent; may exceed 100 on some platforms
    pub cpu_load: f64,
    /// Used RAM percent
    pub ram_usage: f64,
    /// CPU temperature, `None` when no probe could read it
    pub temperature: Option<Celsius>,
}

impl Sample {
    /// Create a new sample
    pub fn new(cpu_load: f64, ram_usage: f64, temperature: Option<Celsius>) -> Self {
        Self {
            cpu_load,
            ram_usage,
            temperature,
        }
    }

    /// Compute RAM usage percent from byte counts
    ///
    /// Returns 0 when the total is unknown.
    pub fn ram_percent(used: u64, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        (used as f64 / total as f64) * 100.0
    }

    /// Value of a metric, `None` when unavailable
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Cpu => Some(self.cpu_load),
            Metric::Ram => Some(self.ram_usage),
            Metric::Temperature => self.temperature.map(|t| t.as_celsius()),
        }
    }
}

/// Human-readable status line logged every cycle
impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Monitoring - CPU: {:.2}%, RAM: {:.2}%, Temp: ",
            self.cpu_load, self.ram_usage
        )?;
        match self.temperature {
            Some(temp) => write!(f, "{}", temp),
            None => write!(f, "N/A"),
        }
    }
}
