//! Monitored metric kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// A host metric that can raise an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Global CPU load percentage
    Cpu,
    /// Used RAM as a percentage of total
    Ram,
    /// CPU temperature in Celsius
    Temperature,
}

impl Metric {
    /// All metrics, in evaluation order
    pub const ALL: [Metric; 3] = [Metric::Cpu, Metric::Ram, Metric::Temperature];

    /// Template placeholder carrying the live value
    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::Cpu => "{currentLoad}",
            Self::Ram => "{currentUsage}",
            Self::Temperature => "{currentTemp}",
        }
    }

    /// Number of decimals used when rendering the live value
    pub const fn precision(&self) -> usize {
        match self {
            Self::Cpu | Self::Ram => 2,
            Self::Temperature => 1,
        }
    }

    /// Display unit
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Cpu | Self::Ram => "%",
            Self::Temperature => "°C",
        }
    }

    /// Format a value with this metric's precision, without unit
    pub fn format_value(&self, value: f64) -> String {
        format!("{:.*}", self.precision(), value)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpu => write!(f, "cpu"),
            Self::Ram => write!(f, "ram"),
            Self::Temperature => write!(f, "temperature"),
        }
    }
}
