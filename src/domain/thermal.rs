//! Thermal domain types
//!
//! Provides the temperature type reported by the probe chain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Celsius(f64);

impl Celsius {
    /// Create a new temperature
    pub const fn new(celsius: f64) -> Self {
        Self(celsius)
    }

    /// Convert from tenths of a Kelvin, the unit ACPI thermal zones report in
    pub fn from_tenths_kelvin(tenths: i64) -> Self {
        Self(tenths as f64 / 10.0 - 273.15)
    }

    /// Convert from millidegrees Celsius, the unit Linux hwmon reports in
    pub fn from_millidegrees(milli: i64) -> Self {
        Self(milli as f64 / 1000.0)
    }

    /// Get the temperature in Celsius
    #[inline]
    pub const fn as_celsius(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

impl From<f64> for Celsius {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<f32> for Celsius {
    fn from(value: f32) -> Self {
        Self::new(value as f64)
    }
}
