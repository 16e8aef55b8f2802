//! Alert message templates
//!
//! Templates carry two placeholders: the metric's live value
//! (`{currentLoad}`, `{currentUsage}` or `{currentTemp}`) and `{threshold}`.
//! Each is substituted at its first occurrence. Anything else in braces is
//! left untouched.

use crate::domain::Metric;
use serde::{Deserialize, Serialize};

/// Placeholder for the configured threshold
pub const THRESHOLD_PLACEHOLDER: &str = "{threshold}";

/// Message template with named placeholders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTemplate(String);

impl MessageTemplate {
    /// Create a new template
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Raw template text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render with a metric's live value and threshold
    pub fn render(&self, metric: Metric, value: f64, threshold: i64) -> String {
        self.0
            .replacen(metric.placeholder(), &metric.format_value(value), 1)
            .replacen(THRESHOLD_PLACEHOLDER, &threshold.to_string(), 1)
    }
}
