//! Domain models for hostwatch
//!
//! This module contains the metric, sample and temperature types shared by
//! the sampler and the alert policy.

pub mod metric;
pub mod sample;
pub mod thermal;

pub use metric::Metric;
pub use sample::Sample;
pub use thermal::Celsius;
