//! Trait definitions for host metric sources
//!
//! These traits abstract over the OS so the check loop and the probe chain
//! can be tested with mocks.

use super::cpu::CpuIdentity;
use crate::domain::{Celsius, Sample};
use crate::error::SamplerError;

/// Source of periodic host samples
pub trait Sampler {
    /// Take one reading of every metric
    ///
    /// Never fails as a whole; metrics that cannot be read are reported as
    /// unavailable.
    fn sample(&mut self) -> Sample;
}

/// One named way of reading the CPU temperature
pub trait TemperatureProbe: Send {
    /// Probe name used in logs
    fn name(&self) -> &'static str;

    /// Whether this probe is worth trying on the detected CPU
    fn applies_to(&self, _cpu: &CpuIdentity) -> bool {
        true
    }

    /// Read the current temperature
    fn read(&self) -> Result<Celsius, SamplerError>;
}
