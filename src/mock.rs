//! Mock implementations for testing
//!
//! Provides a scripted sampler, recording sinks/notifiers and fixed
//! temperature probes so the check loop can be tested without real sensors
//! or a webhook endpoint.

use crate::alerts::{Alert, AlertSink, Delivery, Notifier};
use crate::domain::{Celsius, Sample};
use crate::error::{NotifyError, SamplerError};
use crate::sampler::{CpuIdentity, CpuVendor, Sampler, TemperatureProbe};

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Sampler that replays a fixed list of samples
///
/// The last sample repeats once the script runs out.
#[derive(Debug)]
pub struct ScriptedSampler {
    script: VecDeque<Sample>,
    last: Sample,
    calls: usize,
    panic_on: Option<usize>,
}

impl ScriptedSampler {
    /// Create a sampler from a non-empty script
    pub fn new(samples: Vec<Sample>) -> Self {
        let last = *samples.last().expect("script must not be empty");
        Self {
            script: samples.into(),
            last,
            calls: 0,
            panic_on: None,
        }
    }

    /// Panic on the given 1-based call
    pub fn panic_on_call(&mut self, call: usize) {
        self.panic_on = Some(call);
    }

    /// Number of times `sample` was called
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl Sampler for ScriptedSampler {
    fn sample(&mut self) -> Sample {
        self.calls += 1;
        if self.panic_on == Some(self.calls) {
            panic!("scripted sampler failure");
        }
        if let Some(next) = self.script.pop_front() {
            self.last = next;
        }
        self.last
    }
}

/// Alert sink that keeps every alert it receives
#[derive(Debug, Default)]
pub struct RecordingSink {
    alerts: Mutex<Vec<Alert>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alerts received so far
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().unwrap().clone()
    }
}

impl AlertSink for RecordingSink {
    fn dispatch(&self, alert: &Alert) {
        self.alerts.lock().unwrap().push(alert.clone());
    }
}

/// Notifier that records messages, optionally failing every delivery
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifier that records, then reports a rejected delivery
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Shared handle to the recorded messages
    pub fn messages(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.messages)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) -> Result<Delivery, NotifyError> {
        self.messages.lock().unwrap().push(message.to_string());
        if self.fail {
            return Err(NotifyError::Status(503));
        }
        Ok(Delivery::Sent)
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Probe with a fixed outcome
pub struct FixedProbe {
    name: &'static str,
    reading: Option<f64>,
    vendor: Option<CpuVendor>,
}

impl FixedProbe {
    /// Probe that always reads `celsius`
    pub fn reading(name: &'static str, celsius: f64) -> Self {
        Self {
            name,
            reading: Some(celsius),
            vendor: None,
        }
    }

    /// Probe that always fails
    pub fn failing(name: &'static str) -> Self {
        Self {
            name,
            reading: None,
            vendor: None,
        }
    }

    /// Builder: only apply to one vendor
    pub fn for_vendor(mut self, vendor: CpuVendor) -> Self {
        self.vendor = Some(vendor);
        self
    }
}

impl TemperatureProbe for FixedProbe {
    fn name(&self) -> &'static str {
        self.name
    }

    fn applies_to(&self, cpu: &CpuIdentity) -> bool {
        self.vendor.as_ref().map_or(true, |v| *v == cpu.vendor)
    }

    fn read(&self) -> Result<Celsius, SamplerError> {
        self.reading
            .map(Celsius::new)
            .ok_or(SamplerError::NoSensor(self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_sampler_repeats_last() {
        let mut sampler = ScriptedSampler::new(vec![
            Sample::new(1.0, 1.0, None),
            Sample::new(2.0, 2.0, None),
        ]);

        assert_eq!(sampler.sample().cpu_load, 1.0);
        assert_eq!(sampler.sample().cpu_load, 2.0);
        assert_eq!(sampler.sample().cpu_load, 2.0);
        assert_eq!(sampler.calls(), 3);
    }

    #[test]
    fn test_fixed_probe_vendor_filter() {
        let probe = FixedProbe::reading("amd", 50.0).for_vendor(CpuVendor::Amd);
        assert!(!probe.applies_to(&CpuIdentity::unknown()));
        assert_eq!(probe.read().unwrap(), Celsius::new(50.0));
    }
}
