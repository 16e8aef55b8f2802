//! sysinfo-backed sampler

use super::cpu::CpuIdentity;
use super::probes::ProbeChain;
use super::traits::Sampler;
use crate::domain::Sample;

use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

/// Samples the local host
///
/// The `System` is kept between calls, so the CPU load is the average over
/// the time since the previous sample.
pub struct SystemSampler {
    system: System,
    probes: ProbeChain,
}

impl SystemSampler {
    /// Create a sampler with the default temperature probes
    ///
    /// Blocks for `sysinfo::MINIMUM_CPU_UPDATE_INTERVAL` so the first CPU
    /// reading has a baseline to diff against.
    pub fn new() -> Self {
        let system = Self::primed_system();
        let probes = ProbeChain::with_defaults(CpuIdentity::from_system(&system));
        Self { system, probes }
    }

    /// Create a sampler with a custom probe chain
    pub fn with_probes(probes: ProbeChain) -> Self {
        Self {
            system: Self::primed_system(),
            probes,
        }
    }

    /// Detected CPU
    pub fn cpu(&self) -> &CpuIdentity {
        self.probes.cpu()
    }

    fn primed_system() -> System {
        let mut system = System::new_with_specifics(
            RefreshKind::nothing()
                .with_cpu(CpuRefreshKind::everything())
                .with_memory(MemoryRefreshKind::everything()),
        );
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        system.refresh_cpu_usage();
        system
    }
}

impl Default for SystemSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for SystemSampler {
    fn sample(&mut self) -> Sample {
        self.system.refresh_cpu_usage();
        self.system.refresh_memory();

        let cpu_load = self.system.global_cpu_usage() as f64;
        let ram_usage = Sample::ram_percent(self.system.used_memory(), self.system.total_memory());
        let temperature = self.probes.read();

        Sample::new(cpu_load, ram_usage, temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Celsius;
    use crate::mock::FixedProbe;

    #[test]
    fn test_system_sample_ranges() {
        let probes = ProbeChain::new(CpuIdentity::unknown())
            .with_probe(Box::new(FixedProbe::reading("fixed", 48.5)));
        let mut sampler = SystemSampler::with_probes(probes);

        let sample = sampler.sample();
        assert!(sample.cpu_load >= 0.0);
        assert!((0.0..=100.0).contains(&sample.ram_usage));
        assert_eq!(sample.temperature, Some(Celsius::new(48.5)));
    }

    #[test]
    fn test_system_sample_without_temperature() {
        let mut sampler = SystemSampler::with_probes(ProbeChain::new(CpuIdentity::unknown()));
        assert_eq!(sampler.sample().temperature, None);
    }
}
