//! CPU temperature probes
//!
//! Temperature is read through an ordered chain of named probes. The first
//! probe that applies to the detected CPU and returns a reading wins; every
//! failure is logged and the next probe is tried.

use super::cpu::{CpuIdentity, CpuVendor};
use super::traits::TemperatureProbe;
use crate::domain::Celsius;
use crate::error::SamplerError;

use std::path::PathBuf;
use std::process::Command;

/// Ordered list of temperature probes
pub struct ProbeChain {
    cpu: CpuIdentity,
    probes: Vec<Box<dyn TemperatureProbe>>,
    reported_unavailable: bool,
}

impl ProbeChain {
    /// Create an empty chain for a CPU
    pub fn new(cpu: CpuIdentity) -> Self {
        Self {
            cpu,
            probes: Vec::new(),
            reported_unavailable: false,
        }
    }

    /// Chain with the built-in probes, vendor-specific ones first
    pub fn with_defaults(cpu: CpuIdentity) -> Self {
        Self::new(cpu)
            .with_probe(Box::new(PowerShellProbe::acpi_thermal_zone()))
            .with_probe(Box::new(PowerShellProbe::perf_thermal_zone()))
            .with_probe(Box::new(HwmonProbe::default()))
            .with_probe(Box::new(ComponentsProbe))
    }

    /// Append a probe
    pub fn with_probe(mut self, probe: Box<dyn TemperatureProbe>) -> Self {
        self.probes.push(probe);
        self
    }

    /// Detected CPU
    pub fn cpu(&self) -> &CpuIdentity {
        &self.cpu
    }

    /// Names of the probes, in order
    pub fn probe_names(&self) -> Vec<&'static str> {
        self.probes.iter().map(|p| p.name()).collect()
    }

    /// Read the temperature from the first probe that succeeds
    pub fn read(&mut self) -> Option<Celsius> {
        let reading = self
            .probes
            .iter()
            .filter(|p| p.applies_to(&self.cpu))
            .find_map(|probe| match probe.read() {
                Ok(temp) => {
                    log::trace!("Temperature {} from probe {}", temp, probe.name());
                    Some(temp)
                }
                Err(e) => {
                    log::debug!("Temperature probe {} failed: {}", probe.name(), e);
                    None
                }
            });

        if reading.is_some() {
            self.reported_unavailable = false;
        } else if self.reported_unavailable {
            log::debug!("Temperature monitoring not available");
        } else {
            log::info!("Temperature monitoring not available. CPU info: {}", self.cpu);
            self.reported_unavailable = true;
        }
        reading
    }
}

/// Windows thermal zone query through PowerShell
pub struct PowerShellProbe {
    name: &'static str,
    vendor: CpuVendor,
    script: &'static str,
    parse: fn(&str) -> Result<Celsius, SamplerError>,
}

impl PowerShellProbe {
    /// ACPI thermal zone, reported in tenths of Kelvin. Used on Intel CPUs.
    pub fn acpi_thermal_zone() -> Self {
        Self {
            name: "wmi-acpi-thermal-zone",
            vendor: CpuVendor::Intel,
            script: "Get-WmiObject -Namespace root\\wmi -Class MSAcpi_ThermalZoneTemperature \
                     | Select-Object -ExpandProperty CurrentTemperature",
            parse: parse_tenths_kelvin,
        }
    }

    /// Thermal zone performance counter. Used on AMD CPUs.
    pub fn perf_thermal_zone() -> Self {
        Self {
            name: "wmi-perf-thermal-zone",
            vendor: CpuVendor::Amd,
            script: "Get-WmiObject -Namespace root\\cimv2 \
                     -Class Win32_PerfFormattedData_Counters_ThermalZoneInformation \
                     | Select-Object -ExpandProperty Temperature",
            parse: parse_plain,
        }
    }
}

impl TemperatureProbe for PowerShellProbe {
    fn name(&self) -> &'static str {
        self.name
    }

    fn applies_to(&self, cpu: &CpuIdentity) -> bool {
        cpu.vendor == self.vendor
    }

    fn read(&self) -> Result<Celsius, SamplerError> {
        if !cfg!(windows) {
            return Err(SamplerError::Unsupported(self.name));
        }

        let output = Command::new("powershell")
            .args(["-NoProfile", "-Command", self.script])
            .output()?;

        if !output.status.success() {
            return Err(SamplerError::CommandFailed {
                command: "powershell".to_string(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        (self.parse)(&String::from_utf8_lossy(&output.stdout))
    }
}

/// First non-empty line of command output
fn first_line(output: &str) -> Result<&str, SamplerError> {
    output
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .ok_or_else(|| SamplerError::Parse(output.to_string()))
}

fn parse_tenths_kelvin(output: &str) -> Result<Celsius, SamplerError> {
    let line = first_line(output)?;
    line.parse::<i64>()
        .map(Celsius::from_tenths_kelvin)
        .map_err(|_| SamplerError::Parse(line.to_string()))
}

fn parse_plain(output: &str) -> Result<Celsius, SamplerError> {
    let line = first_line(output)?;
    line.parse::<f64>()
        .map(Celsius::new)
        .map_err(|_| SamplerError::Parse(line.to_string()))
}

/// Driver names of CPU sensors under `/sys/class/hwmon`
const HWMON_CPU_DRIVERS: &[&str] = &["coretemp", "k10temp", "zenpower", "cpu_thermal"];

/// Linux hwmon sysfs probe
pub struct HwmonProbe {
    root: PathBuf,
}

impl HwmonProbe {
    /// Probe rooted at a custom directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Default for HwmonProbe {
    fn default() -> Self {
        Self::new("/sys/class/hwmon")
    }
}

impl TemperatureProbe for HwmonProbe {
    fn name(&self) -> &'static str {
        "hwmon"
    }

    fn read(&self) -> Result<Celsius, SamplerError> {
        if !self.root.is_dir() {
            return Err(SamplerError::Unsupported(self.name()));
        }

        let mut devices: Vec<PathBuf> = std::fs::read_dir(&self.root)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .collect();
        devices.sort();

        for device in devices {
            let Ok(name) = std::fs::read_to_string(device.join("name")) else {
                continue;
            };
            if !HWMON_CPU_DRIVERS.contains(&name.trim()) {
                continue;
            }
            let Ok(raw) = std::fs::read_to_string(device.join("temp1_input")) else {
                continue;
            };
            match raw.trim().parse::<i64>() {
                Ok(milli) => return Ok(Celsius::from_millidegrees(milli)),
                Err(_) => log::debug!("Unparseable hwmon reading in {}", device.display()),
            }
        }

        Err(SamplerError::NoSensor(self.name()))
    }
}

/// Component label fragments that identify a CPU sensor
const CPU_LABELS: &[&str] = &["cpu", "package", "tctl", "tdie", "core"];

/// Cross-platform sensor list from sysinfo
pub struct ComponentsProbe;

impl TemperatureProbe for ComponentsProbe {
    fn name(&self) -> &'static str {
        "sysinfo-components"
    }

    fn read(&self) -> Result<Celsius, SamplerError> {
        let components = sysinfo::Components::new_with_refreshed_list();
        let reading = components
            .list()
            .iter()
            .filter(|c| is_cpu_label(c.label()))
            .filter_map(|c| c.temperature())
            .find(|t| t.is_finite());

        reading
            .map(Celsius::from)
            .ok_or(SamplerError::NoSensor(self.name()))
    }
}

fn is_cpu_label(label: &str) -> bool {
    let label = label.to_lowercase();
    CPU_LABELS.iter().any(|fragment| label.contains(fragment))
}
