//! Host metric sampling
//!
//! CPU load and RAM usage come from sysinfo; CPU temperature goes through an
//! ordered chain of probes because no single source works everywhere.

pub mod cpu;
pub mod probes;
pub mod system;
pub mod traits;

pub use cpu::{CpuIdentity, CpuVendor};
pub use probes::{ComponentsProbe, HwmonProbe, PowerShellProbe, ProbeChain};
pub use system::SystemSampler;
pub use traits::{Sampler, TemperatureProbe};
