//! CPU identification used to pick temperature probes

use std::fmt;
use sysinfo::System;

/// CPU manufacturer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CpuVendor {
    Intel,
    Amd,
    Other(String),
}

impl CpuVendor {
    /// Detect the vendor from the CPUID vendor string, falling back to the brand
    pub fn detect(vendor_id: &str, brand: &str) -> Self {
        let haystack = format!("{} {}", vendor_id, brand).to_lowercase();
        if haystack.contains("intel") {
            Self::Intel
        } else if haystack.contains("amd") {
            Self::Amd
        } else {
            Self::Other(vendor_id.to_string())
        }
    }
}

impl fmt::Display for CpuVendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intel => write!(f, "Intel"),
            Self::Amd => write!(f, "AMD"),
            Self::Other(id) if id.is_empty() => write!(f, "unknown"),
            Self::Other(id) => write!(f, "{}", id),
        }
    }
}

/// Static description of the host CPU
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuIdentity {
    pub vendor: CpuVendor,
    pub brand: String,
    pub physical_cores: Option<usize>,
    pub logical_cores: usize,
}

impl CpuIdentity {
    /// Read the identity from a system whose CPU list has been loaded
    pub fn from_system(system: &System) -> Self {
        let (vendor_id, brand) = system
            .cpus()
            .first()
            .map(|cpu| (cpu.vendor_id().to_string(), cpu.brand().trim().to_string()))
            .unwrap_or_default();

        Self {
            vendor: CpuVendor::detect(&vendor_id, &brand),
            brand,
            physical_cores: System::physical_core_count(),
            logical_cores: system.cpus().len(),
        }
    }

    /// Identity with an unknown vendor
    pub fn unknown() -> Self {
        Self {
            vendor: CpuVendor::Other(String::new()),
            brand: String::new(),
            physical_cores: None,
            logical_cores: 0,
        }
    }
}

impl fmt::Display for CpuIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "manufacturer={}, brand={}, ", self.vendor, self.brand)?;
        match self.physical_cores {
            Some(n) => write!(f, "physical_cores={}, ", n)?,
            None => write!(f, "physical_cores=unknown, ")?,
        }
        write!(f, "cores={}", self.logical_cores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_vendor() {
        assert_eq!(CpuVendor::detect("GenuineIntel", ""), CpuVendor::Intel);
        assert_eq!(
            CpuVendor::detect("AuthenticAMD", "AMD Ryzen 7 5800H"),
            CpuVendor::Amd
        );
        assert_eq!(
            CpuVendor::detect("", "Intel(R) Core(TM) i7-10700"),
            CpuVendor::Intel
        );
        assert_eq!(
            CpuVendor::detect("ARM", "Apple M2"),
            CpuVendor::Other("ARM".to_string())
        );
    }

    #[test]
    fn test_identity_display() {
        let identity = CpuIdentity {
            vendor: CpuVendor::Amd,
            brand: "AMD Ryzen 7 5800H".to_string(),
            physical_cores: Some(8),
            logical_cores: 16,
        };
        assert_eq!(
            identity.to_string(),
            "manufacturer=AMD, brand=AMD Ryzen 7 5800H, physical_cores=8, cores=16"
        );
    }
}
