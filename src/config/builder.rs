//! Configuration builder
//!
//! Merges configuration from defaults, a TOML file and the environment.

use crate::config::{env, Config, ConfigFile};
use crate::error::ConfigError;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    ///
    /// With no explicit path the default locations are searched and a
    /// missing file is not an error.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        let file_config = match path {
            Some(path) => Some(ConfigFile::load(path)?),
            None => ConfigFile::load_default()?,
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        Ok(self)
    }

    /// Override with environment variables
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        env::apply(&mut self.config, lookup)?;
        Ok(self)
    }

    /// Validate and build the final configuration
    pub fn build(self) -> Result<Config, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::new().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[thresholds]\ncpu_percent = 60\nram_percent = 65\n\n[schedule]\ncheck_interval_ms = 5000"
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = ConfigBuilder::new()
            .with_file(Some(&path))
            .unwrap()
            .with_env(|key| match key {
                "CPU_THRESHOLD_PERCENT" => Some("75".to_string()),
                "CHECK_INTERVAL_MINUTES" => Some("3".to_string()),
                _ => None,
            })
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.thresholds.cpu_percent, 75);
        assert_eq!(config.thresholds.ram_percent, 65);
        assert_eq!(config.schedule.check_interval().as_millis(), 180_000);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let result = ConfigBuilder::new().with_file(Some("/nonexistent/hostwatch.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_build_rejects_zero_interval() {
        let result = ConfigBuilder::new()
            .with_env(|key| (key == "CHECK_INTERVAL_MS").then(|| "0".to_string()))
            .unwrap()
            .build();
        assert!(result.is_err());
    }
}
