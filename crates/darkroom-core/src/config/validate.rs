//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.is_empty() {
            return Err(ConfigError::ValidationError(
                "server.host must not be empty".into(),
            ));
        }
        if self.normalize.max_dimension == 0 {
            return Err(ConfigError::ValidationError(
                "normalize.max_dimension must be > 0".into(),
            ));
        }
        if self.normalize.jpeg_quality == 0 || self.normalize.jpeg_quality > 100 {
            return Err(ConfigError::ValidationError(
                "normalize.jpeg_quality must be in 1..=100".into(),
            ));
        }
        if self.limits.max_upload_mb == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_upload_mb must be > 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_max_dimension_rejected() {
        let mut config = Config::default();
        config.normalize.max_dimension = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_quality_range_enforced() {
        let mut config = Config::default();
        config.normalize.jpeg_quality = 0;
        assert!(config.validate().is_err());
        config.normalize.jpeg_quality = 101;
        assert!(config.validate().is_err());
        config.normalize.jpeg_quality = 100;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_host_rejected() {
        let mut config = Config::default();
        config.server.host = String::new();
        assert!(config.validate().is_err());
    }
}
