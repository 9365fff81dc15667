//! Sub-configuration structs with service defaults.

use serde::{Deserialize, Serialize};

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,

    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 31337,
        }
    }
}

/// Upload normalization settings.
///
/// Every upload is converted to RGB8, downscaled so neither dimension
/// exceeds `max_dimension`, and re-encoded as JPEG at `jpeg_quality`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Maximum width or height after normalization
    pub max_dimension: u32,

    /// JPEG quality (1-100) for the canonical encoding
    pub jpeg_quality: u8,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            max_dimension: 1200,
            jpeg_quality: 85,
        }
    }
}

/// Resource limits to protect against problematic uploads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum upload size in megabytes
    pub max_upload_mb: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self { max_upload_mb: 20 }
    }
}

/// Filter engine settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FiltersConfig {
    /// Fixed seed for the glitch filter's RNG.
    ///
    /// When set, glitch output is reproducible across requests. When unset
    /// (the default), each application draws from OS entropy.
    pub glitch_seed: Option<u64>,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
