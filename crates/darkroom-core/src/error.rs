//! Error types for the Darkroom service.
//!
//! Errors are organized by concern so the HTTP boundary can map each
//! variant to a status code without string matching.

use thiserror::Error;

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Upload and filter pipeline errors.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Uploaded bytes could not be decoded as an image
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// Re-encoding a pixel grid to JPEG failed
    #[error("Encode error: {message}")]
    Encode { message: String },

    /// Upload contained no data
    #[error("Empty upload")]
    EmptyUpload,

    /// Upload exceeds the configured size limit
    #[error("Upload too large: {size_mb}MB > {max_mb}MB")]
    UploadTooLarge { size_mb: u64, max_mb: u64 },

    /// Base64/data-URI payload could not be decoded
    #[error("Invalid image payload: {message}")]
    InvalidPayload { message: String },

    /// No stored image under the given identifier
    #[error("Image not found: {id}")]
    NotFound { id: String },
}

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
