//! Darkroom Core - In-memory image filter engine and upload pipeline.
//!
//! Darkroom accepts an uploaded image, normalizes it into a canonical
//! RGB8/JPEG form, keeps it in a process-lifetime store, and applies pure
//! pixel filters from a fixed catalog on demand.
//!
//! # Architecture
//!
//! ```text
//! Upload bytes → Validate → Decode → Normalize (RGB8, ≤ max dim) → JPEG
//!                                                 │
//!                                  ImageStore (id → StoredImage)
//!                                                 │
//!                      FilterEngine (grayscale, sepia, glitch, ...) → JPEG
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use darkroom_core::{Config, FilterEngine, ImageProcessor, MemoryStore};
//!
//! let config = Config::load()?;
//! let processor = ImageProcessor::new(&config);
//! let stored = processor.ingest(&upload_bytes)?;
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod filters;
pub mod payload;
pub mod pipeline;
pub mod store;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, PipelineError, PipelineResult};
pub use filters::{Filter, FilterEngine};
pub use pipeline::ImageProcessor;
pub use store::{ImageStore, MemoryStore};
pub use types::{FilterOutcome, ImageId, StoredImage};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
