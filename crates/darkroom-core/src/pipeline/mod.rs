//! Upload pipeline stages.
//!
//! Each upload passes through:
//! - **validate**: size and magic-byte checks before any decoding
//! - **decode**: byte stream → pixel grid with format sniffing
//! - **normalize**: RGB8 conversion and aspect-preserving downscale
//! - **encode**: JPEG re-encode at the canonical quality
//! - **processor**: orchestrates the stages and mints identifiers

pub mod decode;
pub mod encode;
pub mod normalize;
pub mod processor;
pub mod validate;

// Re-exports for convenient access
pub use normalize::Normalizer;
pub use processor::ImageProcessor;
pub use validate::Validator;
