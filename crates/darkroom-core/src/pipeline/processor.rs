//! Pipeline orchestration.

use image::RgbImage;

use crate::config::Config;
use crate::error::PipelineError;
use crate::types::{ImageId, StoredImage};

use super::{decode, encode, Normalizer, Validator};

/// Runs the full ingest pipeline and produces canonical JPEG payloads.
pub struct ImageProcessor {
    validator: Validator,
    normalizer: Normalizer,
    jpeg_quality: u8,
}

impl ImageProcessor {
    /// Create a processor from the service configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            validator: Validator::new(config.limits.clone()),
            normalizer: Normalizer::new(config.normalize.clone()),
            jpeg_quality: config.normalize.jpeg_quality,
        }
    }

    /// Ingest raw upload bytes: validate, decode, normalize, encode, and
    /// mint a fresh identifier.
    pub fn ingest(&self, bytes: &[u8]) -> Result<StoredImage, PipelineError> {
        self.validator.validate(bytes)?;
        let decoded = decode::decode(bytes)?;
        let normalized = self.normalizer.normalize(decoded);
        let (width, height) = normalized.dimensions();
        let encoded = encode::encode_jpeg(&normalized, self.jpeg_quality)?;

        let id = ImageId::generate();
        tracing::debug!(id = %id, width, height, bytes = encoded.len(), "Ingested upload");

        Ok(StoredImage {
            id,
            bytes: encoded,
            width,
            height,
        })
    }

    /// Re-encode a filtered pixel grid at the canonical quality.
    pub fn encode(&self, image: &RgbImage) -> Result<Vec<u8>, PipelineError> {
        encode::encode_jpeg(image, self.jpeg_quality)
    }
}
