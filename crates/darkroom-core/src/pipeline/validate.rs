//! Upload validation before decoding.

use crate::config::LimitsConfig;
use crate::error::PipelineError;

/// Validates uploaded byte streams before the full decode runs.
pub struct Validator {
    limits: LimitsConfig,
}

impl Validator {
    /// Create a new validator with the given limits.
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    /// Perform quick validation on raw upload bytes.
    ///
    /// Checks:
    /// - Upload is non-empty
    /// - Upload size is within limits
    /// - The stream starts with valid image magic bytes
    pub fn validate(&self, bytes: &[u8]) -> Result<(), PipelineError> {
        if bytes.is_empty() {
            return Err(PipelineError::EmptyUpload);
        }

        let max_bytes = self.limits.max_upload_mb * 1024 * 1024;
        if bytes.len() as u64 > max_bytes {
            return Err(PipelineError::UploadTooLarge {
                size_mb: bytes.len() as u64 / (1024 * 1024),
                max_mb: self.limits.max_upload_mb,
            });
        }

        if !Self::is_valid_image_header(bytes) {
            return Err(PipelineError::Decode {
                message: "Unrecognized image format (invalid magic bytes)".to_string(),
            });
        }

        Ok(())
    }

    /// Check if the leading bytes match a known image container.
    fn is_valid_image_header(bytes: &[u8]) -> bool {
        if bytes.len() < 4 {
            return false;
        }

        // JPEG: FF D8 FF
        if bytes[0] == 0xFF && bytes[1] == 0xD8 && bytes[2] == 0xFF {
            return true;
        }

        // PNG: 89 50 4E 47
        if bytes[0] == 0x89 && bytes[1] == b'P' && bytes[2] == b'N' && bytes[3] == b'G' {
            return true;
        }

        // GIF: GIF8
        if bytes[0] == b'G' && bytes[1] == b'I' && bytes[2] == b'F' && bytes[3] == b'8' {
            return true;
        }

        // WebP: RIFF....WEBP
        if bytes[0] == b'R' && bytes[1] == b'I' && bytes[2] == b'F' && bytes[3] == b'F' {
            if bytes.len() >= 12 {
                return bytes[8] == b'W' && bytes[9] == b'E' && bytes[10] == b'B' && bytes[11] == b'P';
            }
            // Could be WebP, allow it to proceed
            return true;
        }

        // BMP: BM
        if bytes[0] == b'B' && bytes[1] == b'M' {
            return true;
        }

        // TIFF: II (little-endian) or MM (big-endian) followed by version 42
        let is_tiff_le = bytes[0] == b'I' && bytes[1] == b'I' && bytes[2] == 0x2A && bytes[3] == 0x00;
        let is_tiff_be = bytes[0] == b'M' && bytes[1] == b'M' && bytes[2] == 0x00 && bytes[3] == 0x2A;
        if is_tiff_le || is_tiff_be {
            return true;
        }

        false
    }
}
