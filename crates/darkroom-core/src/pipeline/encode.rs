//! JPEG encoding at the canonical quality.

use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;

use crate::error::PipelineError;

/// Encode a pixel grid as JPEG at the given quality (1-100).
pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>, PipelineError> {
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .encode_image(image)
        .map_err(|e| PipelineError::Encode {
            message: e.to_string(),
        })?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_produces_jpeg_magic() {
        let img = RgbImage::from_pixel(16, 16, image::Rgb([120, 90, 60]));
        let bytes = encode_jpeg(&img, 85).unwrap();
        // JPEG files start with FF D8 FF
        assert_eq!(&bytes[0..3], &[0xFF, 0xD8, 0xFF]);
    }

    #[test]
    fn test_encoded_jpeg_decodes_to_same_dimensions() {
        let img = RgbImage::from_pixel(31, 17, image::Rgb([5, 200, 100]));
        let bytes = encode_jpeg(&img, 85).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 31);
        assert_eq!(decoded.height(), 17);
    }
}
