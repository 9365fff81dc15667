//! Color-mode and size normalization.

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

use crate::config::NormalizeConfig;

/// Normalizes decoded uploads into the canonical pixel format.
pub struct Normalizer {
    config: NormalizeConfig,
}

impl Normalizer {
    /// Create a new normalizer with the given settings.
    pub fn new(config: NormalizeConfig) -> Self {
        Self { config }
    }

    /// Convert to RGB8 and downscale so the larger dimension equals
    /// `max_dimension`, preserving aspect ratio. Images already within
    /// bounds are returned untouched (beyond the color conversion).
    pub fn normalize(&self, image: DynamicImage) -> RgbImage {
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();
        let max = self.config.max_dimension;

        if width <= max && height <= max {
            return rgb;
        }

        let (new_width, new_height) = if width >= height {
            (max, scaled(height, max, width))
        } else {
            (scaled(width, max, height), max)
        };

        imageops::resize(&rgb, new_width, new_height, FilterType::Lanczos3)
    }
}

/// Scale `side` by `max / longer`, rounded, never below one pixel.
fn scaled(side: u32, max: u32, longer: u32) -> u32 {
    let scaled = (u64::from(side) * u64::from(max) + u64::from(longer) / 2) / u64::from(longer);
    (scaled as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn normalizer(max_dimension: u32) -> Normalizer {
        Normalizer::new(NormalizeConfig {
            max_dimension,
            jpeg_quality: 85,
        })
    }

    #[test]
    fn test_small_image_untouched() {
        let img = DynamicImage::new_rgb8(800, 600);
        let out = normalizer(1200).normalize(img);
        assert_eq!(out.dimensions(), (800, 600));
    }

    #[test]
    fn test_wide_image_downscaled() {
        let img = DynamicImage::new_rgb8(2400, 1200);
        let out = normalizer(1200).normalize(img);
        assert_eq!(out.dimensions(), (1200, 600));
    }

    #[test]
    fn test_tall_image_downscaled() {
        let img = DynamicImage::new_rgb8(900, 3600);
        let out = normalizer(1200).normalize(img);
        assert_eq!(out.dimensions(), (300, 1200));
    }

    #[test]
    fn test_aspect_preserved_within_rounding() {
        let img = DynamicImage::new_rgb8(1999, 1333);
        let out = normalizer(1200).normalize(img);
        let (w, h) = out.dimensions();
        assert_eq!(w, 1200);
        let expected = 1333.0 * 1200.0 / 1999.0;
        assert!((h as f64 - expected).abs() <= 1.0);
    }

    #[test]
    fn test_extreme_aspect_keeps_one_pixel() {
        let img = DynamicImage::new_rgb8(10000, 2);
        let out = normalizer(1200).normalize(img);
        assert_eq!(out.dimensions(), (1200, 1));
    }

    #[test]
    fn test_rgba_converted_to_rgb() {
        let mut rgba = image::RgbaImage::new(4, 4);
        for px in rgba.pixels_mut() {
            *px = Rgba([200, 100, 50, 128]);
        }
        let out = normalizer(1200).normalize(DynamicImage::ImageRgba8(rgba));
        // Three channels survive; alpha is gone
        assert_eq!(out.get_pixel(0, 0).0.len(), 3);
    }
}
