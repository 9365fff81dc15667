//! Per-pixel color arithmetic filters.

use image::{Rgb, RgbImage};

/// Enhancement factor for the brightness and contrast filters.
pub const ENHANCE_FACTOR: f32 = 1.5;

/// Sepia color matrix, rows are output R/G/B.
const SEPIA_MATRIX: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Warm-tone channel scaling applied before the sepia pass in `vintage`.
const WARM_SCALE: [f32; 3] = [1.10, 1.05, 0.90];

/// Vignette attenuation at the image corners (0 = none, 1 = black).
const VIGNETTE_STRENGTH: f32 = 0.45;

/// ITU-R 601 luma, integer arithmetic.
fn luma(px: &Rgb<u8>) -> u8 {
    let [r, g, b] = px.0;
    ((u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000) as u8
}

/// Replicate luminance across all three channels.
pub fn grayscale(image: &RgbImage) -> RgbImage {
    map_pixels(image, |px| {
        let l = luma(px);
        [l, l, l]
    })
}

/// Channel-wise 255 minus value.
pub fn invert(image: &RgbImage) -> RgbImage {
    map_pixels(image, |px| [255 - px[0], 255 - px[1], 255 - px[2]])
}

/// Fixed 3×3 color matrix multiply, clamped at 255.
pub fn sepia(image: &RgbImage) -> RgbImage {
    map_pixels(image, |px| sepia_px([
        f32::from(px[0]),
        f32::from(px[1]),
        f32::from(px[2]),
    ]))
}

fn sepia_px(rgb: [f32; 3]) -> [u8; 3] {
    let mut out = [0u8; 3];
    for (c, row) in SEPIA_MATRIX.iter().enumerate() {
        let v = row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2];
        out[c] = v.min(255.0) as u8;
    }
    out
}

/// Multiply every channel by `factor`, clamped.
pub fn brighten(image: &RgbImage, factor: f32) -> RgbImage {
    map_pixels(image, |px| {
        [
            scale_channel(px[0], factor),
            scale_channel(px[1], factor),
            scale_channel(px[2], factor),
        ]
    })
}

/// Push every channel away from the image's mean luminance by `factor`.
pub fn contrast(image: &RgbImage, factor: f32) -> RgbImage {
    let count = u64::from(image.width()) * u64::from(image.height());
    if count == 0 {
        return image.clone();
    }
    let total: u64 = image.pixels().map(|px| u64::from(luma(px))).sum();
    let mean = ((total + count / 2) / count) as f32;

    map_pixels(image, |px| {
        let stretch = |v: u8| (mean + (f32::from(v) - mean) * factor).clamp(0.0, 255.0) as u8;
        [stretch(px[0]), stretch(px[1]), stretch(px[2])]
    })
}

/// Warm-tone scaling, sepia matrix, then a radial vignette.
pub fn vintage(image: &RgbImage) -> RgbImage {
    let (width, height) = image.dimensions();
    let cx = (width.saturating_sub(1)) as f32 / 2.0;
    let cy = (height.saturating_sub(1)) as f32 / 2.0;
    let half_diagonal = (cx * cx + cy * cy).sqrt();

    let mut out = RgbImage::new(width, height);
    for (x, y, px) in image.enumerate_pixels() {
        let warmed = [
            (f32::from(px[0]) * WARM_SCALE[0]).min(255.0),
            (f32::from(px[1]) * WARM_SCALE[1]).min(255.0),
            (f32::from(px[2]) * WARM_SCALE[2]).min(255.0),
        ];
        let toned = sepia_px(warmed);

        // Normalized distance from center, 0 at center, 1 at the corners
        let distance = if half_diagonal > 0.0 {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            (dx * dx + dy * dy).sqrt() / half_diagonal
        } else {
            0.0
        };
        let fade = 1.0 - VIGNETTE_STRENGTH * distance;

        out.put_pixel(
            x,
            y,
            Rgb([
                (f32::from(toned[0]) * fade).clamp(0.0, 255.0) as u8,
                (f32::from(toned[1]) * fade).clamp(0.0, 255.0) as u8,
                (f32::from(toned[2]) * fade).clamp(0.0, 255.0) as u8,
            ]),
        );
    }
    out
}

fn scale_channel(v: u8, factor: f32) -> u8 {
    (f32::from(v) * factor).clamp(0.0, 255.0) as u8
}

fn map_pixels(image: &RgbImage, f: impl Fn(&Rgb<u8>) -> [u8; 3]) -> RgbImage {
    let mut out = RgbImage::new(image.width(), image.height());
    for (src, dst) in image.pixels().zip(out.pixels_mut()) {
        *dst = Rgb(f(src));
    }
    out
}
