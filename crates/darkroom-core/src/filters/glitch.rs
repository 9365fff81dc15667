//! Randomized glitch filter.
//!
//! Three passes: split the red/blue planes horizontally in opposite
//! directions, add Gaussian film grain, then tear a few scanlines
//! sideways. All randomness flows from one RNG so a fixed seed
//! reproduces the output exactly.

use image::{Rgb, RgbImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// Bounds for the red/blue channel displacement, in pixels.
const CHANNEL_SHIFT_RANGE: std::ops::RangeInclusive<u32> = 4..=12;

/// Standard deviation of the additive grain.
const NOISE_SIGMA: f32 = 12.0;

/// Probability that any given row tears.
const ROW_SHIFT_PROB: f32 = 0.08;

/// Maximum sideways tear, in pixels (either direction).
const ROW_SHIFT_MAX: i32 = 20;

/// Apply the glitch with the given seed policy.
///
/// `Some(seed)` is fully deterministic; `None` draws from OS entropy.
pub fn apply(image: &RgbImage, seed: Option<u64>) -> RgbImage {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    apply_with_rng(image, &mut rng)
}

/// Apply the glitch with a caller-supplied RNG.
pub fn apply_with_rng(image: &RgbImage, rng: &mut impl Rng) -> RgbImage {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return image.clone();
    }

    // Pass 1: wrap the red plane right and the blue plane left
    let red_shift = rng.gen_range(CHANNEL_SHIFT_RANGE) % width;
    let blue_shift = rng.gen_range(CHANNEL_SHIFT_RANGE) % width;
    let mut out = RgbImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let r = image.get_pixel((x + width - red_shift) % width, y)[0];
            let g = image.get_pixel(x, y)[1];
            let b = image.get_pixel((x + blue_shift) % width, y)[2];
            out.put_pixel(x, y, Rgb([r, g, b]));
        }
    }

    // Pass 2: additive Gaussian grain
    let noise = Normal::new(0.0_f32, NOISE_SIGMA).expect("NOISE_SIGMA is positive and finite");
    for px in out.pixels_mut() {
        for c in 0..3 {
            let sample: f32 = noise.sample(rng);
            px[c] = (f32::from(px[c]) + sample).clamp(0.0, 255.0) as u8;
        }
    }

    // Pass 3: tear occasional scanlines sideways, wrapping
    for y in 0..height {
        if rng.gen::<f32>() >= ROW_SHIFT_PROB {
            continue;
        }
        let offset = rng.gen_range(-ROW_SHIFT_MAX..=ROW_SHIFT_MAX);
        let shift = offset.rem_euclid(width as i32) as u32;
        if shift == 0 {
            continue;
        }
        let row: Vec<Rgb<u8>> = (0..width).map(|x| *out.get_pixel(x, y)).collect();
        for (x, px) in row.into_iter().enumerate() {
            out.put_pixel((x as u32 + shift) % width, y, px);
        }
    }

    out
}
