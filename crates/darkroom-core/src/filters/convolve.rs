//! Fixed-kernel convolution filters.
//!
//! Kernels match the classic built-in set: per-channel weighted sum,
//! divided by the kernel divisor, plus an offset, clamped to [0, 255].
//! Border pixels where the kernel window would leave the image copy the
//! input unchanged.

use image::{Rgb, RgbImage};

/// A square convolution kernel with integer weights.
pub struct Kernel {
    /// Side length (3 or 5)
    pub size: u32,
    /// Row-major weights, `size * size` entries
    pub weights: &'static [i32],
    /// Divisor applied to the weighted sum
    pub divisor: i32,
    /// Offset added after division
    pub offset: i32,
}

/// 5×5 ring blur.
pub const BLUR: Kernel = Kernel {
    size: 5,
    weights: &[
        1, 1, 1, 1, 1,
        1, 0, 0, 0, 1,
        1, 0, 0, 0, 1,
        1, 0, 0, 0, 1,
        1, 1, 1, 1, 1,
    ],
    divisor: 16,
    offset: 0,
};

/// Laplacian edge trace on a white ground.
pub const CONTOUR: Kernel = Kernel {
    size: 3,
    weights: &[-1, -1, -1, -1, 8, -1, -1, -1, -1],
    divisor: 1,
    offset: 255,
};

/// Detail enhancement.
pub const DETAIL: Kernel = Kernel {
    size: 3,
    weights: &[0, -1, 0, -1, 10, -1, 0, -1, 0],
    divisor: 6,
    offset: 0,
};

/// Edge enhancement.
pub const EDGE_ENHANCE: Kernel = Kernel {
    size: 3,
    weights: &[-1, -1, -1, -1, 10, -1, -1, -1, -1],
    divisor: 2,
    offset: 0,
};

/// Directional emboss around mid-gray.
pub const EMBOSS: Kernel = Kernel {
    size: 3,
    weights: &[-1, 0, 0, 0, 1, 0, 0, 0, 0],
    divisor: 1,
    offset: 128,
};

/// Sharpen.
pub const SHARPEN: Kernel = Kernel {
    size: 3,
    weights: &[-2, -2, -2, -2, 32, -2, -2, -2, -2],
    divisor: 16,
    offset: 0,
};

/// Mild smoothing.
pub const SMOOTH: Kernel = Kernel {
    size: 3,
    weights: &[1, 1, 1, 1, 5, 1, 1, 1, 1],
    divisor: 13,
    offset: 0,
};

/// Convolve an image with a kernel.
pub fn apply(image: &RgbImage, kernel: &Kernel) -> RgbImage {
    let (width, height) = image.dimensions();
    let margin = kernel.size / 2;

    // Borders keep their input values
    let mut out = image.clone();
    if width <= 2 * margin || height <= 2 * margin {
        return out;
    }

    for y in margin..height - margin {
        for x in margin..width - margin {
            let mut acc = [0i32; 3];
            for (i, weight) in kernel.weights.iter().enumerate() {
                let kx = i as u32 % kernel.size;
                let ky = i as u32 / kernel.size;
                let px = image.get_pixel(x + kx - margin, y + ky - margin);
                for c in 0..3 {
                    acc[c] += weight * i32::from(px[c]);
                }
            }
            let result = [
                (acc[0] / kernel.divisor + kernel.offset).clamp(0, 255) as u8,
                (acc[1] / kernel.divisor + kernel.offset).clamp(0, 255) as u8,
                (acc[2] / kernel.divisor + kernel.offset).clamp(0, 255) as u8,
            ];
            out.put_pixel(x, y, Rgb(result));
        }
    }

    out
}
