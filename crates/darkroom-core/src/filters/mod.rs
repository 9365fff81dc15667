//! The filter catalog.
//!
//! Every filter is a pure function from an RGB8 pixel grid to a new grid
//! of identical dimensions, with no shared mutable state:
//! - **convolve**: fixed-kernel convolutions (blur, emboss, sharpen, ...)
//! - **tone**: per-pixel color arithmetic (grayscale, sepia, vintage, ...)
//! - **glitch**: randomized channel shifts and noise, seedable for tests

pub mod convolve;
pub mod glitch;
pub mod tone;

use image::RgbImage;

use crate::config::FiltersConfig;

/// A named filter from the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    Grayscale,
    Blur,
    Contour,
    Detail,
    EdgeEnhance,
    Emboss,
    Sharpen,
    Smooth,
    Brightness,
    Contrast,
    Invert,
    Sepia,
    BlackWhite,
    Vintage,
    Glitch,
}

impl Filter {
    /// Every filter, in menu order.
    pub const ALL: [Filter; 15] = [
        Filter::Grayscale,
        Filter::Blur,
        Filter::Contour,
        Filter::Detail,
        Filter::EdgeEnhance,
        Filter::Emboss,
        Filter::Sharpen,
        Filter::Smooth,
        Filter::Brightness,
        Filter::Contrast,
        Filter::Invert,
        Filter::Sepia,
        Filter::BlackWhite,
        Filter::Vintage,
        Filter::Glitch,
    ];

    /// Look up a filter by its wire name.
    ///
    /// Returns `None` for unknown names; callers treat that as the
    /// identity transform, not an error.
    pub fn from_name(name: &str) -> Option<Filter> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }

    /// Wire name used in form fields and the menu.
    pub fn name(self) -> &'static str {
        match self {
            Filter::Grayscale => "grayscale",
            Filter::Blur => "blur",
            Filter::Contour => "contour",
            Filter::Detail => "detail",
            Filter::EdgeEnhance => "edge_enhance",
            Filter::Emboss => "emboss",
            Filter::Sharpen => "sharpen",
            Filter::Smooth => "smooth",
            Filter::Brightness => "brightness",
            Filter::Contrast => "contrast",
            Filter::Invert => "invert",
            Filter::Sepia => "sepia",
            Filter::BlackWhite => "black_white",
            Filter::Vintage => "vintage",
            Filter::Glitch => "glitch",
        }
    }

    /// Human-readable label shown in the menu and download filenames.
    pub fn label(self) -> &'static str {
        match self {
            Filter::Grayscale => "Convert to grayscale",
            Filter::Blur => "Blur effect",
            Filter::Contour => "Contour effect",
            Filter::Detail => "Enhance details",
            Filter::EdgeEnhance => "Edge enhancement",
            Filter::Emboss => "Emboss effect",
            Filter::Sharpen => "Sharpen image",
            Filter::Smooth => "Smooth image",
            Filter::Brightness => "Increase brightness",
            Filter::Contrast => "Increase contrast",
            Filter::Invert => "Invert colors",
            Filter::Sepia => "Sepia tone effect",
            Filter::BlackWhite => "Black and white",
            Filter::Vintage => "Vintage look",
            Filter::Glitch => "Glitch effect",
        }
    }
}

/// Applies catalog filters to pixel grids.
///
/// Stateless apart from the glitch seed policy, which is fixed at
/// construction so tests can pin the randomness.
pub struct FilterEngine {
    glitch_seed: Option<u64>,
}

impl FilterEngine {
    /// Create an engine with the configured seed policy.
    pub fn new(config: &FiltersConfig) -> Self {
        Self {
            glitch_seed: config.glitch_seed,
        }
    }

    /// Apply a filter; `None` (unknown name) echoes the input unchanged.
    ///
    /// Output dimensions always equal input dimensions.
    pub fn apply(&self, filter: Option<Filter>, image: &RgbImage) -> RgbImage {
        let Some(filter) = filter else {
            return image.clone();
        };

        match filter {
            Filter::Grayscale | Filter::BlackWhite => tone::grayscale(image),
            Filter::Blur => convolve::apply(image, &convolve::BLUR),
            Filter::Contour => convolve::apply(image, &convolve::CONTOUR),
            Filter::Detail => convolve::apply(image, &convolve::DETAIL),
            Filter::EdgeEnhance => convolve::apply(image, &convolve::EDGE_ENHANCE),
            Filter::Emboss => convolve::apply(image, &convolve::EMBOSS),
            Filter::Sharpen => convolve::apply(image, &convolve::SHARPEN),
            Filter::Smooth => convolve::apply(image, &convolve::SMOOTH),
            Filter::Brightness => tone::brighten(image, tone::ENHANCE_FACTOR),
            Filter::Contrast => tone::contrast(image, tone::ENHANCE_FACTOR),
            Filter::Invert => tone::invert(image),
            Filter::Sepia => tone::sepia(image),
            Filter::Vintage => tone::vintage(image),
            Filter::Glitch => glitch::apply(image, self.glitch_seed),
        }
    }
}
