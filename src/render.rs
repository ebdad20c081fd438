//! # Disparity rendering
//!
//! Turns raw disparity maps into images for display: a min-max stretch to the full 8-bit range
//! followed by the JET colour map.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::contrast::stretch_contrast;
use imageproc::map::map_colors;

// -----------------------------------------------------------------------------------------------
// FUNCTIONS
// -----------------------------------------------------------------------------------------------

/// Linearly stretch `image` so its smallest value maps to 0 and its largest to 255.
///
/// A constant image maps to all zeros.
pub fn normalise(image: &GrayImage) -> GrayImage {
    let (lower, upper) = image
        .pixels()
        .fold((u8::MAX, u8::MIN), |(lo, hi), p| (lo.min(p[0]), hi.max(p[0])));

    if lower >= upper {
        return GrayImage::from_pixel(image.width(), image.height(), Luma([0]));
    }

    stretch_contrast(image, lower, upper)
}

/// JET colour of an 8-bit intensity, from dark blue at 0 through green to dark red at 255.
pub fn jet(value: u8) -> Rgb<u8> {
    let t = value as f32 / 255.0;
    let channel = |centre: f32| {
        let v = 1.5 - (4.0 * t - centre).abs();
        (v.max(0.0).min(1.0) * 255.0).round() as u8
    };

    Rgb([channel(3.0), channel(2.0), channel(1.0)])
}

/// Normalise `image` and map it through [`jet`].
pub fn colourise(image: &GrayImage) -> RgbImage {
    map_colors(&normalise(image), |p: Luma<u8>| jet(p[0]))
}
