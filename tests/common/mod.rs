//! Synthetic stereo fixtures shared by the integration tests.

#![allow(dead_code)]

use image::GrayImage;

/// Deterministic pseudo random intensity for texture coordinate `(x, y)`.
pub fn texture(x: u32, y: u32) -> u8 {
    let mut h = (x as u64) << 32 | y as u64;
    h = h.wrapping_add(0x9e37_79b9_7f4a_7c15);
    h = (h ^ (h >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    h = (h ^ (h >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    h ^= h >> 31;
    (h & 0xff) as u8
}

/// A `width x height` textured image.
pub fn textured(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| image::Luma([texture(x, y)]))
}

/// A left/right pair where every left pixel `(x, y)` appears at `(x - shift, y)` on the right.
pub fn shifted_pair(width: u32, height: u32, shift: u32) -> (GrayImage, GrayImage) {
    let left = textured(width, height);
    let right = GrayImage::from_fn(width, height, |x, y| image::Luma([texture(x + shift, y)]));
    (left, right)
}
