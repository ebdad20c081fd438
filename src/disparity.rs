//! # General disparity objects
//!
//! This module provides generic disparity traits and structures for use by different algorithms.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use std::path::Path;

use image::{GrayImage, RgbImage};

use crate::block_matching::Region;
use crate::error::*;
use crate::render;

// -----------------------------------------------------------------------------------------------
// CONSTANTS
// -----------------------------------------------------------------------------------------------

/// Value held by every cell of a disparity map that the algorithm did not write.
pub const UNSET: u8 = 0;

// -----------------------------------------------------------------------------------------------
// DATA STRUCTURES
// -----------------------------------------------------------------------------------------------

/// A rectified pair of 8-bit grayscale images.
#[derive(Debug, Clone)]
pub struct StereoFrame {
    pub left: GrayImage,
    pub right: GrayImage
}

/// An 8-bit disparity map the size of the left image.
///
/// Cells outside of `region` hold [`UNSET`].
#[derive(Debug, Clone)]
pub struct DisparityMap {
    data: GrayImage,
    pub region: Option<Region>,
    pub max_disp: Option<u8>,
    pub min_disp: Option<u8>
}

// -----------------------------------------------------------------------------------------------
// TRAITS
// -----------------------------------------------------------------------------------------------

pub trait DisparityAlgorithm {
    /// Compute the disparity map of the given stereo frame.
    fn compute(&mut self, frame: &StereoFrame) -> Result<DisparityMap>;
}

// -----------------------------------------------------------------------------------------------
// IMPLEMENTATIONS
// -----------------------------------------------------------------------------------------------

impl StereoFrame {
    pub fn new(left: GrayImage, right: GrayImage) -> Self {
        Self { left, right }
    }

    /// Decode both images from disk, converting them to 8-bit luma.
    pub fn open<P: AsRef<Path>, Q: AsRef<Path>>(left: P, right: Q) -> Result<Self> {
        let left = image::open(left)?.to_luma8();
        let right = image::open(right)?.to_luma8();

        Ok(Self { left, right })
    }

    /// Width of the left image.
    pub fn width(&self) -> u32 {
        self.left.width()
    }

    /// Height of the left image.
    pub fn height(&self) -> u32 {
        self.left.height()
    }

    /// Check that both images are non-empty and share the same dimensions.
    pub fn validate(&self) -> Result<()> {
        let left = self.left.dimensions();
        let right = self.right.dimensions();

        if left.0 == 0 || left.1 == 0 || right.0 == 0 || right.1 == 0 {
            return Err(Error::EmptyImage);
        }

        if left != right {
            return Err(Error::SizeMismatch { left, right });
        }

        Ok(())
    }
}

impl DisparityMap {
    /// Create a new map filled with [`UNSET`].
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_luma(GrayImage::from_pixel(width, height, image::Luma([UNSET])))
    }

    pub(crate) fn from_luma(data: GrayImage) -> Self {
        DisparityMap {
            data,
            region: None,
            min_disp: None,
            max_disp: None
        }
    }

    pub fn width(&self) -> u32 {
        self.data.width()
    }

    pub fn height(&self) -> u32 {
        self.data.height()
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data.get_pixel(x, y)[0]
    }

    pub fn put(&mut self, x: u32, y: u32, val: u8) {
        self.data.put_pixel(x, y, image::Luma([val]))
    }

    /// Number of cells written by the algorithm.
    pub fn written(&self) -> usize {
        self.region
            .as_ref()
            .map_or(0, |r| r.xs.len() * r.ys.len())
    }

    /// Borrow the raw disparity values.
    pub fn as_luma(&self) -> &GrayImage {
        &self.data
    }

    /// Converts the map into a GrayImage holding the raw values.
    pub fn to_luma(&self) -> GrayImage {
        self.data.clone()
    }

    /// Converts the map to a GrayImage stretched over the full 8-bit range.
    ///
    /// The stretch uses the smallest and largest value of the whole map, unset cells included.
    pub fn to_luma_normalised(&self) -> GrayImage {
        render::normalise(&self.data)
    }

    /// Converts the map to a normalised, JET coloured image for display.
    pub fn to_jet(&self) -> RgbImage {
        render::colourise(&self.data)
    }
}
