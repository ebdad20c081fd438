//! # Matching windows
//!
//! Borrowed views into a grayscale image: the square block taken around a pixel of the left
//! image, and the horizontal search strip of the right image the block is slid along.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use image::GrayImage;

use crate::error::*;

// -----------------------------------------------------------------------------------------------
// DATA STRUCTURES
// -----------------------------------------------------------------------------------------------

/// A square `size x size` view into an image.
#[derive(Debug, Clone, Copy)]
pub struct Block<'a> {
    grid: &'a GrayImage,
    x0: usize,
    y0: usize,
    size: usize
}

/// A `width x height` view into the right image containing every candidate match of a block.
#[derive(Debug, Clone, Copy)]
pub struct SearchStrip<'a> {
    grid: &'a GrayImage,
    x0: usize,
    y0: usize,
    width: usize,
    height: usize
}

// -----------------------------------------------------------------------------------------------
// FUNCTIONS
// -----------------------------------------------------------------------------------------------

/// Extract the block of `block_size` centred on `(x, y)`.
///
/// The block origin is `(x - w, y - w)` with `w = block_size / 2`, so for an even block size the
/// centre pixel sits right of and below the geometric centre.
pub fn extract_block(grid: &GrayImage, x: usize, y: usize, block_size: usize) -> Result<Block<'_>> {
    let w = (block_size / 2) as i128;
    let (x0, y0) = check_bounds(
        grid,
        x as i128 - w,
        y as i128 - w,
        block_size as i128,
        block_size as i128
    )?;

    Ok(Block {
        grid,
        x0,
        y0,
        size: block_size
    })
}

/// Build the search strip for the block centred on `(x, y)`.
///
/// The strip starts `max_disp` pixels left of the block origin and is
/// `block_size + (max_disp - min_disp)` wide, so window `k` of the strip corresponds to a shift
/// of `max_disp - k` pixels.
pub fn extract_strip(
    grid: &GrayImage,
    x: usize,
    y: usize,
    block_size: usize,
    max_disp: i64,
    min_disp: i64
) -> Result<SearchStrip<'_>> {
    if max_disp < min_disp {
        return Err(Error::InvalidParams(format!(
            "maximum disparity {} is below minimum disparity {}",
            max_disp, min_disp
        )));
    }

    let w = (block_size / 2) as i128;
    let width = block_size as i128 + (max_disp as i128 - min_disp as i128);
    let (x0, y0) = check_bounds(
        grid,
        x as i128 - w - max_disp as i128,
        y as i128 - w,
        width,
        block_size as i128
    )?;

    Ok(SearchStrip {
        grid,
        x0,
        y0,
        // Bounded by the grid width after the check
        width: width as usize,
        height: block_size
    })
}

/// Check a region lies inside `grid`, returning its origin.
///
/// Coordinates are `i128`, wide enough for any `usize` block size and `i64` disparity.
fn check_bounds(
    grid: &GrayImage,
    x0: i128,
    y0: i128,
    width: i128,
    height: i128
) -> Result<(usize, usize)> {
    let (grid_width, grid_height) = grid.dimensions();

    if x0 < 0
        || y0 < 0
        || x0 + width > grid_width as i128
        || y0 + height > grid_height as i128
    {
        return Err(Error::OutOfBounds {
            x: saturate_i64(x0),
            y: saturate_i64(y0),
            width: saturate_usize(width),
            height: saturate_usize(height),
            grid_width,
            grid_height
        });
    }

    Ok((x0 as usize, y0 as usize))
}

fn saturate_i64(v: i128) -> i64 {
    v.max(i64::MIN as i128).min(i64::MAX as i128) as i64
}

fn saturate_usize(v: i128) -> usize {
    v.max(0).min(usize::MAX as i128) as usize
}

/// Row `j` of a `width` wide region with origin `(x0, y0)`.
#[inline]
fn region_row(grid: &GrayImage, x0: usize, y0: usize, width: usize, j: usize) -> &[u8] {
    let start = (y0 + j) * grid.width() as usize + x0;
    &grid.as_raw()[start..start + width]
}

// -----------------------------------------------------------------------------------------------
// IMPLEMENTATIONS
// -----------------------------------------------------------------------------------------------

impl<'a> Block<'a> {
    pub fn origin(&self) -> (usize, usize) {
        (self.x0, self.y0)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Samples of row `j` of the block.
    #[inline]
    pub fn row(&self, j: usize) -> &'a [u8] {
        region_row(self.grid, self.x0, self.y0, self.size, j)
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> {
        let block = *self;
        (0..block.size).map(move |j| block.row(j))
    }
}

impl<'a> SearchStrip<'a> {
    pub fn origin(&self) -> (usize, usize) {
        (self.x0, self.y0)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of block sized windows in the strip.
    pub fn num_windows(&self) -> usize {
        self.width - self.height + 1
    }

    /// The block sized window starting `k` samples from the left edge of the strip.
    ///
    /// Returns `None` if `k` is past the last window.
    pub fn window(&self, k: usize) -> Option<Block<'a>> {
        if k >= self.num_windows() {
            return None;
        }

        Some(Block {
            grid: self.grid,
            x0: self.x0 + k,
            y0: self.y0,
            size: self.height
        })
    }
}
