//! # NCC block matching
//!
//! This module provides a dense block matching disparity algorithm. For every pixel of the left
//! image far enough from the borders, the surrounding block is correlated against each candidate
//! position in the right image and the best scoring candidate is stored in the map.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use image::GrayImage;
use rayon::prelude::*;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::disparity::{DisparityAlgorithm, DisparityMap, StereoFrame, UNSET};
use crate::error::*;
use crate::ncc::{score, select_best};
use crate::window::{extract_block, extract_strip};

// -----------------------------------------------------------------------------------------------
// DATA STRUCTURES
// -----------------------------------------------------------------------------------------------

pub struct BlockMatching {
    params: Params,
    cancel: Arc<AtomicBool>
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Params {
    /// Smallest disparity searched, may be negative.
    pub min_disparity: i32,
    /// Number of disparity levels above `min_disparity`.
    pub num_disparities: usize,
    /// Side of the square correlation block, should be odd.
    pub block_size: usize,
    pub output: Output
}

/// What is stored in each written cell of the map.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Output {
    /// The index `k` of the best window in the search strip.
    Index,
    /// The pixel shift `max_disparity - k` of the best window.
    Disparity
}

/// Pixel coordinates whose block and search strip lie inside the images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub xs: Range<usize>,
    pub ys: Range<usize>
}

// -----------------------------------------------------------------------------------------------
// IMPLEMENTATIONS
// -----------------------------------------------------------------------------------------------

impl Default for Params {
    fn default() -> Self {
        Self {
            min_disparity: 0,
            num_disparities: 64,
            block_size: 21,
            output: Output::Index
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Output::Index
    }
}

impl Params {
    /// `min_disparity + num_disparities`.
    pub fn max_disparity(&self) -> i64 {
        self.min_disparity as i64 + self.num_disparities as i64
    }
}

impl Region {
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.xs.contains(&x) && self.ys.contains(&y)
    }
}

impl BlockMatching {
    /// Create a new instance of the algorithm with the given parameters.
    pub fn new(params: Params) -> Result<Self> {
        if params.block_size == 0 {
            return Err(Error::InvalidParams("block size must be at least 1".into()));
        }

        if params.block_size > u32::MAX as usize {
            return Err(Error::InvalidParams(format!(
                "block size {} is larger than any image",
                params.block_size
            )));
        }

        if params.num_disparities > u8::MAX as usize {
            return Err(Error::InvalidParams(format!(
                "{} disparity levels do not fit in an 8-bit map",
                params.num_disparities
            )));
        }

        if params.output == Output::Disparity
            && (params.min_disparity < 0 || params.max_disparity() > u8::MAX as i64)
        {
            return Err(Error::InvalidParams(format!(
                "disparities {}..={} do not fit in an 8-bit map",
                params.min_disparity,
                params.max_disparity()
            )));
        }

        if params.block_size % 2 == 0 {
            warn!(
                "Block size {} is even, blocks will not be centred on their pixel",
                params.block_size
            );
        }

        Ok(Self {
            params,
            cancel: Arc::new(AtomicBool::new(false))
        })
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Flag which, once set, makes a running or future `compute` stop with
    /// [`Error::Cancelled`] before its next row.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// The coordinates that are matched for images of the given size, or `None` if there are
    /// none.
    pub fn eligible_region(&self, width: u32, height: u32) -> Option<Region> {
        let w = (self.params.block_size / 2) as i64;
        let min_disp = self.params.min_disparity as i64;
        let max_disp = self.params.max_disparity();
        let block_size = self.params.block_size as i64;
        let cols = width as i64;
        let rows = height as i64;

        let y_start = w;
        let y_end = rows - w - 1;

        // Block must fit in the left image as well as the strip in the right one
        let x_start = (max_disp + w).max(w);
        let x_end = (cols + min_disp - w - 1).min(cols + w - block_size + 1);

        debug!(
            "Eligible region x: {}..{}, y: {}..{}",
            x_start, x_end, y_start, y_end
        );

        if x_start >= x_end || y_start >= y_end {
            return None;
        }

        Some(Region {
            xs: x_start as usize..x_end as usize,
            ys: y_start as usize..y_end as usize
        })
    }

    /// Value stored in the map for best window `k`.
    fn encode(&self, k: usize) -> u8 {
        match self.params.output {
            Output::Index => k as u8,
            Output::Disparity => (self.params.max_disparity() - k as i64) as u8
        }
    }

    /// Match every eligible pixel of row `y`, writing into `out`.
    fn match_row(
        &self,
        left: &GrayImage,
        right: &GrayImage,
        y: usize,
        xs: Range<usize>,
        out: &mut [u8]
    ) -> Result<()> {
        if self.cancel.load(Ordering::Relaxed) {
            return Err(Error::Cancelled);
        }

        let max_disp = self.params.max_disparity();
        let min_disp = self.params.min_disparity as i64;

        for x in xs {
            let block = extract_block(left, x, y, self.params.block_size)?;
            let strip = extract_strip(right, x, y, self.params.block_size, max_disp, min_disp)?;
            let scores = score(&strip, &block)?;

            out[x] = self.encode(select_best(&scores));
        }

        Ok(())
    }
}

impl DisparityAlgorithm for BlockMatching {
    /// Compute the disparity map for the given frame.
    fn compute(&mut self, frame: &StereoFrame) -> Result<DisparityMap> {
        frame.validate()?;

        let width = frame.width();
        let height = frame.height();

        let region = match self.eligible_region(width, height) {
            Some(r) => r,
            None => {
                info!(
                    "No pixel of the {}x{} frame can be matched with {:?}",
                    width, height, self.params
                );
                return Ok(DisparityMap::new(width, height));
            }
        };

        let mut luma = GrayImage::from_pixel(width, height, image::Luma([UNSET]));

        let this = &*self;
        luma.par_chunks_mut(width as usize)
            .enumerate()
            .filter(|(y, _)| region.ys.contains(y))
            .try_for_each(|(y, row)| {
                this.match_row(&frame.left, &frame.right, y, region.xs.clone(), row)
            })?;

        // Value range of the written cells
        let mut min_disp = u8::MAX;
        let mut max_disp = u8::MIN;
        for y in region.ys.clone() {
            let row = &luma.as_raw()[y * width as usize..(y + 1) * width as usize];
            for &val in &row[region.xs.clone()] {
                min_disp = min_disp.min(val);
                max_disp = max_disp.max(val);
            }
        }

        info!(
            "Matched {}x{} pixels, values {}..={}",
            region.xs.len(),
            region.ys.len(),
            min_disp,
            max_disp
        );

        let mut disp_map = DisparityMap::from_luma(luma);
        disp_map.region = Some(region);
        disp_map.min_disp = Some(min_disp);
        disp_map.max_disp = Some(max_disp);

        Ok(disp_map)
    }
}
