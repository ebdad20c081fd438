//! # Disparity Computation
//!
//! This crate provides dense disparity map computation for rectified grayscale stereo pairs using
//! block matching with normalised cross-correlation.

// -----------------------------------------------------------------------------------------------
// MODULES
// -----------------------------------------------------------------------------------------------

pub mod block_matching;
mod disparity;
mod error;
pub mod ncc;
pub mod render;
#[cfg(feature = "statistics")]
pub mod statistics;
#[cfg(feature = "viewer")]
pub mod viewer;
pub mod window;

// -----------------------------------------------------------------------------------------------
// EXPORTS
// -----------------------------------------------------------------------------------------------

pub use crate::error::{Error, Result};

pub mod prelude {
    pub use crate::block_matching::{BlockMatching, Output, Params};
    pub use crate::disparity::{DisparityAlgorithm, DisparityMap, StereoFrame, UNSET};
}
