//! # Error standards
//!
//! This module provides a standardised error enum and result type for this crate.

// -----------------------------------------------------------------------------------------------
// TYPES
// -----------------------------------------------------------------------------------------------

/// Standard result type used in the disparity crate.
pub type Result<T> = std::result::Result<T, Error>;

// -----------------------------------------------------------------------------------------------
// ENUMERATIONS
// -----------------------------------------------------------------------------------------------

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A block or strip does not fit inside the image it is taken from.
    #[error(
        "{width}x{height} region at ({x}, {y}) is outside the {grid_width}x{grid_height} image"
    )]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
        grid_width: u32,
        grid_height: u32
    },

    #[error("block of size {block} cannot be scored against a strip of height {strip_height}")]
    WindowMismatch {
        block: usize,
        strip_height: usize
    },

    #[error("left image is {left:?} but right image is {right:?}")]
    SizeMismatch {
        left: (u32, u32),
        right: (u32, u32)
    },

    #[error("stereo frame contains an empty image")]
    EmptyImage,

    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    #[error("disparity computation was cancelled")]
    Cancelled,

    #[error("failed to load image: {0}")]
    Image(#[from] image::ImageError),

    #[cfg(feature = "viewer")]
    #[error("viewer error: {0}")]
    Viewer(String),

    #[cfg(feature = "statistics")]
    #[error("statistics plotting failed: {0}")]
    Statistics(String)
}
