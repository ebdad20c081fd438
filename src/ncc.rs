//! # Normalised cross-correlation
//!
//! Scores every alignment of a block along a search strip and selects the best one.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use crate::error::*;
use crate::window::{Block, SearchStrip};

// -----------------------------------------------------------------------------------------------
// TYPES
// -----------------------------------------------------------------------------------------------

/// Correlation score of each window of a search strip, indexed by offset from the strip's left
/// edge.
pub type ScoreRow = Vec<f64>;

// -----------------------------------------------------------------------------------------------
// FUNCTIONS
// -----------------------------------------------------------------------------------------------

/// Normalised cross-correlation of two equally sized blocks.
///
/// `sum(a * b) / sqrt(sum(a^2) * sum(b^2))`, without mean removal. If either block is entirely
/// zero the score is 0.
pub fn ncc(a: &Block, b: &Block) -> f64 {
    debug_assert_eq!(a.size(), b.size());

    let mut ab = 0u64;
    let mut aa = 0u64;
    let mut bb = 0u64;

    for (row_a, row_b) in a.rows().zip(b.rows()) {
        for (&pa, &pb) in row_a.iter().zip(row_b) {
            let pa = pa as u64;
            let pb = pb as u64;
            ab += pa * pb;
            aa += pa * pa;
            bb += pb * pb;
        }
    }

    if aa == 0 || bb == 0 {
        return 0.0;
    }

    ab as f64 / (aa as f64 * bb as f64).sqrt()
}

/// Score `block` against every block sized window of `strip`.
///
/// The returned row has one entry per window, so `num_disparities + 1` entries for a strip built
/// by [`extract_strip`](crate::window::extract_strip).
pub fn score(strip: &SearchStrip, block: &Block) -> Result<ScoreRow> {
    if strip.height() != block.size() {
        return Err(Error::WindowMismatch {
            block: block.size(),
            strip_height: strip.height()
        });
    }

    Ok((0..strip.num_windows())
        .filter_map(|k| strip.window(k))
        .map(|window| ncc(&window, block))
        .collect())
}

/// Index of the highest score, the first one found if several are equal.
///
/// An empty row selects index 0.
pub fn select_best(scores: &[f64]) -> usize {
    scores
        .iter()
        .enumerate()
        .fold(0, |max_idx, (idx, &val)| {
            if val > scores[max_idx] {
                idx
            }
            else {
                max_idx
            }
        })
}
