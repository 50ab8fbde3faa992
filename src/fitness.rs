//! This module contains the fitness function used to rank candidate rasters.

#[cfg(test)]
#[path = "../tests/unit/fitness_test.rs"]
mod fitness_test;

use crate::raster::Raster;

/// Computes a sum of squared per-pixel differences between two same shaped rasters.
/// Lower value means a closer match, zero means an exact match.
///
/// Mismatched shapes are a precondition violation, not a recoverable condition.
pub fn score(candidate: &Raster, target: &Raster) -> u64 {
    assert!(
        candidate.same_shape(target),
        "cannot score rasters of different shapes: {}x{} vs {}x{}",
        candidate.width(),
        candidate.height(),
        target.width(),
        target.height()
    );

    candidate
        .as_slice()
        .iter()
        .zip(target.as_slice())
        .map(|(&candidate, &target)| {
            let diff = candidate as i64 - target as i64;
            (diff * diff) as u64
        })
        .sum()
}
