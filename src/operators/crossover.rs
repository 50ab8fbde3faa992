#[cfg(test)]
#[path = "../../tests/unit/operators/crossover_test.rs"]
mod crossover_test;

use super::*;

/// A crossover which averages parents pixel-wise: every child pixel is the integer
/// average of the parent pixels, rounded down. The same rounding rule as in
/// [`RectBlend`] mutation.
pub struct PixelwiseMean;

impl Crossover for PixelwiseMean {
    fn mate(&self, left: &Raster, right: &Raster) -> Raster {
        assert!(
            left.same_shape(right),
            "cannot mate rasters of different shapes: {}x{} vs {}x{}",
            left.width(),
            left.height(),
            right.width(),
            right.height()
        );

        let mut child = Raster::like(left);
        child
            .as_mut_slice()
            .iter_mut()
            .zip(left.as_slice().iter().zip(right.as_slice()))
            .for_each(|(pixel, (&left, &right))| *pixel = ((left as u16 + right as u16) >> 1) as u8);

        child
    }
}
