//! This module contains search operators which transform candidate rasters.

mod crossover;
pub use self::crossover::*;

mod mutation;
pub use self::mutation::*;

use crate::raster::Raster;
use crate::utils::Random;

/// An operator which applies a randomized in-place edit to a raster.
pub trait Mutation {
    /// Mutates the raster in place and returns the applied edit.
    fn mutate(&self, raster: &mut Raster, random: &dyn Random) -> RectEdit;
}

/// An operator which recombines two parent rasters into a new child raster.
pub trait Crossover {
    /// Produces a child raster from two parents of the same shape.
    /// Parents are left untouched.
    fn mate(&self, left: &Raster, right: &Raster) -> Raster;
}
