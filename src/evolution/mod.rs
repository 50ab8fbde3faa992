//! This module contains search strategies which iteratively approximate a target raster.

mod config;
pub use self::config::*;

mod hill_climb;
pub use self::hill_climb::*;

mod population;
pub use self::population::*;

mod simulator;
pub use self::simulator::*;

pub mod telemetry;
pub use self::telemetry::*;

use crate::raster::Raster;

/// A capability interface implemented by every search strategy.
///
/// A strategy has no terminal state on its own: the caller invokes [`SearchStrategy::step`]
/// once per tick and reads the best raster back, typically for display, until it decides
/// to stop.
pub trait SearchStrategy {
    /// Advances the search by one tick: a single mutation trial or a whole generation,
    /// depending on the strategy.
    fn step(&mut self);

    /// Returns the best raster found so far.
    fn best(&self) -> &Raster;

    /// Returns the fitness score of the best raster, lower is better.
    fn best_score(&self) -> u64;

    /// Returns amount of completed steps.
    fn generation(&self) -> usize;
}
