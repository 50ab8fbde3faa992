//! This crate provides an evolutionary search engine which approximates a fixed target
//! grayscale raster. Candidate rasters are improved by randomized rectangular color
//! blends and, in the population based strategy, by recombination between ranked
//! candidates.
//!
//! Two interchangeable strategies implement the same capability interface:
//!
//! * [`evolution::HillClimb`] mutates a single candidate and keeps the mutation only
//!   when it improves fitness;
//! * [`evolution::PopulationSearch`] maintains a ranked population rebuilt every
//!   generation from unchanged survivors and crossed, probabilistically mutated
//!   children.
//!
//! The caller supplies the target as a raw byte buffer and reads the best raster back
//! after every step, e.g. to display it.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

pub mod evolution;
pub mod fitness;
pub mod operators;
pub mod prelude;
pub mod raster;
pub mod termination;
pub mod utils;
