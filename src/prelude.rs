//! This module reimports commonly used types.

pub use crate::raster::Raster;

pub use crate::fitness::score;

pub use crate::operators::{Crossover, Mutation, PixelwiseMean, RectBlend, RectEdit};

pub use crate::evolution::{
    Candidate, HillClimb, PopulationConfig, PopulationConfigBuilder, PopulationSearch, SearchStrategy, SelectionSplit,
    Simulator,
};
pub use crate::evolution::{PhaseTimings, Telemetry, TelemetryMetrics, TelemetryMode};

pub use crate::termination::{CompositeTermination, MaxGeneration, TargetScore, Termination};

pub use crate::utils::{DefaultRandom, Random, RandomGen};
pub use crate::utils::{Environment, InfoLogger};
pub use crate::utils::{GenericError, GenericResult};
pub use crate::utils::Timer;
