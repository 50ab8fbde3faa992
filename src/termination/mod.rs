//! The termination module contains logic which defines termination criteria for the
//! search, e.g. when to stop ticking a strategy.

use crate::evolution::SearchStrategy;
use crate::utils::compare_floats;

mod max_generation;
pub use self::max_generation::MaxGeneration;

mod target_score;
pub use self::target_score::TargetScore;

/// A trait which specifies criteria when the search should stop.
pub trait Termination {
    /// A search strategy type the criteria applies to.
    type Strategy: SearchStrategy;

    /// Returns true if the termination condition is met.
    fn is_termination(&self, strategy: &Self::Strategy) -> bool;

    /// Returns a relative estimation till termination. Value is in the `[0, 1]` range.
    fn estimate(&self, strategy: &Self::Strategy) -> f64;
}

/// A termination which encapsulates multiple termination criteria: the search stops
/// as soon as any of them fires.
pub struct CompositeTermination<S>
where
    S: SearchStrategy,
{
    terminations: Vec<Box<dyn Termination<Strategy = S>>>,
}

impl<S> CompositeTermination<S>
where
    S: SearchStrategy,
{
    /// Creates a new instance of `CompositeTermination`.
    pub fn new(terminations: Vec<Box<dyn Termination<Strategy = S>>>) -> Self {
        Self { terminations }
    }
}

impl<S> Termination for CompositeTermination<S>
where
    S: SearchStrategy,
{
    type Strategy = S;

    fn is_termination(&self, strategy: &Self::Strategy) -> bool {
        self.terminations.iter().any(|termination| termination.is_termination(strategy))
    }

    fn estimate(&self, strategy: &Self::Strategy) -> f64 {
        self.terminations
            .iter()
            .map(|termination| termination.estimate(strategy))
            .max_by(|a, b| compare_floats(*a, *b))
            .unwrap_or(0.)
    }
}
