#[cfg(test)]
#[path = "../../tests/unit/termination/target_score_test.rs"]
mod target_score_test;

use super::*;
use std::marker::PhantomData;

/// A termination criteria which stops the search when the best fitness score drops
/// to the given threshold or below.
pub struct TargetScore<S>
where
    S: SearchStrategy,
{
    threshold: u64,
    _marker: PhantomData<S>,
}

impl<S> TargetScore<S>
where
    S: SearchStrategy,
{
    /// Creates a new instance of `TargetScore`.
    pub fn new(threshold: u64) -> Self {
        Self { threshold, _marker: PhantomData }
    }
}

impl<S> Termination for TargetScore<S>
where
    S: SearchStrategy,
{
    type Strategy = S;

    fn is_termination(&self, strategy: &Self::Strategy) -> bool {
        strategy.best_score() <= self.threshold
    }

    fn estimate(&self, _: &Self::Strategy) -> f64 {
        0.
    }
}
