#[cfg(test)]
#[path = "../../tests/unit/termination/max_generation_test.rs"]
mod max_generation_test;

use super::*;
use std::marker::PhantomData;

/// A termination criteria which is in terminated state when the maximum amount of
/// generations is reached.
pub struct MaxGeneration<S>
where
    S: SearchStrategy,
{
    limit: usize,
    _marker: PhantomData<S>,
}

impl<S> MaxGeneration<S>
where
    S: SearchStrategy,
{
    /// Creates a new instance of `MaxGeneration`.
    pub fn new(limit: usize) -> Self {
        Self { limit, _marker: PhantomData }
    }
}

impl<S> Termination for MaxGeneration<S>
where
    S: SearchStrategy,
{
    type Strategy = S;

    fn is_termination(&self, strategy: &Self::Strategy) -> bool {
        strategy.generation() >= self.limit
    }

    fn estimate(&self, strategy: &Self::Strategy) -> f64 {
        (strategy.generation() as f64 / self.limit as f64).min(1.)
    }
}
