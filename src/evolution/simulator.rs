#[cfg(test)]
#[path = "../../tests/unit/evolution/simulator_test.rs"]
mod simulator_test;

use super::*;
use crate::termination::Termination;
use crate::utils::{Environment, Timer};
use std::sync::Arc;

/// Drives a search strategy until a termination criteria is met. A strategy itself has
/// no terminal state, so the simulator plays the role of the external caller which
/// ticks the search.
pub struct Simulator<S>
where
    S: SearchStrategy,
{
    strategy: S,
    termination: Box<dyn Termination<Strategy = S>>,
    environment: Arc<Environment>,
}

impl<S> Simulator<S>
where
    S: SearchStrategy,
{
    /// Creates a new instance of `Simulator`.
    pub fn new(strategy: S, termination: Box<dyn Termination<Strategy = S>>, environment: Arc<Environment>) -> Self {
        Self { strategy, termination, environment }
    }

    /// Runs steps until termination and returns the strategy back for inspection.
    pub fn run(self) -> S {
        let mut strategy = self.strategy;
        let total_time = Timer::start();

        while !self.termination.is_termination(&strategy) {
            strategy.step();
        }

        (self.environment.logger)(&format!(
            "search stopped after {} generation(s) in {}ms, best score: {}",
            strategy.generation(),
            total_time.elapsed_millis(),
            strategy.best_score()
        ));

        strategy
    }
}
