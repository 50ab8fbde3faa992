#[cfg(test)]
#[path = "../../tests/unit/evolution/hill_climb_test.rs"]
mod hill_climb_test;

use super::*;
use crate::fitness::score;
use crate::operators::Mutation;
use crate::utils::{Environment, Timer};
use std::sync::Arc;

/// A single candidate strategy: mutate a scratch copy of the current best and keep it
/// only when its fitness strictly improves. Equal-or-worse mutations are always
/// discarded, so the best score never increases.
pub struct HillClimb<M>
where
    M: Mutation,
{
    target: Raster,
    mutation: M,
    environment: Arc<Environment>,
    telemetry: Telemetry,
    best: Raster,
    best_score: u64,
    scratch: Raster,
    generation: usize,
}

impl<M> HillClimb<M>
where
    M: Mutation,
{
    /// Creates a new instance of `HillClimb` which starts from an all-black raster
    /// scored against the target.
    pub fn new(target: Raster, mutation: M, environment: Arc<Environment>, telemetry_mode: TelemetryMode) -> Self {
        let best = Raster::like(&target);
        let best_score = score(&best, &target);
        let scratch = best.clone();

        Self {
            target,
            mutation,
            environment,
            telemetry: Telemetry::new(telemetry_mode),
            best,
            best_score,
            scratch,
            generation: 0,
        }
    }

    /// Returns collected telemetry metrics, if enabled.
    pub fn take_metrics(&mut self) -> Option<TelemetryMetrics> {
        self.telemetry.take_metrics()
    }
}

impl<M> SearchStrategy for HillClimb<M>
where
    M: Mutation,
{
    fn step(&mut self) {
        self.scratch.clone_from(&self.best);

        let (_, mutate) = Timer::measure_duration(|| {
            self.mutation.mutate(&mut self.scratch, self.environment.random.as_ref())
        });

        let (new_score, rescore) = Timer::measure_duration(|| score(&self.scratch, &self.target));

        if new_score < self.best_score {
            // the scratch storage of the discarded raster is reused on the next step
            std::mem::swap(&mut self.best, &mut self.scratch);
            self.best_score = new_score;
        }

        self.generation += 1;
        self.telemetry.on_generation(
            self.generation,
            self.best_score,
            PhaseTimings { mutate, rescore, ..PhaseTimings::default() },
        );
    }

    fn best(&self) -> &Raster {
        &self.best
    }

    fn best_score(&self) -> u64 {
        self.best_score
    }

    fn generation(&self) -> usize {
        self.generation
    }
}
