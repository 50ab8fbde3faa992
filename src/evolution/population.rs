#[cfg(test)]
#[path = "../../tests/unit/evolution/population_test.rs"]
mod population_test;

use super::*;
use crate::fitness::score;
use crate::operators::{Crossover, Mutation};
use crate::utils::{Environment, Timer};
use std::sync::Arc;

/// A sentinel score of a candidate which was not scored yet.
const UNSCORED: u64 = u64::MAX;

/// A raster with its cached fitness score. The score is stale after any mutation
/// until the candidate is rescored.
#[derive(Clone)]
pub struct Candidate {
    raster: Raster,
    score: u64,
}

impl Candidate {
    fn new(raster: Raster) -> Self {
        Self { raster, score: UNSCORED }
    }

    fn rescore(&mut self, target: &Raster) {
        self.score = score(&self.raster, target);
    }

    /// Returns the underlying raster.
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Returns the cached fitness score.
    pub fn score(&self) -> u64 {
        self.score
    }
}

/// A ranked population strategy. Each generation is built from scratch: the top
/// ranked candidates survive unchanged, the rest of the population is filled by
/// mating all unordered pairs among the top `cross_count + 1` ranks, children are
/// mutated probabilistically, rescored, and the whole population is ranked again.
pub struct PopulationSearch<M, C>
where
    M: Mutation,
    C: Crossover,
{
    target: Raster,
    config: PopulationConfig,
    mutation: M,
    crossover: C,
    environment: Arc<Environment>,
    telemetry: Telemetry,
    population: Vec<Candidate>,
    generation: usize,
}

impl<M, C> PopulationSearch<M, C>
where
    M: Mutation,
    C: Crossover,
{
    /// Creates a new instance of `PopulationSearch`. The initial population starts
    /// from all-black candidates, each mutated once for diversity, scored and ranked,
    /// so the first [`SearchStrategy::step`] call already reads a sorted population.
    pub fn new(
        target: Raster,
        config: PopulationConfig,
        mutation: M,
        crossover: C,
        environment: Arc<Environment>,
        telemetry_mode: TelemetryMode,
    ) -> Self {
        let mut population = (0..config.population_size)
            .map(|_| {
                let mut candidate = Candidate::new(Raster::like(&target));
                mutation.mutate(&mut candidate.raster, environment.random.as_ref());
                candidate.rescore(&target);
                candidate
            })
            .collect::<Vec<_>>();
        population.sort_by_key(|candidate| candidate.score);

        Self {
            target,
            config,
            mutation,
            crossover,
            environment,
            telemetry: Telemetry::new(telemetry_mode),
            population,
            generation: 0,
        }
    }

    /// Returns ranked candidates, best first.
    pub fn ranked(&self) -> impl Iterator<Item = &Candidate> {
        self.population.iter()
    }

    /// Returns collected telemetry metrics, if enabled.
    pub fn take_metrics(&mut self) -> Option<TelemetryMetrics> {
        self.telemetry.take_metrics()
    }
}

impl<M, C> SearchStrategy for PopulationSearch<M, C>
where
    M: Mutation,
    C: Crossover,
{
    fn step(&mut self) {
        let SelectionSplit { cross_count, survivors_count } = self.config.split;
        let random = self.environment.random.as_ref();

        let mut next_gen: Vec<Candidate> = Vec::with_capacity(self.config.population_size);

        let (_, copy) = Timer::measure_duration(|| {
            next_gen.extend(self.population[..survivors_count].iter().cloned())
        });

        let (_, cross) = Timer::measure_duration(|| {
            for left in 0..=cross_count {
                for right in left + 1..=cross_count {
                    let child = self.crossover.mate(self.population[left].raster(), self.population[right].raster());
                    next_gen.push(Candidate::new(child));
                }
            }
        });

        // survivors are exempt from mutation, their scores stay valid
        let (_, mutate) = Timer::measure_duration(|| {
            next_gen[survivors_count..].iter_mut().for_each(|candidate| {
                if random.is_hit(self.config.mutation_rate) {
                    self.mutation.mutate(&mut candidate.raster, random);
                }
            })
        });

        let (_, rescore) = Timer::measure_duration(|| {
            next_gen[survivors_count..].iter_mut().for_each(|candidate| candidate.rescore(&self.target))
        });

        let (_, sort) = Timer::measure_duration(|| next_gen.sort_by_key(|candidate| candidate.score));

        debug_assert_eq!(next_gen.len(), self.config.population_size);

        self.population = next_gen;
        self.generation += 1;

        let best_score = self.population[0].score;
        self.telemetry.on_generation(
            self.generation,
            best_score,
            PhaseTimings { copy, cross, mutate, rescore, sort },
        );
    }

    fn best(&self) -> &Raster {
        self.population[0].raster()
    }

    fn best_score(&self) -> u64 {
        self.population[0].score
    }

    fn generation(&self) -> usize {
        self.generation
    }
}
