#[cfg(test)]
#[path = "../../tests/unit/evolution/config_test.rs"]
mod config_test;

use crate::utils::GenericResult;

/// A default amount of candidates kept in the population.
pub const DEFAULT_POPULATION_SIZE: usize = 100;

/// A default fraction of the next generation produced by crossing.
pub const DEFAULT_CROSS_RATE: f64 = 0.98;

/// A default probability of mutating a crossed child.
pub const DEFAULT_MUTATION_RATE: f64 = 0.4;

/// A closed-form split of the population into unchanged survivors and crossed children.
///
/// Mating all unordered pairs among the top `cross_count + 1` ranked candidates yields
/// exactly `cross_count * (cross_count + 1) / 2` children, which approximates the
/// configured cross rate fraction of the next generation; the remainder survives
/// unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionSplit {
    /// Pairwise crossing covers candidate ranks `0..=cross_count`.
    pub cross_count: usize,
    /// Amount of top ranked candidates carried over unchanged.
    pub survivors_count: usize,
}

impl SelectionSplit {
    /// Derives the split for the given population size and cross rate: `cross_count`
    /// is the largest `n` such that `n * (n + 1) / 2 <= size * rate`, i.e. the floored
    /// positive root of `n^2 + n - 2 * size * rate = 0`.
    pub fn derive(population_size: usize, cross_rate: f64) -> Self {
        let cross_count = (((8. * population_size as f64 * cross_rate + 1.).sqrt() - 1.) / 2.).floor() as usize;

        Self { cross_count, survivors_count: population_size - cross_count * (cross_count + 1) / 2 }
    }

    /// Amount of children produced by mating all pairs among ranks `0..=cross_count`.
    pub fn children_count(&self) -> usize {
        self.cross_count * (self.cross_count + 1) / 2
    }
}

/// A configuration which controls the population based search.
#[derive(Clone, Debug)]
pub struct PopulationConfig {
    /// Amount of candidates kept in the population.
    pub population_size: usize,
    /// A fraction of the next generation produced by crossing, in `(0., 1.]` range.
    pub cross_rate: f64,
    /// A probability of mutating a crossed child, in `[0., 1.]` range.
    pub mutation_rate: f64,
    /// A survivors/children split derived from size and cross rate.
    pub split: SelectionSplit,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            cross_rate: DEFAULT_CROSS_RATE,
            mutation_rate: DEFAULT_MUTATION_RATE,
            split: SelectionSplit::derive(DEFAULT_POPULATION_SIZE, DEFAULT_CROSS_RATE),
        }
    }
}

/// Provides a configurable way to build a population config using fluent interface style.
#[derive(Default)]
pub struct PopulationConfigBuilder {
    population_size: Option<usize>,
    cross_rate: Option<f64>,
    mutation_rate: Option<f64>,
}

impl PopulationConfigBuilder {
    /// Sets population size. Default is 100.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = Some(population_size);
        self
    }

    /// Sets cross rate. Default is 0.98.
    pub fn with_cross_rate(mut self, cross_rate: f64) -> Self {
        self.cross_rate = Some(cross_rate);
        self
    }

    /// Sets mutation rate. Default is 0.4.
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = Some(mutation_rate);
        self
    }

    /// Validates parameters and builds the config, deriving the selection split.
    pub fn build(self) -> GenericResult<PopulationConfig> {
        let population_size = self.population_size.unwrap_or(DEFAULT_POPULATION_SIZE);
        let cross_rate = self.cross_rate.unwrap_or(DEFAULT_CROSS_RATE);
        let mutation_rate = self.mutation_rate.unwrap_or(DEFAULT_MUTATION_RATE);

        if population_size < 2 {
            return Err(format!("population size must be at least 2, got {population_size}").into());
        }

        if !(cross_rate > 0. && cross_rate <= 1.) {
            return Err(format!("cross rate must be in (0., 1.] range, got {cross_rate}").into());
        }

        if !(0. ..=1.).contains(&mutation_rate) {
            return Err(format!("mutation rate must be in [0., 1.] range, got {mutation_rate}").into());
        }

        let split = SelectionSplit::derive(population_size, cross_rate);
        assert_eq!(split.survivors_count + split.children_count(), population_size);

        Ok(PopulationConfig { population_size, cross_rate, mutation_rate, split })
    }
}
