use super::*;
use crate::helpers::*;
use crate::operators::{PixelwiseMean, RectBlend};

fn create_population_search(target: Raster, config: PopulationConfig, seed: u64) -> PopulationSearch<RectBlend, PixelwiseMean> {
    let mutation = RectBlend::new(target.width(), target.height());
    PopulationSearch::new(target, config, mutation, PixelwiseMean, create_test_environment(seed), TelemetryMode::None)
}

fn assert_ranked(search: &PopulationSearch<RectBlend, PixelwiseMean>, expected_size: usize) {
    let scores = search.ranked().map(|candidate| candidate.score()).collect::<Vec<_>>();

    assert_eq!(scores.len(), expected_size);
    assert!(scores.windows(2).all(|pair| pair[0] <= pair[1]), "population is not ranked: {scores:?}");
    assert!(scores.iter().all(|&score| score != u64::MAX), "population has unscored candidates");
}

#[test]
fn can_create_scored_and_ranked_initial_population() {
    let search = create_population_search(create_patterned_raster(8, 8), PopulationConfig::default(), 42);

    assert_eq!(search.generation(), 0);
    assert_ranked(&search, 100);
    assert_eq!(search.best_score(), search.ranked().next().unwrap().score());
}

#[test]
fn can_keep_population_invariants_on_each_step() {
    let config = PopulationConfig::default();
    let mut search = create_population_search(create_patterned_raster(8, 8), config.clone(), 42);

    let mut last_best = search.best_score();
    for generation in 1..=20 {
        search.step();

        assert_eq!(search.generation(), generation);
        assert_ranked(&search, config.population_size);
        // elitism: the best candidate always survives, so the best score never regresses
        assert!(search.best_score() <= last_best);
        last_best = search.best_score();
    }
}

#[test]
fn can_approach_flat_white_target() {
    let target = create_filled_raster(4, 4, 255);
    let initial_score = 16 * 255 * 255;
    let mut search = create_population_search(target, PopulationConfig::default(), 42);

    let mut last_best = search.best_score();
    assert!(last_best <= initial_score as u64);

    for _ in 0..500 {
        search.step();
        assert!(search.best_score() <= last_best);
        last_best = search.best_score();
    }

    assert!(search.best_score() < initial_score as u64);
    // blending rectangles toward a flat target converges quickly on a 4x4 raster
    assert!(search.best_score() < initial_score as u64 / 10);
}

#[test]
fn can_work_with_custom_split() {
    let config = PopulationConfigBuilder::default()
        .with_population_size(10)
        .with_cross_rate(1.)
        .with_mutation_rate(1.)
        .build()
        .unwrap();
    let mut search = create_population_search(create_patterned_raster(4, 4), config, 7);

    for _ in 0..10 {
        search.step();
        assert_ranked(&search, 10);
    }
}
