use super::*;
use crate::helpers::*;
use crate::operators::RectBlend;
use crate::utils::Environment;

fn create_hill_climb(target: Raster, seed: u64) -> HillClimb<RectBlend> {
    let mutation = RectBlend::new(target.width(), target.height());
    HillClimb::new(target, mutation, create_test_environment(seed), TelemetryMode::None)
}

#[test]
fn can_start_from_black_raster() {
    let target = create_filled_raster(8, 8, 200);
    let search = create_hill_climb(target.clone(), 42);

    assert_eq!(search.generation(), 0);
    assert!(search.best().as_slice().iter().all(|&pixel| pixel == 0));
    assert_eq!(search.best_score(), score(search.best(), &target));
}

#[test]
fn can_never_regress_and_eventually_improve() {
    let target = create_filled_raster(8, 8, 200);
    let mut search = create_hill_climb(target, 42);
    let initial_score = search.best_score();

    let mut last_score = initial_score;
    for _ in 0..200 {
        search.step();
        assert!(search.best_score() <= last_score);
        last_score = search.best_score();
    }

    assert_eq!(search.generation(), 200);
    assert!(search.best_score() < initial_score);
}

#[test]
fn can_discard_non_improving_mutation() {
    let target = create_filled_raster(8, 8, 200);
    let mutation = RectBlend::new(8, 8);
    // a minimum echo random forces a 1x1 black edit at (0, 0) which cannot change
    // an all-black candidate, so the equal score must be discarded
    let environment = Environment::new(std::sync::Arc::new(EchoRandom::new(true, true)), std::sync::Arc::new(|_: &str| {}));
    let mut search = HillClimb::new(target, mutation, std::sync::Arc::new(environment), TelemetryMode::None);

    let initial_score = search.best_score();
    search.step();

    assert_eq!(search.generation(), 1);
    assert_eq!(search.best_score(), initial_score);
    assert!(search.best().as_slice().iter().all(|&pixel| pixel == 0));
}
