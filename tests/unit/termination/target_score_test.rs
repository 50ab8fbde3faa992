use super::*;
use crate::evolution::{HillClimb, TelemetryMode};
use crate::helpers::*;
use crate::operators::RectBlend;

fn create_search() -> HillClimb<RectBlend> {
    let target = create_filled_raster(4, 4, 128);
    HillClimb::new(target, RectBlend::new(4, 4), create_test_environment(0), TelemetryMode::None)
}

#[test]
fn can_terminate_when_threshold_is_reached() {
    let search = create_search();

    assert!(TargetScore::new(search.best_score()).is_termination(&search));
    assert!(TargetScore::new(u64::MAX).is_termination(&search));
    assert!(!TargetScore::new(0).is_termination(&search));
}

#[test]
fn can_estimate_as_zero() {
    let search = create_search();

    assert_eq!(TargetScore::new(0).estimate(&search), 0.);
}
