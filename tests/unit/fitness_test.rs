use super::*;
use crate::helpers::*;

#[test]
fn can_score_identical_rasters_as_zero() {
    let raster = create_patterned_raster(8, 6);

    assert_eq!(score(&raster, &raster), 0);
}

#[test]
fn can_score_symmetrically() {
    let left = create_patterned_raster(8, 6);
    let right = create_filled_raster(8, 6, 200);

    assert_eq!(score(&left, &right), score(&right, &left));
}

#[test]
fn can_score_extreme_difference() {
    let black = create_filled_raster(4, 4, 0);
    let white = create_filled_raster(4, 4, 255);

    assert_eq!(score(&black, &white), 16 * 255 * 255);
    assert_eq!(score(&black, &white), 1_040_400);
}

#[test]
fn can_decrease_score_when_pixel_gets_closer() {
    let target = create_filled_raster(4, 4, 255);
    let mut candidate = create_filled_raster(4, 4, 0);

    let before = score(&candidate, &target);
    *candidate.pixel_mut(1, 2) = 255;
    let after = score(&candidate, &target);

    assert_eq!(before - after, 255 * 255);
}

#[test]
#[should_panic(expected = "cannot score rasters of different shapes")]
fn can_reject_different_shapes() {
    let left = create_filled_raster(4, 4, 0);
    let right = create_filled_raster(8, 4, 0);

    score(&left, &right);
}
