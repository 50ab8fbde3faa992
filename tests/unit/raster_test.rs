use super::*;

#[test]
fn can_create_black_raster() {
    let raster = Raster::black(6, 4).unwrap();

    assert_eq!(raster.width(), 6);
    assert_eq!(raster.height(), 4);
    assert_eq!(raster.pixel_count(), 24);
    assert!(raster.as_slice().iter().all(|&pixel| pixel == 0));
}

#[test]
fn can_accept_minimum_shape() {
    assert!(Raster::black(MIN_WIDTH, MIN_HEIGHT).is_ok());
}

#[test]
fn can_reject_shapes_below_minimum() {
    assert!(Raster::black(3, 4).is_err());
    assert!(Raster::black(4, 3).is_err());
    assert!(Raster::from_raw(3, 3, vec![0; 9]).is_err());
}

#[test]
fn can_reject_wrong_buffer_size() {
    assert!(Raster::from_raw(4, 4, vec![0; 15]).is_err());
    assert!(Raster::from_raw(4, 4, vec![0; 17]).is_err());
    assert!(Raster::from_raw(4, 4, vec![0; 16]).is_ok());
}

#[test]
fn can_index_pixels_row_major() {
    let mut raster = Raster::from_raw(4, 4, (0u8..16).collect()).unwrap();

    assert_eq!(raster.pixel(0, 0), 0);
    assert_eq!(raster.pixel(0, 3), 3);
    assert_eq!(raster.pixel(1, 0), 4);
    assert_eq!(raster.pixel(3, 2), 14);

    *raster.pixel_mut(2, 1) = 200;
    assert_eq!(raster.pixel(2, 1), 200);
    assert_eq!(raster.as_slice()[2 * 4 + 1], 200);
}

#[test]
fn can_create_raster_with_same_shape() {
    let original = Raster::from_raw(5, 4, vec![42; 20]).unwrap();
    let like = Raster::like(&original);

    assert!(like.same_shape(&original));
    assert!(like.as_slice().iter().all(|&pixel| pixel == 0));
}

#[test]
fn can_fill_raster() {
    let mut raster = Raster::black(4, 4).unwrap();
    raster.fill(127);

    assert!(raster.as_slice().iter().all(|&pixel| pixel == 127));
}
