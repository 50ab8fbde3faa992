//! This module contains a grayscale raster model used by the search engine.

#[cfg(test)]
#[path = "../tests/unit/raster_test.rs"]
mod raster_test;

use crate::utils::GenericResult;

/// A divider applied to the raster width to get the maximum mutation extent.
pub const WIDTH_ADJUST_DIVIDER: usize = 2;

/// A divider applied to the raster height to get the maximum mutation extent.
pub const HEIGHT_ADJUST_DIVIDER: usize = 2;

/// A minimum accepted raster width. Keeps mutation extent sampling ranges non empty.
pub const MIN_WIDTH: usize = 2 * WIDTH_ADJUST_DIVIDER;

/// A minimum accepted raster height. Keeps mutation extent sampling ranges non empty.
pub const MIN_HEIGHT: usize = 2 * HEIGHT_ADJUST_DIVIDER;

/// A fixed-size single channel pixel buffer stored in row-major order.
/// The buffer length is always `width * height` and the shape never changes after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Raster {
    /// Creates an all-black raster of the given shape.
    pub fn black(width: usize, height: usize) -> GenericResult<Self> {
        validate_shape(width, height)?;

        Ok(Self { width, height, pixels: vec![0; width * height] })
    }

    /// Creates a raster from a raw byte buffer, one byte per pixel, row-major.
    /// Returns a configuration error when the shape is below the minimum or
    /// the buffer length does not match the shape.
    pub fn from_raw(width: usize, height: usize, pixels: Vec<u8>) -> GenericResult<Self> {
        validate_shape(width, height)?;

        if pixels.len() != width * height {
            return Err(format!(
                "incorrect image buffer size: expected {} bytes, got {}",
                width * height,
                pixels.len()
            )
            .into());
        }

        Ok(Self { width, height, pixels })
    }

    /// Creates an all-black raster with the same shape as the given one.
    pub fn like(other: &Raster) -> Self {
        Self { width: other.width, height: other.height, pixels: vec![0; other.pixels.len()] }
    }

    /// Returns raster width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns raster height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns total amount of pixels.
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Returns a pixel value at the given position.
    pub fn pixel(&self, row: usize, col: usize) -> u8 {
        self.pixels[row * self.width + col]
    }

    /// Returns a mutable reference to a pixel value at the given position.
    pub fn pixel_mut(&mut self, row: usize, col: usize) -> &mut u8 {
        &mut self.pixels[row * self.width + col]
    }

    /// Returns the pixel buffer as a slice.
    pub fn as_slice(&self) -> &[u8] {
        self.pixels.as_slice()
    }

    /// Returns the pixel buffer as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        self.pixels.as_mut_slice()
    }

    /// Sets every pixel to the given color.
    pub fn fill(&mut self, color: u8) {
        self.pixels.fill(color)
    }

    /// Checks whether both rasters have the same shape.
    pub fn same_shape(&self, other: &Raster) -> bool {
        self.width == other.width && self.height == other.height
    }
}

fn validate_shape(width: usize, height: usize) -> GenericResult<()> {
    if width < MIN_WIDTH {
        return Err(format!("width must be an integer greater or equal {MIN_WIDTH}, got {width}").into());
    }

    if height < MIN_HEIGHT {
        return Err(format!("height must be an integer greater or equal {MIN_HEIGHT}, got {height}").into());
    }

    Ok(())
}
