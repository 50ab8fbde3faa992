#[cfg(test)]
#[path = "../../tests/unit/operators/mutation_test.rs"]
mod mutation_test;

use super::*;
use crate::raster::{HEIGHT_ADJUST_DIVIDER, WIDTH_ADJUST_DIVIDER};

/// Describes a rectangular edit applied by a mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectEdit {
    /// Column of the top-left corner.
    pub x: usize,
    /// Row of the top-left corner.
    pub y: usize,
    /// Edit width in pixels.
    pub width: usize,
    /// Edit height in pixels.
    pub height: usize,
    /// The color blended into the rectangle.
    pub color: u8,
}

/// A mutation which blends a random rectangle of the raster with a random color:
/// every covered pixel becomes the integer average of its old value and the color,
/// rounded down.
pub struct RectBlend {
    color_range: (u8, u8),
    width_range: (usize, usize),
    height_range: (usize, usize),
}

impl RectBlend {
    /// Creates an instance with default ranges for the given raster shape: a full
    /// color range and edit extents within `[1, width / 2]` and `[1, height / 2]`.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_ranges(
            (0, u8::MAX),
            (1, width / WIDTH_ADJUST_DIVIDER),
            (1, height / HEIGHT_ADJUST_DIVIDER),
        )
    }

    /// Creates an instance with custom sampling ranges, all bounds inclusive.
    pub fn with_ranges(color_range: (u8, u8), width_range: (usize, usize), height_range: (usize, usize)) -> Self {
        assert!(color_range.0 <= color_range.1, "invalid color range");
        assert!(0 < width_range.0 && width_range.0 <= width_range.1, "invalid width range");
        assert!(0 < height_range.0 && height_range.0 <= height_range.1, "invalid height range");

        Self { color_range, width_range, height_range }
    }
}

impl Mutation for RectBlend {
    fn mutate(&self, raster: &mut Raster, random: &dyn Random) -> RectEdit {
        assert!(
            self.width_range.1 <= raster.width() && self.height_range.1 <= raster.height(),
            "mutation extent ranges exceed raster shape"
        );

        let width = random.uniform_int(self.width_range.0 as i32, self.width_range.1 as i32) as usize;
        let height = random.uniform_int(self.height_range.0 as i32, self.height_range.1 as i32) as usize;
        // sample the top-left corner so that the rectangle always stays in bounds
        let x = random.uniform_int(0, (raster.width() - width) as i32) as usize;
        let y = random.uniform_int(0, (raster.height() - height) as i32) as usize;
        let color = random.uniform_int(self.color_range.0 as i32, self.color_range.1 as i32) as u8;

        for row in y..y + height {
            for col in x..x + width {
                let pixel = raster.pixel_mut(row, col);
                *pixel = ((*pixel as u16 + color as u16) >> 1) as u8;
            }
        }

        RectEdit { x, y, width, height, color }
    }
}
