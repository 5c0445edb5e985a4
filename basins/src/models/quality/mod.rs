use serde::{Deserialize, Serialize};

use super::resolution::Resolution;

/// Adaptive level-of-detail grid.
///
/// Each raster axis is split into `max(ceil(dim * quality), 1)` cells and
/// every pixel inside a cell reuses the sample computed at the cell's anchor
/// (its top-left pixel). A quality of 1 yields one cell per pixel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QualityGrid {
    pub quality: f64,
}

impl QualityGrid {
    pub fn new(quality: f64) -> Self {
        Self { quality }
    }

    pub fn is_valid(&self) -> bool {
        self.quality.is_finite() && self.quality > 0.0 && self.quality <= 1.0
    }

    fn cells(&self, dimension: u32) -> u32 {
        ((dimension as f64 * self.quality).ceil() as u32).max(1)
    }

    /// The anchor pixel of the cell containing `(col, row)`.
    ///
    /// Cell widths come from integer division, so the last cell of an axis
    /// may be truncated.
    pub fn anchor(&self, col: u32, row: u32, resolution: Resolution) -> (u32, u32) {
        let cell_width = (resolution.width / self.cells(resolution.width)).max(1);
        let cell_height = (resolution.height / self.cells(resolution.height)).max(1);
        ((col / cell_width) * cell_width, (row / cell_height) * cell_height)
    }
}
