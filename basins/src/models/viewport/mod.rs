use complex_rs::complex::Complex;
use serde::{Deserialize, Serialize};

use super::resolution::Resolution;

/// The portion of the complex plane shown by a raster.
///
/// `zoom` is pixels per plane unit, so the plane step between two adjacent
/// pixels is `1 / zoom`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Viewport {
    pub center: Complex,
    pub zoom: f64,
}

impl Viewport {
    pub fn new(center: Complex, zoom: f64) -> Self {
        Self { center, zoom }
    }

    /// Maps a raster pixel to its plane coordinate.
    ///
    /// Row 0 is the top of the raster while the imaginary axis grows upward,
    /// so the row axis is inverted.
    pub fn pixel_to_plane(&self, col: u32, row: u32, resolution: Resolution) -> Complex {
        let step = 1.0 / self.zoom;
        let re = self.center.re - resolution.width as f64 * step / 2.0 + col as f64 * step;
        let im = self.center.im + resolution.height as f64 * step / 2.0 - row as f64 * step;
        Complex::new(re, im)
    }

    /// Rounding inverse of [`pixel_to_plane`](Self::pixel_to_plane).
    ///
    /// Returns `(row, col)`, possibly outside the raster; callers clip.
    pub fn plane_to_pixel(&self, point: Complex, resolution: Resolution) -> (i64, i64) {
        let step = 1.0 / self.zoom;
        let left = self.center.re - resolution.width as f64 * step / 2.0;
        let top = self.center.im + resolution.height as f64 * step / 2.0;
        let col = ((point.re - left) / step).round() as i64;
        let row = ((top - point.im) / step).round() as i64;
        (row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_to_plane_round_trips() {
        let viewport = Viewport::new(Complex::new(0.5, -1.25), 64.0);
        let resolution = Resolution::new(320, 200);

        for &(col, row) in &[(0, 0), (319, 199), (160, 100), (7, 42)] {
            let point = viewport.pixel_to_plane(col, row, resolution);
            let (r, c) = viewport.plane_to_pixel(point, resolution);
            assert_eq!((r, c), (row as i64, col as i64));
        }
    }

    #[test]
    fn row_axis_is_inverted() {
        let viewport = Viewport::new(Complex::new(0.0, 0.0), 10.0);
        let resolution = Resolution::new(100, 100);

        let top = viewport.pixel_to_plane(50, 0, resolution);
        let bottom = viewport.pixel_to_plane(50, 99, resolution);
        assert!(top.im > bottom.im);
    }

    #[test]
    fn zoom_sets_the_plane_step() {
        let viewport = Viewport::new(Complex::new(0.0, 0.0), 4.0);
        let resolution = Resolution::new(8, 8);

        let a = viewport.pixel_to_plane(0, 0, resolution);
        let b = viewport.pixel_to_plane(1, 0, resolution);
        assert!((b.re - a.re - 0.25).abs() < 1e-12);
    }
}
