use std::collections::HashMap;

use complex_rs::complex::Complex;
use log::{debug, info};

use crate::graphics::canvas::Canvas;
use crate::graphics::color::{self, PaletteHandler};
use crate::models::{
    catalog::RootCatalog, function::function::TargetFunction, quality::QualityGrid,
    resolution::Resolution, sample::PixelSample, task::RenderTask, viewport::Viewport,
};

use super::error::EngineError;
use super::result::EngineResult;
use super::root_finder::{IterationOutcome, RootFinder};

/// The basin-of-attraction engine.
///
/// Owns the viewport, the quality grid, the root catalog and the per-anchor
/// sample cache. Any parameter change discards the catalog and the cache;
/// the next computation starts a fresh generation.
pub struct BasinField {
    function: Option<Box<dyn TargetFunction>>,
    viewport: Viewport,
    quality: QualityGrid,
    cluster_epsilon: f64,
    finder: RootFinder,
    palette: PaletteHandler,
    catalog: RootCatalog,
    samples: HashMap<(u32, u32), PixelSample>,
}

impl BasinField {
    /// An unconfigured field; computing or rendering it is a no-op until a
    /// target function is supplied.
    pub fn new() -> Self {
        Self {
            function: None,
            viewport: Viewport::new(Complex::new(0.0, 0.0), 100.0),
            quality: QualityGrid::new(1.0),
            cluster_epsilon: 1e-4,
            finder: RootFinder::default(),
            palette: PaletteHandler::new(),
            catalog: RootCatalog::new(),
            samples: HashMap::new(),
        }
    }

    pub fn from_task(task: &RenderTask) -> EngineResult<Self> {
        let mut field = Self::new();
        field.configure(
            task.function.target(),
            task.viewport,
            task.quality,
            task.cluster_epsilon,
            RootFinder::new(
                task.result_tolerance,
                task.derivative_step_length,
                task.max_iterations,
            ),
        )?;
        Ok(field)
    }

    pub fn configure(
        &mut self,
        function: Box<dyn TargetFunction>,
        viewport: Viewport,
        quality: f64,
        cluster_epsilon: f64,
        finder: RootFinder,
    ) -> EngineResult<()> {
        validate_zoom(viewport.zoom)?;
        validate_quality(quality)?;
        if !(cluster_epsilon.is_finite() && cluster_epsilon > 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "cluster epsilon must be finite and positive, got {}",
                cluster_epsilon
            )));
        }
        if finder.max_iterations == 0 {
            return Err(EngineError::InvalidConfig(
                "iteration budget must be at least 1".to_string(),
            ));
        }

        debug!(
            "configuring field: center=({}, {}) zoom={} quality={} epsilon={} max_iterations={}",
            viewport.center.re,
            viewport.center.im,
            viewport.zoom,
            quality,
            cluster_epsilon,
            finder.max_iterations
        );

        self.function = Some(function);
        self.viewport = viewport;
        self.quality = QualityGrid::new(quality);
        self.cluster_epsilon = cluster_epsilon;
        self.finder = finder;
        self.invalidate();
        Ok(())
    }

    pub fn set_center(&mut self, center: Complex) {
        self.viewport.center = center;
        self.invalidate();
    }

    pub fn set_zoom(&mut self, zoom: f64) -> EngineResult<()> {
        validate_zoom(zoom)?;
        self.viewport.zoom = zoom;
        self.invalidate();
        Ok(())
    }

    pub fn set_quality(&mut self, quality: f64) -> EngineResult<()> {
        validate_quality(quality)?;
        self.quality = QualityGrid::new(quality);
        self.invalidate();
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn quality(&self) -> f64 {
        self.quality.quality
    }

    pub fn roots(&self) -> &[Complex] {
        self.catalog.roots()
    }

    pub fn cycle_palette(&mut self) {
        // Color-only change; cached samples stay valid.
        self.palette.cycle_palette();
    }

    fn invalidate(&mut self) {
        debug!(
            "invalidating field state ({} roots, {} cached samples)",
            self.catalog.len(),
            self.samples.len()
        );
        self.catalog.clear();
        self.samples.clear();
    }

    pub fn pixel_to_plane(&self, col: u32, row: u32, resolution: Resolution) -> Complex {
        self.viewport.pixel_to_plane(col, row, resolution)
    }

    /// `(row, col)` of a plane point, possibly outside the raster.
    pub fn plane_to_pixel(&self, point: Complex, resolution: Resolution) -> (i64, i64) {
        self.viewport.plane_to_pixel(point, resolution)
    }

    pub fn quantize_pixel(&self, col: u32, row: u32, resolution: Resolution) -> (u32, u32) {
        self.quality.anchor(col, row, resolution)
    }

    /// Runs the finder at every quality-cell anchor of the raster and fills
    /// the sample cache. A no-op while no target function is configured.
    pub fn compute_field(&mut self, resolution: Resolution) -> EngineResult<()> {
        let function = match self.function.as_deref() {
            Some(function) => function,
            None => {
                debug!("compute requested before configuration, skipping");
                return Ok(());
            }
        };
        validate_resolution(resolution)?;

        let mut misses = 0u64;
        for row in 0..resolution.height {
            for col in 0..resolution.width {
                let anchor = self.quality.anchor(col, row, resolution);
                if self.samples.contains_key(&anchor) {
                    continue;
                }
                misses += 1;

                let point = self.viewport.pixel_to_plane(anchor.0, anchor.1, resolution);
                let sample = match self.finder.iterate(point, function) {
                    IterationOutcome::Converged {
                        root,
                        iterations_used,
                    } => PixelSample {
                        iterations_used,
                        root_index: Some(self.catalog.index_for(root, self.cluster_epsilon)),
                    },
                    IterationOutcome::NotConverged => PixelSample {
                        iterations_used: 0,
                        root_index: None,
                    },
                };
                self.samples.insert(anchor, sample);
            }
        }

        info!(
            "field computed: {}x{} raster, {} anchors sampled, {} roots",
            resolution.width,
            resolution.height,
            misses,
            self.catalog.len()
        );
        Ok(())
    }

    /// Color of a cached sample: background for non-convergence, otherwise
    /// the root's gradient evaluated at the fraction of the iteration budget
    /// remaining.
    pub fn classify_color(&self, sample: &PixelSample) -> [u8; 4] {
        match sample.root_index {
            None => color::BACKGROUND,
            Some(root_index) => {
                let t = sample.iterations_used as f64 / self.finder.max_iterations as f64;
                self.palette.calculate_color(root_index, t)
            }
        }
    }

    pub fn sample_at(&self, col: u32, row: u32, resolution: Resolution) -> Option<PixelSample> {
        self.samples
            .get(&self.quality.anchor(col, row, resolution))
            .copied()
    }

    /// Computes the field for the canvas raster, writes the RGBA buffer and
    /// overlays a marker on every discovered root. A no-op while
    /// unconfigured.
    pub fn render(&mut self, canvas: &mut dyn Canvas) -> EngineResult<()> {
        if self.function.is_none() {
            debug!("render requested before configuration, skipping");
            return Ok(());
        }

        let resolution = Resolution::new(canvas.width(), canvas.height());
        self.compute_field(resolution)?;

        for row in 0..resolution.height {
            for col in 0..resolution.width {
                let anchor = self.quality.anchor(col, row, resolution);
                if let Some(sample) = self.samples.get(&anchor) {
                    canvas.write_pixel(col, row, self.classify_color(sample));
                }
            }
        }

        for root in self.catalog.roots() {
            let (marker_row, marker_col) = self.viewport.plane_to_pixel(*root, resolution);
            canvas.draw_marker(marker_col, marker_row);
        }
        Ok(())
    }
}

impl Default for BasinField {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_zoom(zoom: f64) -> EngineResult<()> {
    if !(zoom.is_finite() && zoom > 0.0) {
        return Err(EngineError::InvalidConfig(format!(
            "zoom must be finite and positive, got {}",
            zoom
        )));
    }
    Ok(())
}

fn validate_quality(quality: f64) -> EngineResult<()> {
    if !QualityGrid::new(quality).is_valid() {
        return Err(EngineError::InvalidConfig(format!(
            "quality must lie in (0, 1], got {}",
            quality
        )));
    }
    Ok(())
}

fn validate_resolution(resolution: Resolution) -> EngineResult<()> {
    if resolution.width == 0 || resolution.height == 0 {
        return Err(EngineError::InvalidConfig(format!(
            "raster dimensions must be nonzero, got {}x{}",
            resolution.width, resolution.height
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::models::function::{descriptor::FunctionDescriptor, root_product::RootProduct};

    use super::*;

    fn two_root_field(quality: f64) -> BasinField {
        let descriptor = FunctionDescriptor::RootProduct(RootProduct::new(vec![
            Complex::new(1.0, 0.0),
            Complex::new(-2.0, 0.0),
        ]));
        let mut field = BasinField::new();
        field
            .configure(
                descriptor.target(),
                Viewport::new(Complex::new(0.0, 0.0), 16.0),
                quality,
                1e-3,
                RootFinder::default(),
            )
            .unwrap();
        field
    }

    #[test]
    fn rejects_quality_outside_unit_interval() {
        let mut field = two_root_field(1.0);
        assert!(matches!(
            field.set_quality(0.0),
            Err(EngineError::InvalidConfig(_))
        ));
        assert!(matches!(
            field.set_quality(1.5),
            Err(EngineError::InvalidConfig(_))
        ));
        assert!(field.set_quality(0.5).is_ok());
    }

    #[test]
    fn rejects_degenerate_zoom() {
        let mut field = two_root_field(1.0);
        assert!(matches!(
            field.set_zoom(0.0),
            Err(EngineError::InvalidConfig(_))
        ));
        assert!(matches!(
            field.set_zoom(f64::INFINITY),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn parameter_changes_discard_the_catalog() {
        let mut field = two_root_field(0.5);
        let resolution = Resolution::new(64, 48);
        field.compute_field(resolution).unwrap();
        assert!(!field.roots().is_empty());

        field.set_center(Complex::new(0.5, 0.5));
        assert!(field.roots().is_empty());
        assert!(field.sample_at(0, 0, resolution).is_none());
    }

    #[test]
    fn unconfigured_compute_is_a_silent_no_op() {
        let mut field = BasinField::new();
        field.compute_field(Resolution::new(10, 10)).unwrap();
        assert!(field.roots().is_empty());
    }

    #[test]
    fn zero_sized_raster_fails_fast() {
        let mut field = two_root_field(1.0);
        assert!(matches!(
            field.compute_field(Resolution::new(0, 10)),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn quantization_matches_the_quality_grid() {
        let field = two_root_field(0.25);
        let resolution = Resolution::new(64, 64);
        assert_eq!(
            field.quantize_pixel(2, 2, resolution),
            field.quantize_pixel(0, 0, resolution)
        );
    }

    #[test]
    fn classify_color_uses_background_for_non_convergence() {
        let field = two_root_field(1.0);
        let sample = PixelSample {
            iterations_used: 0,
            root_index: None,
        };
        assert_eq!(field.classify_color(&sample), color::BACKGROUND);
    }

    #[test]
    fn coarse_quality_computes_fewer_anchors() {
        let resolution = Resolution::new(64, 48);

        let mut coarse = two_root_field(0.1);
        coarse.compute_field(resolution).unwrap();
        let coarse_samples: Vec<_> = (0..resolution.height)
            .flat_map(|row| (0..resolution.width).map(move |col| (col, row)))
            .map(|(col, row)| coarse.quantize_pixel(col, row, resolution))
            .collect();
        let mut distinct = coarse_samples.clone();
        distinct.sort_unstable();
        distinct.dedup();

        assert!(distinct.len() < resolution.pixel_count() as usize);
        // Every pixel resolves to a cached sample all the same.
        for (col, row) in coarse_samples {
            assert!(coarse.sample_at(col, row, resolution).is_some());
        }
    }
}
