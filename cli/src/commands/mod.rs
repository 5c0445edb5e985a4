use basins::engine::error::EngineError;
use basins::models::function::descriptor::FunctionDescriptor;
use basins::models::function::root_product::RootProduct;
use basins::models::resolution::Resolution;
use basins::models::task::RenderTask;
use basins::models::viewport::Viewport;
use clap::{Parser, Subcommand};
use complex_rs::complex::Complex;

use self::{render::RenderCommand, view::ViewCommand};

pub mod render;
pub mod view;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 🎨 Render Mode
    ///
    /// Compute a basin field once and write it to a PNG file.
    Render(RenderCommand),

    /// 🖥️ View Mode
    ///
    /// Open an interactive window: scroll to zoom, click to recenter,
    /// Up/Down to change quality, P to cycle the palette.
    View(ViewCommand),
}

/// Inline description of a basin field, shared by both subcommands.
#[derive(Parser, Debug)]
pub struct FieldArgs {
    /// Roots of the target polynomial as re,im pairs;
    /// defaults to (z - 1)(z + 2)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub roots: Option<Vec<f64>>,

    /// Real part of the viewport center
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_re: f64,

    /// Imaginary part of the viewport center
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_im: f64,

    /// Pixels per plane unit
    #[arg(short, long, default_value_t = 100.0)]
    pub zoom: f64,

    /// Sampling quality in (0, 1]; 1 computes every pixel
    #[arg(short, long, default_value_t = 1.0)]
    pub quality: f64,

    #[arg(long, default_value_t = 800)]
    pub width: u32,

    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Newton–Raphson iteration budget per sample
    #[arg(long, default_value_t = 200)]
    pub max_iterations: u32,

    /// Residual norm accepted as convergence
    #[arg(long, default_value_t = 1e-8)]
    pub tolerance: f64,

    /// Magnitude of the random derivative perturbation
    #[arg(long, default_value_t = 1e-12)]
    pub derivative_step: f64,

    /// Half the clustering distance between distinct roots
    #[arg(long, default_value_t = 1e-4)]
    pub cluster_epsilon: f64,
}

impl FieldArgs {
    pub fn to_task(&self) -> Result<RenderTask, EngineError> {
        let pairs = self
            .roots
            .clone()
            .unwrap_or_else(|| vec![1.0, 0.0, -2.0, 0.0]);
        if pairs.len() % 2 != 0 || pairs.is_empty() {
            return Err(EngineError::InvalidConfig(
                "roots must be a non-empty list of re,im pairs".to_string(),
            ));
        }
        let roots = pairs
            .chunks_exact(2)
            .map(|pair| Complex::new(pair[0], pair[1]))
            .collect();

        Ok(RenderTask {
            function: FunctionDescriptor::RootProduct(RootProduct::new(roots)),
            viewport: Viewport::new(
                Complex::new(self.center_re, self.center_im),
                self.zoom,
            ),
            resolution: Resolution::new(self.width, self.height),
            quality: self.quality,
            max_iterations: self.max_iterations,
            result_tolerance: self.tolerance,
            derivative_step_length: self.derivative_step,
            cluster_epsilon: self.cluster_epsilon,
        })
    }
}
