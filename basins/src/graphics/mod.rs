#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod canvas;
pub mod color;

use error_iter::ErrorIter as _;
use log::{error, info};
use pixels::{Error, Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

use crate::engine::field::BasinField;
use crate::models::resolution::Resolution;

use self::canvas::FrameCanvas;

const ZOOM_STEP: f64 = 1.25;
const QUALITY_STEP: f64 = 0.1;
const MIN_QUALITY: f64 = 0.05;

struct World {
    field: BasinField,
    resolution: Resolution,
    frame: FrameCanvas,
    dirty: bool,
}

impl World {
    fn update(&mut self) {
        if !self.dirty {
            return;
        }
        self.frame = FrameCanvas::new(self.resolution.width, self.resolution.height);
        if let Err(err) = self.field.render(&mut self.frame) {
            error!("render failed: {}", err);
        }
        self.dirty = false;
    }

    fn draw(&self, frame: &mut [u8]) {
        frame.copy_from_slice(self.frame.bytes());
    }
}

/// Opens an interactive window over the given field.
///
/// Scroll zooms, left click recenters on the clicked plane point, Up/Down
/// change the sampling quality, P cycles the palette, Escape closes.
pub fn start_viewer(field: BasinField, width: u32, height: u32) -> Result<(), Error> {
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();

    let mut world = World {
        field,
        resolution: Resolution::new(width, height),
        frame: FrameCanvas::new(width, height),
        dirty: true,
    };

    let window = {
        let size = LogicalSize::new(width as f64, height as f64);
        WindowBuilder::new()
            .with_title("Newton basins")
            .with_inner_size(size)
            .with_min_inner_size(size)
            .build(&event_loop)
            .unwrap()
    };

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(width, height, surface_texture)?
    };

    event_loop.run(move |event, _, control_flow| {
        // Draw the current frame
        if let Event::RedrawRequested(_) = event {
            world.draw(pixels.frame_mut());
            if let Err(err) = pixels.render() {
                log_error("pixels.render", err);
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        // Handle input events
        if input.update(&event) {
            // Close events
            if input.key_pressed(VirtualKeyCode::Escape) || input.close_requested() {
                *control_flow = ControlFlow::Exit;
                return;
            }

            let scroll = input.scroll_diff();
            if scroll != 0.0 {
                let zoom = world.field.viewport().zoom * ZOOM_STEP.powf(scroll as f64);
                match world.field.set_zoom(zoom) {
                    Ok(()) => {
                        info!("zoom set to {}", zoom);
                        world.dirty = true;
                    }
                    Err(err) => error!("ignoring zoom change: {}", err),
                }
            }

            if input.mouse_pressed(0) {
                if let Some(mouse) = input.mouse() {
                    let (col, row) = pixels
                        .window_pos_to_pixel(mouse)
                        .unwrap_or_else(|pos| pixels.clamp_pixel_pos(pos));
                    let point =
                        world
                            .field
                            .pixel_to_plane(col as u32, row as u32, world.resolution);
                    info!("recentering on ({}, {})", point.re, point.im);
                    world.field.set_center(point);
                    world.dirty = true;
                }
            }

            if input.key_pressed(VirtualKeyCode::Up) {
                let quality = (world.field.quality() + QUALITY_STEP).min(1.0);
                if world.field.set_quality(quality).is_ok() {
                    info!("quality set to {}", quality);
                    world.dirty = true;
                }
            }

            if input.key_pressed(VirtualKeyCode::Down) {
                let quality = (world.field.quality() - QUALITY_STEP).max(MIN_QUALITY);
                if world.field.set_quality(quality).is_ok() {
                    info!("quality set to {}", quality);
                    world.dirty = true;
                }
            }

            if input.key_pressed(VirtualKeyCode::P) {
                // Recolors cached samples; the field is not recomputed.
                world.field.cycle_palette();
                world.dirty = true;
            }

            // Resize the window
            if let Some(size) = input.window_resized() {
                if let Err(err) = pixels.resize_surface(size.width, size.height) {
                    log_error("pixels.resize_surface", err);
                    *control_flow = ControlFlow::Exit;
                    return;
                }
            }

            // Update internal state and request a redraw
            world.update();
            window.request_redraw();
        }
    });
}

fn log_error<E: std::error::Error + 'static>(method_name: &str, err: E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}
