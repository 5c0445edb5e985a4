use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::engine::result::EngineResult;

/// Radius in pixels of the filled circle drawn over each discovered root.
pub const MARKER_RADIUS: i64 = 5;

const MARKER_COLOR: [u8; 4] = [0xff, 0xff, 0xff, 0xff];

/// Drawing surface the engine renders into.
///
/// Marker coordinates may fall outside the raster (a root can sit off
/// screen); implementations clip.
pub trait Canvas {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn write_pixel(&mut self, col: u32, row: u32, rgba: [u8; 4]);
    fn draw_marker(&mut self, col: i64, row: i64);
}

/// PNG-backed canvas for headless rendering.
pub struct ImageCanvas {
    image: RgbaImage,
}

impl ImageCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn save(&self, path: &Path) -> EngineResult<()> {
        Ok(self.image.save(path)?)
    }

    pub fn pixel(&self, col: u32, row: u32) -> [u8; 4] {
        self.image.get_pixel(col, row).0
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

impl Canvas for ImageCanvas {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn write_pixel(&mut self, col: u32, row: u32, rgba: [u8; 4]) {
        self.image.put_pixel(col, row, Rgba(rgba));
    }

    fn draw_marker(&mut self, col: i64, row: i64) {
        draw_filled_circle(col, row, self.width(), self.height(), |c, r| {
            self.image.put_pixel(c, r, Rgba(MARKER_COLOR));
        });
    }
}

/// RGBA byte-buffer canvas, one frame of the windowed viewer.
pub struct FrameCanvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl FrameCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.pixels
    }
}

impl Canvas for FrameCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn write_pixel(&mut self, col: u32, row: u32, rgba: [u8; 4]) {
        let offset = ((row * self.width + col) * 4) as usize;
        self.pixels[offset..offset + 4].copy_from_slice(&rgba);
    }

    fn draw_marker(&mut self, col: i64, row: i64) {
        let (width, height) = (self.width, self.height);
        draw_filled_circle(col, row, width, height, |c, r| {
            let offset = ((r * width + c) * 4) as usize;
            self.pixels[offset..offset + 4].copy_from_slice(&MARKER_COLOR);
        });
    }
}

fn draw_filled_circle(
    col: i64,
    row: i64,
    width: u32,
    height: u32,
    mut put: impl FnMut(u32, u32),
) {
    for dy in -MARKER_RADIUS..=MARKER_RADIUS {
        for dx in -MARKER_RADIUS..=MARKER_RADIUS {
            if dx * dx + dy * dy > MARKER_RADIUS * MARKER_RADIUS {
                continue;
            }
            let c = col + dx;
            let r = row + dy;
            if c >= 0 && r >= 0 && (c as u32) < width && (r as u32) < height {
                put(c as u32, r as u32);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_canvas_stores_written_pixels() {
        let mut canvas = ImageCanvas::new(4, 4);
        canvas.write_pixel(2, 1, [1, 2, 3, 4]);
        assert_eq!(canvas.pixel(2, 1), [1, 2, 3, 4]);
    }

    #[test]
    fn markers_clip_at_the_raster_edge() {
        let mut canvas = ImageCanvas::new(8, 8);
        canvas.draw_marker(0, 0);
        canvas.draw_marker(-20, -20); // fully off screen
        assert_eq!(canvas.pixel(0, 0), MARKER_COLOR);
        assert_eq!(canvas.pixel(7, 7), [0, 0, 0, 0]);
    }

    #[test]
    fn frame_canvas_is_row_major_rgba() {
        let mut canvas = FrameCanvas::new(3, 2);
        canvas.write_pixel(1, 1, [9, 8, 7, 6]);
        let offset = (1 * 3 + 1) * 4;
        assert_eq!(&canvas.bytes()[offset..offset + 4], &[9, 8, 7, 6]);
    }
}
