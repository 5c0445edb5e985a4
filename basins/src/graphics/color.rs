/// Color assigned to pixels whose iteration never converged.
pub const BACKGROUND: [u8; 4] = [0x00, 0x00, 0x00, 0xff];

/// Per-root `[start, stop]` gradients. The interpolation parameter is the
/// fraction of the iteration budget remaining at convergence, so fast
/// convergence lands near the bright stop color.
const ROOT_GRADIENTS: [([u8; 4], [u8; 4]); 4] = [
    ([0x28, 0x00, 0x00, 0xff], [0xff, 0x50, 0x50, 0xff]),
    ([0x00, 0x28, 0x00, 0xff], [0x50, 0xff, 0x50, 0xff]),
    ([0x00, 0x00, 0x28, 0xff], [0x50, 0x50, 0xff, 0xff]),
    ([0x28, 0x28, 0x00, 0xff], [0xff, 0xff, 0x50, 0xff]),
];

pub enum ColorPalette {
    Classic,
    Inverted,
    Grayscale,
}

pub struct PaletteHandler {
    pub current_palette: ColorPalette,
}

impl PaletteHandler {
    pub fn new() -> Self {
        PaletteHandler {
            current_palette: ColorPalette::Classic,
        }
    }

    pub fn cycle_palette(&mut self) {
        self.current_palette = match self.current_palette {
            ColorPalette::Classic => ColorPalette::Inverted,
            ColorPalette::Inverted => ColorPalette::Grayscale,
            ColorPalette::Grayscale => ColorPalette::Classic,
        };
    }

    /// Color for a converged sample. `root_index` wraps around the gradient
    /// table when more roots than table entries have been discovered, so a
    /// fifth root reuses the first gradient rather than indexing out of
    /// bounds. `t` is clamped to [0, 1] and channels are truncated, not
    /// rounded.
    pub fn calculate_color(&self, root_index: usize, t: f64) -> [u8; 4] {
        match self.current_palette {
            ColorPalette::Classic => self.classic_palette(root_index, t),
            ColorPalette::Inverted => self.inverted_palette(root_index, t),
            ColorPalette::Grayscale => self.grayscale_palette(t),
        }
    }

    pub fn classic_palette(&self, root_index: usize, t: f64) -> [u8; 4] {
        let (start, stop) = ROOT_GRADIENTS[root_index % ROOT_GRADIENTS.len()];
        let t = t.clamp(0.0, 1.0);
        let mut rgba = [0u8; 4];
        for channel in 0..4 {
            let a = start[channel] as f64;
            let b = stop[channel] as f64;
            rgba[channel] = (a + (b - a) * t) as u8;
        }
        rgba
    }

    pub fn inverted_palette(&self, root_index: usize, t: f64) -> [u8; 4] {
        let [r, g, b, a] = self.classic_palette(root_index, t);
        [255 - r, 255 - g, 255 - b, a]
    }

    pub fn grayscale_palette(&self, t: f64) -> [u8; 4] {
        let intensity = (t.clamp(0.0, 1.0) * 255.0) as u8;
        [intensity, intensity, intensity, 0xff]
    }
}

impl Default for PaletteHandler {
    fn default() -> Self {
        Self::new()
    }
}
