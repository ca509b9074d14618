//! Swatch rendering: one fixed-size color tile per label.

use super::font;
use super::raster::{Raster, Rgb};

/// Default swatch height in pixels.
pub const DEFAULT_HEIGHT: u32 = 30;
/// Default swatch width in pixels.
pub const DEFAULT_WIDTH: u32 = 200;

const INK_DARK: Rgb = [0, 0, 0];
const INK_LIGHT: Rgb = [255, 255, 255];

/// Margin from the left and bottom edges to the text baseline.
const TEXT_MARGIN: u32 = 5;
/// Integer scale applied to the embedded 5x7 font (14 px tall at 2).
const TEXT_SCALE: u32 = 2;

/// Renders fixed-size label swatches.
///
/// Every swatch produced by one renderer shares the same dimensions, which
/// [`GridComposer`](super::grid::GridComposer) requires of its input.
#[derive(Debug, Clone, Copy)]
pub struct SwatchRenderer {
    height: u32,
    width: u32,
}

impl SwatchRenderer {
    pub fn new(height: u32, width: u32) -> Self {
        Self { height, width }
    }

    /// Render one swatch: a `color`-filled tile with `label` stamped near
    /// the bottom-left corner in a contrasting ink.
    ///
    /// Any label and color are accepted; overlong labels clip at the right
    /// edge of the tile.
    pub fn render(&self, label: &str, color: Rgb) -> Raster {
        let mut img = Raster::filled(self.width, self.height, color);
        font::draw_text(
            &mut img,
            TEXT_MARGIN,
            self.height.saturating_sub(TEXT_MARGIN),
            label,
            TEXT_SCALE,
            ink_for(color),
        );
        img
    }
}

impl Default for SwatchRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT, DEFAULT_WIDTH)
    }
}

/// Binary contrast rule: plain channel mean with a strict `> 128` cutoff,
/// not a weighted luminance formula.
fn ink_for(color: Rgb) -> Rgb {
    let mean = (color[0] as f64 + color[1] as f64 + color[2] as f64) / 3.0;
    if mean > 128.0 {
        INK_DARK
    } else {
        INK_LIGHT
    }
}
