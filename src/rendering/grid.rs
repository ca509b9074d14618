//! Grid composition: packs same-sized swatches into one composite raster
//! whose overall shape approximates a target rows:cols aspect ratio.

use crate::error::RenderError;

use super::raster::{Raster, Rgb};

/// Background byte value for unfilled composite cells. The exact value is
/// observable in output files; unused cells compare equal to `[1, 1, 1]`.
pub const GRID_BACKGROUND: Rgb = [1, 1, 1];

/// Default target rows:cols aspect ratio for the composite.
pub const DEFAULT_RATIO: (f64, f64) = (3.0, 4.0);

/// Derive the `(rows, cols)` tile counts for `n` swatches of
/// `height` x `width` pixels.
///
/// The target ratio is first divided element-wise by the swatch dimensions,
/// so the on-screen aspect of the finished composite approximates `ratio`
/// regardless of the swatches' own shape. A single scale factor
/// `sqrt(n / (per_pixel_rows * per_pixel_cols))` then grows both counts
/// proportionally until their product reaches `n`, and the element-wise
/// ceiling rounds up to whole tiles.
///
/// `rows * cols >= n` always holds; the overshoot cells stay unused.
pub fn tile_counts(n: usize, height: u32, width: u32, ratio: (f64, f64)) -> (u32, u32) {
    let per_pixel_rows = ratio.0 / height as f64;
    let per_pixel_cols = ratio.1 / width as f64;
    let scale = (n as f64 / (per_pixel_rows * per_pixel_cols)).sqrt();
    let rows = (per_pixel_rows * scale).ceil() as u32;
    let cols = (per_pixel_cols * scale).ceil() as u32;
    (rows, cols)
}

/// Packs an ordered run of same-sized swatches into a single composite.
///
/// # Example
///
/// ```
/// use seglegend::rendering::{GridComposer, Raster};
///
/// let swatches: Vec<Raster> = (0u8..5)
///     .map(|i| Raster::filled(200, 30, [i * 40, 0, 0]))
///     .collect();
/// let composite = GridComposer::new().compose(&swatches).unwrap().unwrap();
///
/// // Five 30x200 swatches pack into a single 5x1 column.
/// assert_eq!(composite.width(), 200);
/// assert_eq!(composite.height(), 150);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GridComposer {
    ratio: (f64, f64),
}

impl GridComposer {
    pub fn new() -> Self {
        Self {
            ratio: DEFAULT_RATIO,
        }
    }

    /// Override the target rows:cols aspect ratio.
    pub fn ratio(mut self, rows: f64, cols: f64) -> Self {
        self.ratio = (rows, cols);
        self
    }

    /// Compose the swatches row-major into a grid composite.
    ///
    /// Returns `Ok(None)` for an empty input. All swatches must share the
    /// first swatch's dimensions; a mismatch is rejected rather than
    /// producing a corrupt composite.
    pub fn compose(&self, swatches: &[Raster]) -> Result<Option<Raster>, RenderError> {
        let Some(first) = swatches.first() else {
            return Ok(None);
        };
        let (height, width) = (first.height(), first.width());
        for (index, swatch) in swatches.iter().enumerate() {
            if swatch.height() != height || swatch.width() != width {
                return Err(RenderError::SwatchSizeMismatch {
                    index,
                    expected_height: height,
                    expected_width: width,
                    found_height: swatch.height(),
                    found_width: swatch.width(),
                });
            }
        }

        let (rows, cols) = tile_counts(swatches.len(), height, width, self.ratio);
        let mut composite = Raster::filled(cols * width, rows * height, GRID_BACKGROUND);
        'cells: for r in 0..rows {
            for c in 0..cols {
                let idx = (r * cols + c) as usize;
                if idx >= swatches.len() {
                    break 'cells;
                }
                composite.blit(&swatches[idx], c * width, r * height);
            }
        }
        Ok(Some(composite))
    }
}

impl Default for GridComposer {
    fn default() -> Self {
        Self::new()
    }
}
