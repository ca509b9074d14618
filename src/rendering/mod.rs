pub mod font;
pub mod grid;
pub mod png_out;
pub mod raster;
pub mod swatch;

pub use grid::{tile_counts, GridComposer};
pub use png_out::write_png;
pub use raster::{Raster, Rgb};
pub use swatch::SwatchRenderer;
