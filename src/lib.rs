//! seglegend - legend swatch generator for semantic-segmentation label sets.
//!
//! For each label/color pair declared in a dataset YAML file, renders a
//! small color swatch PNG with the label stamped on it, then packs all
//! swatches into one grid-composite PNG approximating a 3:4 aspect ratio.

pub mod error;
pub mod generator;
pub mod models;
pub mod rendering;
