pub mod config;

pub use config::{DatasetConfig, LabelEntry, LegendConfig};
