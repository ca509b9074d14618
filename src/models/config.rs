use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::rendering::Rgb;

/// Label configuration loaded from a dataset YAML file.
#[derive(Debug, Deserialize, Clone)]
pub struct LegendConfig {
    pub dataset: DatasetConfig,
}

/// The `dataset` section: two parallel mappings keyed by label index.
///
/// Both mappings are kept as [`serde_yaml::Mapping`], which preserves
/// document order. Emission and grid-packing order follow the order of
/// `labels` in the file.
#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    /// Label index to label name.
    pub labels: serde_yaml::Mapping,

    /// Label index to RGB triplet, keyed like `labels`.
    pub color_map: serde_yaml::Mapping,
}

/// One resolved label/color pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEntry {
    pub label: String,
    pub color: Rgb,
}

impl LegendConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content)?;
        tracing::debug!(
            labels = config.dataset.labels.len(),
            colors = config.dataset.color_map.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Resolve the label/color pairs in document order.
    ///
    /// Every key in `labels` must map to a string label and have a matching
    /// `color_map` entry holding exactly three channel values in 0..=255.
    pub fn entries(&self) -> Result<Vec<LabelEntry>, ConfigError> {
        let mut entries = Vec::with_capacity(self.dataset.labels.len());
        for (key, value) in &self.dataset.labels {
            let label = value
                .as_str()
                .ok_or_else(|| ConfigError::InvalidLabel {
                    key: display_key(key),
                })?
                .to_string();
            let color_value =
                self.dataset
                    .color_map
                    .get(key)
                    .ok_or_else(|| ConfigError::MissingColor {
                        label: label.clone(),
                    })?;
            let color = parse_color(color_value).ok_or_else(|| ConfigError::InvalidColor {
                label: label.clone(),
            })?;
            entries.push(LabelEntry { label, color });
        }
        Ok(entries)
    }
}

/// Parse a YAML sequence of exactly three channel values into an RGB triplet.
fn parse_color(value: &serde_yaml::Value) -> Option<Rgb> {
    let channels = value.as_sequence()?;
    if channels.len() != 3 {
        return None;
    }
    let mut color = [0u8; 3];
    for (slot, channel) in color.iter_mut().zip(channels) {
        *slot = u8::try_from(channel.as_u64()?).ok()?;
    }
    Some(color)
}

/// Render a mapping key for error messages.
fn display_key(key: &serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| "<non-scalar>".to_string()),
    }
}
