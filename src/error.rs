use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or resolving the label configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Label for key {key} is not a string")]
    InvalidLabel { key: String },

    #[error("No color mapped for label '{label}'")]
    MissingColor { label: String },

    #[error("Invalid color for label '{label}': expected three channel values in 0-255")]
    InvalidColor { label: String },
}

/// Errors raised while rendering or writing images.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Inconsistent swatch size at index {index}: expected {expected_height}x{expected_width}, found {found_height}x{found_width}")]
    SwatchSizeMismatch {
        index: usize,
        expected_height: u32,
        expected_width: u32,
        found_height: u32,
        found_width: u32,
    },

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level error for a legend generation run.
#[derive(Debug, Error)]
pub enum LegendError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_missing_color() {
        let error = ConfigError::MissingColor {
            label: "sky".to_string(),
        };
        assert_eq!(error.to_string(), "No color mapped for label 'sky'");
    }

    #[test]
    fn test_config_error_invalid_label() {
        let error = ConfigError::InvalidLabel {
            key: "7".to_string(),
        };
        assert_eq!(error.to_string(), "Label for key 7 is not a string");
    }

    #[test]
    fn test_render_error_swatch_size_mismatch() {
        let error = RenderError::SwatchSizeMismatch {
            index: 3,
            expected_height: 30,
            expected_width: 200,
            found_height: 30,
            found_width: 100,
        };
        assert_eq!(
            error.to_string(),
            "Inconsistent swatch size at index 3: expected 30x200, found 30x100"
        );
    }

    #[test]
    fn test_render_error_png_encode() {
        let error = RenderError::PngEncode("Encoding failed".to_string());
        assert_eq!(error.to_string(), "PNG encode error: Encoding failed");
    }

    #[test]
    fn test_legend_error_from_config_error() {
        let config_error = ConfigError::MissingColor {
            label: "road".to_string(),
        };
        let error: LegendError = config_error.into();
        match error {
            LegendError::Config(_) => {}
            _ => panic!("Expected Config variant"),
        }
    }
}
