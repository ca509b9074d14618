//! Drives a full legend run: configuration in, swatch PNGs and the grid
//! composite PNG out.

use std::path::{Path, PathBuf};

use crate::error::LegendError;
use crate::models::LegendConfig;
use crate::rendering::{write_png, GridComposer, SwatchRenderer};

/// Fixed suffix appended to the config stem for the composite file.
const COMPOSITE_SUFFIX: &str = "_legend";

/// Paths written by one run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub swatches: Vec<PathBuf>,
    pub composite: Option<PathBuf>,
}

/// Render and write one swatch per configured label, in configuration
/// order, then the grid composite.
///
/// Output files sit next to the configuration: `<stem><label>.png` per
/// swatch and `<stem>_legend.png` for the composite, where the stem is the
/// config path with its extension removed (label appended with no
/// separator). An empty label set writes nothing and is not an error.
pub fn generate_legends(config_path: &Path) -> Result<GenerateReport, LegendError> {
    let config = LegendConfig::load(config_path)?;
    let entries = config.entries()?;
    let stem = config_stem(config_path);

    let renderer = SwatchRenderer::default();
    let mut report = GenerateReport::default();
    let mut swatches = Vec::with_capacity(entries.len());
    for entry in &entries {
        let swatch = renderer.render(&entry.label, entry.color);
        let path = PathBuf::from(format!("{stem}{}.png", entry.label));
        write_png(&path, &swatch)?;
        tracing::debug!(label = %entry.label, path = %path.display(), "Wrote swatch");
        report.swatches.push(path);
        swatches.push(swatch);
    }

    if swatches.is_empty() {
        tracing::info!("No labels configured, skipping composite");
        return Ok(report);
    }

    if let Some(composite) = GridComposer::new().compose(&swatches)? {
        let path = PathBuf::from(format!("{stem}{COMPOSITE_SUFFIX}.png"));
        write_png(&path, &composite)?;
        tracing::info!(
            swatches = report.swatches.len(),
            composite = %path.display(),
            "Legend generation complete"
        );
        report.composite = Some(path);
    }

    Ok(report)
}

/// The config path with its final extension removed, as a string prefix
/// for output naming.
fn config_stem(path: &Path) -> String {
    path.with_extension("").display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_stem_strips_final_extension() {
        assert_eq!(config_stem(Path::new("cfg.yaml")), "cfg");
        assert_eq!(config_stem(Path::new("dir/data.set.yml")), "dir/data.set");
        assert_eq!(config_stem(Path::new("noext")), "noext");
    }
}
