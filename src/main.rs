use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seglegend::generator;

#[derive(Parser)]
#[command(name = "seglegend")]
#[command(about = "Render legend swatches for a semantic-segmentation label set", version)]
struct Cli {
    /// Path to the dataset configuration file (YAML)
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seglegend=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let report = generator::generate_legends(&cli.config)?;

    let composite = match &report.composite {
        Some(path) => format!(" and composite {}", path.display()),
        None => String::new(),
    };
    println!(
        "Wrote {} swatch {}{}",
        report.swatches.len(),
        if report.swatches.len() == 1 {
            "file"
        } else {
            "files"
        },
        composite
    );

    Ok(())
}
