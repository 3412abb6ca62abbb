//! Tester package command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use guidepack_bundle::{assemble, BundleConfig};

use super::config;

/// Run the package command.
pub fn run(config_path: &Path, output_dir: Option<PathBuf>) -> Result<()> {
    let file_config = config::load(config_path)?;

    let project_root = std::env::current_dir().context("Failed to resolve project root")?;

    let mut bundle = BundleConfig::new(&project_root);
    bundle.extension_dir = project_root.join(&file_config.package.extension_dir);
    bundle.guides_dir = project_root.join(&file_config.guide.base_dir);
    bundle.version = file_config.package.version;
    bundle.product_slug = file_config.package.slug;

    if let Some(dir) = output_dir.or(file_config.package.output_dir.map(PathBuf::from)) {
        bundle.output_dir = dir;
    }

    let report = assemble(&bundle)?;

    tracing::info!(
        "Package ready: {} ({} entries, {:.2} MB)",
        report.archive_path.display(),
        report.entry_count,
        report.archive_bytes as f64 / (1024.0 * 1024.0)
    );

    if !report.skipped.is_empty() {
        let names: Vec<&str> = report.skipped.iter().map(|s| s.name.as_str()).collect();
        tracing::warn!("Skipped optional inputs: {}", names.join(", "));
    }

    Ok(())
}
