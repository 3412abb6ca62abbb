//! Guide build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use guidepack_guide::{assemble, GuideRegistry, PageEmitter, PageOptions};

use super::config;

/// Run the build command.
pub fn run(config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Building testing guide...");

    let file_config = config::load(config_path)?;

    let registry = GuideRegistry::builtin();
    registry.validate().context("Invalid guide registry")?;

    let base_dir = PathBuf::from(&file_config.guide.base_dir);
    let assembled = assemble(&registry, &base_dir)?;

    let emitter = PageEmitter::new(PageOptions {
        title: file_config.guide.title,
        subtitle: file_config.guide.subtitle,
        version: file_config.package.version,
    });
    let html = emitter.render(&registry, &assembled.content)?;

    let output = output.unwrap_or_else(|| base_dir.join(&file_config.guide.output));
    fs::write(&output, html)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!(
        "Generated {} ({} of {} guides embedded, {} skipped)",
        output.display(),
        assembled.content.len(),
        registry.len(),
        assembled.skipped.len()
    );

    Ok(())
}
