//! Configuration file loading (guidepack.toml).

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Configuration file structure (guidepack.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub guide: GuideSettings,
    #[serde(default)]
    pub package: PackageSettings,
}

#[derive(Debug, Deserialize)]
pub struct GuideSettings {
    /// Directory holding the registered Markdown guides
    #[serde(default = "default_base_dir")]
    pub base_dir: String,

    /// Output file name, relative to the base directory
    #[serde(default = "default_output")]
    pub output: String,

    /// Sidebar heading and window title
    #[serde(default = "default_title")]
    pub title: String,

    /// Sidebar subheading
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
}

#[derive(Debug, Deserialize)]
pub struct PackageSettings {
    /// Pre-built extension output directory
    #[serde(default = "default_extension_dir")]
    pub extension_dir: String,

    /// Directory the archive is written into
    pub output_dir: Option<String>,

    /// Product version stamped into the package name and tester README
    #[serde(default = "default_version")]
    pub version: String,

    /// Product slug prefixing the package name
    #[serde(default = "default_slug")]
    pub slug: String,
}

impl Default for GuideSettings {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            output: default_output(),
            title: default_title(),
            subtitle: default_subtitle(),
        }
    }
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            extension_dir: default_extension_dir(),
            output_dir: None,
            version: default_version(),
            slug: default_slug(),
        }
    }
}

fn default_base_dir() -> String {
    "TESTING_GUIDES".to_string()
}
fn default_output() -> String {
    "testing-guide.html".to_string()
}
fn default_title() -> String {
    "₿ Bitcoin Wallet".to_string()
}
fn default_subtitle() -> String {
    "Testing Guides".to_string()
}
fn default_extension_dir() -> String {
    "dist".to_string()
}
fn default_version() -> String {
    "0.12.0".to_string()
}
fn default_slug() -> String {
    "bitcoin-wallet".to_string()
}

/// Load configuration from the given path if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = load(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.guide.base_dir, "TESTING_GUIDES");
        assert_eq!(config.package.version, "0.12.0");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guidepack.toml");
        fs::write(&path, "[package]\nversion = \"0.13.0\"\n").unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.package.version, "0.13.0");
        assert_eq!(config.package.slug, "bitcoin-wallet");
        assert_eq!(config.guide.output, "testing-guide.html");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guidepack.toml");
        fs::write(&path, "[guide\nbroken").unwrap();

        assert!(load(&path).is_err());
    }
}
