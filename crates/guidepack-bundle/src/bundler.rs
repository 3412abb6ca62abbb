//! Assembles the tester distribution package.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::archive;
use crate::readme;
use crate::staging::StagingTree;

/// Name of the guide page artifact consumed from the guides directory.
pub const GUIDE_HTML: &str = "testing-guide.html";

/// Launcher scripts shipped alongside the guide, each optional.
const LAUNCHERS: &[&str] = &["open-guide.sh", "open-guide.bat"];

/// Documentation files copied into the package, each optional.
/// Source paths are relative to the project root.
const DOCS: &[(&str, &str)] = &[
    ("TESTING_GUIDES/QUICK_START.md", "QUICK_START.md"),
    ("TESTING_GUIDES/HTML_GUIDE_README.md", "HTML_GUIDE_README.md"),
    ("README.md", "PROJECT_README.md"),
    ("CHANGELOG.md", "CHANGELOG.md"),
];

const GITIGNORE: &str = "# Testing package - for distribution\n*.log\n.DS_Store\nThumbs.db\n";

/// Configuration for assembling a tester package.
#[derive(Debug, Clone)]
pub struct BundleConfig {
    /// Project root the optional documentation paths resolve against
    pub project_root: PathBuf,

    /// Pre-built extension output (the one required input)
    pub extension_dir: PathBuf,

    /// Directory holding the guide HTML and launcher scripts
    pub guides_dir: PathBuf,

    /// Where the staging tree and final archive are written
    pub output_dir: PathBuf,

    /// Product version interpolated into names and the tester README
    pub version: String,

    /// Product slug prefixing the package name
    pub product_slug: String,
}

impl BundleConfig {
    /// Default layout rooted at `project_root`.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        Self {
            extension_dir: project_root.join("dist"),
            guides_dir: project_root.join("TESTING_GUIDES"),
            output_dir: project_root.clone(),
            version: "0.12.0".to_string(),
            product_slug: "bitcoin-wallet".to_string(),
            project_root,
        }
    }
}

/// An optional input that was absent and therefore left out of the package.
#[derive(Debug, Clone)]
pub struct SkippedItem {
    /// Package-relative name the item would have had
    pub name: String,
    /// Source path that was not found
    pub path: PathBuf,
}

/// Outcome of a successful packaging run.
#[derive(Debug)]
pub struct BundleReport {
    pub archive_path: PathBuf,
    pub package_name: String,
    pub entry_count: usize,
    pub archive_bytes: u64,
    pub skipped: Vec<SkippedItem>,
}

/// Errors that can occur during packaging.
#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error("extension build not found at {path} - build the extension before packaging")]
    MissingExtension { path: PathBuf },

    #[error("failed to copy {path}: {source}")]
    Copy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to render tester README: {0}")]
    Readme(#[from] minijinja::Error),

    #[error("failed to create archive {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

/// Assemble the distribution archive.
///
/// The extension directory is the one hard precondition; every other input
/// is best-effort, recorded in the report's `skipped` list when absent.
/// The staging tree is removed whether packaging succeeds or fails.
pub fn assemble(config: &BundleConfig) -> Result<BundleReport, BundleError> {
    if !config.extension_dir.is_dir() {
        return Err(BundleError::MissingExtension {
            path: config.extension_dir.clone(),
        });
    }

    let now = Local::now();
    let package_name = format!(
        "{}-v{}-testing-package-{}",
        config.product_slug,
        config.version,
        now.format("%Y%m%d")
    );

    tracing::info!("creating tester package: {package_name}");

    let staging = StagingTree::create(config.output_dir.join(&package_name))?;
    let mut skipped = Vec::new();

    let copied = staging.copy_tree(&config.extension_dir, "extension")?;
    tracing::info!("copied extension ({copied} files)");

    copy_guide(&staging, config, &mut skipped)?;
    copy_launchers(&staging, config, &mut skipped)?;
    copy_docs(&staging, config, &mut skipped)?;

    staging.write_file(
        "TESTER_README.md",
        &readme::render(&package_name, &config.version, now)?,
    )?;
    staging.write_file(".gitignore", GITIGNORE)?;

    let archive_path = config.output_dir.join(format!("{package_name}.zip"));
    let entry_count = archive::write_zip(staging.root(), &archive_path)?;
    drop(staging);

    let archive_bytes = match fs::metadata(&archive_path) {
        Ok(meta) => meta.len(),
        Err(e) => {
            tracing::warn!("failed to stat {}: {e}", archive_path.display());
            0
        }
    };

    tracing::info!(
        "created {} ({} entries, {} bytes)",
        archive_path.display(),
        entry_count,
        archive_bytes
    );

    Ok(BundleReport {
        archive_path,
        package_name,
        entry_count,
        archive_bytes,
        skipped,
    })
}

fn copy_guide(
    staging: &StagingTree,
    config: &BundleConfig,
    skipped: &mut Vec<SkippedItem>,
) -> Result<(), BundleError> {
    let guide = config.guides_dir.join(GUIDE_HTML);
    if guide.is_file() {
        staging.copy_file(&guide, GUIDE_HTML)?;
        tracing::info!("copied {GUIDE_HTML}");
    } else {
        tracing::warn!("{GUIDE_HTML} not found - run the guide build first");
        skip(skipped, GUIDE_HTML, guide);
    }
    Ok(())
}

fn copy_launchers(
    staging: &StagingTree,
    config: &BundleConfig,
    skipped: &mut Vec<SkippedItem>,
) -> Result<(), BundleError> {
    for launcher in LAUNCHERS {
        let src = config.guides_dir.join(launcher);
        if src.is_file() {
            staging.copy_file(&src, launcher)?;
            if launcher.ends_with(".sh") {
                staging.make_executable(launcher)?;
            }
            tracing::info!("copied {launcher}");
        } else {
            tracing::warn!("launcher not found, skipping: {}", src.display());
            skip(skipped, launcher, src);
        }
    }
    Ok(())
}

fn copy_docs(
    staging: &StagingTree,
    config: &BundleConfig,
    skipped: &mut Vec<SkippedItem>,
) -> Result<(), BundleError> {
    for (src_rel, dest_name) in DOCS {
        let src = config.project_root.join(src_rel);
        if src.is_file() {
            staging.copy_file(&src, dest_name)?;
            tracing::info!("copied {dest_name}");
        } else {
            tracing::warn!("documentation not found, skipping: {}", src.display());
            skip(skipped, dest_name, src);
        }
    }
    Ok(())
}

fn skip(skipped: &mut Vec<SkippedItem>, name: &str, path: impl AsRef<Path>) {
    skipped.push(SkippedItem {
        name: name.to_string(),
        path: path.as_ref().to_path_buf(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    /// Minimal project layout: two extension files, the guide HTML, the
    /// Unix launcher and a root README. The Windows launcher, quick start,
    /// guide README and changelog are deliberately absent.
    fn project(temp: &Path) -> BundleConfig {
        fs::create_dir_all(temp.join("dist/icons")).unwrap();
        fs::write(temp.join("dist/manifest.json"), "{}").unwrap();
        fs::write(temp.join("dist/icons/icon.png"), "png").unwrap();

        fs::create_dir_all(temp.join("TESTING_GUIDES")).unwrap();
        fs::write(temp.join("TESTING_GUIDES").join(GUIDE_HTML), "<html></html>").unwrap();
        fs::write(temp.join("TESTING_GUIDES/open-guide.sh"), "#!/bin/sh\n").unwrap();

        fs::write(temp.join("README.md"), "# project").unwrap();

        BundleConfig::new(temp)
    }

    #[test]
    fn packages_present_inputs_and_reports_skips() {
        let temp = tempfile::tempdir().unwrap();
        let config = project(temp.path());

        let report = assemble(&config).unwrap();

        // 2 extension files + guide + launcher + PROJECT_README
        // + generated TESTER_README + .gitignore
        assert_eq!(report.entry_count, 7);
        assert!(report.archive_path.is_file());
        assert_eq!(
            report.archive_bytes,
            fs::metadata(&report.archive_path).unwrap().len()
        );

        let skipped: Vec<&str> = report.skipped.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            skipped,
            vec![
                "open-guide.bat",
                "QUICK_START.md",
                "HTML_GUIDE_README.md",
                "CHANGELOG.md"
            ]
        );

        // Staging tree is gone after a successful run.
        assert!(!temp.path().join(&report.package_name).exists());
    }

    #[test]
    fn archive_layout_matches_staging_layout() {
        let temp = tempfile::tempdir().unwrap();
        let config = project(temp.path());

        let report = assemble(&config).unwrap();

        let mut archive = zip::ZipArchive::new(File::open(&report.archive_path).unwrap()).unwrap();
        assert_eq!(archive.len(), report.entry_count);

        let prefix = format!("{}/", report.package_name);
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();

        assert!(names.iter().all(|n| n.starts_with(&prefix)));
        assert!(names.contains(&format!("{prefix}extension/manifest.json")));
        assert!(names.contains(&format!("{prefix}testing-guide.html")));
        assert!(names.contains(&format!("{prefix}TESTER_README.md")));
        assert!(names.contains(&format!("{prefix}.gitignore")));
        assert!(names.contains(&format!("{prefix}PROJECT_README.md")));
    }

    #[test]
    fn package_name_carries_version_and_date() {
        let temp = tempfile::tempdir().unwrap();
        let config = project(temp.path());

        let report = assemble(&config).unwrap();

        let expected = format!(
            "bitcoin-wallet-v0.12.0-testing-package-{}",
            Local::now().format("%Y%m%d")
        );
        assert_eq!(report.package_name, expected);
        assert!(report
            .archive_path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .ends_with(&format!("{expected}.zip")));
    }

    #[test]
    fn missing_extension_dir_is_fatal_and_produces_nothing() {
        let temp = tempfile::tempdir().unwrap();
        let config = BundleConfig::new(temp.path());

        let err = assemble(&config).unwrap_err();
        assert!(matches!(err, BundleError::MissingExtension { .. }));

        // No archive, no staging residue.
        let leftovers: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert!(leftovers.is_empty());
    }
}
