//! Ephemeral staging tree assembled before compression.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::bundler::BundleError;

/// Directory tree mirroring the final archive layout.
///
/// Created fresh, populated by copies and generated files, compressed,
/// then removed. Removal happens in `Drop`, so an error partway through
/// packaging cleans up the same way a successful run does.
pub(crate) struct StagingTree {
    root: PathBuf,
}

impl StagingTree {
    /// Create the staging directory, replacing any leftover from an
    /// earlier run of the same day.
    pub(crate) fn create(root: PathBuf) -> Result<Self, BundleError> {
        if root.exists() {
            fs::remove_dir_all(&root).map_err(|source| BundleError::Write {
                path: root.clone(),
                source,
            })?;
        }

        fs::create_dir_all(&root).map_err(|source| BundleError::Write {
            path: root.clone(),
            source,
        })?;

        Ok(Self { root })
    }

    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    /// Recursively copy a directory into the staging tree under `dest_name`.
    /// Returns the number of files copied.
    pub(crate) fn copy_tree(&self, src: &Path, dest_name: &str) -> Result<usize, BundleError> {
        let dest_root = self.root.join(dest_name);
        let mut copied = 0;

        for entry in WalkDir::new(src) {
            let entry = entry.map_err(|e| BundleError::Copy {
                path: src.to_path_buf(),
                source: io::Error::other(e),
            })?;

            let relative = entry
                .path()
                .strip_prefix(src)
                .expect("walkdir yields paths under its root");
            let dest = dest_root.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&dest).map_err(|source| BundleError::Write {
                    path: dest.clone(),
                    source,
                })?;
            } else {
                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent).map_err(|source| BundleError::Write {
                        path: parent.to_path_buf(),
                        source,
                    })?;
                }
                fs::copy(entry.path(), &dest).map_err(|source| BundleError::Copy {
                    path: entry.path().to_path_buf(),
                    source,
                })?;
                copied += 1;
            }
        }

        Ok(copied)
    }

    /// Copy a single file into the staging root under `dest_name`.
    pub(crate) fn copy_file(&self, src: &Path, dest_name: &str) -> Result<PathBuf, BundleError> {
        let dest = self.root.join(dest_name);
        fs::copy(src, &dest).map_err(|source| BundleError::Copy {
            path: src.to_path_buf(),
            source,
        })?;
        Ok(dest)
    }

    /// Write a generated file into the staging root.
    pub(crate) fn write_file(&self, name: &str, contents: &str) -> Result<(), BundleError> {
        let dest = self.root.join(name);
        fs::write(&dest, contents).map_err(|source| BundleError::Write { path: dest, source })
    }

    /// Mark a staged file executable. No-op on non-Unix targets.
    #[cfg(unix)]
    pub(crate) fn make_executable(&self, name: &str) -> Result<(), BundleError> {
        use std::os::unix::fs::PermissionsExt;

        let path = self.root.join(name);
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .map_err(|source| BundleError::Write { path, source })
    }

    #[cfg(not(unix))]
    pub(crate) fn make_executable(&self, _name: &str) -> Result<(), BundleError> {
        Ok(())
    }
}

impl Drop for StagingTree {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_dir_all(&self.root) {
            tracing::warn!("failed to remove staging directory {}: {e}", self.root.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_tree_preserves_layout_and_counts_files() {
        let temp = tempfile::tempdir().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(src.join("icons")).unwrap();
        fs::write(src.join("manifest.json"), "{}").unwrap();
        fs::write(src.join("icons/icon.png"), "png").unwrap();

        let staging = StagingTree::create(temp.path().join("staging")).unwrap();
        let copied = staging.copy_tree(&src, "extension").unwrap();

        assert_eq!(copied, 2);
        assert!(staging.root().join("extension/manifest.json").is_file());
        assert!(staging.root().join("extension/icons/icon.png").is_file());
    }

    #[test]
    fn staging_is_removed_on_drop() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("staging");

        let staging = StagingTree::create(root.clone()).unwrap();
        staging.write_file("note.txt", "hi").unwrap();
        assert!(root.is_dir());

        drop(staging);
        assert!(!root.exists());
    }

    #[test]
    fn create_replaces_leftover_tree() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("staging");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("stale.txt"), "old").unwrap();

        let staging = StagingTree::create(root.clone()).unwrap();
        assert!(!staging.root().join("stale.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn make_executable_sets_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::tempdir().unwrap();
        let staging = StagingTree::create(temp.path().join("staging")).unwrap();
        staging.write_file("open-guide.sh", "#!/bin/sh\n").unwrap();
        staging.make_executable("open-guide.sh").unwrap();

        let mode = fs::metadata(staging.root().join("open-guide.sh"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o755, 0o755);
    }
}
