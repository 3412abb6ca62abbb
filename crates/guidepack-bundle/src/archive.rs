//! Zip compression of the staging tree.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use walkdir::WalkDir;
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::bundler::BundleError;

/// Deflate-compress the staging tree into `dest`.
///
/// Entry names are relative to the staging tree's parent, so the archive
/// root is the package folder itself. Returns the number of file entries
/// written; the archive contains exactly the staged files, nothing else.
pub(crate) fn write_zip(staging_root: &Path, dest: &Path) -> Result<usize, BundleError> {
    let archive_err = |source: ZipError| BundleError::Archive {
        path: dest.to_path_buf(),
        source,
    };

    let file = File::create(dest).map_err(|e| archive_err(e.into()))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let base = staging_root.parent().unwrap_or(staging_root);
    let mut entries = 0;

    for entry in WalkDir::new(staging_root).sort_by_file_name() {
        let entry = entry.map_err(|e| archive_err(io::Error::other(e).into()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry
            .path()
            .strip_prefix(base)
            .expect("walkdir yields paths under the staging parent")
            .to_string_lossy()
            .replace('\\', "/");

        zip.start_file(name, options).map_err(archive_err)?;

        let mut source = File::open(entry.path()).map_err(|e| archive_err(e.into()))?;
        io::copy(&mut source, &mut zip).map_err(|e| archive_err(e.into()))?;
        entries += 1;
    }

    zip.finish().map_err(archive_err)?;
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn archive_root_is_the_package_folder() {
        let temp = tempfile::tempdir().unwrap();
        let staging = temp.path().join("my-package");
        fs::create_dir_all(staging.join("extension")).unwrap();
        fs::write(staging.join("extension/manifest.json"), "{}").unwrap();
        fs::write(staging.join("TESTER_README.md"), "# hi").unwrap();

        let dest = temp.path().join("my-package.zip");
        let entries = write_zip(&staging, &dest).unwrap();
        assert_eq!(entries, 2);

        let mut archive = zip::ZipArchive::new(File::open(&dest).unwrap()).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();

        assert!(names.iter().all(|n| n.starts_with("my-package/")));
        assert!(names.contains(&"my-package/extension/manifest.json".to_string()));
        assert!(names.contains(&"my-package/TESTER_README.md".to_string()));
    }
}
