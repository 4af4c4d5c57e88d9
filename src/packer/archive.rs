// Copyright (c) 2025-2026 the dtedpack contributors
// SPDX-License-Identifier: Apache-2.0

//! ZIP output for a built package.
//!
//! Entries are named relative to the package directory's parent, so an
//! archive built from `tiles/tiles/` holds `tiles/e006/n47.dt2` and extracts
//! straight into ATAK's `dted/` folder.

use crate::packer::walker::walk_package_tree;
use crate::utils::error::DtedError;
use crate::utils::progress::{ProgressManager, stages};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Component, Path, PathBuf};
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

/// Outcome of writing an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveReport {
    /// Where the archive was written
    pub path: PathBuf,
    /// Number of file entries
    pub entries: usize,
    /// Archive size on disk in bytes
    pub size: u64,
}

/// Archive-internal name for `file`: its path below `base`, `/`-separated.
pub fn entry_name(base: &Path, file: &Path) -> Result<String, DtedError> {
    let relative = file.strip_prefix(base).map_err(|_| {
        DtedError::Config(format!(
            "{} is not inside {}",
            file.display(),
            base.display()
        ))
    })?;

    let parts: Vec<_> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();

    Ok(parts.join("/"))
}

/// Write every file under `package_dir` into a deflate-compressed ZIP at `archive_path`.
pub fn write_archive(
    package_dir: &Path,
    archive_path: &Path,
    progress: &mut ProgressManager,
) -> Result<ArchiveReport, DtedError> {
    let base = package_dir.parent().unwrap_or(package_dir);
    let files = walk_package_tree(package_dir)?;

    let file = File::create(archive_path).map_err(|e| DtedError::io("create", archive_path, e))?;
    let mut writer = zip::ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let _bar = progress.add_stage(stages::ARCHIVING, files.len() as u64);

    for (i, path) in files.iter().enumerate() {
        let name = entry_name(base, path)?;
        tracing::trace!("Adding {} as {}", path.display(), name);

        let result = add_entry(&mut writer, path, &name, options);
        if let Err(e) = result {
            progress.abandon(stages::ARCHIVING);
            return Err(e);
        }
        progress.update(stages::ARCHIVING, (i + 1) as u64, &name);
    }

    writer
        .finish()?
        .flush()
        .map_err(|e| DtedError::io("write", archive_path, e))?;
    progress.finish(stages::ARCHIVING);

    let size = std::fs::metadata(archive_path)
        .map_err(|e| DtedError::io("read metadata for", archive_path, e))?
        .len();

    Ok(ArchiveReport {
        path: archive_path.to_path_buf(),
        entries: files.len(),
        size,
    })
}

fn add_entry<W: Write + std::io::Seek>(
    writer: &mut zip::ZipWriter<W>,
    path: &Path,
    name: &str,
    options: SimpleFileOptions,
) -> Result<(), DtedError> {
    let source = File::open(path).map_err(|e| DtedError::io("open", path, e))?;
    writer.start_file(name, options)?;
    std::io::copy(&mut BufReader::new(source), writer)
        .map_err(|e| DtedError::io("archive", path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;

    #[test]
    fn test_entry_name_uses_forward_slashes() {
        let base = Path::new("/data/tiles");
        let file = base.join("tiles").join("e006").join("n47.dt2");
        assert_eq!(entry_name(base, &file).unwrap(), "tiles/e006/n47.dt2");
    }

    #[test]
    fn test_entry_name_outside_base_fails() {
        let err = entry_name(Path::new("/a"), Path::new("/b/c.dt2")).unwrap_err();
        assert!(matches!(err, DtedError::Config(_)));
    }

    #[test]
    fn test_write_archive_roots_entries_at_package_name() {
        let dir = TempDir::new().unwrap();
        let package = dir.path().join("tiles");
        std::fs::create_dir_all(package.join("e006")).unwrap();
        std::fs::write(package.join("e006").join("n47.dt2"), b"tile-47").unwrap();
        std::fs::write(package.join("e006").join("n48.dt2"), b"tile-48").unwrap();

        let archive_path = dir.path().join("out.zip");
        let report =
            write_archive(&package, &archive_path, &mut ProgressManager::hidden()).unwrap();
        assert_eq!(report.entries, 2);
        assert!(report.size > 0);
        assert_eq!(report.path, archive_path);

        let mut archive = zip::ZipArchive::new(File::open(&archive_path).unwrap()).unwrap();
        let mut names: Vec<_> = archive.file_names().map(str::to_string).collect();
        names.sort();
        assert_eq!(names, ["tiles/e006/n47.dt2", "tiles/e006/n48.dt2"]);

        let mut entry = archive.by_name("tiles/e006/n47.dt2").unwrap();
        assert_eq!(entry.compression(), CompressionMethod::Deflated);
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();
        assert_eq!(content, "tile-47");
    }
}
