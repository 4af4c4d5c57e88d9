// Copyright (c) 2025-2026 the dtedpack contributors
// SPDX-License-Identifier: Apache-2.0

//! Package construction.
//!
//! Turns a flat directory of `n47_e006_1arc_v3.dt2` tiles into
//! `<source>/<source-name>/e006/n47.dt2`, then optionally zips the result.
//! Every check that can fail without touching the disk runs first, so
//! missing or empty sources leave the filesystem untouched.

use crate::PackageConfig;
use crate::packer::archive::{ArchiveReport, write_archive};
use crate::packer::tile::parse_tile_name;
use crate::packer::walker::{SourceTile, scan_tiles};
use crate::utils::error::DtedError;
use crate::utils::formatting::format_megabytes;
use crate::utils::progress::{ProgressManager, stages};
use std::collections::{BTreeSet, HashMap};
use std::fs::{File, FileTimes};
use std::path::{Component, Path, PathBuf};

/// Archive file name used when `--zip` is given without `--output`.
pub const DEFAULT_ARCHIVE_NAME: &str = "atak_dted_package.zip";

/// Unparseable names logged individually before the rest are only counted.
pub const MAX_REPORTED_SKIPS: usize = 5;

/// Without a visible progress bar, log a progress line this often.
const PROGRESS_LOG_INTERVAL: usize = 50;

/// Everything resolved and checked before the first filesystem write.
#[derive(Debug, Clone)]
pub struct PackagePlan {
    /// Absolute source directory, as given (symlinks are not resolved)
    pub source_dir: PathBuf,
    /// `<source>/<source-name>`
    pub package_dir: PathBuf,
    /// Archive destination, when an archive was requested
    pub archive_path: Option<PathBuf>,
    /// Tiles found in the source directory, sorted by file name
    pub tiles: Vec<SourceTile>,
}

/// What a package build did.
#[derive(Debug, Clone)]
pub struct PackageReport {
    /// Directory holding the longitude folders
    pub package_dir: PathBuf,
    /// Number of `.dt2` files found in the source directory
    pub files_found: usize,
    /// Total size of the `.dt2` files found
    pub bytes_found: u64,
    /// Number of files copied into the package
    pub files_copied: usize,
    /// Bytes written into the package
    pub bytes_copied: u64,
    /// Names of files whose name could not be parsed
    pub skipped: Vec<String>,
    /// Longitude folders created inside the package
    pub folders_created: BTreeSet<String>,
    /// Archive details, when an archive was written
    pub archive: Option<ArchiveReport>,
}

impl PackageReport {
    /// The archive path if one was written, otherwise the package directory.
    pub fn output_path(&self) -> &Path {
        self.archive
            .as_ref()
            .map_or(self.package_dir.as_path(), |archive| archive.path.as_path())
    }
}

/// Validate the source directory and resolve every output path.
///
/// Performs no writes.
pub fn plan_package(config: &PackageConfig) -> Result<PackagePlan, DtedError> {
    let source = &config.source_dir;

    if !source.exists() {
        return Err(DtedError::NotFound {
            path: source.clone(),
        });
    }
    if !source.is_dir() {
        return Err(DtedError::NotADirectory {
            path: source.clone(),
        });
    }

    let source_dir = std::path::absolute(source)
        .map(|path| normalize_lexically(&path))
        .map_err(|e| DtedError::io("resolve", source, e))?;

    // The package is named after the directory as the user spelled it, so a
    // symlinked source keeps the link's name rather than its target's.
    let package_name = match source_dir.file_name() {
        Some(name) => name.to_os_string(),
        None => source
            .canonicalize()
            .map_err(|e| DtedError::io("resolve", source, e))?
            .file_name()
            .map(|name| name.to_os_string())
            .ok_or_else(|| {
                DtedError::Config(format!(
                    "Cannot derive a package name from {}",
                    source_dir.display()
                ))
            })?,
    };
    let package_dir = source_dir.join(package_name);

    let archive_path = if config.create_archive {
        let requested = config
            .archive_path
            .clone()
            .unwrap_or_else(|| source_dir.join(DEFAULT_ARCHIVE_NAME));
        let absolute = std::path::absolute(&requested)
            .map(|path| normalize_lexically(&path))
            .map_err(|e| DtedError::io("resolve", &requested, e))?;
        if absolute.starts_with(&package_dir) {
            return Err(DtedError::archive_inside_package(&absolute, &package_dir));
        }
        Some(requested)
    } else {
        None
    };

    let tiles = scan_tiles(&source_dir)?;
    if tiles.is_empty() {
        return Err(DtedError::EmptyInput {
            path: source.clone(),
        });
    }

    Ok(PackagePlan {
        source_dir,
        package_dir,
        archive_path,
        tiles,
    })
}

/// Drop `.` components and fold `..` into its parent without touching the
/// filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Build the package described by `config`.
///
/// An existing package directory is deleted and rebuilt from scratch. When
/// an archive is requested, an existing file at the archive path is replaced.
/// I/O failures stop the run and leave any partial output on disk.
pub fn build_package(
    config: &PackageConfig,
    progress: &mut ProgressManager,
) -> Result<PackageReport, DtedError> {
    let plan = plan_package(config)?;
    let package_dir = &plan.package_dir;

    if package_dir.exists() {
        tracing::info!(
            "Cleaning up existing package directory: {}",
            package_dir.display()
        );
        std::fs::remove_dir_all(package_dir)
            .map_err(|e| DtedError::io("remove", package_dir, e))?;
    }

    if let Some(archive_path) = plan.archive_path.as_deref() {
        if archive_path.exists() {
            tracing::info!("Removing existing ZIP file: {}", archive_path.display());
            std::fs::remove_file(archive_path)
                .map_err(|e| DtedError::io("remove", archive_path, e))?;
        }
    }

    tracing::info!("Found {} DTED Level 2 files", plan.tiles.len());
    tracing::info!("Creating package structure in: {}", package_dir.display());
    std::fs::create_dir(package_dir).map_err(|e| DtedError::io("create", package_dir, e))?;

    tracing::info!("Copying and organizing files...");
    let mut report = PackageReport {
        package_dir: package_dir.clone(),
        files_found: plan.tiles.len(),
        bytes_found: plan.tiles.iter().map(|tile| tile.size).sum(),
        files_copied: 0,
        bytes_copied: 0,
        skipped: Vec::new(),
        folders_created: BTreeSet::new(),
        archive: None,
    };

    if let Err(e) = copy_tiles(&plan, &mut report, progress) {
        progress.abandon(stages::COPYING);
        return Err(e);
    }
    progress.finish(stages::COPYING);

    if !report.skipped.is_empty() {
        tracing::info!(
            "Skipped {} files due to parsing errors",
            report.skipped.len()
        );
    }
    tracing::info!("Created {} folders", report.folders_created.len());
    tracing::debug!(
        "Copied {} of {} bytes found",
        report.bytes_copied,
        report.bytes_found
    );
    tracing::info!("Package structure created in: {}", package_dir.display());

    if let Some(archive_path) = plan.archive_path.as_deref() {
        tracing::info!("Creating ZIP file: {}", archive_path.display());
        let archive = write_archive(package_dir, archive_path, progress)?;
        tracing::info!("ZIP file created: {}", archive.path.display());
        tracing::info!("Package size: {} MB", format_megabytes(archive.size));
        report.archive = Some(archive);
    }

    Ok(report)
}

fn copy_tiles(
    plan: &PackagePlan,
    report: &mut PackageReport,
    progress: &mut ProgressManager,
) -> Result<(), DtedError> {
    let total = plan.tiles.len();
    let _bar = progress.add_stage(stages::COPYING, total as u64);

    // destination -> source name, to spot tiles that land on the same cell
    let mut destinations: HashMap<PathBuf, &str> = HashMap::new();

    for (i, tile) in plan.tiles.iter().enumerate() {
        progress.update(stages::COPYING, i as u64, &tile.file_name);

        let Some(name) = parse_tile_name(&tile.file_name) else {
            report.skipped.push(tile.file_name.clone());
            if report.skipped.len() <= MAX_REPORTED_SKIPS {
                progress.suspend(|| {
                    tracing::warn!("Could not parse filename: {}", tile.file_name);
                });
            }
            continue;
        };

        let folder = plan.package_dir.join(name.folder_name());
        if !report.folders_created.contains(name.folder_name()) {
            std::fs::create_dir_all(&folder).map_err(|e| DtedError::io("create", &folder, e))?;
            report.folders_created.insert(name.folder_name().to_string());
        }

        let dest = folder.join(name.file_name());
        if let Some(previous) = destinations.insert(dest.clone(), &tile.file_name) {
            tracing::debug!(
                "{} overwrites {} at {}",
                tile.file_name,
                previous,
                dest.display()
            );
        }

        report.bytes_copied += copy_with_metadata(&tile.path, &dest)?;
        report.files_copied += 1;
        tracing::trace!("Copied {} -> {}", tile.file_name, name);

        let processed = i + 1;
        if !progress.is_visible() && processed % PROGRESS_LOG_INTERVAL == 0 {
            tracing::info!("Processed {}/{} files...", processed, total);
        }
    }

    progress.update(stages::COPYING, total as u64, "");
    Ok(())
}

/// Copy file contents, then timestamps, then permissions.
///
/// Permissions go last so a read-only source doesn't block setting times.
pub fn copy_with_metadata(src: &Path, dest: &Path) -> Result<u64, DtedError> {
    let metadata = std::fs::metadata(src).map_err(|e| DtedError::io("read metadata for", src, e))?;

    let mut reader = File::open(src).map_err(|e| DtedError::io("open", src, e))?;
    let mut writer = File::create(dest).map_err(|e| DtedError::io("create", dest, e))?;
    let bytes = std::io::copy(&mut reader, &mut writer)
        .map_err(|e| DtedError::io("copy", src, e))?;

    let mut times = FileTimes::new();
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    writer
        .set_times(times)
        .map_err(|e| DtedError::io("set timestamps on", dest, e))?;
    drop(writer);

    std::fs::set_permissions(dest, metadata.permissions())
        .map_err(|e| DtedError::io("set permissions on", dest, e))?;

    Ok(bytes)
}
