// Copyright (c) 2025-2026 the dtedpack contributors
// SPDX-License-Identifier: Apache-2.0

use crate::packer::tile::TILE_EXTENSION;
use crate::utils::error::DtedError;
use globset::{Glob, GlobMatcher};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// A `.dt2` file discovered directly inside the source directory.
#[derive(Debug, Clone)]
pub struct SourceTile {
    /// Full path to the file
    pub path: PathBuf,
    /// File name as it appears on disk
    pub file_name: String,
    /// Size of the file in bytes
    pub size: u64,
}

impl SourceTile {
    /// Create a new SourceTile by reading metadata.
    pub fn new(path: PathBuf) -> Result<Self, DtedError> {
        let metadata =
            std::fs::metadata(&path).map_err(|e| DtedError::io("read metadata for", &path, e))?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            path,
            file_name,
            size: metadata.len(),
        })
    }
}

fn tile_matcher() -> Result<GlobMatcher, DtedError> {
    let pattern = format!("*.{}", TILE_EXTENSION);
    Glob::new(&pattern)
        .map(|glob| glob.compile_matcher())
        .map_err(|e| DtedError::Config(format!("Invalid glob pattern '{}': {}", pattern, e)))
}

/// List the `*.dt2` files directly inside `root`, sorted by file name.
///
/// Subdirectories are not descended into, so a previously built package
/// never feeds back into the scan.
pub fn scan_tiles(root: &Path) -> Result<Vec<SourceTile>, DtedError> {
    let matcher = tile_matcher()?;

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(true)
        .max_depth(Some(1))
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut tiles = Vec::new();

    for result in walker {
        let entry = result.map_err(|e| DtedError::io("scan", root, std::io::Error::other(e)))?;

        if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        if !matcher.is_match(entry.file_name()) {
            continue;
        }

        tiles.push(SourceTile::new(entry.path().to_path_buf())?);
    }

    tracing::debug!("Scanned {} tile files in {}", tiles.len(), root.display());
    Ok(tiles)
}

/// Every regular file below `root`, recursively, sorted by path.
pub fn walk_package_tree(root: &Path) -> Result<Vec<PathBuf>, DtedError> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();

    for result in walker {
        let entry = result.map_err(|e| DtedError::io("walk", root, std::io::Error::other(e)))?;
        if entry.file_type().is_some_and(|ft| ft.is_file()) {
            files.push(entry.path().to_path_buf());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str, content: &[u8]) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_scan_only_matches_dt2_at_top_level() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "n48_e006_1arc_v3.dt2", b"b");
        touch(dir.path(), "n47_e006_1arc_v3.dt2", b"aa");
        touch(dir.path(), "notes.txt", b"x");
        touch(dir.path(), "n47_e006_1arc_v3.DT2", b"x");
        touch(dir.path(), "nested/n49_e006_1arc_v3.dt2", b"x");
        std::fs::create_dir(dir.path().join("folder.dt2")).unwrap();

        let tiles = scan_tiles(dir.path()).unwrap();
        let names: Vec<_> = tiles.iter().map(|t| t.file_name.as_str()).collect();
        assert_eq!(names, ["n47_e006_1arc_v3.dt2", "n48_e006_1arc_v3.dt2"]);
        assert_eq!(tiles[0].size, 2);
        assert_eq!(tiles[1].size, 1);
    }

    #[test]
    fn test_scan_includes_unparseable_dt2_names() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "readme.dt2", b"x");

        let tiles = scan_tiles(dir.path()).unwrap();
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].file_name, "readme.dt2");
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(scan_tiles(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_walk_package_tree_is_recursive_and_sorted() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "e007/n47.dt2", b"x");
        touch(dir.path(), "e006/n48.dt2", b"x");
        touch(dir.path(), "e006/n47.dt2", b"x");
        std::fs::create_dir(dir.path().join("empty")).unwrap();

        let files = walk_package_tree(dir.path()).unwrap();
        let relative: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            relative,
            [
                PathBuf::from("e006/n47.dt2"),
                PathBuf::from("e006/n48.dt2"),
                PathBuf::from("e007/n47.dt2"),
            ]
        );
    }
}
