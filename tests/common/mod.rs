// Copyright (c) 2025-2026 the dtedpack contributors
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities and fixtures for integration tests.
#![allow(dead_code)]

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Creates a temporary directory for test fixtures.
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Creates `<temp>/<name>/` holding one file per entry of `files`.
///
/// Each file's content is its own name, so tests can tell which source a
/// packaged tile came from.
pub fn create_tile_dir(dir: &TempDir, name: &str, files: &[&str]) -> PathBuf {
    let root = dir.path().join(name);
    std::fs::create_dir_all(&root).expect("Failed to create tile directory");

    for file in files {
        std::fs::write(root.join(file), file.as_bytes()).expect("Failed to write tile");
    }

    root.canonicalize().expect("Failed to canonicalize tile directory")
}

/// A typical download of SRTM-derived tiles around the Alps.
pub fn alps_tiles() -> Vec<&'static str> {
    vec![
        "n45_e006_1arc_v3.dt2",
        "n46_e006_1arc_v3.dt2",
        "n46_e007_1arc_v3.dt2",
        "n47_e007_1arc_v3.dt2",
        "n47_e008_1arc_v3.dt2",
    ]
}

/// Every file below `root` as sorted `/`-separated relative paths, one per line.
pub fn tree_listing(root: &Path) -> String {
    dtedpack::packer::walker::walk_package_tree(root)
        .expect("Failed to walk tree")
        .iter()
        .map(|path| {
            dtedpack::packer::archive::entry_name(root, path).expect("Path outside tree")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sorted entry names of a ZIP archive.
pub fn zip_entry_names(path: &Path) -> Vec<String> {
    let file = File::open(path).expect("Failed to open archive");
    let archive = zip::ZipArchive::new(file).expect("Failed to read archive");
    let mut names: Vec<_> = archive.file_names().map(str::to_string).collect();
    names.sort();
    names
}

/// Path to the compiled `dtedpack` binary.
pub fn dtedpack_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_dtedpack"))
}

/// Runs the binary with `args` from `cwd`.
pub fn run_cli(cwd: &Path, args: &[&str]) -> Output {
    Command::new(dtedpack_bin())
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("Failed to execute command")
}
