// Copyright (c) 2025-2026 the dtedpack contributors
// SPDX-License-Identifier: Apache-2.0

//! # dtedpack
//!
//! Repackages a flat directory of DTED Level 2 tiles into the layout the
//! ATAK elevation importer expects:
//!
//! ```text
//! tiles/                          tiles/
//! ├─ n47_e006_1arc_v3.dt2   ->    └─ tiles/
//! ├─ n48_e006_1arc_v3.dt2            └─ e006/
//! └─ ...                                ├─ n47.dt2
//!                                       └─ n48.dt2
//! ```
//!
//! A run is a straight pipeline:
//!
//! 1. **Plan** - validate the source directory and scan it for `*.dt2` files
//! 2. **Copy** - rebuild `<source>/<source-name>/` from scratch, one folder
//!    per longitude token, one `<latitude>.dt2` file per tile
//! 3. **Archive** - optionally zip the package, entries rooted at
//!    `<source-name>/`
//! 4. **Report** - print counts and import instructions
//!
//! Names that don't start with `n<digits>_e<digits>_` are skipped and
//! counted, never fatal.

pub mod cli;
pub mod packer;
pub mod utils;

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Instant;
use utils::progress::ProgressManager;

/// Final resolved settings for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageConfig {
    /// Directory holding the `.dt2` tiles
    pub source_dir: PathBuf,
    /// Also write a ZIP archive of the package
    pub create_archive: bool,
    /// Explicit archive path; `None` means `<source>/atak_dted_package.zip`
    pub archive_path: Option<PathBuf>,
    /// Verbosity level (0-2)
    pub verbose: u8,
    /// Quiet mode (warnings, errors and the final path only)
    pub quiet: bool,
}

impl PackageConfig {
    /// Package `source_dir` without an archive.
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            create_archive: false,
            archive_path: None,
            verbose: 0,
            quiet: false,
        }
    }

    /// Also write an archive, at `path` or the default location.
    pub fn with_archive(mut self, path: Option<PathBuf>) -> Self {
        self.create_archive = true;
        self.archive_path = path;
        self
    }
}

/// Initialize the global tracing subscriber.
///
/// Progress messages go to stdout without timestamps. Calling this more
/// than once is harmless.
pub fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        tracing::Level::WARN
    } else {
        match verbose {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Build the package, print the summary, and return the output path.
///
/// The output path is the archive when one was written, otherwise the
/// package directory.
pub fn run(config: &PackageConfig) -> Result<PathBuf> {
    tracing::debug!("dtedpack v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!(
        "Configuration: source_dir={}, create_archive={}, archive_path={:?}",
        config.source_dir.display(),
        config.create_archive,
        config.archive_path
    );

    let started = Instant::now();
    let mut progress = ProgressManager::new(config.quiet);

    let report = packer::build_package(config, &mut progress)?;

    utils::summary::display_success_summary(&report, started.elapsed(), config.quiet)
        .context("Failed to write summary")?;

    Ok(report.output_path().to_path_buf())
}
