// Copyright (c) 2025-2026 the dtedpack contributors
// SPDX-License-Identifier: Apache-2.0

//! Turns parsed [`Args`] into the [`PackageConfig`] a run works from.
//!
//! ## Usage:
//! ```no_run
//! use dtedpack::cli::{args, config};
//!
//! let args = args::parse();
//! let config = config::resolve(&args)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::PackageConfig;
use crate::cli::args::Args;
use anyhow::{Context, Result};

/// Resolve CLI arguments, defaulting the source to the current directory.
pub fn resolve(args: &Args) -> Result<PackageConfig> {
    let source_dir = match &args.source_dir {
        Some(path) => path.clone(),
        None => std::env::current_dir().context("Failed to determine the current directory")?,
    };

    if args.output.is_some() && !args.zip {
        tracing::warn!("--output is ignored without --zip");
    }

    let mut config = PackageConfig::new(source_dir);
    if args.zip {
        config = config.with_archive(args.output.clone());
    }
    config.verbose = args.verbose;
    config.quiet = args.quiet;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_source_defaults_to_current_dir() {
        let args = Args::try_parse_from(["dtedpack"]).unwrap();
        let config = resolve(&args).unwrap();
        assert_eq!(config.source_dir, std::env::current_dir().unwrap());
        assert!(!config.create_archive);
    }

    #[test]
    fn test_zip_with_explicit_output() {
        let args = Args::try_parse_from(["dtedpack", "tiles", "-z", "-o", "out.zip"]).unwrap();
        let config = resolve(&args).unwrap();
        assert_eq!(config.source_dir, PathBuf::from("tiles"));
        assert!(config.create_archive);
        assert_eq!(config.archive_path, Some(PathBuf::from("out.zip")));
    }

    #[test]
    fn test_output_without_zip_is_dropped() {
        let args = Args::try_parse_from(["dtedpack", "tiles", "-o", "out.zip"]).unwrap();
        let config = resolve(&args).unwrap();
        assert!(!config.create_archive);
        assert!(config.archive_path.is_none());
    }

    #[test]
    fn test_verbosity_carries_through() {
        let args = Args::try_parse_from(["dtedpack", "-vv"]).unwrap();
        assert_eq!(resolve(&args).unwrap().verbose, 2);

        let args = Args::try_parse_from(["dtedpack", "-q"]).unwrap();
        assert!(resolve(&args).unwrap().quiet);
    }
}
