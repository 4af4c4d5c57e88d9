// Copyright (c) 2025-2026 the dtedpack contributors
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments.
///
/// Only the command line is consulted; no environment variables or config
/// files feed into a run.
#[derive(Parser, Debug)]
#[command(name = "dtedpack")]
#[command(
    about = "Create an ATAK DTED data package from .dt2 files",
    long_about = "Create an ATAK DTED data package from .dt2 files. Organizes files into \
                  folders by longitude (e###) and renames them to latitude (n##.dt2)."
)]
#[command(version)]
pub struct Args {
    /// Directory containing .dt2 files (default: current directory)
    pub source_dir: Option<PathBuf>,

    /// Create a ZIP file of the package
    #[arg(short, long)]
    pub zip: bool,

    /// Output ZIP file path (default: <source_dir>/atak_dted_package.zip)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print warnings, errors and the resulting path
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
