// Copyright (c) 2025-2026 the dtedpack contributors
// SPDX-License-Identifier: Apache-2.0

//! Success summary display for completed package builds.
//!
//! Shows the resulting path, statistics, and how to get the package onto
//! an ATAK device.
//!
//! # Example
//!
//! ```ignore
//! use dtedpack::utils::summary::display_success_summary;
//! use std::time::Duration;
//!
//! display_success_summary(&report, Duration::from_secs_f32(1.2), false)?;
//! ```

use crate::packer::PackageReport;
use crate::utils::formatting::{format_duration, format_number, format_size};
use anyhow::Result;
use console::{Term, style};
use std::io::Write;
use std::time::Duration;

/// Where ATAK looks for elevation data on the device.
pub const ATAK_DTED_DIR: &str = "/sdcard/atak/DATA/dted/";

/// Display a success summary on stdout.
///
/// In quiet mode only the success line with the output path is shown.
pub fn display_success_summary(report: &PackageReport, elapsed: Duration, quiet: bool) -> Result<()> {
    let mut term = Term::stdout();
    write_success_summary(&mut term, report, elapsed, quiet)
}

/// Write the success summary to any writer.
pub fn write_success_summary<W: Write>(
    out: &mut W,
    report: &PackageReport,
    elapsed: Duration,
    quiet: bool,
) -> Result<()> {
    if quiet {
        writeln!(out, "{}", report.output_path().display())?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(
        out,
        "{} {} {}",
        style("\u{2713}").green().bold(),
        style("Success! Package structure created:").bold(),
        report.output_path().display()
    )?;

    writeln!(out)?;
    writeln!(out, "{}:", style("Statistics").bold())?;
    let branch = style("\u{251c}\u{2500}").dim();
    let last = style("\u{2514}\u{2500}").dim();

    writeln!(
        out,
        "{} Tiles found: {} ({})",
        branch,
        format_number(report.files_found),
        format_size(report.bytes_found)
    )?;
    writeln!(
        out,
        "{} Tiles packaged: {} ({})",
        branch,
        format_number(report.files_copied),
        format_size(report.bytes_copied)
    )?;
    if !report.skipped.is_empty() {
        writeln!(
            out,
            "{} Skipped (unrecognized names): {}",
            branch,
            style(format_number(report.skipped.len())).yellow()
        )?;
    }
    writeln!(
        out,
        "{} Longitude folders: {}",
        branch,
        format_number(report.folders_created.len())
    )?;
    if let Some(archive) = &report.archive {
        writeln!(
            out,
            "{} Archive: {} ({}, {} entries)",
            branch,
            archive.path.display(),
            format_size(archive.size),
            format_number(archive.entries)
        )?;
    }
    writeln!(out, "{} Time: {}", last, format_duration(elapsed))?;

    writeln!(out)?;
    writeln!(out, "{}:", style("To import into ATAK").bold())?;
    writeln!(out, "  1. Transfer the package folder or ZIP to your Android device")?;
    writeln!(out, "  2. Open ATAK")?;
    writeln!(out, "  3. Use Data Package Tool to import")?;
    writeln!(out, "  4. Or extract to: {}", ATAK_DTED_DIR)?;
    writeln!(out)?;

    Ok(())
}
