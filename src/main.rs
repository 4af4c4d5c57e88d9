// Copyright (c) 2025-2026 the dtedpack contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use dtedpack::cli;
use dtedpack::utils::error::format_error;

fn main() {
    let args = cli::args::parse();

    // Logging first so warnings raised while resolving arguments show up
    dtedpack::init_logging(args.verbose, args.quiet);

    if let Err(e) = run_main(&args) {
        display_error(&e);
        std::process::exit(1);
    }
}

/// Print the error, its cause chain and, when captured, the backtrace.
fn display_error(error: &anyhow::Error) {
    eprintln!("{}", format_error(&**error));

    let backtrace = error.backtrace();
    if backtrace.status() == std::backtrace::BacktraceStatus::Captured {
        eprintln!("\nBacktrace:\n{}", backtrace);
    } else {
        eprintln!("\nRun with RUST_BACKTRACE=1 for a backtrace");
    }
}

fn run_main(args: &cli::args::Args) -> Result<()> {
    let config = cli::config::resolve(args)?;
    dtedpack::run(&config)?;
    Ok(())
}
