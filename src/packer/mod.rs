// Copyright (c) 2025-2026 the dtedpack contributors
// SPDX-License-Identifier: Apache-2.0

pub mod archive;
pub mod layout;
pub mod tile;
pub mod walker;

pub use archive::ArchiveReport;
pub use layout::{DEFAULT_ARCHIVE_NAME, PackagePlan, PackageReport, build_package, plan_package};
pub use tile::{TileName, parse_tile_name};
