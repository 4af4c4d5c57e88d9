// Copyright (c) 2025-2026 the dtedpack contributors
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DtedError {
    #[error("Source directory does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Source path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("No .dt2 files found in {}", path.display())]
    EmptyInput { path: PathBuf },

    #[error("File system error: Failed to {action} {}", path.display())]
    FileSystem {
        action: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {message}\nSuggestion: {suggestion}")]
    ValidationError { message: String, suggestion: String },
}

impl DtedError {
    /// Wrap an I/O error with the action and path that produced it.
    pub fn io(action: &str, path: &Path, err: std::io::Error) -> Self {
        DtedError::FileSystem {
            action: action.to_string(),
            path: path.to_path_buf(),
            source: err,
        }
    }

    pub fn archive_inside_package(archive: &Path, package_dir: &Path) -> Self {
        DtedError::ValidationError {
            message: format!(
                "Archive path {} is inside the package directory {}",
                archive.display(),
                package_dir.display()
            ),
            suggestion: "Write the archive outside the package directory, e.g. omit --output to \
                         use <source>/atak_dted_package.zip"
                .to_string(),
        }
    }
}

/// Render an error for the terminal: the headline, then the cause chain.
///
/// A cause whose text is already part of the line above it is left out.
pub fn format_error(error: &(dyn std::error::Error + 'static)) -> String {
    let headline = error.to_string();
    let mut out = format!("\u{2717} Error: {}", headline);

    let mut causes: Vec<String> = Vec::new();
    let mut previous = headline;
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !previous.contains(&text) {
            causes.push(text.clone());
        }
        previous = text;
        source = cause.source();
    }

    if !causes.is_empty() {
        out.push_str("\n\nCaused by:");
        for (i, cause) in causes.iter().enumerate() {
            let prefix = if i == causes.len() - 1 {
                "\u{2514}\u{2500}"
            } else {
                "\u{251c}\u{2500}"
            };
            out.push_str(&format!("\n{} {}", prefix, cause));
        }
    }

    out
}
