// Copyright (c) 2025-2026 the dtedpack contributors
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use console::Term;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

/// Stage name constants for consistent progress tracking.
pub mod stages {
    /// Copying tiles into the package tree.
    pub const COPYING: &str = "copying";
    /// Writing the package tree into a ZIP archive.
    pub const ARCHIVING: &str = "archiving";
}

/// Manager for per-stage progress bars.
///
/// # Example
///
/// ```no_run
/// use dtedpack::utils::progress::{ProgressManager, stages};
///
/// let mut manager = ProgressManager::new(false);
/// let _copying = manager.add_stage(stages::COPYING, 100);
/// manager.update(stages::COPYING, 50, "n47_e006_1arc_v3.dt2");
/// manager.finish(stages::COPYING);
/// ```
///
/// # TTY Detection
///
/// When stdout is not a TTY, or quiet mode is on, bars are created hidden
/// and produce no output. Callers can check [`ProgressManager::is_visible`]
/// to fall back to plain log lines.
pub struct ProgressManager {
    multi: MultiProgress,
    bars: HashMap<String, ProgressBar>,
    visible: bool,
}

impl ProgressManager {
    /// Creates a new progress manager; bars are shown only on a TTY and when not quiet.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self::with_visibility(!quiet && Term::stdout().is_term())
    }

    /// Creates a manager whose bars are never drawn.
    #[must_use]
    pub fn hidden() -> Self {
        Self::with_visibility(false)
    }

    fn with_visibility(visible: bool) -> Self {
        Self {
            multi: MultiProgress::new(),
            bars: HashMap::new(),
            visible,
        }
    }

    /// Adds a progress stage of `total` items and returns its bar.
    #[must_use]
    pub fn add_stage(&mut self, name: &str, total: u64) -> ProgressBar {
        let pb = if self.visible {
            self.multi.add(ProgressBar::new(total))
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(Self::style_for_stage(name));

        self.bars.insert(name.to_string(), pb.clone());
        pb
    }

    /// Updates the position and message of a stage. Unknown stages are ignored.
    pub fn update(&self, stage: &str, current: u64, message: &str) {
        if let Some(pb) = self.bars.get(stage) {
            pb.set_position(current);
            pb.set_message(message.to_string());
        }
    }

    /// Clears a finished stage's bar. Unknown stages are ignored.
    pub fn finish(&self, stage: &str) {
        if let Some(pb) = self.bars.get(stage) {
            pb.finish_and_clear();
        }
    }

    /// Leaves a stage's bar as-is after a failure.
    pub fn abandon(&self, stage: &str) {
        if let Some(pb) = self.bars.get(stage) {
            pb.abandon();
        }
    }

    /// Runs `f` with the bars hidden so log lines don't tear them.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.multi.suspend(f)
    }

    /// Whether bars are being drawn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn style_for_stage(name: &str) -> ProgressStyle {
        let template = match name {
            stages::COPYING => "[{bar:40.cyan/blue}] {pos}/{len} Copying tiles... {msg}",
            stages::ARCHIVING => "[{bar:40.cyan/blue}] {pos}/{len} Writing archive... {msg}",
            _ => "[{bar:40.cyan/blue}] {pos}/{len} {msg}",
        };

        ProgressStyle::default_bar()
            .template(template)
            .unwrap_or_else(|e| {
                tracing::warn!(
                    "Failed to parse progress style template for stage '{}': {e}",
                    name
                );
                ProgressStyle::default_bar()
            })
            .progress_chars("#>-")
    }
}

impl std::fmt::Debug for ProgressManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressManager")
            .field("stages", &self.bars.keys().collect::<Vec<_>>())
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}
