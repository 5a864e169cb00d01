//! Progress indicator utilities for the EdgeX CLI.
//!
//! Responsibilities:
//! - Provide a spinner for single requests and a per-step bar for `db purge`.
//! - Ensure ALL progress output is written to STDERR (never stdout), so table
//!   and JSON output is not contaminated.
//! - Allow global suppression via a caller-provided `enabled` boolean (driven by `--quiet`).
//!
//! Non-responsibilities:
//! - This module does not decide *when* progress should be shown; callers do.
//! - This module does not print command results; stdout remains reserved for results.

use edgex_client::PurgeEvent;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// An indefinite spinner shown while a request is in flight.
///
/// Always draws to STDERR; no-op when disabled. Dropping it clears the line.
pub(crate) struct Spinner {
    pb: Option<ProgressBar>,
}

impl Spinner {
    /// Create a new spinner.
    ///
    /// `enabled` should be `!quiet`.
    pub(crate) fn new(enabled: bool, label: impl Into<String>) -> Self {
        if !enabled {
            return Self { pb: None };
        }

        let pb = ProgressBar::new_spinner();
        pb.set_draw_target(ProgressDrawTarget::stderr());
        pb.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .expect("template is a compile-time constant with valid syntax"),
        );
        pb.set_message(label.into());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb: Some(pb) }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if let Some(pb) = &self.pb {
            pb.finish_and_clear();
        }
    }
}

/// Renders purge events as one progress bar per resource type.
pub(crate) struct PurgeProgress {
    enabled: bool,
    pb: Option<ProgressBar>,
}

impl PurgeProgress {
    pub(crate) fn new(enabled: bool) -> Self {
        Self { enabled, pb: None }
    }

    pub(crate) fn handle(&mut self, event: &PurgeEvent<'_>) {
        if !self.enabled {
            return;
        }

        match event {
            PurgeEvent::StepStarted { step, total } => {
                let pb = ProgressBar::new(*total as u64);
                pb.set_draw_target(ProgressDrawTarget::stderr());
                pb.set_style(
                    ProgressStyle::with_template("{spinner} {msg:<20} [{bar:30.cyan/blue}] {pos}/{len}")
                        .expect("template is a compile-time constant with valid syntax")
                        .progress_chars("=>-"),
                );
                pb.set_message(step.label());
                pb.enable_steady_tick(Duration::from_millis(100));
                self.pb = Some(pb);
            }
            PurgeEvent::ItemDeleted { .. } => {
                if let Some(pb) = &self.pb {
                    pb.inc(1);
                }
            }
            PurgeEvent::ItemFailed { step, key, error } => {
                if let Some(pb) = &self.pb {
                    pb.inc(1);
                    pb.println(format!("  failed to delete {} '{}': {}", step, key, error));
                }
            }
            PurgeEvent::ListFailed { step, error } => {
                eprintln!("  failed to list {}: {}", step, error);
            }
            PurgeEvent::StepFinished { report } => {
                if let Some(pb) = self.pb.take() {
                    pb.finish_with_message(format!(
                        "{} ({}/{} deleted)",
                        report.resource, report.succeeded, report.attempted
                    ));
                }
            }
        }
    }
}

impl Drop for PurgeProgress {
    fn drop(&mut self) {
        if let Some(pb) = &self.pb
            && !pb.is_finished()
        {
            pb.finish_and_clear();
        }
    }
}
