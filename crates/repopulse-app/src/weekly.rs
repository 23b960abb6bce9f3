//! The `weekly` use case: local git metadata plus file-extension counts.

use crate::write::{resolve_out, write_if_changed};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use repopulse_domain::report_date;
use repopulse_render::{WeeklyView, render_weekly};
use repopulse_repo::{CommandRunner, ExcludeSet, collect_snapshot, count_extensions};
use repopulse_settings::WeeklySettings;
use time::OffsetDateTime;

/// Input for the weekly use case.
#[derive(Clone, Copy)]
pub struct WeeklyInput<'a> {
    /// Repository root; the walk starts here and relative report paths resolve against it.
    pub repo_root: &'a Utf8Path,
    pub now: OffsetDateTime,
    pub settings: &'a WeeklySettings,
    /// Runs the `git` lookups.
    pub runner: &'a dyn CommandRunner,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WeeklyOutcome {
    Written { path: Utf8PathBuf },
    /// Rendered content matched the file on disk; nothing was written.
    Unchanged { path: Utf8PathBuf },
}

impl WeeklyOutcome {
    pub fn path(&self) -> &Utf8Path {
        match self {
            WeeklyOutcome::Written { path } | WeeklyOutcome::Unchanged { path } => path,
        }
    }
}

/// Gather, render, and write the weekly report if its content changed.
pub fn run_weekly(input: WeeklyInput<'_>) -> anyhow::Result<WeeklyOutcome> {
    let path = resolve_out(input.repo_root, &input.settings.out);

    let snapshot = collect_snapshot(input.runner, input.now);
    tracing::debug!(?snapshot, "collected git snapshot");

    let exclude = ExcludeSet::new(&input.settings.exclude)
        .context("compile exclude set")?
        .skip_file(&path);
    let histogram =
        count_extensions(input.repo_root, &exclude).context("count files by extension")?;
    tracing::debug!(
        files = histogram.total_files(),
        extensions = histogram.len(),
        "counted working tree"
    );

    let markdown = render_weekly(&WeeklyView {
        generated_on: report_date(input.now).context("format report date")?,
        snapshot: &snapshot,
        histogram: &histogram,
        top: input.settings.top,
    });

    if write_if_changed(&path, &markdown)? {
        tracing::info!(%path, "weekly report written");
        Ok(WeeklyOutcome::Written { path })
    } else {
        tracing::info!(%path, "weekly report unchanged");
        Ok(WeeklyOutcome::Unchanged { path })
    }
}
