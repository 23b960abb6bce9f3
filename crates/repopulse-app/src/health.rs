//! The `health` use case: remote stats, estimated issue/PR split, health score.

use crate::write::{resolve_out, write_text};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use repopulse_domain::{estimate_split, format_last_push, health_score, report_timestamp};
use repopulse_github::StatsSource;
use repopulse_render::{HealthView, render_health};
use repopulse_settings::HealthSettings;
use repopulse_types::{HealthScore, RemoteStats};
use time::OffsetDateTime;

/// Input for the health use case.
#[derive(Clone, Copy)]
pub struct HealthInput<'a> {
    /// Relative report paths resolve against this directory.
    pub base_dir: &'a Utf8Path,
    pub now: OffsetDateTime,
    pub settings: &'a HealthSettings,
    pub source: &'a dyn StatsSource,
}

/// Why no report was written. None of these is a failure of the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Token or repository identifier absent (or malformed).
    MissingCredentials,
    /// Transport error, non-2xx status, or undecodable payload.
    FetchFailed(String),
    /// The API answered with an empty object.
    NoData,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HealthOutcome {
    Written {
        path: Utf8PathBuf,
        score: HealthScore,
        full_name: String,
        stars: u64,
        open_issues: u64,
    },
    Skipped(SkipReason),
}

/// Fetch, derive, render, and unconditionally overwrite the health report.
///
/// Missing credentials and remote failures are reported as [`HealthOutcome::Skipped`]; only
/// local IO failures while writing are errors.
pub fn run_health(input: HealthInput<'_>) -> anyhow::Result<HealthOutcome> {
    let Some(credentials) = input.settings.credentials.as_ref() else {
        tracing::warn!("GITHUB_TOKEN or GITHUB_REPOSITORY not set; skipping health report");
        return Ok(HealthOutcome::Skipped(SkipReason::MissingCredentials));
    };

    let stats = match input.source.fetch(credentials) {
        Ok(Some(stats)) => stats,
        Ok(None) => {
            tracing::warn!(repository = %credentials.repository, "repository stats payload was empty");
            return Ok(HealthOutcome::Skipped(SkipReason::NoData));
        }
        Err(err) => {
            let reason = error_chain(&err);
            tracing::warn!(repository = %credentials.repository, "error fetching repo stats: {reason}");
            return Ok(HealthOutcome::Skipped(SkipReason::FetchFailed(reason)));
        }
    };

    let view = health_view(&stats, input.now, &input.settings.cadence)?;
    let markdown = render_health(&view);

    let path = resolve_out(input.base_dir, &input.settings.out);
    write_text(&path, &markdown).context("write health report")?;

    let full_name = stats.full_name_or_unknown().to_string();
    tracing::info!(
        %path,
        repository = %full_name,
        stars = stats.stars(),
        open_issues = stats.combined_open_issues(),
        score = view.score.value(),
        "health report generated"
    );

    Ok(HealthOutcome::Written {
        path,
        score: view.score,
        full_name,
        stars: stats.stars(),
        open_issues: stats.combined_open_issues(),
    })
}

fn health_view(
    stats: &RemoteStats,
    now: OffsetDateTime,
    cadence: &str,
) -> anyhow::Result<HealthView> {
    let open_issues = stats.combined_open_issues();
    let split = estimate_split(open_issues);

    Ok(HealthView {
        generated_at: report_timestamp(now).context("format report timestamp")?,
        stars: stats.stars(),
        forks: stats.forks(),
        watchers: stats.watchers(),
        open_issues,
        estimated_prs: split.pull_requests,
        last_commit: format_last_push(stats.pushed_at_or_unknown()),
        score: health_score(split),
        cadence: cadence.to_string(),
    })
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
