use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use repopulse_domain::commit_window_start;
use repopulse_types::RepoSnapshot;
use std::process::{Command, Stdio};
use time::OffsetDateTime;

/// Runs an external program and returns its trimmed stdout.
///
/// A spawn failure or a non-zero exit status is an error.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> anyhow::Result<String>;
}

/// Runs commands for real, rooted at a working directory.
#[derive(Clone, Debug)]
pub struct SystemRunner {
    cwd: Utf8PathBuf,
}

impl SystemRunner {
    pub fn new(cwd: &Utf8Path) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> anyhow::Result<String> {
        let output = Command::new(program)
            .current_dir(&self.cwd)
            .args(args)
            .stdin(Stdio::null())
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .with_context(|| format!("spawn {program}"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "{program} {} exited with {}: {}",
                args.join(" "),
                output.status,
                stderr.trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Run one `git` query, yielding `None` instead of an error.
pub fn try_lookup(runner: &dyn CommandRunner, args: &[&str]) -> Option<String> {
    match runner.run("git", args) {
        Ok(out) => Some(out),
        Err(err) => {
            tracing::debug!(args = %args.join(" "), "git lookup failed: {err:#}");
            None
        }
    }
}

/// Gather the four version-control facts for the weekly report.
///
/// Each lookup defaults independently: no tags, no commits, a missing `git` binary or an
/// uninitialised repository all produce empty strings (or `0` for the count).
pub fn collect_snapshot(runner: &dyn CommandRunner, now: OffsetDateTime) -> RepoSnapshot {
    let head_sha = try_lookup(runner, &["rev-parse", "HEAD"]).unwrap_or_default();
    let head_summary = try_lookup(runner, &["show", "-s", "--format=%s", "HEAD"]).unwrap_or_default();
    let latest_tag = try_lookup(runner, &["describe", "--tags", "--abbrev=0"]).unwrap_or_default();

    let commit_count_7d = match commit_window_start(now) {
        Ok(since) => {
            let since_arg = format!("--since={since}");
            try_lookup(runner, &["rev-list", "--count", &since_arg, "HEAD"])
                .and_then(|raw| raw.parse::<u64>().ok())
                .unwrap_or(0)
        }
        Err(err) => {
            tracing::debug!("format commit window start: {err}");
            0
        }
    };

    RepoSnapshot {
        head_sha,
        head_summary,
        latest_tag,
        commit_count_7d,
    }
}
