//! CLI entry point for repopulse.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup, environment
//! capture and the exit code. All report logic lives in the `repopulse-app` crate.
//!
//! Every defined path exits 0. Failures are logged and the calling automation carries on.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use repopulse_app::{
    HealthInput, HealthOutcome, WeeklyInput, WeeklyOutcome, run_health, run_weekly,
};
use repopulse_github::GithubClient;
use repopulse_repo::SystemRunner;
use repopulse_settings::{
    EnvSnapshot, HealthSettings, Overrides, RepopulseConfigV1, WeeklySettings,
};
use repopulse_types::ids::CONFIG_FILE_NAME;
use std::io::ErrorKind;
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "repopulse",
    version,
    about = "Markdown status reports for a repository"
)]
struct Cli {
    /// Repository root; reports and the file walk are relative to it.
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Path to the repopulse config TOML (relative to the repository root).
    #[arg(long, default_value = CONFIG_FILE_NAME)]
    config: Utf8PathBuf,

    /// Log at debug level (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Git metadata and file counts by extension; written only when the content changed.
    Weekly {
        /// Where to write the report.
        #[arg(long)]
        out: Option<Utf8PathBuf>,

        /// Maximum number of extension rows.
        #[arg(long)]
        top: Option<usize>,
    },

    /// Remote repository stats and health score; always overwritten.
    ///
    /// Reads GITHUB_TOKEN and GITHUB_REPOSITORY (owner/name) from the environment.
    Health {
        /// Where to write the report.
        #[arg(long)]
        out: Option<Utf8PathBuf>,

        /// Base URL of the hosting API.
        #[arg(long)]
        api_base: Option<String>,

        /// Request timeout in seconds.
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        tracing::error!("{err:#}");
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let repo_root = cli
        .repo_root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.repo_root.clone());
    if !repo_root.is_dir() {
        anyhow::bail!("repo root does not exist: {}", repo_root);
    }

    let env = EnvSnapshot::from_lookup(|key| std::env::var(key).ok());
    let overrides = match &cli.cmd {
        Commands::Weekly { out, top } => Overrides {
            weekly_out: out.clone(),
            top: *top,
            ..Overrides::default()
        },
        Commands::Health {
            out,
            api_base,
            timeout_secs,
        } => Overrides {
            health_out: out.clone(),
            api_base: api_base.clone(),
            timeout_secs: *timeout_secs,
            ..Overrides::default()
        },
    };
    let config_path = repo_root.join(&cli.config);
    let cfg = load_config(&config_path);
    let now = OffsetDateTime::now_utc();

    match cli.cmd {
        Commands::Weekly { .. } => {
            let settings = section_or_default(&config_path, "weekly", cfg.weekly, |section| {
                repopulse_settings::resolve_weekly(section, &overrides)
            })?;
            cmd_weekly(&repo_root, now, &settings)
        }
        Commands::Health { .. } => {
            let settings = section_or_default(&config_path, "health", cfg.health, |section| {
                repopulse_settings::resolve_health(section, &overrides, env.clone())
            })?;
            cmd_health(&repo_root, now, &settings)
        }
    }
}

/// Read and parse the config file. A missing file means defaults; an unreadable or invalid one
/// is logged and ignored.
fn load_config(path: &Utf8Path) -> RepopulseConfigV1 {
    match std::fs::read_to_string(path) {
        Ok(text) => match repopulse_settings::parse_config_toml(&text) {
            Ok(cfg) => cfg,
            Err(err) => {
                tracing::warn!(%path, "ignoring invalid config: {err:#}");
                RepopulseConfigV1::default()
            }
        },
        Err(err) if err.kind() == ErrorKind::NotFound => RepopulseConfigV1::default(),
        Err(err) => {
            tracing::warn!(%path, "ignoring unreadable config: {err}");
            RepopulseConfigV1::default()
        }
    }
}

/// Resolve one config section, falling back to that section's defaults when its values are
/// invalid. Other sections are unaffected.
fn section_or_default<C, S>(
    path: &Utf8Path,
    name: &str,
    section: C,
    resolve: impl Fn(C) -> anyhow::Result<S>,
) -> anyhow::Result<S>
where
    C: Default,
{
    match resolve(section) {
        Ok(settings) => Ok(settings),
        Err(err) => {
            tracing::warn!(%path, "ignoring [{name}] config values: {err:#}");
            resolve(C::default()).with_context(|| format!("resolve [{name}] settings"))
        }
    }
}

fn cmd_weekly(
    repo_root: &Utf8Path,
    now: OffsetDateTime,
    settings: &WeeklySettings,
) -> anyhow::Result<()> {
    tracing::info!("generating weekly report...");
    let runner = SystemRunner::new(repo_root);
    let outcome = run_weekly(WeeklyInput {
        repo_root,
        now,
        settings,
        runner: &runner,
    })?;

    if let WeeklyOutcome::Written { path } = &outcome {
        println!("{path}");
    }
    Ok(())
}

fn cmd_health(
    repo_root: &Utf8Path,
    now: OffsetDateTime,
    settings: &HealthSettings,
) -> anyhow::Result<()> {
    tracing::info!("generating repository health report...");
    let client = GithubClient::new(&settings.api_base, settings.timeout)
        .context("create api client")?;
    let outcome = run_health(HealthInput {
        base_dir: repo_root,
        now,
        settings,
        source: &client,
    })?;

    if let HealthOutcome::Written { path, .. } = &outcome {
        println!("{path}");
    }
    Ok(())
}
