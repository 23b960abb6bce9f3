use crate::model::{HealthConfig, RepopulseConfigV1, WeeklyConfig};
use anyhow::Context;
use camino::Utf8PathBuf;
use globset::Glob;
use repopulse_types::Credentials;
use repopulse_types::ids::{
    DEFAULT_API_BASE, DEFAULT_CADENCE, DEFAULT_EXCLUDED_DIRS, DEFAULT_TIMEOUT_SECS,
    DEFAULT_TOP_EXTENSIONS, ENV_REPOSITORY, ENV_TOKEN, HEALTH_REPORT_PATH, WEEKLY_REPORT_PATH,
};
use std::time::Duration;

/// CLI-level overrides. They win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub weekly_out: Option<Utf8PathBuf>,
    pub top: Option<usize>,
    pub health_out: Option<Utf8PathBuf>,
    pub api_base: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Process environment captured once at startup.
#[derive(Clone, Default)]
pub struct EnvSnapshot {
    pub token: Option<String>,
    pub repository: Option<String>,
}

impl EnvSnapshot {
    /// Capture the credential and repository variables through `lookup`. Blank values are absent.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Self {
            token: read(ENV_TOKEN),
            repository: read(ENV_REPOSITORY),
        }
    }
}

impl std::fmt::Debug for EnvSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvSnapshot")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("repository", &self.repository)
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeeklySettings {
    pub out: Utf8PathBuf,
    pub top: usize,
    pub exclude: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HealthSettings {
    pub out: Utf8PathBuf,
    pub api_base: String,
    pub timeout: Duration,
    pub cadence: String,
    /// `None` when the token or repository is missing or malformed.
    pub credentials: Option<Credentials>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub weekly: WeeklySettings,
    pub health: HealthSettings,
}

pub fn resolve_config(
    cfg: RepopulseConfigV1,
    overrides: Overrides,
    env: EnvSnapshot,
) -> anyhow::Result<ResolvedConfig> {
    Ok(ResolvedConfig {
        weekly: resolve_weekly(cfg.weekly, &overrides)?,
        health: resolve_health(cfg.health, &overrides, env)?,
    })
}

/// Resolve the `[weekly]` section. Never looks at `[health]`.
pub fn resolve_weekly(
    cfg: WeeklyConfig,
    overrides: &Overrides,
) -> anyhow::Result<WeeklySettings> {
    let exclude = cfg.exclude.unwrap_or_else(|| {
        DEFAULT_EXCLUDED_DIRS
            .iter()
            .map(|d| d.to_string())
            .collect()
    });
    validate_excludes(&exclude)?;

    Ok(WeeklySettings {
        out: overrides
            .weekly_out
            .clone()
            .or(cfg.out.map(Utf8PathBuf::from))
            .unwrap_or_else(|| Utf8PathBuf::from(WEEKLY_REPORT_PATH)),
        top: overrides.top.or(cfg.top).unwrap_or(DEFAULT_TOP_EXTENSIONS),
        exclude,
    })
}

/// Resolve the `[health]` section plus credentials. Never looks at `[weekly]`.
pub fn resolve_health(
    cfg: HealthConfig,
    overrides: &Overrides,
    env: EnvSnapshot,
) -> anyhow::Result<HealthSettings> {
    let api_base = overrides
        .api_base
        .clone()
        .or(cfg.api_base)
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    if !(api_base.starts_with("https://") || api_base.starts_with("http://")) {
        anyhow::bail!("invalid api_base: {api_base} (expected an http(s) URL)");
    }

    let timeout_secs = overrides
        .timeout_secs
        .or(cfg.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    if timeout_secs == 0 {
        anyhow::bail!("invalid timeout_secs: 0 (expected a positive number of seconds)");
    }

    Ok(HealthSettings {
        out: overrides
            .health_out
            .clone()
            .or(cfg.out.map(Utf8PathBuf::from))
            .unwrap_or_else(|| Utf8PathBuf::from(HEALTH_REPORT_PATH)),
        api_base: api_base.trim_end_matches('/').to_string(),
        timeout: Duration::from_secs(timeout_secs),
        cadence: cfg.cadence.unwrap_or_else(|| DEFAULT_CADENCE.to_string()),
        credentials: credentials_from_env(env),
    })
}

fn validate_excludes(patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern).with_context(|| format!("invalid exclude glob: {pattern}"))?;
    }
    Ok(())
}

fn credentials_from_env(env: EnvSnapshot) -> Option<Credentials> {
    let (Some(token), Some(repository)) = (env.token, env.repository) else {
        tracing::debug!("{ENV_TOKEN} or {ENV_REPOSITORY} not set");
        return None;
    };
    if !is_owner_name(&repository) {
        tracing::warn!(%repository, "{ENV_REPOSITORY} is not in owner/name form");
        return None;
    }
    Some(Credentials { token, repository })
}

fn is_owner_name(v: &str) -> bool {
    match v.split_once('/') {
        Some((owner, name)) => {
            !owner.is_empty() && !name.is_empty() && !name.contains('/') && !v.contains(' ')
        }
        None => false,
    }
}
