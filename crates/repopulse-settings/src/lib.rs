//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses configuration provided as strings and resolves
//! it against an environment snapshot captured by the caller.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{HealthConfig, RepopulseConfigV1, WeeklyConfig};
pub use repopulse_types::Credentials;
pub use resolve::{
    EnvSnapshot, HealthSettings, Overrides, ResolvedConfig, WeeklySettings, resolve_health,
    resolve_weekly,
};

/// Parse `repopulse.toml` into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<RepopulseConfigV1> {
    let cfg: RepopulseConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the settings used by both reporters (defaults < file < overrides; env for credentials).
pub fn resolve_config(
    cfg: RepopulseConfigV1,
    overrides: Overrides,
    env: EnvSnapshot,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides, env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let cfg = parse_config_toml(
            r#"
[weekly]
out = "docs/weekly.md"
top = 12
exclude = [".git", "target", "vendor*"]

[health]
out = "docs/health.md"
api_base = "https://ghe.example.com/api/v3"
timeout_secs = 5
cadence = "every hour"
"#,
        )
        .expect("parse");

        assert_eq!(cfg.weekly.top, Some(12));
        assert_eq!(cfg.weekly.exclude.as_ref().map(Vec::len), Some(3));
        assert_eq!(cfg.health.timeout_secs, Some(5));
        assert_eq!(cfg.health.cadence.as_deref(), Some("every hour"));
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(
            parse_config_toml("").expect("parse"),
            RepopulseConfigV1::default()
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_config_toml("[weekly]\ntopp = 3\n").is_err());
    }
}
