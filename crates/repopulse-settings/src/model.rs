use serde::{Deserialize, Serialize};

/// `repopulse.toml` schema v1.
///
/// Every key is optional; a missing file resolves to the built-in defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepopulseConfigV1 {
    #[serde(default)]
    pub weekly: WeeklyConfig,

    #[serde(default)]
    pub health: HealthConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeeklyConfig {
    /// Report destination, relative to the repository root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out: Option<String>,

    /// How many extension rows to render.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<usize>,

    /// Directory-name globs pruned from the file walk. Replaces the default deny-set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out: Option<String>,

    /// Base URL of the hosting API (`https://api.github.com`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Human-readable schedule shown in the report footer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence: Option<String>,
}
