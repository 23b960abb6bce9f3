use crate::ids::{HEALTH_SCORE_MAX, UNKNOWN};
use serde_json::Value as JsonValue;

/// Repository statistics as reported by the hosting API.
///
/// Every field is optional on the wire. Accessors apply the documented defaults:
/// counts default to `0`, strings default to `"Unknown"`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RemoteStats {
    pub stargazers_count: Option<u64>,
    pub forks_count: Option<u64>,
    pub watchers_count: Option<u64>,
    /// Combined count of open issues and open pull requests.
    pub open_issues: Option<u64>,
    /// ISO-8601 timestamp of the last push, kept raw.
    pub pushed_at: Option<String>,
    pub full_name: Option<String>,
}

impl RemoteStats {
    /// Decode from an arbitrary JSON payload without failing on field shapes.
    ///
    /// Missing, null, negative, fractional or wrongly typed fields decode as absent.
    /// Returns `None` only when the payload is not a JSON object.
    pub fn from_json(value: &JsonValue) -> Option<Self> {
        let obj = value.as_object()?;
        let count = |key: &str| obj.get(key).and_then(JsonValue::as_u64);
        let text = |key: &str| {
            obj.get(key)
                .and_then(JsonValue::as_str)
                .map(|s| s.to_string())
        };

        Some(Self {
            stargazers_count: count("stargazers_count"),
            forks_count: count("forks_count"),
            watchers_count: count("watchers_count"),
            open_issues: count("open_issues"),
            pushed_at: text("pushed_at"),
            full_name: text("full_name"),
        })
    }

    pub fn stars(&self) -> u64 {
        self.stargazers_count.unwrap_or(0)
    }

    pub fn forks(&self) -> u64 {
        self.forks_count.unwrap_or(0)
    }

    pub fn watchers(&self) -> u64 {
        self.watchers_count.unwrap_or(0)
    }

    pub fn combined_open_issues(&self) -> u64 {
        self.open_issues.unwrap_or(0)
    }

    pub fn pushed_at_or_unknown(&self) -> &str {
        self.pushed_at.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn full_name_or_unknown(&self) -> &str {
        self.full_name.as_deref().unwrap_or(UNKNOWN)
    }
}

/// Estimated split of the combined open-issue count.
///
/// This is an approximation: the single API call used cannot tell issues from pull requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IssueSplit {
    pub issues: u64,
    pub pull_requests: u64,
}

impl IssueSplit {
    pub fn combined(&self) -> u64 {
        self.issues.saturating_add(self.pull_requests)
    }
}

/// Unitless score in `[0, 100]`; higher means fewer open items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HealthScore(u8);

impl HealthScore {
    pub const MAX: HealthScore = HealthScore(HEALTH_SCORE_MAX);

    /// Build a score from points already deducted from the maximum. Floors at zero.
    pub fn from_deduction(deduction: u64) -> Self {
        let max = u64::from(HEALTH_SCORE_MAX);
        // Result is at most HEALTH_SCORE_MAX, so the cast cannot truncate.
        Self(max.saturating_sub(deduction) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for HealthScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
