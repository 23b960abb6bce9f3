use repopulse_types::{ExtensionHistogram, HealthScore, RepoSnapshot};

/// Everything the weekly report shows.
#[derive(Clone, Debug)]
pub struct WeeklyView<'a> {
    /// `YYYY-MM-DD`, UTC.
    pub generated_on: String,
    pub snapshot: &'a RepoSnapshot,
    pub histogram: &'a ExtensionHistogram,
    /// Maximum number of extension rows.
    pub top: usize,
}

/// Everything the health report shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HealthView {
    /// `YYYY-MM-DD HH:MM:SS UTC`.
    pub generated_at: String,
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
    /// Combined issues + pull requests as reported by the API.
    pub open_issues: u64,
    pub estimated_prs: u64,
    /// Display form of the last push, or the raw value when it could not be parsed.
    pub last_commit: String,
    pub score: HealthScore,
    /// Schedule phrase for the footer, e.g. `every 10 minutes`.
    pub cadence: String,
}
