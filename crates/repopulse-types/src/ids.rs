//! Stable paths, labels and scoring constants.

// Report destinations (relative to the repository root).
pub const WEEKLY_REPORT_PATH: &str = "reports/weekly.md";
pub const HEALTH_REPORT_PATH: &str = "reports/health.md";

// Config file looked up in the repository root.
pub const CONFIG_FILE_NAME: &str = "repopulse.toml";

// Histogram
pub const NO_EXTENSION: &str = "(none)";
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".git", "build", "result", "node_modules"];
pub const DEFAULT_TOP_EXTENSIONS: usize = 30;

// Issue/PR split heuristic
pub const PR_ESTIMATE_THRESHOLD: u64 = 5;
pub const PR_ESTIMATE_DIVISOR: u64 = 5;

// Health score weights
pub const HEALTH_SCORE_MAX: u8 = 100;
pub const ISSUE_WEIGHT: u64 = 2;
pub const PR_WEIGHT: u64 = 3;

// Remote API
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CADENCE: &str = "every 10 minutes";

// Environment
pub const ENV_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_REPOSITORY: &str = "GITHUB_REPOSITORY";

// Placeholder for absent remote strings.
pub const UNKNOWN: &str = "Unknown";
