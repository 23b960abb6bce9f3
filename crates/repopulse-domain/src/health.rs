use repopulse_types::ids::{ISSUE_WEIGHT, PR_ESTIMATE_DIVISOR, PR_ESTIMATE_THRESHOLD, PR_WEIGHT};
use repopulse_types::{HealthScore, IssueSplit};

/// Split the API's combined open-issue count into estimated issues and pull requests.
///
/// The hosting API reports one number for both. Above the threshold, one in five open items is
/// assumed to be a pull request; at or below it, everything counts as an issue. This is a fixed
/// heuristic, not a measurement.
pub fn estimate_split(combined: u64) -> IssueSplit {
    let pull_requests = if combined > PR_ESTIMATE_THRESHOLD {
        combined / PR_ESTIMATE_DIVISOR
    } else {
        0
    };
    IssueSplit {
        issues: combined - pull_requests,
        pull_requests,
    }
}

/// `max(0, 100 - (issues * 2 + prs * 3))`.
pub fn health_score(split: IssueSplit) -> HealthScore {
    let deduction = split
        .issues
        .saturating_mul(ISSUE_WEIGHT)
        .saturating_add(split.pull_requests.saturating_mul(PR_WEIGHT));
    HealthScore::from_deduction(deduction)
}
