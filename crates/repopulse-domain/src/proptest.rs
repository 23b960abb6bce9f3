//! Property tests for the issue/PR estimate and the health score.

use crate::{estimate_split, health_score};
use proptest::prelude::*;
use repopulse_types::IssueSplit;

proptest! {
    #[test]
    fn split_always_sums_to_combined(c in any::<u64>()) {
        let split = estimate_split(c);
        prop_assert_eq!(split.issues + split.pull_requests, c);
    }

    #[test]
    fn split_above_threshold_is_one_fifth(c in 6u64..1_000_000) {
        let split = estimate_split(c);
        prop_assert_eq!(split.pull_requests, c / 5);
        prop_assert_eq!(split.issues, c - c / 5);
    }

    #[test]
    fn score_is_bounded(issues in any::<u64>(), prs in any::<u64>()) {
        let score = health_score(IssueSplit { issues, pull_requests: prs });
        prop_assert!(score.value() <= 100);
    }

    #[test]
    fn score_is_non_increasing_in_issues(issues in 0u64..100, prs in 0u64..100, extra in 0u64..100) {
        let base = health_score(IssueSplit { issues, pull_requests: prs });
        let more = health_score(IssueSplit { issues: issues + extra, pull_requests: prs });
        prop_assert!(more <= base);
    }

    #[test]
    fn score_is_non_increasing_in_prs(issues in 0u64..100, prs in 0u64..100, extra in 0u64..100) {
        let base = health_score(IssueSplit { issues, pull_requests: prs });
        let more = health_score(IssueSplit { issues, pull_requests: prs + extra });
        prop_assert!(more <= base);
    }

    #[test]
    fn score_is_non_increasing_in_combined(c in 0u64..10_000, extra in 0u64..10_000) {
        let base = health_score(estimate_split(c));
        let more = health_score(estimate_split(c + extra));
        prop_assert!(more <= base);
    }
}
