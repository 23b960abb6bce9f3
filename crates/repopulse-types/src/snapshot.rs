/// Version-control state captured once per weekly run.
///
/// Empty strings mean the lookup produced no data; they are never an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepoSnapshot {
    pub head_sha: String,
    pub head_summary: String,
    pub latest_tag: String,
    pub commit_count_7d: u64,
}
