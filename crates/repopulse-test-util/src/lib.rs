//! Shared test utilities for the repopulse workspace.
//!
//! Both reports carry a generation stamp taken from the wall clock; tests that compare whole
//! documents across runs or against golden text normalize it first.

pub const DATE_PLACEHOLDER: &str = "__DATE__";
pub const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";

/// Replace the generation stamp of either report with a fixed placeholder.
///
/// Only the stamp line is touched; everything else, including line endings, is preserved.
pub fn normalize_generated(report: &str) -> String {
    report
        .split_inclusive('\n')
        .map(|line| {
            let (body, eol) = match line.strip_suffix('\n') {
                Some(body) => (body, "\n"),
                None => (line, ""),
            };
            if body.starts_with("Generated: `") && body.ends_with('`') {
                format!("Generated: `{DATE_PLACEHOLDER}`{eol}")
            } else if body.starts_with("*Generated on ") && body.ends_with('*') {
                format!("*Generated on {TIMESTAMP_PLACEHOLDER}*{eol}")
            } else {
                line.to_string()
            }
        })
        .collect()
}
