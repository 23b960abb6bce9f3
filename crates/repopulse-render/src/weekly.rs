use crate::WeeklyView;

pub fn render_weekly(view: &WeeklyView<'_>) -> String {
    let mut out = String::new();
    let git = view.snapshot;

    out.push_str("# Weekly repo report\n\n");
    out.push_str(&format!("Generated: `{}`\n\n", view.generated_on));

    out.push_str("## Git\n\n");
    out.push_str(&format!("- HEAD: `{}`\n", git.head_sha));
    if !git.head_summary.is_empty() {
        out.push_str(&format!("- HEAD summary: {}\n", git.head_summary));
    }
    if !git.latest_tag.is_empty() {
        out.push_str(&format!("- Latest tag: `{}`\n", git.latest_tag));
    }
    out.push_str(&format!(
        "- Commits in last 7 days: `{}`\n\n",
        git.commit_count_7d
    ));

    out.push_str("## File counts by extension\n\n");
    out.push_str("| Extension | Files |\n");
    out.push_str("|---|---:|\n");
    for e in view.histogram.top(view.top) {
        out.push_str(&format!("| `{}` | {} |\n", e.label, e.files));
    }

    out
}
