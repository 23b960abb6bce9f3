use crate::HealthView;
use crate::number::group_thousands;

pub fn render_health(view: &HealthView) -> String {
    let mut out = String::new();

    out.push_str("# Repository Health Report\n\n");
    out.push_str(&format!("*Generated on {}*\n\n", view.generated_at));

    out.push_str("## Key Metrics\n\n");
    out.push_str("| Metric | Value |\n");
    out.push_str("|--------|-------|\n");
    out.push_str(&format!("| ⭐ Stars | {} |\n", group_thousands(view.stars)));
    out.push_str(&format!("| 🍴 Forks | {} |\n", group_thousands(view.forks)));
    out.push_str(&format!(
        "| 👀 Watchers | {} |\n",
        group_thousands(view.watchers)
    ));
    out.push_str(&format!(
        "| 🐛 Open Issues | {} |\n",
        group_thousands(view.open_issues)
    ));
    out.push_str(&format!(
        "| 🔄 Pull Requests | {} (estimated) |\n",
        group_thousands(view.estimated_prs)
    ));
    out.push_str(&format!("| 📅 Last Commit | {} |\n\n", view.last_commit));

    out.push_str("## Health Score\n\n");
    out.push_str(&format!("**{}/100**\n\n", view.score));
    out.push_str("*Health score calculation: 100 - (issues × 2 + PRs × 3)*\n\n");

    out.push_str("---\n");
    out.push_str(&format!(
        "*This report is automatically generated {}.*\n",
        view.cadence
    ));

    out
}
