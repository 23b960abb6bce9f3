use assert_cmd::Command;
use predicates::str::contains;

#[allow(deprecated)]
fn repopulse_cmd() -> Command {
    Command::cargo_bin("repopulse").unwrap()
}

#[test]
fn help_lists_both_reports() {
    repopulse_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("weekly"))
        .stdout(contains("health"));
}

#[test]
fn health_help_mentions_environment() {
    repopulse_cmd()
        .args(["health", "--help"])
        .assert()
        .success()
        .stdout(contains("GITHUB_TOKEN"));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    repopulse_cmd().assert().failure();
}
