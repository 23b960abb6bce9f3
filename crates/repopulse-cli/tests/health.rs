//! `repopulse health` never fails the calling job, whatever the environment looks like.

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::net::TcpListener;
use std::path::Path;

#[allow(deprecated)]
fn health_in(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("repopulse").unwrap();
    cmd.arg("--repo-root")
        .arg(root)
        .arg("health")
        .env_remove("GITHUB_TOKEN")
        .env_remove("GITHUB_REPOSITORY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn missing_credentials_exit_zero_without_report() {
    let tmp = tempfile::tempdir().expect("temp dir");

    health_in(tmp.path()).assert().success();

    assert!(!tmp.path().join("reports/health.md").exists());
}

#[test]
fn malformed_repository_is_treated_as_missing() {
    let tmp = tempfile::tempdir().expect("temp dir");

    health_in(tmp.path())
        .env("GITHUB_TOKEN", "t0k3n")
        .env("GITHUB_REPOSITORY", "not-a-slug")
        .assert()
        .success();

    assert!(!tmp.path().join("reports/health.md").exists());
}

#[test]
fn unreachable_api_exits_zero_and_keeps_previous_report() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let reports = tmp.path().join("reports");
    std::fs::create_dir_all(&reports).expect("mkdir");
    std::fs::write(reports.join("health.md"), "previous").expect("seed");

    // Bind then drop to get a port nobody is listening on.
    let port = TcpListener::bind("127.0.0.1:0")
        .expect("bind")
        .local_addr()
        .expect("addr")
        .port();

    health_in(tmp.path())
        .env("GITHUB_TOKEN", "t0k3n")
        .env("GITHUB_REPOSITORY", "octo/widgets")
        .env("NO_PROXY", "127.0.0.1")
        .args(["--api-base", &format!("http://127.0.0.1:{port}")])
        .args(["--timeout-secs", "5"])
        .assert()
        .success();

    let kept = std::fs::read_to_string(reports.join("health.md")).expect("read");
    assert_eq!(kept, "previous");
}

#[test]
fn invalid_weekly_section_keeps_health_settings() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let port = TcpListener::bind("127.0.0.1:0")
        .expect("bind")
        .local_addr()
        .expect("addr")
        .port();
    std::fs::write(
        tmp.path().join("repopulse.toml"),
        format!(
            "[weekly]\nexclude = [\"[\"]\n\n[health]\napi_base = \"http://127.0.0.1:{port}\"\ntimeout_secs = 5\n"
        ),
    )
    .expect("write config");

    health_in(tmp.path())
        .env("GITHUB_TOKEN", "t0k3n")
        .env("GITHUB_REPOSITORY", "octo/widgets")
        .env("NO_PROXY", "127.0.0.1")
        .assert()
        .success()
        .stderr(contains(format!("127.0.0.1:{port}/repos/octo/widgets")))
        .stderr(contains("ignoring [").not());
}
