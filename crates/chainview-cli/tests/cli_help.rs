use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_options() {
    cargo_bin_cmd!("chainview")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--page-size"))
        .stdout(predicate::str::contains("--replay"))
        .stdout(predicate::str::contains("--block-interval-ms"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("chainview")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

#[test]
fn test_bad_replay_path_fails() {
    cargo_bin_cmd!("chainview")
        .args(["--replay", "/nonexistent/blocks.jsonl"])
        .env("CHAINVIEW_HOME", std::env::temp_dir())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read replay file"));
}
