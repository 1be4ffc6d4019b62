// tests/cli_test.rs
mod common;

use assert_cmd::Command;
use common::{commit_at, setup_test_repo, tag_at, MAP};
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const GITHUB_VARS: [&str; 8] = [
    "INPUT_TYPE",
    "INPUT_MAP",
    "INPUT_LABELS",
    "GITHUB_HEAD_REF",
    "GITHUB_REF_NAME",
    "GITHUB_EVENT_PATH",
    "GITHUB_OUTPUT",
    "RUST_LOG",
];

/// Binary isolated from the caller's CI environment and user config
fn bump_detect(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bump-detect").expect("binary should build");
    for var in GITHUB_VARS {
        cmd.env_remove(var);
    }
    cmd.current_dir(workdir)
        .env("HOME", workdir)
        .env("XDG_CONFIG_HOME", workdir);
    cmd
}

#[test]
fn test_help() {
    let (temp_dir, _repo) = setup_test_repo();
    bump_detect(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bump-detect"))
        .stdout(predicate::str::contains("--type"));
}

#[test]
fn test_label_release() {
    let (temp_dir, repo) = setup_test_repo();
    let oid = commit_at(&repo, "initial", 1_000);
    tag_at(&repo, "v1.4.1", oid, 1_100);

    bump_detect(temp_dir.path())
        .args(["--type", "label", "--labels", "feature", "--map", MAP])
        .assert()
        .success()
        .stdout("version=v1.5.0\nrelease_needed=true\nrelease_id=1.5.0\n");
}

#[test]
fn test_inputs_from_environment() {
    let (temp_dir, repo) = setup_test_repo();
    commit_at(&repo, "[breaking] redo API", 1_000);

    bump_detect(temp_dir.path())
        .env("INPUT_TYPE", "commit")
        .env("INPUT_MAP", MAP)
        .assert()
        .success()
        .stdout(predicate::str::contains("version=v1.0.0"))
        .stdout(predicate::str::contains("release_needed=true"));
}

#[test]
fn test_event_payload_labels() {
    let (temp_dir, repo) = setup_test_repo();
    let oid = commit_at(&repo, "initial", 1_000);
    tag_at(&repo, "v0.4.2", oid, 1_100);

    let event_path = temp_dir.path().join("event.json");
    fs::write(
        &event_path,
        r#"{"pull_request":{"labels":[{"name":"bug"},{"name":"feature"}]}}"#,
    )
    .unwrap();

    bump_detect(temp_dir.path())
        .args(["--map", MAP, "--labels", "breaking"])
        .env("GITHUB_EVENT_PATH", &event_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("version=v0.4.3"));
}

#[test]
fn test_unmapped_branch_is_success_without_release() {
    let (temp_dir, repo) = setup_test_repo();
    commit_at(&repo, "initial", 1_000);

    bump_detect(temp_dir.path())
        .args(["--type", "branch", "--head-ref", "chore/cleanup", "--map", MAP])
        .assert()
        .success()
        .stdout("version=\nrelease_needed=false\nrelease_id=\n")
        .stderr(predicate::str::contains("chore"));
}

#[test]
fn test_malformed_map_fails_with_blank_outputs() {
    let (temp_dir, _repo) = setup_test_repo();
    let output_file = temp_dir.path().join("github_output");

    bump_detect(temp_dir.path())
        .args(["--type", "label", "--labels", "feature", "--map", "{not json"])
        .env("GITHUB_OUTPUT", &output_file)
        .assert()
        .failure()
        .code(1)
        .stdout("version=\nrelease_needed=false\nrelease_id=\n")
        .stderr(predicate::str::contains("not valid JSON"));

    assert_eq!(
        fs::read_to_string(&output_file).unwrap(),
        "version=\nrelease_needed=false\nrelease_id=\n"
    );
}

#[test]
fn test_unknown_category_fails_with_blank_outputs() {
    let (temp_dir, repo) = setup_test_repo();
    let oid = commit_at(&repo, "initial", 1_000);
    tag_at(&repo, "v1.0.0", oid, 1_100);
    let output_file = temp_dir.path().join("github_output");

    bump_detect(temp_dir.path())
        .args(["--labels", "feature", "--map", r#"{"release":["feature"]}"#])
        .env("GITHUB_OUTPUT", &output_file)
        .assert()
        .failure()
        .code(1)
        .stdout("version=\nrelease_needed=false\nrelease_id=\n")
        .stderr(predicate::str::contains("unrecognized bump category 'release'"));

    assert_eq!(
        fs::read_to_string(&output_file).unwrap(),
        "version=\nrelease_needed=false\nrelease_id=\n"
    );
}

#[test]
fn test_oversized_tag_is_skipped() {
    let (temp_dir, repo) = setup_test_repo();
    let first = commit_at(&repo, "first", 1_000);
    tag_at(&repo, "v1.2.0", first, 1_100);
    tag_at(&repo, "v99999999999999999999.0.0", first, 1_200);

    bump_detect(temp_dir.path())
        .args(["--labels", "fix", "--map", MAP])
        .assert()
        .success()
        .stdout("version=v1.2.1\nrelease_needed=true\nrelease_id=1.2.1\n")
        .stderr(predicate::str::contains("Skipping tag 'v99999999999999999999.0.0'"));
}

#[test]
fn test_unreadable_event_payload_reported_once() {
    let (temp_dir, _repo) = setup_test_repo();
    let event_path = temp_dir.path().join("event.json");
    fs::write(&event_path, "{not json").unwrap();

    let output = bump_detect(temp_dir.path())
        .args(["--labels", "fix", "--map", MAP])
        .env("GITHUB_EVENT_PATH", &event_path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(
        stderr.matches("Cannot read event payload").count(),
        1,
        "stderr: {}",
        stderr
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("version=v0.0.1"));
}

#[test]
fn test_piped_stderr_has_no_color_codes() {
    let (temp_dir, repo) = setup_test_repo();
    commit_at(&repo, "initial", 1_000);

    bump_detect(temp_dir.path())
        .args(["--verbose", "--labels", "feature", "--map", MAP])
        .env_remove("CLICOLOR_FORCE")
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_missing_map_fails() {
    let (temp_dir, _repo) = setup_test_repo();

    bump_detect(temp_dir.path())
        .args(["--labels", "feature", "--map", "{}"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("map is required"));
}

#[test]
fn test_invalid_type_fails() {
    let (temp_dir, _repo) = setup_test_repo();

    bump_detect(temp_dir.path())
        .args(["--type", "tag", "--map", MAP])
        .assert()
        .failure()
        .stdout(predicate::str::contains("release_needed=false"))
        .stderr(predicate::str::contains("invalid type 'tag'"));
}

#[test]
fn test_outputs_appended_to_github_output() {
    let (temp_dir, repo) = setup_test_repo();
    commit_at(&repo, "fix: typo", 1_000);
    let output_file = temp_dir.path().join("github_output");
    fs::write(&output_file, "earlier=value\n").unwrap();

    bump_detect(temp_dir.path())
        .args(["--type", "commit", "--map", MAP])
        .env("GITHUB_OUTPUT", &output_file)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output_file).unwrap(),
        "earlier=value\nversion=v0.0.1\nrelease_needed=true\nrelease_id=0.0.1\n"
    );
}

#[test]
fn test_json_format() {
    let (temp_dir, _repo) = setup_test_repo();

    bump_detect(temp_dir.path())
        .args(["--labels", "breaking", "--map", MAP, "--format", "json"])
        .assert()
        .success()
        .stdout("{\"version\":\"v1.0.0\",\"release_needed\":true,\"release_id\":\"1.0.0\"}\n");
}

#[test]
fn test_config_file_in_working_directory() {
    let (temp_dir, repo) = setup_test_repo();
    commit_at(&repo, "[feature] search", 1_000);
    fs::write(
        temp_dir.path().join("bump-detect.toml"),
        "type = \"commit\"\n\n[map]\nminor = [\"feature\"]\n",
    )
    .unwrap();

    bump_detect(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("version=v0.1.0"));
}

#[test]
fn test_missing_repository_starts_from_zero() {
    let (temp_dir, _repo) = setup_test_repo();

    bump_detect(temp_dir.path())
        .args(["--repo", "/nonexistent/path/to/repo"])
        .args(["--labels", "feature", "--map", MAP])
        .assert()
        .success()
        .stdout(predicate::str::contains("version=v0.1.0"))
        .stderr(predicate::str::contains("No git repository available"));
}

#[test]
fn test_repeated_runs_are_identical() {
    let (temp_dir, repo) = setup_test_repo();
    let oid = commit_at(&repo, "initial", 1_000);
    tag_at(&repo, "v2.2.2", oid, 1_100);

    let run = || {
        bump_detect(temp_dir.path())
            .args(["--labels", "fix", "--map", MAP])
            .output()
            .expect("binary should run")
            .stdout
    };

    assert_eq!(run(), run());
}
