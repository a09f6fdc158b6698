//! End-to-end invocation tests against the built binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn kiln() -> Command {
    Command::cargo_bin("kiln").unwrap()
}

#[test]
fn test_help_prints_usage_and_succeeds() {
    kiln()
        .arg("-help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: kiln"));
}

#[test]
fn test_help_alias() {
    kiln()
        .arg("-?")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: kiln"));
}

#[test]
fn test_version_prints_banner() {
    kiln()
        .arg("-version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_empty_invocation_without_script_fails() {
    let dir = TempDir::new().unwrap();
    kiln()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("no build script found"));
}

#[test]
fn test_two_bare_arguments_fail() {
    let dir = TempDir::new().unwrap();
    kiln()
        .current_dir(dir.path())
        .args(["one.kiln", "two.kiln"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("More than one build script"));
}

#[test]
fn test_dry_run_against_a_default_script() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("build.kiln"), "").unwrap();

    kiln()
        .current_dir(dir.path())
        .arg("-dryrun")
        .assert()
        .success()
        .stdout(predicate::str::contains("Restore"));
}

#[test]
fn test_describe_lists_the_step_plan() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("script.kiln"), "").unwrap();

    kiln()
        .current_dir(dir.path())
        .args(["script.kiln", "-s", "-target=Publish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-t:Publish"));
}

#[test]
fn test_unknown_verbosity_fails_before_running() {
    kiln()
        .args(["script.kiln", "-verbosity=loud"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("unrecognized verbosity level"));
}

#[test]
fn test_duplicate_option_fails() {
    kiln()
        .args(["script.kiln", "-target=A", "-target=B"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Multiple arguments with the same name"));
}
