//! Tests for argument parsing and top-level help

use super::common::TestContext;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let ctx = TestContext::new();
    ctx.codesync()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("sync")
                .and(predicate::str::contains("configure"))
                .and(predicate::str::contains("link"))
                .and(predicate::str::contains("status")),
        );
}

#[test]
fn test_pull_and_push_conflict() {
    let ctx = TestContext::new();
    ctx.codesync()
        .args(["sync", "--pull", "--push"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_unknown_editor_rejected() {
    let ctx = TestContext::new();
    ctx.codesync()
        .args(["status", "--editor", "notepad"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("notepad"));
}

#[test]
fn test_configure_without_tty() {
    // No terminal to prompt on; must exit cleanly either way
    let ctx = TestContext::new();
    let output = ctx.codesync().arg("configure").output().unwrap();
    assert!(output.status.code().is_some());
}
