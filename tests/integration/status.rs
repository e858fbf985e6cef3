//! Tests for `codesync status`

use super::common::TestContext;
use predicates::prelude::*;

#[test]
fn test_status_not_linked() {
    let ctx = TestContext::new();
    ctx.codesync()
        .arg("status")
        .env("GITHUB_TOKEN", "ghp_statustesttoken")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("not linked")
                .and(predicate::str::contains("from GITHUB_TOKEN"))
                .and(predicate::str::contains("ghp_statustesttoken").not()),
        );
}

#[test]
fn test_status_shows_linked_gist() {
    let ctx = TestContext::new();
    ctx.write_state("feedbeef");
    ctx.codesync()
        .arg("status")
        .env("GITHUB_TOKEN", "ghp_statustesttoken")
        .assert()
        .success()
        .stdout(predicate::str::contains("feedbeef"));
}

#[test]
fn test_status_editor_override() {
    let ctx = TestContext::new();
    ctx.codesync()
        .args(["status", "--editor", "cursor"])
        .env("GITHUB_TOKEN", "ghp_statustesttoken")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cursor"));
}

#[test]
fn test_status_rejects_hand_edited_gist_path() {
    let ctx = TestContext::new();
    ctx.write_state("a/b");
    ctx.codesync()
        .arg("status")
        .env("GITHUB_TOKEN", "ghp_statustesttoken")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid gist id"));
}
