//! Tests for `codesync link`

use super::common::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_link_persists_gist_id() {
    let ctx = TestContext::new();
    ctx.codesync()
        .args(["link", "aa5a315d61ae9438b18d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Linked gist aa5a315d61ae9438b18d"));

    let state = fs::read_to_string(ctx.state_file()).unwrap();
    assert!(state.contains("aa5a315d61ae9438b18d"));
}

#[test]
fn test_link_accepts_gist_url() {
    let ctx = TestContext::new();
    ctx.codesync()
        .args(["link", "https://gist.github.com/someone/aa5a315d61ae9438b18d"])
        .assert()
        .success();

    let state = fs::read_to_string(ctx.state_file()).unwrap();
    assert!(state.contains("aa5a315d61ae9438b18d"));
    assert!(!state.contains("someone"));
}

#[test]
fn test_link_replaces_previous() {
    let ctx = TestContext::new();
    ctx.write_state("oldgist");
    ctx.codesync()
        .args(["link", "newgist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Replacing previously linked gist oldgist"));

    let state = fs::read_to_string(ctx.state_file()).unwrap();
    assert!(state.contains("newgist"));
    assert!(!state.contains("oldgist"));
}

#[test]
fn test_link_rejects_invalid_id() {
    let ctx = TestContext::new();
    ctx.codesync()
        .args(["link", "not a gist!"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    assert!(!ctx.state_file().exists());
}
