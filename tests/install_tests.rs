//! End-to-end installs against github.com

mod common;

use common::TestHome;
use predicates::prelude::*;

#[test]
#[ignore = "Requires network access to github.com"]
fn test_dry_run_install_changes_nothing() {
    let home = TestHome::new();
    home.mkdir(".claude");

    // A leaf selected directly needs no navigation input
    home.cmd()
        .args([
            "https://github.com/anthropics/skills/tree/main/skills/pdf/scripts",
            "--for",
            "claude",
            "--yes",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[DRY RUN] Would copy scripts"))
        .stdout(predicate::str::contains("[DRY RUN] Would link"));

    assert!(!home.join(".agents").exists());
    assert!(!home.join(".claude/skills").exists());
}

#[test]
#[ignore = "Requires network access to github.com"]
fn test_install_links_target_to_store() {
    let home = TestHome::new();

    home.cmd()
        .args([
            "anthropics/skills/tree/main/skills/pdf/scripts",
            "--for",
            "codex",
            "--yes",
        ])
        .assert()
        .success();

    let store = home.join(".agents/skills/scripts");
    assert!(store.is_dir());
    let codex = home.join(".codex/skills");
    assert!(
        std::fs::symlink_metadata(&codex)
            .unwrap()
            .file_type()
            .is_symlink()
    );
    assert!(codex.join("scripts").is_dir());
}

#[test]
#[ignore = "Requires network access to github.com"]
fn test_nonexistent_repository_fails() {
    let home = TestHome::new();
    home.cmd()
        .args(["skillget-test/does-not-exist-0000", "--yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to fetch repository"));
}
