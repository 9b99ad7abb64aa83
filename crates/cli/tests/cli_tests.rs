//! End-to-end tests for the `fav` binary.
//!
//! A small shell script stands in for `fzf` so the tests never need a
//! terminal. The script records its arguments next to itself.

#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const STORE: &str = r#"{"commands": [
    {"name": "docker clean", "description": "prune unused docker data", "command": "docker system prune -af"},
    {"name": "git undo", "description": "undo last commit", "command": "git reset --soft HEAD~1"}
]}"#;

/// Picks the first record it is given and prints it NUL terminated.
const PICK_FIRST: &str = "#!/bin/sh\nprintf '%s\\n' \"$@\" > \"$(dirname \"$0\")/args.txt\"\nrecord=$(tr '\\000' '\\n' | head -n 1)\nprintf '%s\\000' \"$record\"\n";

/// Behaves like fzf after Ctrl-C.
const CANCEL: &str = "#!/bin/sh\ncat > /dev/null\nexit 130\n";

/// Behaves like fzf given a bad option.
const BROKEN: &str = "#!/bin/sh\ncat > /dev/null\necho 'unknown option' >&2\nexit 2\n";

/// Prints something that was never in its input.
const GARBAGE: &str = "#!/bin/sh\ncat > /dev/null\necho 'no delimiter here'\n";

fn install_finder(dir: &Path, script: &str) -> PathBuf {
    let path = dir.join("fzf");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn write_store(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("history_fav.json");
    fs::write(&path, content).unwrap();
    path
}

fn path_with(dir: &Path) -> String {
    format!(
        "{}:{}",
        dir.display(),
        std::env::var("PATH").unwrap_or_default()
    )
}

fn fav(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fav").unwrap();
    cmd.env("PATH", path_with(temp_dir.path()))
        .env("HOME", temp_dir.path())
        .env_remove("RUST_LOG")
        .env_remove("FZF_DEFAULT_OPTS");
    cmd
}

#[test]
fn test_help_prints_usage_and_succeeds() {
    let temp_dir = tempfile::tempdir().unwrap();

    fav(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--description"))
        .stdout(predicate::str::contains("fav -d clean"));
}

#[test]
fn test_selected_command_is_printed() {
    let temp_dir = tempfile::tempdir().unwrap();
    install_finder(temp_dir.path(), PICK_FIRST);
    let store = write_store(temp_dir.path(), STORE);

    fav(&temp_dir)
        .arg("-c")
        .arg(&store)
        .arg("docker")
        .assert()
        .success()
        .stdout("docker system prune -af\n");

    let finder_args = fs::read_to_string(temp_dir.path().join("args.txt")).unwrap();
    assert!(finder_args.lines().any(|line| line == "--query=docker"));
    assert!(finder_args.lines().any(|line| line == r"--delimiter= \|> "));
    assert!(finder_args.lines().any(|line| line == "--read0"));
}

#[test]
fn test_unknown_dash_token_is_the_search_term() {
    let temp_dir = tempfile::tempdir().unwrap();
    install_finder(temp_dir.path(), PICK_FIRST);
    let store = write_store(temp_dir.path(), STORE);

    fav(&temp_dir)
        .arg("-c")
        .arg(&store)
        .arg("-la")
        .assert()
        .success()
        .stdout("docker system prune -af\n");

    let finder_args = fs::read_to_string(temp_dir.path().join("args.txt")).unwrap();
    assert!(finder_args.lines().any(|line| line == "--query=-la"));
}

#[test]
fn test_default_store_location_under_home() {
    let temp_dir = tempfile::tempdir().unwrap();
    install_finder(temp_dir.path(), PICK_FIRST);
    let config_dir = temp_dir.path().join(".config/personal_cfg");
    fs::create_dir_all(&config_dir).unwrap();
    write_store(&config_dir, STORE);

    fav(&temp_dir)
        .arg("-a")
        .assert()
        .success()
        .stdout("docker system prune -af\n");

    let finder_args = fs::read_to_string(temp_dir.path().join("args.txt")).unwrap();
    assert!(!finder_args.contains("--query"));
}

#[test]
fn test_explicit_finder_path() {
    let temp_dir = tempfile::tempdir().unwrap();
    let finder_dir = temp_dir.path().join("bin");
    fs::create_dir_all(&finder_dir).unwrap();
    let finder = install_finder(&finder_dir, PICK_FIRST);
    let store = write_store(temp_dir.path(), STORE);

    Command::cargo_bin("fav")
        .unwrap()
        .env_remove("RUST_LOG")
        .arg("--finder")
        .arg(&finder)
        .arg("--config-path")
        .arg(&store)
        .assert()
        .success()
        .stdout("docker system prune -af\n");
}

#[test]
fn test_cancellation_exits_cleanly_without_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    install_finder(temp_dir.path(), CANCEL);
    let store = write_store(temp_dir.path(), STORE);

    fav(&temp_dir)
        .arg("-c")
        .arg(&store)
        .arg("-d")
        .arg("clean")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_finder_failure_is_reported() {
    let temp_dir = tempfile::tempdir().unwrap();
    install_finder(temp_dir.path(), BROKEN);
    let store = write_store(temp_dir.path(), STORE);

    fav(&temp_dir)
        .arg("-c")
        .arg(&store)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("status 2"));
}

#[test]
fn test_undecodable_selection_is_reported() {
    let temp_dir = tempfile::tempdir().unwrap();
    install_finder(temp_dir.path(), GARBAGE);
    let store = write_store(temp_dir.path(), STORE);

    fav(&temp_dir)
        .arg("-c")
        .arg(&store)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Invalid selection format"));
}

#[test]
fn test_missing_store_names_the_path() {
    let temp_dir = tempfile::tempdir().unwrap();
    install_finder(temp_dir.path(), PICK_FIRST);
    let missing = temp_dir.path().join("nope.json");

    fav(&temp_dir)
        .arg("-c")
        .arg(&missing)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(missing.to_str().unwrap()));
}

#[test]
fn test_empty_store_fails_before_finder_runs() {
    let temp_dir = tempfile::tempdir().unwrap();
    install_finder(temp_dir.path(), PICK_FIRST);
    let store = write_store(temp_dir.path(), r#"{"commands": []}"#);

    fav(&temp_dir)
        .arg("-c")
        .arg(&store)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No commands found"));

    assert!(!temp_dir.path().join("args.txt").exists());
}

#[test]
fn test_missing_finder_is_reported_before_loading_store() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing_store = temp_dir.path().join("nope.json");

    fav(&temp_dir)
        .arg("--finder")
        .arg("definitely-not-a-real-finder-binary")
        .arg("-c")
        .arg(&missing_store)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("is required"))
        .stderr(predicate::str::contains("favorites file").not());
}
