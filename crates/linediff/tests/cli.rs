use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Command isolated from the user's config directory
fn linediff(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("linediff").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("LINEDIFF_LOG");
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn shows_help() {
    let home = tempfile::tempdir().unwrap();
    linediff(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn shows_version() {
    let home = tempfile::tempdir().unwrap();
    linediff(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn prints_stats() {
    let dir = tempfile::tempdir().unwrap();
    let old = write(&dir, "old.txt", "hello\nworld");
    let new = write(&dir, "new.txt", "hello\nearth");

    linediff(dir.path())
        .args(["--format", "stats"])
        .arg(&old)
        .arg(&new)
        .assert()
        .success()
        .stdout("+1 added / -1 removed / 1 unchanged\n");
}

#[test]
fn prints_json() {
    let dir = tempfile::tempdir().unwrap();
    let old = write(&dir, "old.txt", "hello");
    let new = write(&dir, "new.txt", "hello\nworld");

    let output = linediff(dir.path())
        .args(["--format", "json"])
        .arg(&old)
        .arg(&new)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "operations": [
                { "type": "unchanged", "content": "hello", "oldLineNumber": 1, "newLineNumber": 1 },
                { "type": "added", "content": "world", "newLineNumber": 2 }
            ],
            "stats": { "added": 1, "removed": 0, "unchanged": 1 }
        })
    );
}

#[test]
fn prints_unified() {
    let dir = tempfile::tempdir().unwrap();
    let old = write(&dir, "old.txt", "a\nb\nc\nd");
    let new = write(&dir, "new.txt", "a");

    linediff(dir.path())
        .args(["--format", "unified", "--color", "never"])
        .arg(&old)
        .arg(&new)
        .assert()
        .success()
        .stdout(predicate::str::contains("@@ -1,4 +1,1 @@\n a\n-b\n-c\n-d\n"));
}

#[test]
fn prints_side_by_side_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let old = write(&dir, "old.txt", "hello\nworld");
    let new = write(&dir, "new.txt", "hello\nearth");

    linediff(dir.path())
        .args(["--width", "60"])
        .arg(&old)
        .arg(&new)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 - world"))
        .stdout(predicate::str::contains("2 + earth"))
        .stdout(predicate::str::ends_with("+1 added / -1 removed / 1 unchanged\n"));
}

#[test]
fn reads_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let new = write(&dir, "new.txt", "hello\nworld");

    linediff(dir.path())
        .args(["--format", "stats", "-"])
        .arg(&new)
        .write_stdin("hello\nworld")
        .assert()
        .success()
        .stdout("+0 added / -0 removed / 2 unchanged\n");
}

#[test]
fn rejects_two_stdin_inputs() {
    let home = tempfile::tempdir().unwrap();
    linediff(home.path())
        .args(["-", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("stdin"));
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let present = write(&dir, "present.txt", "x");

    linediff(dir.path())
        .arg(dir.path().join("absent.txt"))
        .arg(&present)
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.txt"));
}

#[test]
fn exit_code_reflects_difference() {
    let dir = tempfile::tempdir().unwrap();
    let old = write(&dir, "old.txt", "same");
    let same = write(&dir, "same.txt", "same");
    let other = write(&dir, "other.txt", "different");

    linediff(dir.path())
        .args(["--format", "stats", "--exit-code"])
        .arg(&old)
        .arg(&same)
        .assert()
        .code(0);

    linediff(dir.path())
        .args(["--format", "stats", "--exit-code"])
        .arg(&old)
        .arg(&other)
        .assert()
        .code(1);

    linediff(dir.path())
        .args(["--format", "stats"])
        .arg(&old)
        .arg(&other)
        .assert()
        .code(0);
}

#[test]
fn explicit_config_sets_format() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(&dir, "config.toml", "[display]\nformat = \"stats\"\n");
    let old = write(&dir, "old.txt", "a");
    let new = write(&dir, "new.txt", "a\nb");

    linediff(dir.path())
        .arg("--config")
        .arg(&config)
        .arg(&old)
        .arg(&new)
        .assert()
        .success()
        .stdout("+1 added / -0 removed / 1 unchanged\n");
}

#[test]
fn invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(&dir, "config.toml", "[display]\nformat = 7\n");
    let old = write(&dir, "old.txt", "a");

    linediff(dir.path())
        .arg("--config")
        .arg(&config)
        .arg(&old)
        .arg(&old)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[cfg(target_os = "linux")]
#[test]
fn default_config_location() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join(".config").join("linediff");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[display]\nformat = \"stats\"\n").unwrap();
    let old = write(&dir, "old.txt", "a");

    linediff(dir.path())
        .arg(&old)
        .arg(&old)
        .assert()
        .success()
        .stdout("+0 added / -0 removed / 1 unchanged\n");
}

#[test]
fn warns_about_mixed_line_endings() {
    let dir = tempfile::tempdir().unwrap();
    let old = write(&dir, "old.txt", "a\r\nb\r\n");
    let new = write(&dir, "new.txt", "a\nb\n");

    linediff(dir.path())
        .args(["--format", "stats"])
        .arg(&old)
        .arg(&new)
        .assert()
        .success()
        .stderr(predicate::str::contains("different line endings"));
}
