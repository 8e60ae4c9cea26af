use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn syncscript() -> Command {
    Command::cargo_bin("syncscript").unwrap()
}

#[test]
fn test_prints_script_for_minimal_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        "backups.toml",
        "[backups.job1]\nsrc = \"/a\"\ndst = \"/b\"\n",
    );

    syncscript()
        .arg(&path)
        .assert()
        .success()
        .stdout("#!/bin/sh\nrclone sync --dry-run --progress \"/a\" \"/b\"\n");
}

#[test]
fn test_yaml_config_with_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        "backups.yaml",
        r#"
description: |
  Laptop backups
global:
  ignore: ["*.tmp"]
backups:
  docs:
    src: /home/docs
    dst: remote:docs
    log_file: /var/log/docs.log
"#,
    );

    syncscript()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("#!/bin/sh\n# Laptop backups\n"))
        .stdout(predicate::str::contains("--exclude \"*.tmp\""))
        .stdout(predicate::str::contains("2>>/var/log/docs.log"));
}

#[test]
fn test_unknown_key_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        "backups.toml",
        "[backups.job1]\nsrc = \"/a\"\ndst = \"/b\"\nexclude = [\"x\"]\n",
    );

    syncscript()
        .arg(&path)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("unknown key `exclude`"));
}

#[test]
fn test_missing_file_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();

    syncscript()
        .arg(temp_dir.path().join("missing.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn test_check_mode() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        "backups.toml",
        "[backups.a]\nsrc = \"/a\"\ndst = \"/b\"\n[backups.b]\nsrc = \"/c\"\ndst = \"/d\"\n",
    );

    syncscript()
        .arg(&path)
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 2 backup(s)"))
        .stdout(predicate::str::contains("#!/bin/sh").not());
}

#[test]
fn test_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        "backups.conf",
        r#"{"backups": {"job1": {"src": "/a", "dst": "/b"}}}"#,
    );
    let output = temp_dir.path().join("backup.sh");

    syncscript()
        .arg(&path)
        .args(["--format", "json", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    let script = std::fs::read_to_string(output).unwrap();
    assert!(script.contains("\"/a\" \"/b\""));
}

#[test]
fn test_output_is_stable_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        "backups.toml",
        r#"
[global]
ignore = ["*.tmp", "*.part", "node_modules", ".cache", "Thumbs.db"]

[backups.projects]
src = "/home/me/projects"
dst = "remote:archive/projects"
"#,
    );

    let first = syncscript().arg(&path).output().unwrap();
    let second = syncscript().arg(&path).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert!(String::from_utf8(first.stdout).unwrap().contains(" \\\n    "));
}
