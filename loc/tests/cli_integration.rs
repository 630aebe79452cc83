//! Integration tests for the loc CLI

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn loc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_loc"))
}

fn create_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_cli_help() {
    loc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--exclude"))
        .stdout(predicate::str::contains("--count-blank"))
        .stdout(predicate::str::contains("--by-ext"))
        .stdout(predicate::str::contains("--license"));
}

#[test]
fn test_help_wins_over_other_arguments() {
    loc()
        .args(["/nonexistent/path", "--bogus", "-h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PATH"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_cli_license() {
    loc()
        .arg("--license")
        .assert()
        .success()
        .stdout(predicate::str::contains("The MIT License (MIT)"))
        .stdout(predicate::str::contains("Permission is hereby granted"));
}

#[test]
fn test_cli_version() {
    loc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("loc"));
}

#[test]
fn test_ignores_blank_lines_by_default() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("a.txt");
    create_file(&file, "a\n\n  \nb\n");

    loc().arg(&file).assert().success().stdout("2\n");
}

#[test]
fn test_count_blank() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("a.txt");
    create_file(&file, "a\n\n  \nb\n");

    loc().arg("-b").arg(&file).assert().success().stdout("4\n");
    loc()
        .arg("--count-blank")
        .arg(&file)
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn test_by_extension_output() {
    let temp = tempdir().unwrap();
    create_file(&temp.path().join("x.py"), "a\nb\nc\n");
    create_file(&temp.path().join("y.txt"), "d\ne\n");

    loc()
        .arg("-e")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(".py\t3\n.txt\t2\ntotal\t5\n");
}

#[test]
fn test_by_extension_misc_row() {
    let temp = tempdir().unwrap();
    create_file(&temp.path().join("NOTES"), "1\n2\n3\n4\n");
    create_file(&temp.path().join("main.go"), "package main\n");

    loc()
        .arg("--by-ext")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(".go\t1\nmisc.\t4\ntotal\t5\n");
}

#[test]
fn test_exclude() {
    let temp = tempdir().unwrap();
    create_file(&temp.path().join("src/main.rs"), "fn main() {}\n");
    create_file(&temp.path().join("vendor/dep.rs"), "a\nb\nc\n");
    create_file(&temp.path().join("build.rs"), "fn main() {}\n");

    loc()
        .arg("-x")
        .arg(temp.path().join("vendor"))
        .arg("--exclude")
        .arg(temp.path().join("build.rs"))
        .arg(temp.path())
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_duplicate_arguments_counted_once() {
    let temp = tempdir().unwrap();
    create_file(&temp.path().join("src/lib.rs"), "pub mod a;\npub mod b;\n");

    loc()
        .arg(temp.path())
        .arg(temp.path().join("src"))
        .arg(temp.path().join("src/lib.rs"))
        .arg(temp.path())
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_no_paths_counts_nothing() {
    loc().assert().success().stdout("0\n");
}

#[test]
fn test_invalid_path() {
    let temp = tempdir().unwrap();
    let missing = temp.path().join("missing");
    let expected = format!("(loc) ERROR: Path '{}' does not exist!", missing.display());

    loc()
        .arg(&missing)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(expected));
}

#[test]
fn test_invalid_path_prints_no_partial_total() {
    let temp = tempdir().unwrap();
    create_file(&temp.path().join("a.txt"), "a\n");

    loc()
        .arg(temp.path())
        .arg(temp.path().join("missing"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("does not exist!"));
}

#[test]
fn test_debug_logging() {
    let temp = tempdir().unwrap();
    create_file(&temp.path().join("a.txt"), "a\n");
    fs::write(temp.path().join("blob.bin"), b"\xff\xfe\xfd").unwrap();

    loc()
        .arg("--debug")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(loc) DEBUG: Debug mode enabled."))
        .stdout(predicate::str::contains("(loc) DEBUG: Ignoring blank lines."))
        .stdout(predicate::str::contains("Cannot count lines in binary file"))
        .stdout(predicate::str::ends_with("1\n"));
}

#[test]
fn test_no_debug_output_by_default() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("blob.bin"), b"\xff\xfe\xfd").unwrap();

    loc()
        .arg(temp.path())
        .assert()
        .success()
        .stdout("0\n")
        .stderr(predicate::str::is_empty());
}
