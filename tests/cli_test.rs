use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn setup() -> (TempDir, String) {
    let root = TempDir::new().unwrap();
    let library = root.path().join("Texts");
    fs::create_dir_all(&library).unwrap();
    let dir = library.to_str().unwrap().to_string();
    (root, dir)
}

fn teleprompt() -> Command {
    Command::cargo_bin("teleprompt").unwrap()
}

#[test]
fn test_add_creates_file_and_settings_entry() {
    let (root, dir) = setup();

    teleprompt()
        .args(["--dir", &dir, "add", "--name", "Intro", "--chapter", "Hello there"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created: 001_intro_"));

    let files: Vec<_> = fs::read_dir(root.path().join("Texts"))
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("001_intro_"));
    assert!(root.path().join("AppSettings.json").exists());
}

#[test]
fn test_add_without_chapters_fails() {
    let (_root, dir) = setup();

    teleprompt()
        .args(["--dir", &dir, "add", "--name", "Intro"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one chapter"));
}

#[test]
fn test_chapters_from_stdin() {
    let (_root, dir) = setup();

    teleprompt()
        .args(["--dir", &dir, "add", "--name", "Talk", "--from-stdin"])
        .write_stdin("First point\n\nSecond point\n")
        .assert()
        .success();

    teleprompt()
        .args(["--dir", &dir, "ls", "--show-chapters"])
        .assert()
        .success()
        .stdout(predicate::str::contains("First point | Second point"));
}

#[test]
fn test_ls_and_del_round_trip() {
    let (_root, dir) = setup();

    teleprompt()
        .args(["--dir", &dir, "add", "--name", "Intro", "--chapter", "a"])
        .assert()
        .success();

    teleprompt()
        .args(["--dir", &dir, "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Intro"))
        .stdout(predicate::str::contains("friendlyName"));

    teleprompt()
        .args(["--dir", &dir, "del", "--name", "Intro"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted:"));

    teleprompt()
        .args(["--dir", &dir, "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No prompts found."));
}

#[test]
fn test_del_missing_prompt_fails() {
    let (_root, dir) = setup();

    teleprompt()
        .args(["--dir", &dir, "del", "--name", "Ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Prompt not found"));
}

#[test]
fn test_del_requires_exactly_one_selector() {
    let (_root, dir) = setup();

    teleprompt()
        .args(["--dir", &dir, "del"])
        .assert()
        .failure();

    teleprompt()
        .args(["--dir", &dir, "del", "--name", "A", "--guid", "B"])
        .assert()
        .failure();
}

#[test]
fn test_directory_from_environment() {
    let (root, dir) = setup();

    teleprompt()
        .env("ELGATO_PROMPTER_DIR", &dir)
        .args(["add", "--name", "EnvTest", "--chapter", "x"])
        .assert()
        .success();

    assert!(root.path().join("AppSettings.json").exists());
}

#[test]
fn test_doctor_on_clean_library() {
    let (_root, dir) = setup();

    teleprompt()
        .args(["--dir", &dir, "doctor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already matches"));
}
