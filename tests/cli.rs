//! CLI argument parsing and validation tests — no network I/O.
//!
//! These tests verify that invalid input is rejected before any cassette
//! or live adapter is consulted.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("imgstudio").unwrap();
    // Keep a developer's real config file out of the picture
    cmd.env("IMGSTUDIO_CONFIG", "/nonexistent/imgstudio-config.toml");
    cmd
}

#[test]
fn missing_prompt_exits_with_error() {
    // Neither prompt nor --prompt-file given → resolve_prompt() returns an error
    cmd()
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Provide a prompt string"));
}

#[test]
fn invalid_format_exits_with_error() {
    cmd()
        .args(["generate", "--format", "gif", "a cat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported format"));
}

#[test]
fn edit_without_image_flag_is_a_usage_error() {
    cmd().args(["edit", "add a hat"]).assert().failure();
}

#[test]
fn edit_with_missing_source_file_exits_with_error() {
    cmd()
        .args(["edit", "-i", "/nonexistent/source.png", "add a hat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn edit_rejects_oversized_source_file() {
    // A sparse 5 MB + 1 byte file trips the ceiling before anything else runs
    let dir = std::env::temp_dir().join("imgstudio_cli_big_upload");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("big.png");
    let file = std::fs::File::create(&path).unwrap();
    file.set_len(5 * 1024 * 1024 + 1).unwrap();

    cmd()
        .args(["edit", "-i", path.to_str().unwrap(), "add a hat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Max 5MB"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn edit_rejects_non_image_source_file() {
    let dir = std::env::temp_dir().join("imgstudio_cli_text_upload");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("notes.txt");
    std::fs::write(&path, "not an image").unwrap();

    cmd()
        .args(["edit", "-i", path.to_str().unwrap(), "add a hat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a recognized image file"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn topup_rejects_unknown_plan() {
    cmd()
        .args(["topup", "--plan", "75", "--trx-id", "1234567890"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown plan"));
}

#[test]
fn topup_rejects_empty_trx_id() {
    cmd()
        .args(["topup", "--trx-id", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction ID must not be empty"));
}

#[test]
fn topup_acknowledges_request() {
    cmd()
        .args(["topup", "--plan", "100", "--trx-id", "trx-42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Payment request sent"))
        .stdout(predicate::str::contains("PKR 200"))
        .stdout(predicate::str::contains("trx-42"));
}
