//! Binary-level tests for the blogsmith CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn write_config(dir: &std::path::Path, cache_dir: &str) -> std::path::PathBuf {
    let path = dir.join("config.yaml");
    let content = format!(
        "blog:\n  title: \"Field Notes\"\n\
         github_pages:\n  repository: \"jo/notes\"\n\
         keyword_discovery:\n  cache_dir: \"{cache_dir}\"\n\
         content_creation:\n  min_word_count: 1\n  max_word_count: 100000\n\
         social_promotion:\n  platforms: [mastodon]\n"
    );
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn check_accepts_a_valid_config() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), "cache");

    Command::cargo_bin("blogsmith")
        .unwrap()
        .args(["check", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration OK"))
        .stdout(predicate::str::contains("Field Notes"));
}

#[test]
fn check_rejects_an_invalid_enum_value() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.yaml");
    fs::write(&config, "monetization:\n  ad_placement: \"everywhere\"\n").unwrap();

    Command::cargo_bin("blogsmith")
        .unwrap()
        .args(["check", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("monetization"));
}

#[test]
fn check_fails_for_a_missing_file() {
    let dir = tempdir().unwrap();

    Command::cargo_bin("blogsmith")
        .unwrap()
        .args(["check", "--config"])
        .arg(dir.path().join("absent.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn stages_lists_the_pipeline_in_order() {
    Command::cargo_bin("blogsmith")
        .unwrap()
        .arg("stages")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. keyword_discovery"))
        .stdout(predicate::str::contains("9. analytics"));
}

#[test]
fn run_prints_a_success_outcome_as_json() {
    let dir = tempdir().unwrap();
    let cache_dir = dir.path().join("cache");
    let config = write_config(dir.path(), &cache_dir.display().to_string());

    Command::cargo_bin("blogsmith")
        .unwrap()
        .arg("static site generators")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"success\""))
        .stdout(predicate::str::contains("jo.github.io"));
}

#[test]
fn topic_plus_subcommand_is_rejected() {
    Command::cargo_bin("blogsmith")
        .unwrap()
        .args(["some topic", "stages"])
        .assert()
        .failure();
}

#[test]
fn no_arguments_is_an_error() {
    Command::cargo_bin("blogsmith")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("topic or a subcommand"));
}
