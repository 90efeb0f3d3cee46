// ABOUTME: Integration tests for the create-spell-json binary.
// ABOUTME: Covers exit codes, default and explicit output paths, local HTML input and the level report.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const PAGE: &str = r#"<!DOCTYPE html>
<html><body>
<h2>Fire Mage</h2>
<table>
<tr><th>Line</th><th>Spells</th><th>Levels</th></tr>
<tr><td>Fireball Line</td><td>No change, Greater Fireball</td><td>1, 5</td></tr>
<tr><td>Shield</td><td>Ward, Barrier, Aegis</td><td>3, 9</td></tr>
</table>
</body></html>"#;

fn spell_cmd() -> Command {
    Command::cargo_bin("create-spell-json").unwrap()
}

#[test]
fn no_args_prints_usage_and_exits_1() {
    spell_cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: create-spell-json <url>"));
}

#[test]
fn fetch_and_write_explicit_path() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/fire_mage.html");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(PAGE);
    });

    let dir = TempDir::new().unwrap();
    let out = dir.path().join("fire.json");

    spell_cmd()
        .arg(server.url("/fire_mage.html"))
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 5 spells to"))
        .stderr(predicate::str::contains("Spell line 'Shield' has 3 names but 2 levels."));
    mock.assert();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["class"], "Fire Mage");
    let names: Vec<&str> = json["spells"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Fireball Line",
            "Ward (unknown)",
            "Greater Fireball",
            "Barrier (unknown)",
            "Aegis (unknown)",
        ]
    );
}

#[test]
fn default_path_is_public_assets() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("public/assets")).unwrap();
    let html_path = dir.path().join("page.html");
    fs::write(&html_path, PAGE).unwrap();

    spell_cmd()
        .current_dir(dir.path())
        .arg("--html")
        .arg(&html_path)
        .arg("https://example.com/fire_mage.html")
        .assert()
        .success()
        .stdout(predicate::str::contains("public/assets/Fire Mage.json"));

    let written = fs::read_to_string(dir.path().join("public/assets/Fire Mage.json")).unwrap();
    assert!(written.starts_with("{\n    \"class\": \"Fire Mage\""));
}

#[test]
fn missing_output_directory_fails() {
    let dir = TempDir::new().unwrap();
    let html_path = dir.path().join("page.html");
    fs::write(&html_path, PAGE).unwrap();

    spell_cmd()
        .current_dir(dir.path())
        .arg("--html")
        .arg(&html_path)
        .arg("https://example.com/fire_mage.html")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Fire Mage.json"));
}

#[test]
fn page_without_table_exits_1() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/empty.html");
        then.status(200).body("<html><body><h1>Druid</h1></body></html>");
    });

    spell_cmd()
        .arg(server.url("/empty.html"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No table found on the page."));
}

#[test]
fn http_error_fails() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/missing.html");
        then.status(500);
    });

    spell_cmd()
        .arg(server.url("/missing.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("500"));
}

#[test]
fn at_level_lists_best_spell_per_line() {
    let dir = TempDir::new().unwrap();
    let html_path = dir.path().join("page.html");
    let out = dir.path().join("fire.json");
    fs::write(&html_path, PAGE).unwrap();

    spell_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("--at-level")
        .arg("4")
        .arg("https://example.com/fire_mage.html")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Fire Mage spells at level 4:"))
        .stdout(predicate::str::contains("Fireball Line  [Fireball Line] -> upgraded at 5"))
        .stdout(predicate::str::contains("Ward (unknown)  [Shield] -> upgraded at 9"));
}
