//! Integration tests for the deckmd binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::{fixtures_dir, list_dir, Workspace, PDF_BYTES, PNG_BYTES};

fn deckmd(ws: &Workspace) -> Command {
    let mut cmd = Command::cargo_bin("deckmd").expect("deckmd binary");
    cmd.current_dir(ws.path()).env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let ws = Workspace::new();
    deckmd(&ws)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("relink"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn convert_without_sources_is_usage_error() {
    let ws = Workspace::new();
    deckmd(&ws)
        .arg("convert")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<SOURCE>"));
}

// ============================================================================
// Convert Tests
// ============================================================================

#[test]
fn convert_writes_cards_under_deck_subdirectory() {
    let ws = Workspace::new();
    ws.add_primary("ab12", PNG_BYTES);
    ws.add_secondary("cafe01", PDF_BYTES);
    let config = ws.write_config("magic");
    let source = fixtures_dir().join("sample_deck.xml");

    deckmd(&ws)
        .arg("--config")
        .arg(&config)
        .arg("convert")
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing:"))
        .stdout(predicate::str::contains("Moved/Migrated 2 blob files"))
        .stdout(predicate::str::contains("Found 3 cards in the deck"))
        .stdout(predicate::str::contains("Created: 003_card.md"));

    let out = ws.path().join("out/sample_deck");
    assert_eq!(list_dir(&out).len(), 3);
    assert_eq!(ws.canonical_listing(), vec!["ab12.png", "cafe01.pdf"]);
}

#[test]
fn convert_output_dir_flag_overrides_config() {
    let ws = Workspace::new();
    let config = ws.write_config("magic");
    let source = ws.path().join("deck.xml");
    fs::write(
        &source,
        "<card><rich-text name='Front'>Q</rich-text><rich-text name='Back'>A</rich-text></card>",
    )
    .unwrap();

    deckmd(&ws)
        .arg("--config")
        .arg(&config)
        .args(["convert", "deck.xml", "--output-dir", "elsewhere"])
        .assert()
        .success();

    assert_eq!(list_dir(&ws.path().join("elsewhere/deck")), vec!["001_Q.md"]);
    assert!(!ws.path().join("out").exists());
}

#[test]
fn convert_expands_glob_patterns() {
    let ws = Workspace::new();
    let config = ws.write_config("magic");
    let card = "<card><rich-text name='Front'>Q</rich-text></card>";
    fs::create_dir_all(ws.path().join("decks")).unwrap();
    fs::write(ws.path().join("decks/one.xml"), card).unwrap();
    fs::write(ws.path().join("decks/two.xml"), card).unwrap();

    deckmd(&ws)
        .arg("--config")
        .arg(&config)
        .args(["convert", "decks/*.xml"])
        .assert()
        .success();

    assert_eq!(list_dir(&ws.path().join("out")), vec!["one", "two"]);
}

#[test]
fn convert_with_no_matching_files_writes_nothing() {
    let ws = Workspace::new();
    let config = ws.write_config("magic");
    ws.add_primary("ab12", PNG_BYTES);

    deckmd(&ws)
        .arg("--config")
        .arg(&config)
        .args(["convert", "nothing/*.xml"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No files found"));

    assert!(!ws.path().join("out").exists());
    assert!(ws.layout.primary.join("ab12").exists(), "no migration ran");
}

#[test]
fn convert_skips_missing_inputs_and_continues() {
    let ws = Workspace::new();
    let config = ws.write_config("magic");
    fs::write(
        ws.path().join("real.xml"),
        "<card><rich-text name='Front'>Q</rich-text></card>",
    )
    .unwrap();

    deckmd(&ws)
        .arg("--config")
        .arg(&config)
        .args(["convert", "ghost.xml", "real.xml"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Error: ghost.xml not found"));

    assert_eq!(list_dir(&ws.path().join("out")), vec!["real"]);
}

#[test]
fn convert_fails_when_public_dir_is_unusable() {
    let ws = Workspace::new();
    let config = ws.write_config("magic");
    fs::write(ws.path().join("blocker"), b"file").unwrap();
    fs::write(
        ws.path().join("deck.xml"),
        "<card><rich-text name='Front'>Q</rich-text></card>",
    )
    .unwrap();

    deckmd(&ws)
        .arg("--config")
        .arg(&config)
        .args(["--public-dir", "blocker/files", "convert", "deck.xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Attachment migration failed"));
}

// ============================================================================
// Relink Tests
// ============================================================================

#[test]
fn relink_rewrites_existing_markdown() {
    let ws = Workspace::new();
    let config = ws.write_config("magic");
    ws.add_primary("ab12", PNG_BYTES);
    let cards = ws.path().join("cards");
    fs::create_dir_all(&cards).unwrap();
    fs::write(cards.join("001_q.md"), "# Card 1\n\n{{blob ab12}}\n").unwrap();
    fs::write(cards.join("README.md"), "{{blob ab12}}").unwrap();

    deckmd(&ws)
        .arg("--config")
        .arg(&config)
        .args(["relink", "cards"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated: 001_q.md"))
        .stdout(predicate::str::contains("Updated 1 markdown files"));

    assert_eq!(
        fs::read_to_string(cards.join("001_q.md")).unwrap(),
        "# Card 1\n\n![Image](files/ab12.png)\n"
    );
    assert_eq!(
        fs::read_to_string(cards.join("README.md")).unwrap(),
        "{{blob ab12}}"
    );
}

#[test]
fn relink_missing_directory_is_reported_not_fatal() {
    let ws = Workspace::new();
    let config = ws.write_config("magic");

    deckmd(&ws)
        .arg("--config")
        .arg(&config)
        .args(["relink", "nope"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Error: nope not found"))
        .stdout(predicate::str::contains("Updated").not());

    assert!(!ws.path().join("nope").exists());
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_init_then_show_round_trips() {
    let ws = Workspace::new();
    let path = ws.path().join("cfg/deckmd.toml");

    deckmd(&ws)
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(path.is_file());

    deckmd(&ws)
        .arg("--config")
        .arg(&path)
        .args(["config", "show", "--sniffer", "magic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("public_files_dir = \"website/public/files\""))
        .stdout(predicate::str::contains("kind = \"magic\""));

    deckmd(&ws)
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn missing_default_config_uses_builtin_defaults() {
    let ws = Workspace::new();
    deckmd(&ws)
        .env("HOME", ws.path())
        .env("XDG_CONFIG_HOME", ws.path().join("cfg"))
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kind = \"file\""))
        .stdout(predicate::str::contains("blobs_dir = \"blobs\""));

    assert!(!ws.path().join("cfg").exists());
}

#[test]
fn explicit_missing_config_is_an_error() {
    let ws = Workspace::new();
    deckmd(&ws)
        .args(["--config", "nope.toml", "config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn completions_are_generated() {
    let ws = Workspace::new();
    deckmd(&ws)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deckmd"));
}
