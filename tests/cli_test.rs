#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn deck_cmd(data: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("eventdeck").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(data.path());
    cmd
}

#[test]
fn test_init_seeds_collections() {
    let data = TempDir::new().unwrap();

    deck_cmd(&data)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized eventdeck store"))
        .stdout(predicate::str::contains("coupons: 3 record(s)"));

    for key in ["tickets", "coupons", "sponsors", "activities"] {
        assert!(data.path().join(format!("{}.json", key)).exists());
    }
}

#[test]
fn test_coupon_crud_workflow() {
    let data = TempDir::new().unwrap();

    // 1. Add
    let output = deck_cmd(&data)
        .args(["--json", "add", "coupons", "code=NEW10", "usedCount=0"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Coupon added"))
        .get_output()
        .stdout
        .clone();
    let created: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let new_id = created[0]["id"].as_str().unwrap().to_string();
    assert_ne!(new_id, "1");

    // 2. Update the seeded coupon
    deck_cmd(&data)
        .args(["update", "coupon", "1", "usedCount=24"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coupon updated (1): EARLY20"));

    // 3. List shows both
    deck_cmd(&data)
        .args(["list", "coupons"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EARLY20"))
        .stdout(predicate::str::contains("NEW10"));

    deck_cmd(&data)
        .args(["get", "coupons", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"usedCount\": 24"))
        .stdout(predicate::str::contains("\"code\": \"EARLY20\""));

    // 4. Delete the new one, twice
    deck_cmd(&data)
        .args(["delete", "coupons", &new_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coupon deleted"));
    deck_cmd(&data)
        .args(["delete", "coupons", &new_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("No coupon with id"));

    let stored: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(data.path().join("coupons.json")).unwrap())
            .unwrap();
    assert_eq!(stored.as_array().unwrap().len(), 3);
}

#[test]
fn test_json_output_is_only_json() {
    let data = TempDir::new().unwrap();

    let output = deck_cmd(&data)
        .args(["--json", "add", "coupons", "code=A]B", "usedCount=0"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let created: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(created[0]["code"], "A]B");

    let output = deck_cmd(&data)
        .args(["--json", "get", "coupons", "1", "99"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No coupon with id 99"))
        .get_output()
        .stdout
        .clone();
    let fetched: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(fetched.as_array().unwrap().len(), 1);
    assert_eq!(fetched[0]["code"], "EARLY20");
}

#[test]
fn test_numeric_text_field() {
    let data = TempDir::new().unwrap();

    deck_cmd(&data)
        .args(["add", "coupons", "code=2026"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coupon added"))
        .stdout(predicate::str::contains("2026"));
}

#[test]
fn test_invalid_field_fails() {
    let data = TempDir::new().unwrap();

    deck_cmd(&data)
        .args(["update", "tickets", "1", "colour=red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    deck_cmd(&data)
        .args(["add", "coupons", "code=BIG", "discountPercent=150"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid coupon"));
}

#[test]
fn test_get_missing_record_warns() {
    let data = TempDir::new().unwrap();

    deck_cmd(&data)
        .args(["get", "sponsors", "1", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Northwind Cloud"))
        .stdout(predicate::str::contains("No sponsor with id 99"));
}

#[test]
fn test_config_disables_seeding() {
    let data = TempDir::new().unwrap();

    deck_cmd(&data)
        .args(["config", "seed-demo-data", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seed-demo-data set to false"));

    deck_cmd(&data)
        .args(["list", "activities"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No activities found."));
}

#[test]
fn test_config_rejects_bad_set() {
    let data = TempDir::new().unwrap();

    deck_cmd(&data)
        .args(["config", "colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));

    deck_cmd(&data)
        .args(["config", "pretty-json", "maybe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for pretty-json"));

    assert!(!data.path().join("config.json").exists());
}

#[test]
fn test_path_lists_files() {
    let data = TempDir::new().unwrap();

    deck_cmd(&data)
        .args(["path", "tickets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tickets.json"));
}
