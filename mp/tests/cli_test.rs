//! CLI integration tests for the mp binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use foodcatalog::FoodCatalog;
use mealplanner::domain::{DietType, MealItem, MealSlot};
use mealplanner::state::MealPlannerState;

fn write_catalog(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("catalog.jsonl");
    fs::write(
        &path,
        concat!(
            r#"{"id":"oatmeal","name":"Oatmeal","calories":150.0,"protein":5.0,"carbohydrates":27.0,"fat":3.0,"unit":"cup","tags":["vegetarian"]}"#,
            "\n",
            r#"{"id":"egg","name":"Egg","calories":78.0,"protein":6.0,"carbohydrates":0.6,"fat":5.0,"unit":"large","max_quantity":6.0}"#,
            "\n",
        ),
    )
    .expect("Failed to write catalog");
    path
}

#[test]
fn test_lookup_known_food() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let catalog = write_catalog(&temp);

    Command::cargo_bin("mp")
        .expect("binary exists")
        .args(["lookup", "oatmeal", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("Oatmeal"))
        .stdout(predicate::str::contains("150 kcal"));
}

#[test]
fn test_lookup_reports_max_quantity_and_tags() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let catalog = write_catalog(&temp);

    Command::cargo_bin("mp")
        .expect("binary exists")
        .args(["lookup", "egg", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usual maximum: 6 large"));
}

#[test]
fn test_lookup_miss_is_not_a_failure() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let catalog = write_catalog(&temp);

    Command::cargo_bin("mp")
        .expect("binary exists")
        .args(["lookup", "unicorn_dust", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("not found in catalog"));
}

#[test]
fn test_goals_derives_targets() {
    Command::cargo_bin("mp")
        .expect("binary exists")
        .args(["goals", "2000", "--diet-type", "high-protein"])
        .assert()
        .success()
        .stdout(predicate::str::contains("high-protein diet"))
        .stdout(predicate::str::contains("Protein: 150g"))
        .stdout(predicate::str::contains("Carbs:   200g"));
}

#[test]
fn test_goals_custom_requires_all_three_percents() {
    Command::cargo_bin("mp")
        .expect("binary exists")
        .args(["goals", "2000", "--protein-pct", "0.3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("all of"));
}

#[test]
fn test_goals_custom_diet_without_split_fails() {
    Command::cargo_bin("mp")
        .expect("binary exists")
        .args(["goals", "2000", "--diet-type", "custom"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("explicit macro percentages"));
}

#[test]
fn test_summary_of_checkpointed_state() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let catalog_path = write_catalog(&temp);

    // Build a session in-process and checkpoint it the way the session
    // layer would
    let catalog = FoodCatalog::load(&catalog_path);
    let mut state = MealPlannerState::with_id("cli-session");
    state
        .set_goals(2000, DietType::Balanced, None, &catalog)
        .expect("valid goals");
    state.add_item(
        MealSlot::Breakfast,
        MealItem::new("oatmeal", "2").with_unit("cup"),
        &catalog,
    );

    let state_path = temp.path().join("session.json");
    fs::write(&state_path, serde_json::to_string(&state).expect("serialize")).expect("write");

    Command::cargo_bin("mp")
        .expect("binary exists")
        .arg("summary")
        .arg(&state_path)
        .arg("--catalog")
        .arg(&catalog_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("cli-session"))
        .stdout(predicate::str::contains("building_meals"))
        .stdout(predicate::str::contains("breakfast: 2 cup oatmeal"))
        .stdout(predicate::str::contains("Calories: 300"))
        .stdout(predicate::str::contains("Goals: 2000 kcal/day"));
}

#[test]
fn test_summary_missing_state_file_fails() {
    Command::cargo_bin("mp")
        .expect("binary exists")
        .args(["summary", "/nonexistent/session.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
