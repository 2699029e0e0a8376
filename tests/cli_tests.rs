use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn garage_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("garage"));
    cmd.env_remove("GARAGE_CONFIG").env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    garage_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL API"));
}

#[test]
fn test_version() {
    garage_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("garage"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp_dir = TempDir::new().unwrap();

    garage_cmd()
        .args(["--config", "nope.yml", "schema"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load garage configuration"));
}

// =============================================================================
// Schema and seed
// =============================================================================

#[test]
fn test_schema_prints_sdl() {
    let temp_dir = TempDir::new().unwrap();

    garage_cmd()
        .arg("schema")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("type PersonWithCars"))
        .stdout(predicate::str::contains("personWithCars(id: String!): PersonWithCars"))
        .stdout(predicate::str::contains("deleteCar(id: String!): Car"));
}

#[test]
fn test_seed_json() {
    let temp_dir = TempDir::new().unwrap();

    let output = garage_cmd()
        .args(["seed", "--json"])
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let seed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(seed["people"].as_array().unwrap().len(), 3);
    assert_eq!(seed["cars"].as_array().unwrap().len(), 9);
    assert_eq!(seed["people"][2]["lastName"], "Torvalds");
    assert_eq!(seed["cars"][3]["make"], "Acura");
}

#[test]
fn test_seed_table() {
    let temp_dir = TempDir::new().unwrap();

    garage_cmd()
        .arg("seed")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Bill Gates"))
        .stdout(predicate::str::contains("Volvo XC40"));
}

// =============================================================================
// Query and mutate
// =============================================================================

#[test]
fn test_query_people() {
    let temp_dir = TempDir::new().unwrap();

    garage_cmd()
        .args(["query", "{ people { id firstName lastName } }"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Steve"))
        .stdout(predicate::str::contains("Torvalds"));
}

#[test]
fn test_query_with_variables() {
    let temp_dir = TempDir::new().unwrap();

    let output = garage_cmd()
        .args([
            "query",
            "query($id: String!) { personWithCars(id: $id) { person { lastName } cars { model } } }",
            "--variables",
            r#"{"id": "2"}"#,
        ])
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let response: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let pwc = &response["data"]["personWithCars"];
    assert_eq!(pwc["person"]["lastName"], "Jobs");
    assert_eq!(pwc["cars"].as_array().unwrap().len(), 3);
}

#[test]
fn test_invalid_variables_fail() {
    let temp_dir = TempDir::new().unwrap();

    garage_cmd()
        .args(["query", "{ people { id } }", "--variables", "not json"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Variables must be a JSON object"));
}

#[test]
fn test_mutate_create_person() {
    let temp_dir = TempDir::new().unwrap();

    garage_cmd()
        .args([
            "mutate",
            r#"createPerson(id: "4", firstName: "Ada", lastName: "Lovelace") { id firstName }"#,
        ])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada"));
}

#[test]
fn test_mutate_reports_not_found() {
    let temp_dir = TempDir::new().unwrap();

    garage_cmd()
        .args(["mutate", r#"deleteCar(id: "404") { id }"#])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Car not found for id: 404"));
}

#[test]
fn test_config_can_disable_seed() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(".garage.yml"),
        "store:\n  seed: false\n",
    )
    .unwrap();

    let output = garage_cmd()
        .args(["query", "{ people { id } cars { id } }"])
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let response: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response["data"]["people"], serde_json::json!([]));
    assert_eq!(response["data"]["cars"], serde_json::json!([]));
}
