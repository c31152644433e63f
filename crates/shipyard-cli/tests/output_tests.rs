// Rust guideline compliant 2026-10-12

//! Unit tests for output formatting module.

use chrono::{TimeZone, Utc};
use shipyard_app::{AppError, RepoContext};
use shipyard_cli::create_formatter;
use shipyard_core::{Error as CoreError, OutputFormat, Ship, ShipType};

fn create_test_ship() -> Ship {
    Ship::new(
        "Daedalus".to_string(),
        "Jupiter".to_string(),
        ShipType::Military,
        Utc.with_ymd_and_hms(3019, 3, 1, 0, 0, 0).unwrap(),
        0.5,
        42,
        false,
    )
    .with_id(3)
}

#[test]
fn test_json_formatter_single_ship() {
    let formatter = create_formatter(OutputFormat::Json);
    let output = formatter.format_ship(&create_test_ship());

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["shipType"], "MILITARY");
    assert_eq!(json["crewSize"], 42);
    assert_eq!(json["rating"], 40.0);
}

#[test]
fn test_json_formatter_ship_list() {
    let first = create_test_ship();
    let second = create_test_ship().with_id(4);

    let formatter = create_formatter(OutputFormat::Json);
    let output = formatter.format_list(&[first, second]);

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["total"], 2);
    assert_eq!(json["ships"][1]["id"], 4);
}

#[test]
fn test_json_formatter_change_envelope() {
    let formatter = create_formatter(OutputFormat::Json);
    let output = formatter.format_change("created", &create_test_ship());

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["action"], "created");
    assert_eq!(json["result"]["name"], "Daedalus");
}

#[test]
fn test_json_formatter_error_envelope() {
    let formatter = create_formatter(OutputFormat::Json);
    let error = anyhow::Error::from(AppError::from(CoreError::NotFound(9)));
    let output = formatter.format_error(&error);

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["code"], "not_found");
    assert_eq!(json["details"]["id"], 9);
}

#[test]
fn test_error_envelope_for_missing_repo() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let error = RepoContext::discover(Some(temp_dir.path())).unwrap_err();
    let envelope = shipyard_cli::error_envelope(&anyhow::Error::from(error));

    let json = serde_json::to_value(&envelope).unwrap();
    assert_eq!(json["code"], "repo_not_initialized");
    assert!(json["details"]["path"].is_string());
}

#[test]
fn test_error_envelope_for_io_error() {
    let error = anyhow::Error::from(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "denied",
    ));
    let json = serde_json::to_value(shipyard_cli::error_envelope(&error)).unwrap();
    assert_eq!(json["code"], "io_error");
    assert!(json.get("details").is_none());
}

#[test]
fn test_table_formatter_single_ship() {
    let formatter = create_formatter(OutputFormat::Table);
    let output = formatter.format_ship(&create_test_ship());

    assert!(output.contains("Daedalus"));
    assert!(output.contains("MILITARY"));
    assert!(output.contains("3019-03-01"));
    assert!(output.contains("Rating:    40"));
}

#[test]
fn test_table_formatter_list() {
    let formatter = create_formatter(OutputFormat::Table);
    let output = formatter.format_list(&[create_test_ship()]);

    assert!(output.contains("Planet"));
    assert!(output.contains("Jupiter"));
    assert!(output.contains("3019"));
}

#[test]
fn test_empty_list_message() {
    for format in [OutputFormat::Table, OutputFormat::Plain] {
        let output = create_formatter(format).format_list(&[]);
        assert_eq!(output, "No ships found.");
    }
}

#[test]
fn test_plain_formatter() {
    let formatter = create_formatter(OutputFormat::Plain);

    assert_eq!(formatter.format_count(5), "5");
    assert_eq!(formatter.format_change("deleted", &create_test_ship()), "3");
    assert_eq!(
        formatter.format_list(&[create_test_ship()]),
        "3 MILITARY 3019 40 Daedalus\n"
    );

    let error = anyhow::anyhow!("boom");
    assert_eq!(formatter.format_error(&error), "Error: boom");
}
