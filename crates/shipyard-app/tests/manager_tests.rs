// Rust guideline compliant 2026-10-12

//! Integration tests for the ship manager over JSONL storage.

use chrono::{DateTime, TimeZone, Utc};
use shipyard_app::{AppError, ErrorCode, ListOptions, ShipFilter, ShipManager, ShipOrder};
use shipyard_core::{compute_rating, NewShip, ShipPatch, ShipType, Storage, Store};
use tempfile::TempDir;

fn year(y: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, 7, 1, 0, 0, 0).unwrap()
}

fn setup() -> (TempDir, ShipManager<Storage>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = Storage::new(temp_dir.path().join("ships.jsonl")).expect("Failed to create storage");
    (temp_dir, ShipManager::new(storage))
}

fn candidate() -> NewShip {
    NewShip {
        name: Some("Daedalus".to_string()),
        planet: Some("Jupiter".to_string()),
        ship_type: Some(ShipType::Transport),
        prod_date: Some(year(3000)),
        speed: Some(0.3),
        crew_size: Some(120),
        is_used: None,
    }
}

#[test]
fn test_create_defaults_is_used_and_computes_rating() {
    let (_temp_dir, manager) = setup();

    let ship = manager.create(candidate()).unwrap();
    assert_eq!(ship.id(), 1);
    assert!(!ship.is_used);
    assert_eq!(ship.rating(), compute_rating(0.3, false, 3000));
    assert_eq!(manager.store().find_all().unwrap(), vec![ship]);
}

#[test]
fn test_create_missing_crew_size_fails() {
    let (_temp_dir, manager) = setup();
    let mut new_ship = candidate();
    new_ship.crew_size = None;

    let error = manager.create(new_ship).unwrap_err();
    assert_eq!(error.code(), ErrorCode::InvalidArgument);
    assert!(error.to_string().contains("crewSize"));
    assert!(manager.store().find_all().unwrap().is_empty());
}

#[test]
fn test_create_crew_size_over_limit_fails() {
    let (_temp_dir, manager) = setup();
    let mut new_ship = candidate();
    new_ship.crew_size = Some(10_000);

    let error = manager.create(new_ship).unwrap_err();
    assert!(matches!(error, AppError::InvalidArgument(_)));
    assert!(error.to_string().contains("crewSize"));
    assert!(manager.store().find_all().unwrap().is_empty());
}

#[test]
fn test_create_rejects_out_of_range_year() {
    let (_temp_dir, manager) = setup();
    let mut new_ship = candidate();
    new_ship.prod_date = Some(year(3020));

    let error = manager.create(new_ship).unwrap_err();
    assert!(error.to_string().contains("prodDate"));
}

#[test]
fn test_update_speed_recomputes_rating() {
    let (_temp_dir, manager) = setup();
    let ship = manager.create(candidate()).unwrap();
    let before = ship.rating();

    let patch = ShipPatch {
        speed: Some(0.5),
        ..ShipPatch::default()
    };
    let updated = manager.update(&ship, patch).unwrap();

    assert_eq!(updated.speed, 0.5);
    assert_eq!(updated.rating(), compute_rating(0.5, false, 3000));
    assert_ne!(updated.rating(), before);
    assert_eq!(manager.get(ship.id()).unwrap(), updated);
}

#[test]
fn test_update_name_keeps_rating() {
    let (_temp_dir, manager) = setup();
    let ship = manager.create(candidate()).unwrap();

    let patch = ShipPatch {
        name: Some("X".to_string()),
        ..ShipPatch::default()
    };
    let updated = manager.update(&ship, patch).unwrap();

    assert_eq!(updated.name, "X");
    assert_eq!(updated.rating(), ship.rating());
}

#[test]
fn test_update_is_used_halves_rating() {
    let (_temp_dir, manager) = setup();
    let mut new_ship = candidate();
    new_ship.prod_date = Some(year(3019));
    new_ship.speed = Some(0.5);
    let ship = manager.create(new_ship).unwrap();
    assert_eq!(ship.rating(), 40.0);

    let patch = ShipPatch {
        is_used: Some(true),
        ..ShipPatch::default()
    };
    assert_eq!(manager.update(&ship, patch).unwrap().rating(), 20.0);
}

#[test]
fn test_failed_update_applies_nothing() {
    let (_temp_dir, manager) = setup();
    let ship = manager.create(candidate()).unwrap();

    // name is valid and checked first; speed fails afterwards.
    let patch = ShipPatch {
        name: Some("Renamed".to_string()),
        speed: Some(1.5),
        ..ShipPatch::default()
    };
    let error = manager.update(&ship, patch).unwrap_err();

    assert!(error.to_string().contains("speed"));
    assert_eq!(ship.name, "Daedalus");
    assert_eq!(manager.get(ship.id()).unwrap(), ship);
}

#[test]
fn test_update_reports_first_invalid_field() {
    let (_temp_dir, manager) = setup();
    let ship = manager.create(candidate()).unwrap();

    let patch = ShipPatch {
        planet: Some(String::new()),
        crew_size: Some(0),
        ..ShipPatch::default()
    };
    let error = manager.update(&ship, patch).unwrap_err();
    assert!(error.to_string().contains("planet"));
}

#[test]
fn test_get_rules() {
    let (_temp_dir, manager) = setup();

    assert_eq!(manager.get(0).unwrap_err().code(), ErrorCode::InvalidArgument);
    assert_eq!(manager.get(7).unwrap_err().code(), ErrorCode::NotFound);
}

#[test]
fn test_update_and_delete_by_id() {
    let (_temp_dir, manager) = setup();
    let ship = manager.create(candidate()).unwrap();

    let patch = ShipPatch {
        ship_type: Some(ShipType::Military),
        ..ShipPatch::default()
    };
    let updated = manager.update_by_id(ship.id(), patch).unwrap();
    assert_eq!(updated.ship_type, ShipType::Military);

    let deleted = manager.delete_by_id(ship.id()).unwrap();
    assert_eq!(deleted, updated);
    assert_eq!(manager.get(ship.id()).unwrap_err().code(), ErrorCode::NotFound);
    assert_eq!(
        manager.delete_by_id(ship.id()).unwrap_err().code(),
        ErrorCode::NotFound
    );
}

#[test]
fn test_list_and_count_over_store() {
    let (_temp_dir, manager) = setup();
    for (index, speed) in [0.7, 0.2, 0.5, 0.9].into_iter().enumerate() {
        let mut new_ship = candidate();
        new_ship.name = Some(format!("Ship {index}"));
        new_ship.speed = Some(speed);
        manager.create(new_ship).unwrap();
    }

    let options = ListOptions {
        filter: ShipFilter {
            min_speed: Some(0.5),
            ..ShipFilter::default()
        },
        order: Some(ShipOrder::Speed),
        page_number: None,
        page_size: Some(2),
    };
    let page = manager.list(&options).unwrap();
    let speeds: Vec<f64> = page.iter().map(|ship| ship.speed).collect();
    assert_eq!(speeds, vec![0.5, 0.7]);

    assert_eq!(manager.count(&options.filter).unwrap(), 3);
    assert_eq!(manager.count(&ShipFilter::default()).unwrap(), 4);
}
