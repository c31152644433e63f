// Rust guideline compliant 2026-10-12

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use shipyard_core::{Ship, ShipType, Storage, Store};
use tempfile::TempDir;

fn build_ships(count: usize) -> Vec<Ship> {
    (0..count)
        .map(|i| {
            let year = 2800 + (i % 220) as i32;
            Ship::new(
                format!("Ship {}", i),
                "Earth".to_string(),
                ShipType::ALL[i % ShipType::ALL.len()],
                Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
                0.01 + (i % 99) as f64 / 100.0,
                (i % 9999) as i32 + 1,
                i % 2 == 0,
            )
            .with_id(i as u64 + 1)
        })
        .collect()
}

fn setup_storage(count: usize) -> (TempDir, Storage) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("ships.jsonl");
    let storage = Storage::new(path).expect("Failed to create storage");
    storage
        .save_all(&build_ships(count))
        .expect("Failed to save benchmark ships");
    (temp_dir, storage)
}

fn bench_load_all(c: &mut Criterion) {
    let (_temp_dir, storage) = setup_storage(1000);
    c.bench_function("load_all_1000", |b| {
        b.iter(|| black_box(storage.load_all()))
    });
}

fn bench_load_by_id(c: &mut Criterion) {
    let (_temp_dir, storage) = setup_storage(1000);
    c.bench_function("load_by_id_1000", |b| {
        b.iter(|| black_box(storage.load_by_id(500)))
    });
}

fn bench_create(c: &mut Criterion) {
    c.bench_function("create_ship", |b| {
        b.iter_batched(
            || setup_storage(100),
            |(_temp_dir, storage)| {
                let ship = build_ships(1).remove(0);
                black_box(storage.create(ship)).expect("Failed to create ship");
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_load_all, bench_load_by_id, bench_create);
criterion_main!(benches);
