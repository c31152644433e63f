// Rust guideline compliant 2026-10-12

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shipyard_app::{list_ships, ListOptions, ShipFilter, ShipOrder};
use shipyard_core::{Ship, ShipType};

fn build_ships(count: usize) -> Vec<Ship> {
    (0..count)
        .map(|i| {
            Ship::new(
                format!("Ship {}", i),
                if i % 3 == 0 { "Mars" } else { "Earth" }.to_string(),
                ShipType::ALL[i % ShipType::ALL.len()],
                Utc.with_ymd_and_hms(2800 + (i % 220) as i32, 1, 1, 0, 0, 0)
                    .unwrap(),
                0.01 + (i % 99) as f64 / 100.0,
                (i % 9999) as i32 + 1,
                i % 2 == 0,
            )
            .with_id(i as u64 + 1)
        })
        .collect()
}

fn bench_filtered_query(c: &mut Criterion) {
    let ships = build_ships(10_000);
    let options = ListOptions {
        filter: ShipFilter {
            planet: Some("mar".to_string()),
            ship_type: Some(ShipType::Military),
            min_speed: Some(0.2),
            ..ShipFilter::default()
        },
        order: Some(ShipOrder::Rating),
        page_number: Some(2),
        page_size: Some(20),
    };
    c.bench_function("list_filtered_10000", |b| {
        b.iter(|| black_box(list_ships(ships.clone(), &options)))
    });
}

fn bench_unfiltered_sort(c: &mut Criterion) {
    let ships = build_ships(10_000);
    let options = ListOptions {
        order: Some(ShipOrder::Date),
        ..ListOptions::default()
    };
    c.bench_function("list_sorted_10000", |b| {
        b.iter(|| black_box(list_ships(ships.clone(), &options)))
    });
}

criterion_group!(benches, bench_filtered_query, bench_unfiltered_sort);
criterion_main!(benches);
