use std::{hint::black_box, sync::Arc, time::Duration};

use busboard::prelude::*;
use criterion::{Criterion, criterion_group, criterion_main};

fn synthetic_repository(rows: u32) -> Repository {
    let routes = [
        "Chennai to Bangalore",
        "Hyderabad to Vijayawada",
        "Madurai to Chennai",
        "Pune to Mumbai",
    ];
    let bus_types = [
        "A/C Sleeper (2+1)",
        "Seater (2+2)",
        "A/C Semi Sleeper (2+2)",
        "Sleeper (2+1)",
    ];

    let trips = (0..rows)
        .map(|i| Trip {
            index: i,
            route_name: Some(Arc::from(routes[(i % 4) as usize])),
            bus_type: Some(Arc::from(bus_types[(i % 4) as usize])),
            departure: TimeOfDay::from_seconds((i * 97) % 86_400),
            star_rating: Some(1.0 + (i % 9) as f64 * 0.5),
            price: Some(200.0 + (i % 50) as f64 * 40.0),
            seat_availability: Some(i % 45),
            ..Default::default()
        })
        .collect();
    Repository::from_trips(trips)
}

fn composed_criteria() -> Criteria {
    Criteria {
        route: Some("Chennai to Bangalore".into()),
        ac_types: vec![AcType::Ac],
        rating: RatingFilter::Within { min: 3.0, max: 5.0 },
        price_bands: vec![
            PriceBand::from_label("₹500 - ₹1000").unwrap(),
            PriceBand::from_label("₹1000 - ₹1500").unwrap(),
        ],
        hour_windows: vec![HourWindow::from_label("Evening (18 - 24)").unwrap()],
        ..Default::default()
    }
}

fn select_pass(repository: &Repository, criteria: &Criteria) {
    let _ = black_box(repository.select(criteria));
}

fn criterion_benchmark(c: &mut Criterion) {
    let repository = synthetic_repository(100_000);
    let criteria = composed_criteria();

    let mut group = c.benchmark_group("Filtering");

    group.warm_up_time(Duration::from_secs(5));
    group.measurement_time(Duration::from_secs(15));

    group.bench_function("Composed select", |b| {
        b.iter(|| select_pass(&repository, &criteria))
    });

    group.bench_function("Catalogue build", |b| {
        b.iter(|| black_box(synthetic_repository(10_000)))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
