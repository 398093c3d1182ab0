//! Benchmarks for the cost aggregation service.

#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use freight_quote::{CostAggregationService, Payment, PaymentMethod, Shipment, ShippingSpeed};
use std::hint::black_box;

fn populated_service(entries: usize) -> CostAggregationService {
    let speeds = [
        ShippingSpeed::Standard,
        ShippingSpeed::Express,
        ShippingSpeed::Pickup,
    ];
    let mut service = CostAggregationService::with_capacity(entries);
    for i in 0..entries {
        let speed = speeds[i % speeds.len()];
        let weight = (i % 40) as f64 + 0.5;
        service.add(Box::new(Shipment::new(speed, "Delhi", weight).unwrap()));
    }
    service
}

fn bench_total_cost(c: &mut Criterion) {
    let service = populated_service(1_000);
    c.bench_function("total_cost_1000", |b| {
        b.iter(|| black_box(service.total_cost()))
    });
}

fn bench_describe_all(c: &mut Criterion) {
    let service = populated_service(1_000);
    c.bench_function("describe_all_1000", |b| {
        b.iter(|| black_box(service.describe_all().count()))
    });
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("add_mixed_100", |b| {
        b.iter(|| {
            let mut service = CostAggregationService::new();
            for i in 0..50 {
                service.add(Box::new(
                    Shipment::standard("Delhi", f64::from(i)).unwrap(),
                ));
                service.add(Box::new(
                    Payment::new(PaymentMethod::Upi, f64::from(i)).unwrap(),
                ));
            }
            black_box(service.len())
        })
    });
}

criterion_group!(benches, bench_total_cost, bench_describe_all, bench_add);
criterion_main!(benches);
