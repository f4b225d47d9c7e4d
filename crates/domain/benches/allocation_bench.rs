use chrono::{Days, NaiveDate};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use domain::{Batch, OrderLine, allocate_with_priority};

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Shipments in reverse eta order with one warehouse batch at the end.
fn make_batches(count: u64) -> Vec<Batch> {
    let mut batches: Vec<Batch> = (0..count)
        .rev()
        .map(|n| {
            Batch::new(
                format!("shipment-{n:04}"),
                "BENCH-LAMP",
                100,
                Some(start_date() + Days::new(n)),
            )
        })
        .collect();
    batches.push(Batch::new("warehouse", "BENCH-LAMP", 100, None));
    batches
}

fn bench_allocate_small_shortlist(c: &mut Criterion) {
    let line = OrderLine::new("order-1", "BENCH-LAMP", 2);

    c.bench_function("allocation/allocate_10_batches", |b| {
        b.iter_batched(
            || make_batches(10),
            |mut batches| allocate_with_priority(&line, &mut batches).unwrap(),
            BatchSize::SmallInput,
        );
    });
}

fn bench_allocate_large_shortlist(c: &mut Criterion) {
    let line = OrderLine::new("order-1", "BENCH-LAMP", 2);

    c.bench_function("allocation/allocate_1000_batches", |b| {
        b.iter_batched(
            || make_batches(1000),
            |mut batches| allocate_with_priority(&line, &mut batches).unwrap(),
            BatchSize::LargeInput,
        );
    });
}

fn bench_out_of_stock_scan(c: &mut Criterion) {
    let line = OrderLine::new("order-1", "BENCH-LAMP", 500);

    c.bench_function("allocation/out_of_stock_100_batches", |b| {
        b.iter_batched(
            || make_batches(100),
            |mut batches| allocate_with_priority(&line, &mut batches).unwrap_err(),
            BatchSize::SmallInput,
        );
    });
}

fn bench_available_qty(c: &mut Criterion) {
    let mut batch = Batch::new("batch-001", "BENCH-LAMP", 10_000, None);
    for n in 0..100 {
        batch.allocate(OrderLine::new(format!("order-{n}"), "BENCH-LAMP", 3));
    }

    c.bench_function("batch/available_qty_100_lines", |b| {
        b.iter(|| batch.available_qty());
    });
}

criterion_group!(
    benches,
    bench_allocate_small_shortlist,
    bench_allocate_large_shortlist,
    bench_out_of_stock_scan,
    bench_available_qty,
);
criterion_main!(benches);
