use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use rust_decimal::Decimal;
use stockledger_inventory::{Ledger, ProductFields, ProductId, Record, Totals};

/// Linear-scan store: a vector searched front to back, totals maintained the
/// same way as the ledger.
#[derive(Debug, Default)]
struct LinearStore {
    records: Vec<Record>,
    totals: Totals,
}

impl LinearStore {
    fn add(&mut self, record: Record) -> bool {
        if self.records.iter().any(|r| r.id == record.id) {
            return false;
        }
        let Ok(next) = record
            .contribution()
            .and_then(|c| self.totals.checked_add(c))
        else {
            return false;
        };
        self.records.push(record);
        self.totals = next;
        true
    }

    fn find(&self, id: ProductId) -> Option<Record> {
        self.records.iter().find(|r| r.id == id).cloned()
    }

    fn remove(&mut self, id: ProductId) -> bool {
        let Some(pos) = self.records.iter().position(|r| r.id == id) else {
            return false;
        };
        let Ok(next) = self.records[pos]
            .contribution()
            .and_then(|c| self.totals.checked_sub(c))
        else {
            return false;
        };
        self.records.remove(pos);
        self.totals = next;
        true
    }
}

fn product(id: i64) -> Record {
    Record::new(
        ProductId::new(id),
        ProductFields::new(
            format!("item-{id}"),
            "Bench",
            Decimal::new(1_999 + id, 2),
            id % 250,
            Decimal::from(15),
        ),
    )
}

fn seeded_ledger(n: i64) -> Ledger {
    let mut ledger = Ledger::new();
    for id in 0..n {
        ledger.add(product(id)).unwrap();
    }
    ledger
}

fn seeded_linear(n: i64) -> LinearStore {
    let mut store = LinearStore::default();
    for id in 0..n {
        store.add(product(id));
    }
    store
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    for size in [100i64, 1_000, 10_000] {
        let ledger = seeded_ledger(size);
        let linear = seeded_linear(size);
        let target = ProductId::new(size - 1);

        group.bench_with_input(BenchmarkId::new("ordered_map", size), &size, |b, _| {
            b.iter(|| black_box(ledger.find(black_box(target))))
        });
        group.bench_with_input(BenchmarkId::new("linear_scan", size), &size, |b, _| {
            b.iter(|| black_box(linear.find(black_box(target))))
        });
    }
    group.finish();
}

fn bench_add_remove_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_remove_cycle");
    for size in [100i64, 1_000, 10_000] {
        let extra = product(size + 1);

        group.bench_with_input(BenchmarkId::new("ordered_map", size), &size, |b, &size| {
            let mut ledger = seeded_ledger(size);
            b.iter(|| {
                ledger.add(extra.clone()).unwrap();
                ledger.remove(extra.id).unwrap();
            })
        });
        group.bench_with_input(BenchmarkId::new("linear_scan", size), &size, |b, &size| {
            let mut store = seeded_linear(size);
            b.iter(|| {
                store.add(extra.clone());
                store.remove(extra.id);
            })
        });
    }
    group.finish();
}

fn bench_codec_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec_round_trip");
    for size in [1_000i64, 10_000] {
        let ledger = seeded_ledger(size);
        let mut encoded = Vec::new();
        ledger.serialize(&mut encoded).unwrap();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("serialize", size), &size, |b, _| {
            b.iter(|| {
                let mut out = Vec::with_capacity(encoded.len());
                ledger.serialize(&mut out).unwrap();
                black_box(out)
            })
        });
        group.bench_with_input(BenchmarkId::new("deserialize", size), &size, |b, _| {
            b.iter(|| {
                let mut restored = Ledger::new();
                black_box(restored.deserialize(encoded.as_slice()).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_find,
    bench_add_remove_cycle,
    bench_codec_round_trip
);
criterion_main!(benches);
