//! Dealing throughput.

use criterion::{criterion_group, criterion_main, Criterion};

use concentration::cards::SymbolCatalog;
use concentration::core::GameRng;
use concentration::deal;

fn bench_deal(c: &mut Criterion) {
    let catalog = SymbolCatalog::egyptian();

    c.bench_function("deal_default_board", |b| {
        let mut rng = GameRng::new(42);
        b.iter(|| deal(&catalog, &mut rng));
    });
}

criterion_group!(benches, bench_deal);
criterion_main!(benches);
