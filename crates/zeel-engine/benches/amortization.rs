//! Benchmarks for the quote pipeline.
//!
//! Run with: cargo bench -p zeel-engine
//!
//! The calculator page quotes on every slider movement, so the whole
//! pipeline has to stay well under a millisecond even for the longest
//! mortgage-style terms.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal_macros::dec;

use zeel_core::LoanQuoteRequest;
use zeel_engine::quote;

fn bench_quote(c: &mut Criterion) {
    let requests = [
        ("consumer_12m", LoanQuoteRequest::new(dec!(1_000_000), dec!(2), 12)),
        ("short_6m", LoanQuoteRequest::new(dec!(3_000_000), dec!(2), 6)),
        ("mortgage_360m", LoanQuoteRequest::new(dec!(150_000_000), dec!(7.2), 360)),
    ];

    let mut group = c.benchmark_group("quote");
    for (label, request) in requests {
        group.bench_with_input(BenchmarkId::from_parameter(label), &request, |b, req| {
            b.iter(|| quote(black_box(req)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_quote);
criterion_main!(benches);
