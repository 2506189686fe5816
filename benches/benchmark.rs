use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use sizewise::normalize::normalize;
use sizewise::{Audience, Category, Convention, SizeConverter};

pub fn criterion_benchmark(c: &mut Criterion) {
    let converter = SizeConverter::new();

    c.bench_function("normalize", |b| b.iter(|| normalize(black_box(" extra large "))));
    c.bench_function("shoes exact", |b| {
        b.iter(|| converter.convert(black_box("9.5"), Convention::Us, Convention::Eu, Category::Shoes, Audience::Women))
    });
    c.bench_function("shoes extrapolated", |b| {
        b.iter(|| converter.convert(black_box("16"), Convention::Us, Convention::Eu, Category::Shoes, Audience::Men))
    });
    c.bench_function("clothing formula", |b| {
        b.iter(|| {
            converter.convert_with_details(black_box("50"), Convention::Us, Convention::Eu, Category::Clothing, Audience::Men)
        })
    });
    c.bench_function("bra", |b| {
        b.iter(|| converter.convert(black_box("34DDD"), Convention::Us, Convention::Uk, Category::Bra, Audience::Women))
    });
    c.bench_function("children", |b| {
        b.iter(|| converter.convert(black_box("74"), Convention::Eu, Convention::Us, Category::Children, Audience::Infant))
    });

    let batch: Vec<String> = (0..100).map(|i| format!("{}", 6.0 + (i % 20) as f64 * 0.5)).collect();
    c.bench_function("batch 100", |b| {
        b.iter(|| converter.convert_multiple(black_box(&batch), Convention::Us, Convention::Eu, Category::Shoes, Audience::Men))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
