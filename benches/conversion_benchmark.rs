// ============================================================================
// Number Verbalizer Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Normalization - Float, text and decimal input to digit strings
// 2. Language Comparison - Same value through every strategy
// 3. Magnitude Scaling - Growing digit counts through one strategy
// 4. Dispatcher - Code lookup plus conversion
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_verbalizer::numeric::{NumberInput, DEFAULT_FLOAT_FRACTION_DIGITS, DEFAULT_GROUPING_SEPARATORS};
use num_verbalizer::prelude::*;
use rust_decimal::Decimal;
use std::hint::black_box;
use std::str::FromStr;

// ============================================================================
// Normalization Benchmarks
// Isolates input classification from word generation
// ============================================================================

fn benchmark_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");

    let inputs = [
        ("float", NumberInput::from(1234567.891)),
        ("text", NumberInput::from("1,234,567.891")),
        ("exponent", NumberInput::from("1.234567891e6")),
        (
            "decimal",
            NumberInput::from(Decimal::from_str("1234567.891").unwrap_or_default()),
        ),
    ];

    for (name, input) in inputs.iter() {
        group.bench_with_input(BenchmarkId::new("classify", name), input, |b, input| {
            b.iter(|| {
                black_box(input.classify(DEFAULT_FLOAT_FRACTION_DIGITS, DEFAULT_GROUPING_SEPARATORS))
            });
        });
    }

    group.finish();
}

// ============================================================================
// Language Comparison Benchmarks
// One value, every strategy
// ============================================================================

fn benchmark_languages(c: &mut Criterion) {
    let mut group = c.benchmark_group("languages");

    for code in LanguageCode::ALL.iter() {
        let converter = match create_from_config(ConverterConfig::new(*code)) {
            Ok(converter) => converter,
            Err(_) => continue,
        };
        group.bench_with_input(
            BenchmarkId::new("convert", code.as_str()),
            &converter,
            |b, converter| {
                b.iter(|| black_box(converter.convert(black_box("987654321.0123"))));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Magnitude Scaling Benchmarks
// Digit count grows; chunk count grows with it
// ============================================================================

fn benchmark_magnitude(c: &mut Criterion) {
    let mut group = c.benchmark_group("magnitude");
    let converter = ConverterBuilder::new(LanguageCode::English).build();
    let converter = match converter {
        Ok(converter) => converter,
        Err(_) => return,
    };

    for digits in [3usize, 9, 21, 45, 66].iter() {
        let text: String = "123456789".chars().cycle().take(*digits).collect();
        group.bench_with_input(BenchmarkId::new("english", digits), &text, |b, text| {
            b.iter(|| black_box(converter.convert(text.as_str())));
        });
    }

    group.finish();
}

// ============================================================================
// Dispatcher Benchmarks
// ============================================================================

fn benchmark_dispatcher(c: &mut Criterion) {
    c.bench_function("dispatch_zh_cn", |b| {
        b.iter(|| black_box(convert(black_box(100010000), "zh-CN")))
    });

    c.bench_function("dispatch_special_value", |b| {
        b.iter(|| black_box(convert(black_box(f64::NAN), "ar")))
    });
}

criterion_group!(
    benches,
    benchmark_normalization,
    benchmark_languages,
    benchmark_magnitude,
    benchmark_dispatcher,
);

criterion_main!(benches);
