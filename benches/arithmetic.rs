//! Benchmarks.

use criterion::{black_box, criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion, PlotConfiguration};

use sifr::{Number, NumeralSystem};

/// Builds a decimal digit string of `len` glyphs with no particular
/// structure beyond staying in range, so operand size (not value) is what
/// varies across a benchmark group.
fn digit_string(len: usize) -> String {
    (0..len).map(|i| char::from(b'0' + (i % 9) as u8 + 1)).collect()
}

macro_rules! binop_case {
    ($system:ident, $digits:literal, $method:ident, $group:ident) => {
        let a = Number::new(&$system, &digit_string($digits)).unwrap();
        let b = Number::new(&$system, &digit_string($digits)).unwrap();
        $group.bench_with_input(BenchmarkId::from_parameter($digits), &$digits, |bencher, _| {
            bencher.iter(|| black_box(&a).$method(black_box(&b)))
        });
    };
}

fn bench_add(criterion: &mut Criterion) {
    let system = NumeralSystem::default();
    let mut group = criterion.benchmark_group("add");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    binop_case!(system, 16, checked_add, group);
    binop_case!(system, 64, checked_add, group);
    binop_case!(system, 256, checked_add, group);
    binop_case!(system, 1024, checked_add, group);

    group.finish();
}

fn bench_mul(criterion: &mut Criterion) {
    let system = NumeralSystem::default();
    let mut group = criterion.benchmark_group("mul");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    binop_case!(system, 16, checked_mul, group);
    binop_case!(system, 64, checked_mul, group);
    binop_case!(system, 256, checked_mul, group);

    group.finish();
}

fn bench_div(criterion: &mut Criterion) {
    let system = NumeralSystem::default();
    let mut group = criterion.benchmark_group("div");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    binop_case!(system, 16, checked_div, group);
    binop_case!(system, 64, checked_div, group);
    binop_case!(system, 256, checked_div, group);

    group.finish();
}

fn bench_powi(criterion: &mut Criterion) {
    let system = NumeralSystem::default();
    let mut group = criterion.benchmark_group("powi");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for exponent in [4, 8, 16, 32] {
        let base = Number::new(&system, "2.0").unwrap();
        let exp = Number::new(&system, &exponent.to_string()).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(exponent), &exponent, |bencher, _| {
            bencher.iter(|| black_box(&base).checked_powi(black_box(&exp)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add, bench_mul, bench_div, bench_powi);
criterion_main!(benches);
