use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use anyfft::{fft, Complex32};
use anyfft_bench::{ramp_signal, skew_signal};

fn bench_bluestein(c: &mut Criterion) {
    let mut group = c.benchmark_group("bluestein");
    let sizes = [3usize, 5, 6, 7, 15, 18, 100, 1000];
    for &size in &sizes {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &n| {
            let input: Vec<Complex32> = skew_signal(n);
            let mut data = input.clone();
            b.iter(|| {
                data.copy_from_slice(&input);
                fft(&mut data).unwrap();
            });
        });
    }
    group.finish();
}

// 18 points pads to m = 64.
fn bench_demo_signal(c: &mut Criterion) {
    let input = ramp_signal(18);
    let mut data = input.clone();
    c.bench_function("bluestein_ramp_18", |b| {
        b.iter(|| {
            data.copy_from_slice(&input);
            fft(&mut data).unwrap();
        });
    });
}

criterion_group!(benches, bench_bluestein, bench_demo_signal);
criterion_main!(benches);
