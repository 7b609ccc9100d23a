use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use anyfft::{fft, fft_radix2, Complex32, Direction};
use anyfft_bench::ramp_signal;

fn bench_radix2(c: &mut Criterion) {
    for &n in &[16usize, 256, 1024, 4096] {
        let mut group = c.benchmark_group(format!("radix2_{n}"));
        let input: Vec<Complex32> = ramp_signal(n);
        let mut data = input.clone();
        group.bench_function(BenchmarkId::new("forward", n), |b| {
            b.iter(|| {
                data.copy_from_slice(&input);
                fft_radix2(&mut data, Direction::Forward).unwrap();
            });
        });
        group.bench_function(BenchmarkId::new("dispatch", n), |b| {
            b.iter(|| {
                data.copy_from_slice(&input);
                fft(&mut data).unwrap();
            });
        });
        group.finish();
    }
}

criterion_group!(benches, bench_radix2);
criterion_main!(benches);
