use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use spectrakit::{FastTransform, FourierTransform, NaiveTransform, Waveform, WavetableCache};

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward");
    let mut cache = WavetableCache::new();
    for &n in &[64usize, 256, 1024] {
        let input = cache.get(Waveform::Triangle, n);

        let mut fft = FastTransform::new(n, 44_100).unwrap();
        group.bench_with_input(BenchmarkId::new("fft", n), &input, |b, input| {
            b.iter(|| {
                fft.forward(black_box(input)).unwrap();
            })
        });

        let mut dft = NaiveTransform::new(n, 44_100).unwrap();
        group.bench_with_input(BenchmarkId::new("dft", n), &input, |b, input| {
            b.iter(|| {
                dft.forward(black_box(input)).unwrap();
            })
        });
    }
    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("fft_new_4096", |b| {
        b.iter(|| FastTransform::new(black_box(4096), 44_100).unwrap())
    });
}

criterion_group!(benches, bench_transforms, bench_construction);
criterion_main!(benches);
