//! Benchmarks for the interpolation methods on the continental grid

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pollenfield::{get_interpolator, interpolate, Grid, SamplePoint};

fn scattered_points(n: usize) -> Vec<SamplePoint> {
    // Deterministic spread over the continental extent
    (0..n)
        .map(|i| {
            let t = i as f64;
            let lon = -124.0 + (t * 37.77) % 56.0;
            let lat = 25.0 + (t * 13.31) % 24.0;
            let value = ((i * 7) % 12) as f64;
            SamplePoint::new(lon, lat, value)
        })
        .collect()
}

fn bench_interpolation(c: &mut Criterion) {
    let grid = Grid::continental_us().unwrap();

    for method in ["nearest", "linear", "radial_basis", "clough_tocher"] {
        let interpolator = get_interpolator(method).unwrap();
        let mut group = c.benchmark_group(method);
        group.sample_size(10);

        for n in [50, 250].iter() {
            let points = scattered_points(*n);
            group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, _| {
                b.iter(|| interpolate(black_box(&points), &grid, interpolator.as_ref()).unwrap())
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_interpolation);
criterion_main!(benches);
