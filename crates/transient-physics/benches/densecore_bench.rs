// ─────────────────────────────────────────────────────────────────────
// Transient Fit Core — Dense Core Photosphere Benchmark
// © 1998–2026 Miroslav Šotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use transient_physics::{DenseCore, Photosphere, PhotosphereInput};

fn light_curve(n: usize) -> (Vec<f64>, Vec<f64>) {
    let times: Vec<f64> = (0..n).map(|i| 0.5 + 300.0 * i as f64 / n as f64).collect();
    let lums = times
        .iter()
        .map(|t| 1.0e43 * (t / 20.0) * (-t / 20.0).exp() + 1.0e40)
        .collect();
    (times, lums)
}

fn bench_densecore(c: &mut Criterion) {
    let mut group = c.benchmark_group("densecore_process");
    let model = DenseCore::default();

    for n in [100usize, 1_000, 10_000] {
        let (times, lums) = light_curve(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let input = PhotosphereInput {
                    texplosion: 0.0,
                    times: &times,
                    luminosities: &lums,
                    vejecta: 1.0e4,
                    mejecta: 5.0,
                    kappa: 0.2,
                };
                let result = model.process(black_box(&input)).expect("process should succeed");
                black_box(result.temperature_phot[n - 1]);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_densecore);
criterion_main!(benches);
