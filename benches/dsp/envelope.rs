//! Benchmarks for envelope evaluation across its stages.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use polytone::dsp::envelope::Envelope;

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");
    let env = Envelope::adsr(0.01, 0.1, 0.7, 0.3);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f64; size];

        // Held note, walking through attack and decay
        group.bench_with_input(BenchmarkId::new("held", size), &size, |b, _| {
            b.iter(|| {
                for (n, out) in buffer.iter_mut().enumerate() {
                    let t = n as f64 / SAMPLE_RATE;
                    *out = env.amplitude(black_box(t), 0.0, 0.0);
                }
            })
        });

        // Released note, computing the release level every sample
        group.bench_with_input(BenchmarkId::new("released", size), &size, |b, _| {
            b.iter(|| {
                for (n, out) in buffer.iter_mut().enumerate() {
                    let t = 1.0 + n as f64 / SAMPLE_RATE;
                    *out = env.amplitude(black_box(t), 0.0, 1.0);
                }
            })
        });
    }

    group.finish();
}
