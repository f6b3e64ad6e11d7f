//! Benchmarks for oscillator waveform generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use polytone::dsp::{lfo::Vibrato, oscillator::{osc, Waveform}};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");
    let vibrato = Vibrato::new(5.0, 0.001);

    let waveforms = [
        ("sine", Waveform::Sine),         // sin() per sample
        ("square", Waveform::Square),     // sin() plus a branch
        ("triangle", Waveform::Triangle), // sin() then asin()
        ("saw_digital", Waveform::SawDigital),
        ("saw_analog_49", Waveform::saw_analog()), // additive, cost scales with partials
        ("saw_analog_99", Waveform::SawAnalog { harmonics: 99 }),
        ("noise", Waveform::Noise), // xorshift PRNG
    ];

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f64; size];

        for (name, waveform) in waveforms {
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    for (n, out) in buffer.iter_mut().enumerate() {
                        let t = n as f64 / SAMPLE_RATE;
                        *out = osc(black_box(t), black_box(440.0), waveform, vibrato);
                    }
                })
            });
        }
    }

    group.finish();
}
