//! Benchmarks for each pre-built instrument rendering one held note.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use polytone::synth::{InstrumentTable, Note};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_instruments(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/instruments");
    let table = InstrumentTable::standard();

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f64; size];

        for (id, instrument) in table.iter() {
            let note = Note::new(64, id, 0.0);
            group.bench_with_input(BenchmarkId::new(instrument.name(), size), &size, |b, _| {
                b.iter(|| {
                    for (n, out) in buffer.iter_mut().enumerate() {
                        let t = 0.05 + n as f64 / SAMPLE_RATE;
                        *out = instrument.sound(black_box(t), &note).sample;
                    }
                })
            });
        }
    }

    group.finish();
}
