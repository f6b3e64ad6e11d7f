//! Benchmarks for mixing many simultaneous notes through the registry.
//!
//! The harmonica is the most expensive voice (99-partial breath saw), so a
//! stack of them is a worst case for the render callback.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use polytone::{
    instruments::{BELL, HARMONICA, KICK},
    synth::{InstrumentTable, NoteRegistry},
    MASTER_GAIN,
};

use crate::SAMPLE_RATE;

const BLOCK: usize = 256;

pub fn bench_polyphony(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/polyphony");
    let table = InstrumentTable::standard();

    for &voices in &[1usize, 4, 8, 16] {
        let mut buffer = vec![0.0f64; BLOCK];

        group.bench_with_input(BenchmarkId::new("harmonica", voices), &voices, |b, &voices| {
            let mut registry = NoteRegistry::with_capacity(voices, MASTER_GAIN);
            for v in 0..voices {
                registry.note_on(52 + v as i32, HARMONICA, 0.0);
            }
            b.iter(|| {
                for (n, out) in buffer.iter_mut().enumerate() {
                    let t = 0.1 + n as f64 / SAMPLE_RATE;
                    *out = registry.mix(black_box(t), &table);
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("mixed", voices), &voices, |b, &voices| {
            let mut registry = NoteRegistry::with_capacity(voices, MASTER_GAIN);
            for v in 0..voices {
                let instrument = [BELL, HARMONICA, KICK][v % 3];
                registry.note_on(52 + v as i32, instrument, 0.0);
            }
            b.iter(|| {
                for (n, out) in buffer.iter_mut().enumerate() {
                    let t = 0.1 + n as f64 / SAMPLE_RATE;
                    *out = registry.mix(black_box(t), &table);
                }
            })
        });
    }

    group.finish();
}
