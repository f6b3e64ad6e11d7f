//! Benchmarks for realistic rendering workloads.

mod instruments;
mod polyphony;

pub use instruments::bench_instruments;
pub use polyphony::bench_polyphony;
