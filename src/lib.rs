pub mod config;
pub mod dsp; // Oscillators, envelopes, tuning
pub mod error;
pub mod instruments; // Pre-built sounds
pub mod sequencing; // Step sequencer
pub mod synth; // Notes, registry, realtime engine

pub use config::SynthConfig;
pub use error::SynthError;

/// Reference output rate in Hz.
pub const SAMPLE_RATE: f64 = 44_100.0;
/// Attenuation applied to the summed voices so stacked notes keep headroom.
pub const MASTER_GAIN: f64 = 0.2;
pub(crate) const MIN_TIME: f64 = 1.0 / SAMPLE_RATE;
