//! Low-level synthesis math used by the instruments.
//!
//! Everything in here is a pure function of time and parameters. Nothing
//! allocates, nothing locks, and nothing keeps state between calls (apart
//! from the noise generator's seed), which makes these functions safe to call
//! from the realtime render callback without any synchronization.

/// Attack/decay/sustain/release amplitude envelope.
pub mod envelope;
/// Vibrato and other low frequency helpers.
pub mod lfo;
/// Waveform generators and the noise source.
pub mod oscillator;
/// Scale degree to frequency conversion.
pub mod pitch;

pub use envelope::{Envelope, EnvelopeStage};
pub use lfo::Vibrato;
pub use oscillator::{noise, osc, Waveform};
pub use pitch::{frequency_of, Scale};
