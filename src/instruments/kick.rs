//! Kick drum voice.
//!
//! A low sine three octaves below the note with a heavy 1 Hz phase
//! modulation, which bends the pitch down during the first few hundred
//! milliseconds and gives the thump its punch. A pinch of noise adds the
//! beater click.
//!
//! The note always lives for 1.5s: percussion is never released, so the
//! lifetime, not the envelope, decides when it is retired.

use crate::dsp::{
    envelope::Envelope,
    lfo::Vibrato,
    oscillator::{noise, osc, Waveform},
    pitch::frequency_of,
};
use crate::synth::{instrument::Instrument, note::Note};

pub struct Kick {
    envelope: Envelope,
}

impl Kick {
    pub const fn new() -> Self {
        Self {
            envelope: Envelope::adsr(0.01, 0.15, 0.0, 0.0),
        }
    }
}

impl Default for Kick {
    fn default() -> Self {
        Self::new()
    }
}

impl Instrument for Kick {
    fn name(&self) -> &str {
        "Drum Kick"
    }

    fn volume(&self) -> f64 {
        1.0
    }

    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn max_lifetime(&self) -> Option<f64> {
        Some(1.5)
    }

    fn waveform(&self, time: f64, note: &Note) -> f64 {
        let t = note.life(time);
        0.99 * osc(t, frequency_of(note.id - 36), Waveform::Sine, Vibrato::new(1.0, 1.0))
            + 0.01 * noise()
    }
}
