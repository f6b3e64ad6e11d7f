//! Snare drum voice.
//!
//! Equal parts tonal body (sine two octaves down, slow pitch bend) and
//! noise rattle, with an instant attack and a 200ms decay.

use crate::dsp::{
    envelope::Envelope,
    lfo::Vibrato,
    oscillator::{noise, osc, Waveform},
    pitch::frequency_of,
};
use crate::synth::{instrument::Instrument, note::Note};

pub struct Snare {
    envelope: Envelope,
}

impl Snare {
    pub const fn new() -> Self {
        Self {
            envelope: Envelope::adsr(0.0, 0.2, 0.0, 0.0),
        }
    }
}

impl Default for Snare {
    fn default() -> Self {
        Self::new()
    }
}

impl Instrument for Snare {
    fn name(&self) -> &str {
        "Drum Snare"
    }

    fn volume(&self) -> f64 {
        1.0
    }

    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn max_lifetime(&self) -> Option<f64> {
        Some(1.0)
    }

    fn waveform(&self, time: f64, note: &Note) -> f64 {
        let t = note.life(time);
        0.5 * osc(t, frequency_of(note.id - 24), Waveform::Sine, Vibrato::new(0.5, 1.0))
            + 0.5 * noise()
    }
}
