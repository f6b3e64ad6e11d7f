//! Hi-hat voice (closed).

use crate::dsp::{
    envelope::Envelope,
    lfo::Vibrato,
    oscillator::{noise, osc, Waveform},
    pitch::frequency_of,
};
use crate::synth::{instrument::Instrument, note::Note};

/// Mostly noise with a faint square tick, 50ms decay.
pub struct HiHat {
    envelope: Envelope,
}

impl HiHat {
    pub const fn new() -> Self {
        Self {
            envelope: Envelope::adsr(0.01, 0.05, 0.0, 0.0),
        }
    }
}

impl Default for HiHat {
    fn default() -> Self {
        Self::new()
    }
}

impl Instrument for HiHat {
    fn name(&self) -> &str {
        "Drum HiHat"
    }

    fn volume(&self) -> f64 {
        0.5
    }

    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn max_lifetime(&self) -> Option<f64> {
        Some(1.0)
    }

    fn waveform(&self, time: f64, note: &Note) -> f64 {
        let t = note.life(time);
        0.1 * osc(t, frequency_of(note.id - 12), Waveform::Square, Vibrato::new(1.5, 1.0))
            + 0.9 * noise()
    }
}
