//! 8-bit bell voice.
//!
//! Same partial layout as [`super::Bell`] but one octave lower and with a
//! square fundamental, which gives it the hollow buzz of a console sound
//! chip. Unlike the bell it sustains at 80% while held.

use crate::dsp::{
    envelope::Envelope,
    lfo::Vibrato,
    oscillator::{osc, Waveform},
    pitch::frequency_of,
};
use crate::synth::{instrument::Instrument, note::Note};

pub struct ChipBell {
    envelope: Envelope,
}

impl ChipBell {
    pub const fn new() -> Self {
        Self {
            envelope: Envelope::adsr(0.01, 0.5, 0.8, 1.0),
        }
    }
}

impl Default for ChipBell {
    fn default() -> Self {
        Self::new()
    }
}

impl Instrument for ChipBell {
    fn name(&self) -> &str {
        "8-Bit Bell"
    }

    fn volume(&self) -> f64 {
        1.0
    }

    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn waveform(&self, time: f64, note: &Note) -> f64 {
        let t = note.life(time);
        1.00 * osc(t, frequency_of(note.id), Waveform::Square, Vibrato::new(5.0, 0.001))
            + 0.50 * osc(t, frequency_of(note.id + 12), Waveform::Sine, Vibrato::NONE)
            + 0.25 * osc(t, frequency_of(note.id + 24), Waveform::Sine, Vibrato::NONE)
    }
}
