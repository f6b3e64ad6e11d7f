//! Bell voice.
//!
//! Three sine partials stacked an octave apart: the note one octave up as
//! the fundamental, then two and three octaves up at half and quarter
//! strength. The envelope has no sustain plateau, so a held bell still
//! rings out over about a second.
//!
//! # How It Works
//!
//! 1. Sine at +12 degrees with a faint 5 Hz vibrato for shimmer
//! 2. Sine at +24 degrees, half level
//! 3. Sine at +36 degrees, quarter level
//! 4. 10ms attack, 1s decay to zero, 1s release

use crate::dsp::{
    envelope::Envelope,
    lfo::Vibrato,
    oscillator::{osc, Waveform},
    pitch::frequency_of,
};
use crate::synth::{instrument::Instrument, note::Note};

pub struct Bell {
    envelope: Envelope,
}

impl Bell {
    pub const fn new() -> Self {
        Self {
            envelope: Envelope::adsr(0.01, 1.0, 0.0, 1.0),
        }
    }
}

impl Default for Bell {
    fn default() -> Self {
        Self::new()
    }
}

impl Instrument for Bell {
    fn name(&self) -> &str {
        "Bell"
    }

    fn volume(&self) -> f64 {
        1.0
    }

    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn waveform(&self, time: f64, note: &Note) -> f64 {
        let t = note.life(time);
        1.00 * osc(t, frequency_of(note.id + 12), Waveform::Sine, Vibrato::new(5.0, 0.001))
            + 0.50 * osc(t, frequency_of(note.id + 24), Waveform::Sine, Vibrato::NONE)
            + 0.25 * osc(t, frequency_of(note.id + 36), Waveform::Sine, Vibrato::NONE)
    }
}
