//! Harmonica voice.
//!
//! A reedy sustained tone. The interesting part is the "breath": an analog
//! saw one octave down evaluated on reversed time (`on - t`), which makes it
//! swell in like air being pushed through the reed before the squares take
//! over.
//!
//! # How It Works
//!
//! 1. Breath: analog saw at -12 degrees, 99 partials, reversed time
//! 2. Square fundamental with a faint 5 Hz vibrato
//! 3. Square at +12 degrees, half level
//! 4. A trace of noise (5%) for air
//! 5. Instant attack, sustains at 95%, half-second release
//!
//! # Variations
//!
//! - Fewer breath partials = darker, cheaper to render
//! - More noise = breathier, more "played"

use crate::dsp::{
    envelope::Envelope,
    lfo::Vibrato,
    oscillator::{noise, osc, Waveform},
    pitch::frequency_of,
};
use crate::synth::{instrument::Instrument, note::Note};

const BREATH_HARMONICS: u16 = 99;

pub struct Harmonica {
    envelope: Envelope,
}

impl Harmonica {
    pub const fn new() -> Self {
        Self {
            envelope: Envelope::adsr(0.0, 1.0, 0.95, 0.5),
        }
    }
}

impl Default for Harmonica {
    fn default() -> Self {
        Self::new()
    }
}

impl Instrument for Harmonica {
    fn name(&self) -> &str {
        "Harmonica"
    }

    fn volume(&self) -> f64 {
        0.3
    }

    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn waveform(&self, time: f64, note: &Note) -> f64 {
        let t = note.life(time);
        let breath = Waveform::SawAnalog {
            harmonics: BREATH_HARMONICS,
        };

        1.00 * osc(-t, frequency_of(note.id - 12), breath, Vibrato::new(5.0, 0.001))
            + 1.00 * osc(t, frequency_of(note.id), Waveform::Square, Vibrato::new(5.0, 0.001))
            + 0.50 * osc(t, frequency_of(note.id + 12), Waveform::Square, Vibrato::NONE)
            + 0.05 * noise()
    }
}
