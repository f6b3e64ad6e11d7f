//! Low Frequency Oscillator (LFO) concepts.

/*
Low Frequency Oscillators
=========================

An LFO is simply an oscillator running at sub-audio frequencies. The same
waveform math applies, but the context and usage are completely different.

Vocabulary
----------

  audio-rate      Frequencies humans can hear: ~20 Hz to ~20,000 Hz.
                  These oscillators produce the actual sound you hear.

  control-rate    Frequencies below human hearing: ~0.01 Hz to ~20 Hz.
                  These oscillators modulate parameters over time.

  vibrato         A periodic wobble of pitch. Here it is applied as phase
                  (frequency) modulation directly inside the oscillator.

  depth           How far the phase is pushed by the LFO, scaled by the
                  carrier frequency so the wobble is proportional to pitch.


Vibrato as Phase Modulation
---------------------------

Instead of running a second oscillator and feeding its output into a
frequency parameter, every oscillator call accepts an LFO term and folds it
into the instantaneous phase:

    phase = 2π·f·t + depth·f·sin(2π·f_lfo·t)

With depth = 0 the second term vanishes and the oscillator is a plain
waveform at frequency f. Small depths (0.001) give a gentle shimmer, large
depths (1.0) give the pitch "drop" used by the drum voices.

    0.5 - 2 Hz      Slow swell, drum pitch sweeps
    2 - 7 Hz        Vibrato sweet spot
    > 15 Hz         Approaching audio rate (FM territory)
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::f64::consts::TAU;

/// Frequency modulation applied inside an oscillator call.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vibrato {
    /// LFO rate in Hz
    pub frequency: f64,
    /// Modulation depth, scaled by the carrier frequency
    pub depth: f64,
}

impl Vibrato {
    /// No modulation at all.
    pub const NONE: Vibrato = Vibrato {
        frequency: 0.0,
        depth: 0.0,
    };

    pub const fn new(frequency: f64, depth: f64) -> Self {
        Self { frequency, depth }
    }

    /// Phase offset contributed at `time` for a carrier at `carrier_hz`.
    #[inline]
    pub fn phase_offset(&self, time: f64, carrier_hz: f64) -> f64 {
        if self.depth == 0.0 {
            return 0.0;
        }
        self.depth * carrier_hz * (TAU * self.frequency * time).sin()
    }
}

impl Default for Vibrato {
    fn default() -> Self {
        Self::NONE
    }
}
