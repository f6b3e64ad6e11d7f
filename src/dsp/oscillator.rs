#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::cell::Cell;
use std::f64::consts::{FRAC_2_PI, PI, TAU};

use crate::dsp::lfo::Vibrato;

/*
Multi-Function Oscillator
=========================

Every sound in this crate is a weighted sum of calls to one function:

    osc(time, frequency, waveform, vibrato) -> sample

The oscillator keeps no phase accumulator. Phase is computed directly from
absolute time, which means any instrument can evaluate any partial at any
moment without per-voice oscillator state:

    phase = 2π·f·t + vibrato term          (see dsp/lfo.rs)


Waveform Types and Their Character:
-----------------------------------

Sine: The purest tone - a single frequency with no harmonics.
  - sin(phase)

Square: Hollow and buzzy - odd harmonics only.
  - sign(sin(phase)), output is exactly ±1

Triangle: Mellow and soft - weak odd harmonics falling off as 1/n².
  - asin(sin(phase)) · 2/π

Saw (analog): Warm, band-limited sawtooth built additively.
  - (2/π) · Σ sin(n·phase)/n  for n = 1..=harmonics
  - Cost grows linearly with the harmonic count, so the count is capped at
    MAX_SAW_HARMONICS no matter what the caller asks for.
  - Partial sums overshoot near the discontinuity (Gibbs phenomenon): the
    output stays within about ±1.18.

Saw (digital): Bright, aliasing, closed-form ramp.
  - (2/π) · (f·π·(t mod 1/f) − π/2)
  - Needs a positive, finite period. A zero frequency yields silence.

Noise: Uniform white noise, frequency ignored.
  - xorshift PRNG, strictly inside (-1, 1), not time-deterministic.
*/

/// Upper bound on additive partials for `Waveform::SawAnalog`.
pub const MAX_SAW_HARMONICS: u16 = 128;

/// Harmonic count used when no brightness is specified.
pub const DEFAULT_SAW_HARMONICS: u16 = 49;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    /// Additive sawtooth, `harmonics` partials (clamped to `MAX_SAW_HARMONICS`)
    SawAnalog { harmonics: u16 },
    SawDigital,
    Noise,
}

impl Waveform {
    /// Analog saw with the default brightness.
    pub const fn saw_analog() -> Self {
        Waveform::SawAnalog {
            harmonics: DEFAULT_SAW_HARMONICS,
        }
    }
}

/// Evaluate a waveform at absolute `time` (seconds).
#[inline]
pub fn osc(time: f64, frequency: f64, waveform: Waveform, vibrato: Vibrato) -> f64 {
    let phase = TAU * frequency * time + vibrato.phase_offset(time, frequency);

    match waveform {
        Waveform::Sine => phase.sin(),

        Waveform::Square => {
            if phase.sin() > 0.0 {
                1.0
            } else {
                -1.0
            }
        }

        Waveform::Triangle => phase.sin().asin() * FRAC_2_PI,

        Waveform::SawAnalog { harmonics } => {
            let harmonics = harmonics.min(MAX_SAW_HARMONICS);
            let mut out = 0.0;
            for n in 1..=harmonics {
                let n = n as f64;
                out += (n * phase).sin() / n;
            }
            out * FRAC_2_PI
        }

        Waveform::SawDigital => {
            let period = 1.0 / frequency;
            debug_assert!(
                period.is_finite() && period > 0.0,
                "digital saw needs a positive frequency, got {frequency}"
            );
            if !(period.is_finite() && period > 0.0) {
                return 0.0;
            }
            // rem_euclid may round up to the full period
            (FRAC_2_PI * (frequency * PI * time.rem_euclid(period) - PI / 2.0)).clamp(-1.0, 1.0)
        }

        Waveform::Noise => noise(),
    }
}

thread_local! {
    static NOISE_STATE: Cell<u32> = const { Cell::new(0x9E37_79B9) };
}

/// One sample of white noise, strictly inside (-1, 1).
///
/// Each thread carries its own xorshift state so the render callback never
/// contends with anything.
#[inline]
pub fn noise() -> f64 {
    NOISE_STATE.with(|state| {
        let mut x = state.get();
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        state.set(x);

        // Top 24 bits, centered in their bucket so neither end is reachable
        let unit = ((x >> 8) as f64 + 0.5) / (1u32 << 24) as f64;
        unit * 2.0 - 1.0
    })
}
