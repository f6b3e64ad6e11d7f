#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
ADSR Envelope Implementation
============================

This module implements a linear ADSR envelope - the workhorse of
synthesizer amplitude control.

Vocabulary
----------

  amplitude   The envelope's output value. This multiplies the audio signal
              to control its loudness over time.

  on / off    Timestamps (seconds) at which the note was pressed and released.
              A note is HELD while off <= on, RELEASED once off > on.

  life        Time elapsed since the note was pressed: t - on.

  start       Peak amplitude reached at the end of the attack.

  sustain     Amplitude held for as long as the key stays down.


The Shape: Linear Ramps
-----------------------

  Amplitude
  start ┐     ╱╲
        │    ╱  ╲___________
    S   │   ╱               ╲
        │  ╱                 ╲
    0.0 └─╱───────────────────╲──→ Time
        Attack Decay  Sustain  Release
         (A)   (D)      (S)      (R)


No State, Only Time
-------------------

There is no per-voice stage variable and no per-sample increment. The
amplitude is a pure function of (t, on, off):

  held (off <= on), life = t - on:
      life <= A          (life / A) · start
      life <= A + D      start + (life - A)/D · (S - start)
      otherwise          S

  released (off > on):
      level = held amplitude at life = off - on     (where the release began)
      amplitude = level · (1 - (t - off)/R)

Release always starts from the level the note had when the key went up, not
from the sustain level. Releasing during the attack therefore fades from the
partial attack level and never clicks.

Because nothing is stored, re-triggering is just moving `on` forward: once
on > off again the note is held and the attack restarts from the new `on`,
whatever release was in progress.


Silence Floor
-------------

Anything at or below 0.01 is reported as exactly 0.0. The floor hides the
tail of the linear ramp and doubles as the "note finished" signal for
instruments that end when their envelope does.

Zero-length phases (A, D or R of 0.0) reach their target immediately
instead of dividing by zero.
*/

/// Amplitudes at or below this are reported as silence.
pub const SILENCE_FLOOR: f64 = 0.01;

/// Which segment of the envelope a note is in at a given moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeStage {
    Attack,
    Decay,
    Sustain,
    Release,
    /// Amplitude has reached the silence floor
    Finished,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub attack: f64,  // seconds to ramp 0 → start
    pub decay: f64,   // seconds to ramp start → sustain
    pub sustain: f64, // amplitude held while the key is down
    pub release: f64, // seconds to ramp release level → 0
    pub start: f64,   // peak amplitude at the end of attack
}

impl Envelope {
    pub const fn adsr(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack,
            decay,
            sustain,
            release,
            start: 1.0,
        }
    }

    pub const fn with_start_amplitude(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    /// Amplitude at `time` for a note pressed at `on` and released at `off`.
    pub fn amplitude(&self, time: f64, on: f64, off: f64) -> f64 {
        let amplitude = if off <= on || time < off {
            self.held(time - on)
        } else {
            let level = self.held(off - on);
            if self.release > 0.0 {
                level * (1.0 - (time - off) / self.release)
            } else {
                0.0
            }
        };

        if amplitude <= SILENCE_FLOOR {
            0.0
        } else {
            amplitude
        }
    }

    /// Envelope segment at `time`, mostly useful for display and tests.
    pub fn stage(&self, time: f64, on: f64, off: f64) -> EnvelopeStage {
        let life = time - on;
        if self.amplitude(time, on, off) == 0.0 && life > self.attack {
            return EnvelopeStage::Finished;
        }

        if off > on && time >= off {
            EnvelopeStage::Release
        } else if life <= self.attack {
            EnvelopeStage::Attack
        } else if life <= self.attack + self.decay {
            EnvelopeStage::Decay
        } else {
            EnvelopeStage::Sustain
        }
    }

    /// Amplitude of a note held for `life` seconds.
    fn held(&self, life: f64) -> f64 {
        if life < 0.0 {
            return 0.0;
        }

        if life <= self.attack {
            if self.attack > 0.0 {
                (life / self.attack) * self.start
            } else {
                self.start
            }
        } else if life <= self.attack + self.decay {
            // decay > 0 here, otherwise life would have failed the test above
            ((life - self.attack) / self.decay) * (self.sustain - self.start) + self.start
        } else {
            self.sustain
        }
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::adsr(0.1, 0.1, 1.0, 0.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_from_zero_starts_silent() {
        let env = Envelope::adsr(0.1, 0.2, 0.6, 0.3);
        assert_eq!(env.amplitude(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn attack_reaches_start_amplitude() {
        let env = Envelope::adsr(0.1, 0.2, 0.6, 0.3).with_start_amplitude(0.9);
        let amp = env.amplitude(0.1, 0.0, 0.0);
        assert!((amp - 0.9).abs() < 1e-12, "got {amp}");
        assert_eq!(env.stage(0.05, 0.0, 0.0), EnvelopeStage::Attack);
    }

    #[test]
    fn decay_interpolates_towards_sustain() {
        let env = Envelope::adsr(0.1, 0.2, 0.6, 0.3);
        let mid = env.amplitude(0.2, 0.0, 0.0);
        assert!((mid - 0.8).abs() < 1e-9, "got {mid}");
        assert_eq!(env.stage(0.2, 0.0, 0.0), EnvelopeStage::Decay);
    }

    #[test]
    fn sustain_holds_indefinitely() {
        let env = Envelope::adsr(0.1, 0.2, 0.6, 0.3);
        for &t in &[0.5, 10.0, 3600.0] {
            assert_eq!(env.amplitude(t, 0.0, 0.0), 0.6);
        }
        assert_eq!(env.stage(10.0, 0.0, 0.0), EnvelopeStage::Sustain);
    }

    #[test]
    fn release_falls_monotonically_to_silence() {
        let env = Envelope::adsr(0.1, 0.2, 0.6, 0.5);
        let off = 2.0;

        let mut prev = env.amplitude(off, 0.0, off);
        assert!((prev - 0.6).abs() < 1e-9);

        let steps = 500;
        for i in 1..=steps {
            let t = off + env.release * i as f64 / steps as f64;
            let amp = env.amplitude(t, 0.0, off);
            assert!(amp <= prev, "release rose at t={t}: {prev} -> {amp}");
            prev = amp;
        }
        assert_eq!(env.amplitude(off + env.release, 0.0, off), 0.0);
        assert_eq!(env.stage(off + env.release, 0.0, off), EnvelopeStage::Finished);
    }

    #[test]
    fn release_during_attack_starts_from_partial_level() {
        let env = Envelope::adsr(1.0, 0.5, 0.5, 1.0);
        let off = 0.5; // halfway up the attack
        let amp = env.amplitude(off, 0.0, off);
        assert!((amp - 0.5).abs() < 1e-9);
        let amp = env.amplitude(off + 0.5, 0.0, off);
        assert!((amp - 0.25).abs() < 1e-9);
    }

    #[test]
    fn zero_attack_does_not_divide_by_zero() {
        let env = Envelope::adsr(0.0, 1.0, 0.95, 0.5);
        let amp = env.amplitude(0.0, 0.0, 0.0);
        assert_eq!(amp, 1.0);
        assert!(env.amplitude(0.5, 0.0, 0.0).is_finite());
    }

    #[test]
    fn zero_release_cuts_immediately() {
        let env = Envelope::adsr(0.01, 0.15, 0.5, 0.0);
        assert_eq!(env.amplitude(1.0, 0.0, 1.0), 0.0);
        assert_eq!(env.amplitude(1.5, 0.0, 1.0), 0.0);
    }

    #[test]
    fn percussive_envelope_decays_to_zero_without_release() {
        let env = Envelope::adsr(0.01, 0.15, 0.0, 0.0);
        assert!(env.amplitude(0.05, 0.0, 0.0) > 0.0);
        assert_eq!(env.amplitude(0.2, 0.0, 0.0), 0.0);
        assert_eq!(env.stage(0.2, 0.0, 0.0), EnvelopeStage::Finished);
    }

    #[test]
    fn retrigger_after_release_behaves_like_fresh_note() {
        let env = Envelope::adsr(0.1, 0.2, 0.6, 3.0);
        // Released at 5, pressed again at 6 while the release tail is ringing
        for i in 0..200 {
            let t = 6.0 + i as f64 * 0.01;
            assert_eq!(env.amplitude(t, 6.0, 5.0), env.amplitude(t, 6.0, 0.0));
        }
    }

    #[test]
    fn before_note_on_is_silent() {
        let env = Envelope::adsr(0.0, 0.1, 1.0, 0.1);
        assert_eq!(env.amplitude(0.5, 1.0, 0.0), 0.0);
    }
}
