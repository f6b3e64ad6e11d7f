#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{MASTER_GAIN, SAMPLE_RATE};

/// Engine settings, fixed when the synth is built.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthConfig {
    /// Output sample rate in Hz
    pub sample_rate: f64,
    /// Attenuation applied to the summed voices
    pub master_gain: f64,
    /// Maximum simultaneous notes; storage is reserved up front
    pub max_notes: usize,
    /// Slots in the control → render event queue
    pub queue_capacity: usize,
}

impl SynthConfig {
    pub fn new() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            master_gain: MASTER_GAIN,
            max_notes: 64,
            queue_capacity: 256,
        }
    }

    pub fn sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn master_gain(mut self, gain: f64) -> Self {
        self.master_gain = gain;
        self
    }

    pub fn max_notes(mut self, max_notes: usize) -> Self {
        self.max_notes = max_notes;
        self
    }

    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Length of one frame in seconds.
    pub fn frame_duration(&self) -> f64 {
        1.0 / self.sample_rate
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = SynthConfig::new().sample_rate(48_000.0).max_notes(8);
        assert_eq!(config.sample_rate, 48_000.0);
        assert_eq!(config.max_notes, 8);
        assert_eq!(config.master_gain, MASTER_GAIN);
        assert!((config.frame_duration() - 1.0 / 48_000.0).abs() < 1e-15);
    }
}
