#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Frequency of scale degree 0 in the reference tuning.
pub const BASE_FREQUENCY: f64 = 8.0;

/// Twelfth root of two: one equal-tempered semitone.
pub const SEMITONE_RATIO: f64 = 1.059_463_094_359_295_3;

/// Tuning used to turn scale degrees into frequencies.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scale {
    /// Twelve-tone equal temperament anchored at `BASE_FREQUENCY`
    #[default]
    EqualTempered,
}

impl Scale {
    pub fn frequency(&self, degree: i32) -> f64 {
        match self {
            Scale::EqualTempered => BASE_FREQUENCY * SEMITONE_RATIO.powi(degree),
        }
    }
}

/// Convert a scale degree to Hz using the default tuning.
///
/// Degree 64 lands around 322 Hz; every 12 degrees doubles the frequency.
/// Negative degrees are valid and keep halving.
#[inline]
pub fn frequency_of(degree: i32) -> f64 {
    Scale::EqualTempered.frequency(degree)
}
