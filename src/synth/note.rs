#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::synth::instrument::InstrumentId;

/// One sounding (or recently released) note.
///
/// `id` is a scale degree, not a unique key: the same degree may sound on
/// several instruments at once. The note refers to its instrument through a
/// table handle and never owns it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    /// Scale degree
    pub id: i32,
    /// Time the note was (last) pressed
    pub on: f64,
    /// Time the note was released; only meaningful when `off > on`
    pub off: f64,
    /// Cleared once the instrument reports the note finished
    pub active: bool,
    pub instrument: InstrumentId,
}

impl Note {
    /// A freshly pressed note. `off` is left at zero so the note is held.
    pub fn new(id: i32, instrument: InstrumentId, on: f64) -> Self {
        Self {
            id,
            on,
            off: 0.0,
            active: true,
            instrument,
        }
    }

    pub fn is_held(&self) -> bool {
        self.off <= self.on
    }

    pub fn is_released(&self) -> bool {
        self.off > self.on
    }

    /// Seconds since the note was pressed.
    #[inline]
    pub fn life(&self, time: f64) -> f64 {
        time - self.on
    }

    pub(crate) fn matches(&self, id: i32, instrument: InstrumentId) -> bool {
        self.id == id && self.instrument == instrument
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_note_is_held_even_at_time_zero() {
        let note = Note::new(64, InstrumentId::from_index(0), 0.0);
        assert!(note.is_held());
        assert!(!note.is_released());
        assert!(note.active);
    }

    #[test]
    fn stamped_off_after_on_is_released() {
        let mut note = Note::new(64, InstrumentId::from_index(0), 1.0);
        note.off = 1.5;
        assert!(note.is_released());
        assert_eq!(note.life(2.0), 1.0);
    }
}
