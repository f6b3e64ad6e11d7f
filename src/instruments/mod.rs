//! Pre-built instruments.
//!
//! Each instrument is a fixed recipe: an envelope, a volume, and a weighted
//! stack of oscillator calls at pitch offsets from the note's degree. Study
//! them to see how a handful of partials turns into a recognisable timbre.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use polytone::instruments::{self, HARMONICA};
//! use polytone::synth::InstrumentTable;
//!
//! let table = Arc::new(InstrumentTable::standard());
//! assert_eq!(table.get(HARMONICA).map(|i| i.name()), Some("Harmonica"));
//! # let _ = instruments::KICK;
//! ```

mod bell;
mod chip_bell;
mod harmonica;
mod hihat;
mod kick;
mod snare;

pub use bell::Bell;
pub use chip_bell::ChipBell;
pub use harmonica::Harmonica;
pub use hihat::HiHat;
pub use kick::Kick;
pub use snare::Snare;

use crate::synth::instrument::{Instrument, InstrumentId, InstrumentTable};

// Handles into `InstrumentTable::standard()`, in registration order
pub const BELL: InstrumentId = InstrumentId::from_index(0);
pub const CHIP_BELL: InstrumentId = InstrumentId::from_index(1);
pub const HARMONICA: InstrumentId = InstrumentId::from_index(2);
pub const KICK: InstrumentId = InstrumentId::from_index(3);
pub const SNARE: InstrumentId = InstrumentId::from_index(4);
pub const HIHAT: InstrumentId = InstrumentId::from_index(5);

impl InstrumentTable {
    /// The reference instrument set, addressable through the constants in
    /// [`crate::instruments`].
    pub fn standard() -> Self {
        let instruments: Vec<Box<dyn Instrument>> = vec![
            Box::new(Bell::new()),
            Box::new(ChipBell::new()),
            Box::new(Harmonica::new()),
            Box::new(Kick::new()),
            Box::new(Snare::new()),
            Box::new(HiHat::new()),
        ];
        InstrumentTable::from_instruments(instruments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::note::Note;

    const SAMPLE_RATE: f64 = 44_100.0;

    #[test]
    fn standard_ids_match_registration_order() {
        let table = InstrumentTable::standard();
        assert_eq!(table.len(), 6);
        for (id, name) in [
            (BELL, "Bell"),
            (CHIP_BELL, "8-Bit Bell"),
            (HARMONICA, "Harmonica"),
            (KICK, "Drum Kick"),
            (SNARE, "Drum Snare"),
            (HIHAT, "Drum HiHat"),
        ] {
            assert_eq!(table.get(id).map(|i| i.name()), Some(name));
            assert_eq!(table.find_by_name(name), Some(id));
        }
    }

    #[test]
    fn every_instrument_produces_finite_bounded_output() {
        let table = InstrumentTable::standard();
        for (id, instrument) in table.iter() {
            let note = Note::new(64, id, 0.0);
            let mut peak: f64 = 0.0;
            for n in 0..(SAMPLE_RATE as usize / 2) {
                let sound = instrument.sound(n as f64 / SAMPLE_RATE, &note);
                assert!(sound.sample.is_finite(), "{} produced NaN", instrument.name());
                peak = peak.max(sound.sample.abs());
            }
            assert!(peak > 0.0, "{} was silent", instrument.name());
            assert!(peak < 3.0, "{} peaked at {peak}", instrument.name());
        }
    }

    #[test]
    fn percussion_finishes_on_lifetime() {
        let table = InstrumentTable::standard();
        for (id, lifetime) in [(KICK, 1.5), (SNARE, 1.0), (HIHAT, 1.0)] {
            let instrument = table.get(id).expect("standard instrument");
            let note = Note::new(64, id, 2.0);
            assert!(!instrument.sound(2.0 + lifetime - 0.01, &note).finished);
            assert!(instrument.sound(2.0 + lifetime, &note).finished);
        }
    }

    #[test]
    fn melodic_instruments_finish_after_release() {
        let table = InstrumentTable::standard();
        for id in [BELL, CHIP_BELL, HARMONICA] {
            let instrument = table.get(id).expect("standard instrument");
            let mut note = Note::new(64, id, 0.0);
            note.off = 2.0;
            let release = instrument.envelope().release;
            assert!(instrument.sound(2.0 + release + 0.01, &note).finished);
        }
    }
}
