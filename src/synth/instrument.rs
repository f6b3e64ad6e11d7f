#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{dsp::envelope::Envelope, error::SynthError, synth::note::Note};

/// One render tick's worth of output from an instrument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sound {
    pub sample: f64,
    /// The note has nothing more to say and can be retired
    pub finished: bool,
}

/// A sound generator that turns a note into samples
///
/// This is the "instrument design" layer: an implementor fixes the envelope,
/// volume and the oscillator recipe once, and the registry asks it for a
/// sample of any note at any time. Implementations must be pure so the
/// render thread can call them without synchronization.
pub trait Instrument: Send + Sync {
    fn name(&self) -> &str;

    fn volume(&self) -> f64;

    fn envelope(&self) -> &Envelope;

    /// Fixed duration after which the note is finished regardless of its
    /// envelope. `None` lets the envelope decide.
    fn max_lifetime(&self) -> Option<f64> {
        None
    }

    /// Raw waveform for `note` at `time`, before envelope and volume.
    fn waveform(&self, time: f64, note: &Note) -> f64;

    fn sound(&self, time: f64, note: &Note) -> Sound {
        let amplitude = self.envelope().amplitude(time, note.on, note.off);

        let life = note.life(time);
        let finished = match self.max_lifetime() {
            Some(lifetime) if lifetime > 0.0 => life >= lifetime,
            // Silence before the attack completes is the ramp, not the end
            _ => amplitude <= 0.0 && life > self.envelope().attack,
        };

        Sound {
            sample: amplitude * self.waveform(time, note) * self.volume(),
            finished,
        }
    }
}

/// Stable handle to an instrument inside an [`InstrumentTable`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstrumentId(u16);

impl InstrumentId {
    pub const fn from_index(index: u16) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The fixed set of instruments, built once at startup.
///
/// Wrap it in an `Arc` to share between the control and render threads;
/// notes only ever hold an [`InstrumentId`].
#[derive(Default)]
pub struct InstrumentTable {
    instruments: Vec<Box<dyn Instrument>>,
}

impl InstrumentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from instruments already in handle order.
    ///
    /// Only for fixed sets known to fit in an [`InstrumentId`].
    pub(crate) fn from_instruments(instruments: Vec<Box<dyn Instrument>>) -> Self {
        debug_assert!(instruments.len() <= usize::from(u16::MAX) + 1);
        Self { instruments }
    }

    /// Add an instrument and return its handle.
    pub fn register<I: Instrument + 'static>(
        &mut self,
        instrument: I,
    ) -> Result<InstrumentId, SynthError> {
        let index = u16::try_from(self.instruments.len())
            .map_err(|_| SynthError::TooManyInstruments(self.instruments.len()))?;
        let id = InstrumentId(index);
        log::debug!("registered instrument {:?} as {:?}", instrument.name(), id);
        self.instruments.push(Box::new(instrument));
        Ok(id)
    }

    pub fn get(&self, id: InstrumentId) -> Option<&dyn Instrument> {
        self.instruments.get(id.index()).map(|i| i.as_ref())
    }

    pub fn find_by_name(&self, name: &str) -> Option<InstrumentId> {
        self.instruments
            .iter()
            .position(|i| i.name() == name)
            .map(|idx| InstrumentId(idx as u16))
    }

    pub fn iter(&self) -> impl Iterator<Item = (InstrumentId, &dyn Instrument)> {
        self.instruments
            .iter()
            .enumerate()
            .map(|(idx, i)| (InstrumentId(idx as u16), i.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}
