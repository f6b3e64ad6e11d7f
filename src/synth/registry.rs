use crate::{
    synth::{instrument::InstrumentId, instrument::InstrumentTable, note::Note},
    MIN_TIME,
};

/// What `note_on` did with the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// A new note was added
    Started,
    /// The same pitch was already sounding on this instrument and restarted
    Retriggered,
    /// The registry was full; the oldest released note was replaced
    Stolen,
    /// The registry was full of held notes; the request was ignored
    Dropped,
}

/// The set of live notes and the mixer that renders them.
///
/// Owned by the render thread. Storage is reserved up front and never grows
/// past `capacity`, so a render tick never allocates.
pub struct NoteRegistry {
    notes: Vec<Note>,
    capacity: usize,
    master_gain: f64,
}

impl NoteRegistry {
    pub fn with_capacity(capacity: usize, master_gain: f64) -> Self {
        Self {
            notes: Vec::with_capacity(capacity),
            capacity,
            master_gain,
        }
    }

    /// Press `id` on `instrument` at `now`.
    ///
    /// A note already present for the same pitch and instrument is restarted
    /// in place instead of being duplicated: `on` moves to `now` and `off` is
    /// pulled back to at most `now`, which puts it back in the held regime
    /// and restarts the attack.
    pub fn note_on(&mut self, id: i32, instrument: InstrumentId, now: f64) -> Trigger {
        if let Some(note) = self.find_mut(id, instrument) {
            note.on = now;
            note.off = note.off.min(now);
            note.active = true;
            return Trigger::Retriggered;
        }

        let note = Note::new(id, instrument, now);
        if self.notes.len() < self.capacity {
            self.notes.push(note);
            return Trigger::Started;
        }

        // Full: steal the note that was released first
        let steal_idx = self
            .notes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_released())
            .min_by(|(_, a), (_, b)| a.off.total_cmp(&b.off))
            .map(|(idx, _)| idx);

        match steal_idx {
            Some(idx) => {
                self.notes[idx] = note;
                Trigger::Stolen
            }
            None => Trigger::Dropped,
        }
    }

    /// Release `id` on `instrument` at `now`.
    ///
    /// Returns false when there is no such note or it is already released;
    /// neither case is an error.
    pub fn note_off(&mut self, id: i32, instrument: InstrumentId, now: f64) -> bool {
        match self.find_mut(id, instrument) {
            Some(note) if note.is_held() => {
                note.off = release_time(note, now);
                true
            }
            _ => false,
        }
    }

    /// Release every held note.
    pub fn all_notes_off(&mut self, now: f64) {
        for note in self.notes.iter_mut().filter(|n| n.is_held()) {
            note.off = release_time(note, now);
        }
    }

    /// Render one tick at `time`: sum every note, retire the finished ones.
    pub fn mix(&mut self, time: f64, instruments: &InstrumentTable) -> f64 {
        let mut mixed = 0.0;

        for note in &mut self.notes {
            match instruments.get(note.instrument) {
                Some(instrument) => {
                    let sound = instrument.sound(time, note);
                    mixed += sound.sample;
                    if sound.finished {
                        note.active = false;
                    }
                }
                // No instrument can ever render it
                None => note.active = false,
            }
        }

        self.notes.retain(|n| n.active);
        mixed * self.master_gain
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.notes.clear();
    }

    fn find_mut(&mut self, id: i32, instrument: InstrumentId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.matches(id, instrument))
    }
}

/// A release must land strictly after `on` to register as one.
fn release_time(note: &Note, now: f64) -> f64 {
    if now > note.on {
        now
    } else {
        note.on + MIN_TIME
    }
}
