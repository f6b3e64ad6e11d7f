#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::synth::instrument::InstrumentId;

/// Control events sent from the input thread to the render thread.
///
/// Every event carries the time it happened at, read from the shared clock
/// when it was produced, so the render thread applies it exactly as stamped.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SynthMessage {
    NoteOn {
        degree: i32,
        instrument: InstrumentId,
        time: f64,
    },
    NoteOff {
        degree: i32,
        instrument: InstrumentId,
        time: f64,
    },
    AllNotesOff {
        time: f64,
    },
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<SynthMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<SynthMessage> {
    fn pop(&mut self) -> Option<SynthMessage> {
        Consumer::pop(self).ok()
    }
}

/// A receiver that never has anything, for synths driven only by a
/// sequencer or by direct registry calls.
pub struct NoMessages;

impl MessageReceiver for NoMessages {
    fn pop(&mut self) -> Option<SynthMessage> {
        None
    }
}
