// Purpose: notes, instruments, the live note registry and the realtime engine
// This layer sits above the dsp math and owns everything that changes over time

pub mod clock;
pub mod engine;
pub mod instrument;
pub mod message;
pub mod note;
pub mod registry;

pub use clock::{DropCounter, SharedClock};
#[cfg(feature = "rtrb")]
pub use engine::{channel, SynthController};
pub use engine::Synth;
pub use instrument::{Instrument, InstrumentId, InstrumentTable, Sound};
pub use message::{MessageReceiver, NoMessages, SynthMessage};
pub use note::Note;
pub use registry::{NoteRegistry, Trigger};
