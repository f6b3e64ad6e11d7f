//! Step sequencing: fixed-grid drum-machine patterns.

pub mod pattern;
pub mod sequencer;

pub use pattern::{StepPattern, HIT_MARKER};
pub use sequencer::{Channel, Sequencer, DEFAULT_PITCH};
