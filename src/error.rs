use crate::synth::instrument::InstrumentId;

/// Errors surfaced to callers on the control side
#[derive(Debug, Clone, PartialEq)]
pub enum SynthError {
    /// The control queue to the render thread is full; the event was not sent
    QueueFull,
    /// Tempo must be a positive, finite number of beats per minute
    InvalidTempo(f64),
    /// Beats and sub-beats per beat must both be non-zero
    InvalidMeter { beats: usize, subbeats: usize },
    /// A sequencer pattern does not cover exactly one bar of steps
    PatternLength { expected: usize, actual: usize },
    /// The handle does not refer to any instrument in the table
    UnknownInstrument(InstrumentId),
    /// The table already holds one instrument per possible handle
    TooManyInstruments(usize),
}

impl std::fmt::Display for SynthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SynthError::QueueFull => write!(f, "control queue is full, event not delivered"),
            SynthError::InvalidTempo(bpm) => {
                write!(f, "invalid tempo {} bpm: must be positive and finite", bpm)
            }
            SynthError::InvalidMeter { beats, subbeats } => write!(
                f,
                "invalid meter: {} beats of {} sub-beats (both must be non-zero)",
                beats, subbeats
            ),
            SynthError::PatternLength { expected, actual } => write!(
                f,
                "pattern has {} steps, expected {} (beats x subbeats)",
                actual, expected
            ),
            SynthError::UnknownInstrument(id) => {
                write!(f, "no instrument registered at index {}", id.index())
            }
            SynthError::TooManyInstruments(count) => {
                write!(f, "instrument table is full ({} instruments)", count)
            }
        }
    }
}

impl std::error::Error for SynthError {}
