//! Sequencer - fixed-grid pattern playback
//!
//! The sequencer owns a beat clock, not the notes. Each `update` advances
//! the clock by the elapsed time and hands back the notes that fell due, for
//! the caller to merge into its note registry.

use crate::{
    error::SynthError,
    sequencing::pattern::StepPattern,
    synth::{instrument::InstrumentId, note::Note},
};

/// Scale degree used for channels that don't pick their own.
pub const DEFAULT_PITCH: i32 = 64;

/// One row of the grid: an instrument, the pitch it plays, and its pattern
#[derive(Debug, Clone)]
pub struct Channel {
    pub instrument: InstrumentId,
    pub pitch: i32,
    pub pattern: StepPattern,
}

pub struct Sequencer {
    /// Tempo in beats per minute
    tempo: f64,
    /// Beats per bar
    beats: usize,
    /// Steps per beat
    subbeats: usize,
    /// Seconds per step (computed from tempo and subbeats)
    subbeat_duration: f64,
    /// Time carried over towards the next step
    accumulated: f64,
    /// Sequencer-local time, used to stamp emitted notes
    clock: f64,
    /// Step that fired most recently
    current_step: usize,
    /// beats * subbeats
    total_steps: usize,
    channels: Vec<Channel>,
    /// Notes emitted by the latest update
    emitted: Vec<Note>,
}

impl Sequencer {
    pub fn new(tempo: f64, beats: usize, subbeats: usize) -> Result<Self, SynthError> {
        validate_tempo(tempo)?;
        if beats == 0 || subbeats == 0 {
            return Err(SynthError::InvalidMeter { beats, subbeats });
        }

        log::debug!(
            "sequencer at {} bpm, {} beats x {} subbeats",
            tempo,
            beats,
            subbeats
        );

        Ok(Self {
            tempo,
            beats,
            subbeats,
            subbeat_duration: Self::compute_subbeat_duration(tempo, subbeats),
            accumulated: 0.0,
            clock: 0.0,
            current_step: 0,
            total_steps: beats * subbeats,
            channels: Vec::new(),
            emitted: Vec::new(),
        })
    }

    /// Seconds per step: a beat lasts 60/tempo, split into `subbeats`.
    fn compute_subbeat_duration(tempo: f64, subbeats: usize) -> f64 {
        (60.0 / tempo) / subbeats as f64
    }

    /// Add a channel playing the default pitch.
    pub fn add_channel(&mut self, instrument: InstrumentId, pattern: &str) -> Result<(), SynthError> {
        self.add_channel_with_pitch(instrument, DEFAULT_PITCH, pattern)
    }

    /// Add a channel. The pattern must have exactly `beats * subbeats` steps.
    pub fn add_channel_with_pitch(
        &mut self,
        instrument: InstrumentId,
        pitch: i32,
        pattern: &str,
    ) -> Result<(), SynthError> {
        let pattern = StepPattern::parse(pattern);
        if pattern.len() != self.total_steps {
            return Err(SynthError::PatternLength {
                expected: self.total_steps,
                actual: pattern.len(),
            });
        }

        log::debug!("channel {:?} pitch {}: {}", instrument, pitch, pattern);

        self.channels.push(Channel {
            instrument,
            pitch,
            pattern,
        });
        // Room for every channel hitting on one step, so a tick never allocates
        self.emitted.reserve(self.channels.len());
        Ok(())
    }

    /// Change tempo; the step in progress keeps its accumulated time.
    pub fn set_tempo(&mut self, tempo: f64) -> Result<(), SynthError> {
        validate_tempo(tempo)?;
        self.tempo = tempo;
        self.subbeat_duration = Self::compute_subbeat_duration(tempo, self.subbeats);
        Ok(())
    }

    /// Advance by `elapsed` seconds and return the notes that fell due.
    ///
    /// Each note is stamped with the time of the step boundary it belongs
    /// to, on the sequencer's own clock. Non-positive or non-finite elapsed
    /// times are ignored.
    pub fn update(&mut self, elapsed: f64) -> &[Note] {
        self.emitted.clear();
        if !(elapsed.is_finite() && elapsed > 0.0) {
            return &self.emitted;
        }

        self.clock += elapsed;
        self.accumulated += elapsed;

        while self.accumulated >= self.subbeat_duration {
            self.accumulated -= self.subbeat_duration;
            self.current_step = (self.current_step + 1) % self.total_steps;

            let at = self.clock - self.accumulated;
            for channel in &self.channels {
                if channel.pattern.is_hit(self.current_step) {
                    self.emitted
                        .push(Note::new(channel.pitch, channel.instrument, at));
                }
            }
        }

        &self.emitted
    }

    /// Rewind to the start of the bar.
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
        self.current_step = 0;
        self.emitted.clear();
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn subbeat_duration(&self) -> f64 {
        self.subbeat_duration
    }

    pub fn tempo(&self) -> f64 {
        self.tempo
    }

    pub fn beats(&self) -> usize {
        self.beats
    }

    pub fn subbeats(&self) -> usize {
        self.subbeats
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Sequencer-local time in seconds.
    pub fn clock(&self) -> f64 {
        self.clock
    }
}

fn validate_tempo(tempo: f64) -> Result<(), SynthError> {
    if tempo.is_finite() && tempo > 0.0 {
        Ok(())
    } else {
        Err(SynthError::InvalidTempo(tempo))
    }
}
