use std::sync::Arc;

#[cfg(feature = "rtrb")]
use rtrb::{Consumer, Producer, RingBuffer};

use crate::{
    config::SynthConfig,
    sequencing::Sequencer,
    synth::{
        clock::{DropCounter, SharedClock},
        instrument::InstrumentTable,
        message::{MessageReceiver, SynthMessage},
        registry::{NoteRegistry, Trigger},
    },
};
#[cfg(feature = "rtrb")]
use crate::{error::SynthError, synth::instrument::InstrumentId};

/// The render side of the synthesizer.
///
/// Owns the note registry outright; the control thread only talks to it
/// through the message queue, so nothing here ever waits on a lock.
pub struct Synth<R: MessageReceiver> {
    config: SynthConfig,
    instruments: Arc<InstrumentTable>,
    registry: NoteRegistry,
    rx: R,
    sequencer: Option<Sequencer>,
    clock: SharedClock,
    dropped: DropCounter,
    frame_counter: u64,
}

impl<R: MessageReceiver> Synth<R> {
    pub fn new(config: SynthConfig, instruments: Arc<InstrumentTable>, rx: R) -> Self {
        Self {
            registry: NoteRegistry::with_capacity(config.max_notes, config.master_gain),
            config,
            instruments,
            rx,
            sequencer: None,
            clock: SharedClock::new(),
            dropped: DropCounter::new(),
            frame_counter: 0,
        }
    }

    /// Drive drum patterns from the render clock.
    pub fn with_sequencer(mut self, sequencer: Sequencer) -> Self {
        self.sequencer = Some(sequencer);
        self
    }

    /// Use an existing clock (e.g. one already handed to a controller).
    pub fn with_clock(mut self, clock: SharedClock) -> Self {
        self.clock = clock;
        self
    }

    /// Report refused note-ons through an existing counter.
    pub fn with_drop_counter(mut self, dropped: DropCounter) -> Self {
        self.dropped = dropped;
        self
    }

    /// One mono sample at `time`, after applying any pending control events.
    pub fn render_sample(&mut self, time: f64) -> f64 {
        self.clock.publish(time);
        self.process_messages();
        self.registry.mix(time, &self.instruments)
    }

    /// Fill an interleaved buffer, writing the same mono sample to every
    /// channel. Time advances by one frame per frame written.
    pub fn render_block(&mut self, out: &mut [f32], channels: usize) {
        let channels = channels.max(1);
        let dt = self.config.frame_duration();

        self.clock.publish(self.time());
        self.process_messages();

        for frame in out.chunks_mut(channels) {
            let time = self.frame_counter as f64 * dt;
            let sample = self.registry.mix(time, &self.instruments) as f32;
            frame.fill(sample);
            self.frame_counter += 1;

            // Steps that fall due during this frame start sounding on the next
            if let Some(sequencer) = &mut self.sequencer {
                let next = self.frame_counter as f64 * dt;
                for note in sequencer.update(dt) {
                    // The sequencer clock is a running sum and can drift a hair ahead
                    let on = note.on.min(next);
                    if self.registry.note_on(note.id, note.instrument, on) == Trigger::Dropped {
                        self.dropped.record();
                    }
                }
            }
        }
    }

    fn process_messages(&mut self) {
        while let Some(msg) = self.rx.pop() {
            match msg {
                SynthMessage::NoteOn {
                    degree,
                    instrument,
                    time,
                } => {
                    if self.registry.note_on(degree, instrument, time) == Trigger::Dropped {
                        self.dropped.record();
                    }
                }
                SynthMessage::NoteOff {
                    degree,
                    instrument,
                    time,
                } => {
                    self.registry.note_off(degree, instrument, time);
                }
                SynthMessage::AllNotesOff { time } => self.registry.all_notes_off(time),
            }
        }
    }

    /// Playback time of the next frame to be rendered.
    pub fn time(&self) -> f64 {
        self.frame_counter as f64 * self.config.frame_duration()
    }

    pub fn clock(&self) -> &SharedClock {
        &self.clock
    }

    pub fn active_notes(&self) -> usize {
        self.registry.len()
    }

    /// Note-ons refused because every slot held a sounding key.
    pub fn dropped_notes(&self) -> u64 {
        self.dropped.get()
    }

    pub fn registry(&self) -> &NoteRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut NoteRegistry {
        &mut self.registry
    }

    pub fn sequencer_mut(&mut self) -> Option<&mut Sequencer> {
        self.sequencer.as_mut()
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }
}

/// The control side: turns key presses into queued events.
#[cfg(feature = "rtrb")]
pub struct SynthController {
    tx: Producer<SynthMessage>,
    clock: SharedClock,
    dropped: DropCounter,
    instruments: Arc<InstrumentTable>,
}

#[cfg(feature = "rtrb")]
impl SynthController {
    /// Press `degree` on `instrument` now.
    pub fn note_on(&mut self, degree: i32, instrument: InstrumentId) -> Result<(), SynthError> {
        let time = self.clock.now();
        self.note_on_at(degree, instrument, time)
    }

    pub fn note_on_at(
        &mut self,
        degree: i32,
        instrument: InstrumentId,
        time: f64,
    ) -> Result<(), SynthError> {
        self.check_instrument(instrument)?;
        self.send(SynthMessage::NoteOn {
            degree,
            instrument,
            time,
        })
    }

    /// Release `degree` on `instrument` now.
    pub fn note_off(&mut self, degree: i32, instrument: InstrumentId) -> Result<(), SynthError> {
        let time = self.clock.now();
        self.note_off_at(degree, instrument, time)
    }

    pub fn note_off_at(
        &mut self,
        degree: i32,
        instrument: InstrumentId,
        time: f64,
    ) -> Result<(), SynthError> {
        self.check_instrument(instrument)?;
        self.send(SynthMessage::NoteOff {
            degree,
            instrument,
            time,
        })
    }

    pub fn all_notes_off(&mut self) -> Result<(), SynthError> {
        let time = self.clock.now();
        self.send(SynthMessage::AllNotesOff { time })
    }

    pub fn clock(&self) -> &SharedClock {
        &self.clock
    }

    /// How many note-ons the render side has had to refuse so far.
    pub fn dropped_notes(&self) -> u64 {
        self.dropped.get()
    }

    pub fn instruments(&self) -> &InstrumentTable {
        &self.instruments
    }

    fn check_instrument(&self, instrument: InstrumentId) -> Result<(), SynthError> {
        match self.instruments.get(instrument) {
            Some(_) => Ok(()),
            None => Err(SynthError::UnknownInstrument(instrument)),
        }
    }

    fn send(&mut self, msg: SynthMessage) -> Result<(), SynthError> {
        self.tx.push(msg).map_err(|err| {
            log::warn!("dropping control event: {:?}", err);
            SynthError::QueueFull
        })
    }
}

/// Build a connected controller / render pair sharing one clock.
#[cfg(feature = "rtrb")]
pub fn channel(
    config: SynthConfig,
    instruments: Arc<InstrumentTable>,
) -> (SynthController, Synth<Consumer<SynthMessage>>) {
    let (tx, rx) = RingBuffer::<SynthMessage>::new(config.queue_capacity);
    let clock = SharedClock::new();
    let dropped = DropCounter::new();

    log::info!(
        "synth at {} Hz, {} notes, {} instruments",
        config.sample_rate,
        config.max_notes,
        instruments.len()
    );

    let controller = SynthController {
        tx,
        clock: clock.clone(),
        dropped: dropped.clone(),
        instruments: Arc::clone(&instruments),
    };
    let synth = Synth::new(config, instruments, rx)
        .with_clock(clock)
        .with_drop_counter(dropped);
    (controller, synth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::envelope::Envelope;
    use crate::instruments::{BELL, HARMONICA, KICK};
    use crate::synth::{instrument::Instrument, message::NoMessages, note::Note};

    /// Flat tone that fails loudly if it is ever asked for a sample before
    /// its note starts.
    struct Click {
        envelope: Envelope,
    }

    impl Instrument for Click {
        fn name(&self) -> &str {
            "Click"
        }

        fn volume(&self) -> f64 {
            1.0
        }

        fn envelope(&self) -> &Envelope {
            &self.envelope
        }

        fn max_lifetime(&self) -> Option<f64> {
            Some(0.05)
        }

        fn waveform(&self, time: f64, note: &Note) -> f64 {
            assert!(
                note.life(time) >= 0.0,
                "rendered at {time} before note on at {}",
                note.on
            );
            1.0
        }
    }

    fn offline() -> Synth<NoMessages> {
        Synth::new(
            SynthConfig::default(),
            Arc::new(InstrumentTable::standard()),
            NoMessages,
        )
    }

    #[test]
    fn empty_synth_renders_silence() {
        let mut synth = offline();
        assert_eq!(synth.render_sample(0.0), 0.0);
        assert_eq!(synth.render_sample(42.0), 0.0);

        let mut buffer = vec![1.0f32; 512];
        synth.render_block(&mut buffer, 2);
        assert!(buffer.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn block_duplicates_mono_to_every_channel() {
        let mut synth = offline();
        synth.registry_mut().note_on(64, BELL, 0.0);

        let mut buffer = vec![0.0f32; 2 * 256];
        synth.render_block(&mut buffer, 2);
        for frame in buffer.chunks(2) {
            assert_eq!(frame[0], frame[1]);
        }
        assert!(buffer.iter().any(|&s| s != 0.0));
    }

    #[test]
    fn frame_counter_drives_time() {
        let mut synth = offline();
        let mut buffer = vec![0.0f32; 2 * 441];
        synth.render_block(&mut buffer, 2);
        assert!((synth.time() - 0.01).abs() < 1e-12);
        assert!((synth.clock().now() - 0.0).abs() < 1e-12);
        synth.render_block(&mut buffer, 2);
        assert!((synth.clock().now() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn sequencer_notes_reach_the_registry() {
        let mut sequencer = Sequencer::new(120.0, 4, 4).expect("valid meter");
        sequencer
            .add_channel(KICK, "X...X...X...X...")
            .expect("pattern fits");
        let mut synth = offline().with_sequencer(sequencer);

        // A little over half a second covers steps 1..=4, so the step-4 kick fires
        let mut buffer = vec![0.0f32; 24_000];
        synth.render_block(&mut buffer, 1);
        assert_eq!(synth.active_notes(), 1);
        assert!(buffer.iter().any(|&s| s != 0.0));
    }

    #[test]
    fn sequenced_notes_never_render_before_they_start() {
        let mut table = InstrumentTable::new();
        let click = table
            .register(Click {
                envelope: Envelope::adsr(0.0, 0.0, 1.0, 0.0),
            })
            .expect("empty table has room");

        let mut sequencer = Sequencer::new(120.0, 4, 4).expect("valid meter");
        // 0.125 s per step lands between frames at 44.1 kHz
        sequencer
            .add_channel(click, ".X.X.X.X.X.X.X.X")
            .expect("pattern fits");
        let mut synth =
            Synth::new(SynthConfig::default(), Arc::new(table), NoMessages).with_sequencer(sequencer);

        let mut buffer = vec![0.0f32; 44_100];
        synth.render_block(&mut buffer, 1);
        assert!(buffer.iter().any(|&s| s != 0.0));
    }

    #[test]
    fn render_sample_publishes_its_time() {
        let mut synth = offline();
        synth.render_sample(1.5);
        assert_eq!(synth.clock().now(), 1.5);
    }

    #[test]
    fn full_registry_counts_dropped_sequencer_hits() {
        let mut sequencer = Sequencer::new(120.0, 4, 4).expect("valid meter");
        sequencer
            .add_channel_with_pitch(BELL, 60, "X...............")
            .expect("pattern fits");
        let mut synth = Synth::new(
            SynthConfig::default().max_notes(1),
            Arc::new(InstrumentTable::standard()),
            NoMessages,
        )
        .with_sequencer(sequencer);
        synth.registry_mut().note_on(64, HARMONICA, 0.0);

        // One bar wraps back to step 0, whose bell has no free slot
        let mut buffer = vec![0.0f32; 2 * 44_100 + 10];
        synth.render_block(&mut buffer, 1);
        assert_eq!(synth.dropped_notes(), 1);
    }
}
