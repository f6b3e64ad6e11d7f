//! Polytone - application builder and runner

use std::sync::Arc;

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use polytone::{
    instruments::{HARMONICA, HIHAT, KICK, SNARE},
    sequencing::Sequencer,
    synth::{self, InstrumentId, InstrumentTable},
    SynthConfig,
};

use super::keyboard;

const KICK_PATTERN: &str = "X...X...X...X...";
const SNARE_PATTERN: &str = "....X.......X...";
const HIHAT_PATTERN: &str = "X.X.X.X.X.X.X.X.";

/// Main application builder
pub struct Polytone {
    tempo: f64,
    drums: bool,
    lead: InstrumentId,
}

impl Polytone {
    pub fn new() -> Self {
        Self {
            tempo: 120.0,
            drums: true,
            lead: HARMONICA,
        }
    }

    /// Set the drum tempo in beats per minute
    pub fn tempo(mut self, bpm: f64) -> Self {
        self.tempo = bpm;
        self
    }

    /// Enable or disable the drum loop
    pub fn drums(mut self, enabled: bool) -> Self {
        self.drums = enabled;
        self
    }

    /// Run the application (takes over the terminal, plays audio)
    pub fn run(self) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = config.sample_rate().0 as f64;
        let channels = config.channels() as usize;

        let instruments = Arc::new(InstrumentTable::standard());
        let (mut controller, mut synth) = synth::channel(
            SynthConfig::new().sample_rate(sample_rate),
            Arc::clone(&instruments),
        );

        if self.drums {
            let mut sequencer = Sequencer::new(self.tempo, 4, 4)?;
            sequencer.add_channel(KICK, KICK_PATTERN)?;
            sequencer.add_channel(SNARE, SNARE_PATTERN)?;
            sequencer.add_channel(HIHAT, HIHAT_PATTERN)?;
            synth = synth.with_sequencer(sequencer);
        }

        println!("=== Polytone ===");
        println!("Sample rate: {} Hz", sample_rate);
        println!("Channels: {}", channels);
        if self.drums {
            println!("Drums: {} bpm", self.tempo);
        }
        if let Some(lead) = instruments.get(self.lead) {
            println!("Lead: {}", lead.name());
        }
        println!();
        println!("Keys: {}", keyboard::KEY_ROW.iter().collect::<String>().to_uppercase());
        println!("Press Esc or q to quit");
        println!();

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| synth.render_block(data, channels),
            |err| log::error!("audio stream error: {}", err),
            None,
        )?;
        stream.play()?;

        keyboard::play(&mut controller, self.lead)
    }
}

impl Default for Polytone {
    fn default() -> Self {
        Self::new()
    }
}
