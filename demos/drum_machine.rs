/// Steps a drum pattern through a synth without an audio device
/// Prints which steps fire and how many notes are alive per bar

use std::sync::Arc;

use polytone::{
    instruments::{HIHAT, KICK, SNARE},
    sequencing::Sequencer,
    synth::{InstrumentTable, NoMessages, Synth},
    SynthConfig,
};

fn main() -> Result<(), polytone::SynthError> {
    println!("=== Drum Machine ===\n");

    let mut sequencer = Sequencer::new(120.0, 4, 4)?;
    sequencer.add_channel(KICK, "X...X...X...X...")?;
    sequencer.add_channel(SNARE, "....X.......X...")?;
    sequencer.add_channel_with_pitch(HIHAT, 76, "X.X.X.X.X.X.X.X.")?;

    for channel in sequencer.channels() {
        println!("  {:?}: {}", channel.instrument, channel.pattern);
    }
    println!();

    let config = SynthConfig::default();
    let mut synth = Synth::new(config, Arc::new(InstrumentTable::standard()), NoMessages)
        .with_sequencer(sequencer);

    // One bar at 120 bpm is two seconds
    let mut buffer = vec![0.0f32; config.sample_rate as usize / 8];
    for bar in 0..2 {
        let mut peak = 0.0f32;
        for _ in 0..16 {
            synth.render_block(&mut buffer, 1);
            peak = buffer.iter().fold(peak, |acc, &x| acc.max(x.abs()));
        }
        println!(
            "bar {}: {} notes alive at the end, peak {:.3}",
            bar + 1,
            synth.active_notes(),
            peak
        );
    }

    Ok(())
}
