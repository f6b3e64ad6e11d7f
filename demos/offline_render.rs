/// Plays a short phrase through the control queue without an audio device
/// Shows note on/off messaging, retriggering and envelope tails

use std::sync::Arc;

use polytone::{
    instruments::{BELL, HARMONICA},
    synth::{self, InstrumentTable},
    SynthConfig,
};

fn peak(buffer: &[f32]) -> f32 {
    buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Offline Render ===\n");

    let config = SynthConfig::default();
    let block = vec![0.0f32; 4410]; // 100ms mono
    let mut buffer = block.clone();

    let (mut controller, mut synth) = synth::channel(config, Arc::new(InstrumentTable::standard()));

    println!("Harmonica chord (64, 68, 71) at t=0");
    for degree in [64, 68, 71] {
        controller.note_on_at(degree, HARMONICA, 0.0)?;
    }
    synth.render_block(&mut buffer, 1);
    println!("  active notes: {}", synth.active_notes());
    println!("  peak: {:.3}", peak(&buffer));

    println!("\nBell on 76 at t=0.1");
    controller.note_on_at(76, BELL, 0.1)?;
    synth.render_block(&mut buffer, 1);
    println!("  active notes: {}", synth.active_notes());

    println!("\nReleasing the chord at t=0.2");
    for degree in [64, 68, 71] {
        controller.note_off_at(degree, HARMONICA, 0.2)?;
    }

    for step in 0..20 {
        buffer.copy_from_slice(&block);
        synth.render_block(&mut buffer, 1);
        if step % 5 == 4 {
            println!(
                "  t={:.1}s active notes: {} peak: {:.3}",
                synth.time(),
                synth.active_notes(),
                peak(&buffer)
            );
        }
    }

    println!("\nEverything should have rung out by now.");
    Ok(())
}
