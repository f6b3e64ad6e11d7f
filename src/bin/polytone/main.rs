//! polytone - terminal synthesizer
//!
//! Play the harmonica on the Z X C V B N M keys over a drum loop.
//!
//! Run with: cargo run -- [--tempo <bpm>] [--no-drums]

mod app;
mod keyboard;

use app::Polytone;
use clap::Parser;
use color_eyre::eyre::Result as EyreResult;

#[derive(Parser)]
#[command(name = "polytone")]
#[command(version, about = "Polyphonic terminal synthesizer", long_about = None)]
struct Cli {
    /// Drum loop tempo in beats per minute
    #[arg(short, long, default_value = "120")]
    tempo: f64,

    /// Play without the drum loop
    #[arg(long)]
    no_drums: bool,
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    env_logger::init();

    let cli = Cli::parse();

    Polytone::new()
        .tempo(cli.tempo)
        .drums(!cli.no_drums)
        .run()
}
