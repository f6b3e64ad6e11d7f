//! Keyboard input - maps a row of letter keys to scale degrees

use std::io::stdout;
use std::time::{Duration, Instant};

use color_eyre::eyre::Result as EyreResult;
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute, terminal,
};

use polytone::synth::{InstrumentId, SynthController};

/// Bottom letter row, one scale degree per key
pub const KEY_ROW: [char; 7] = ['z', 'x', 'c', 'v', 'b', 'n', 'm'];

/// Degree played by the first key
pub const BASE_DEGREE: i32 = 64;

/// Without release events, a key counts as released this long after its
/// last press (or auto-repeat)
const AUTO_RELEASE: Duration = Duration::from_millis(600);

const POLL_INTERVAL: Duration = Duration::from_millis(5);

pub fn key_to_degree(key: char) -> Option<i32> {
    let key = key.to_ascii_lowercase();
    KEY_ROW
        .iter()
        .position(|&k| k == key)
        .map(|idx| BASE_DEGREE + idx as i32)
}

/// Read keys until Esc/q, turning them into note events.
pub fn play(controller: &mut SynthController, instrument: InstrumentId) -> EyreResult<()> {
    terminal::enable_raw_mode()?;

    // Release events need the kitty keyboard protocol
    let releases = terminal::supports_keyboard_enhancement().unwrap_or(false);
    if releases {
        execute!(
            stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    log::debug!("key release events supported: {}", releases);

    let result = event_loop(controller, instrument, releases);

    if releases {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
    }
    terminal::disable_raw_mode()?;
    result
}

fn event_loop(
    controller: &mut SynthController,
    instrument: InstrumentId,
    releases: bool,
) -> EyreResult<()> {
    // Keys currently sounding and when they were last pressed
    let mut held: Vec<(i32, Instant)> = Vec::with_capacity(KEY_ROW.len());

    loop {
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) = event::read()?
            {
                match (code, kind) {
                    (KeyCode::Esc, _) | (KeyCode::Char('q'), KeyEventKind::Press) => break,
                    (KeyCode::Char('c'), KeyEventKind::Press)
                        if modifiers.contains(KeyModifiers::CONTROL) =>
                    {
                        break
                    }
                    (KeyCode::Char(c), KeyEventKind::Press) => {
                        if let Some(degree) = key_to_degree(c) {
                            match held.iter_mut().find(|(d, _)| *d == degree) {
                                // Terminal auto-repeat: keep it alive
                                Some((_, pressed)) => *pressed = Instant::now(),
                                None => {
                                    controller.note_on(degree, instrument)?;
                                    held.push((degree, Instant::now()));
                                }
                            }
                        }
                    }
                    (KeyCode::Char(c), KeyEventKind::Release) => {
                        if let Some(degree) = key_to_degree(c) {
                            controller.note_off(degree, instrument)?;
                            held.retain(|(d, _)| *d != degree);
                        }
                    }
                    _ => {}
                }
            }
        }

        if !releases {
            let now = Instant::now();
            let mut idx = 0;
            while idx < held.len() {
                let (degree, pressed) = held[idx];
                if now.duration_since(pressed) >= AUTO_RELEASE {
                    controller.note_off(degree, instrument)?;
                    held.swap_remove(idx);
                } else {
                    idx += 1;
                }
            }
        }
    }

    controller.all_notes_off()?;
    Ok(())
}
