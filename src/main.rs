use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{info, warn};

use blaster_game::config::GameConfig;
use blaster_game::display::TerminalRenderer;
use blaster_game::game::{Control, Game};
use blaster_game::input::{HoldTracker, FIRST_REPEAT_GRACE_MS, REPEAT_HOLD_MS};
use blaster_game::random::SeededRandom;

/// Upper bound on a single wait when no timer is pending (after game over).
const IDLE_WAIT: Duration = Duration::from_secs(3600);

fn init_logging() {
    // The terminal is in raw alternate-screen mode, so stay quiet unless
    // RUST_LOG asks otherwise.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(terminal::SetTitle(GameConfig::default().title))?;

    // Request key-release events from the terminal. Kitty-protocol terminals
    // support this; others fall back to the hold window.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    if !keyboard_enhanced {
        warn!(
            "terminal does not report key releases, inferring them after \
             {FIRST_REPEAT_GRACE_MS} ms (first press) or {REPEAT_HOLD_MS} ms (repeats)"
        );
    }

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(e) => {
                warn!("input thread stopped: {e}");
                break;
            }
        }
    });

    let result = run(&mut out, &rx, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    keyboard_enhanced: bool,
) -> anyhow::Result<()> {
    let config = GameConfig::default();
    let (width, height) = terminal::size()?;
    let mut renderer = TerminalRenderer::new(out, config.clone(), width, height);
    let mut game = Game::new(config, SeededRandom::from_entropy())?;

    let start = Instant::now();
    let elapsed_ms = || start.elapsed().as_millis() as u64;
    let mut hold = HoldTracker::new();

    game.start();
    info!("game started");

    loop {
        game.run_due(elapsed_ms(), &mut renderer)?;

        // Synthesize the release a basic terminal never sends.
        if let Some(key) = hold.expire(elapsed_ms()) {
            game.key_up(key);
        }

        let wait_until = |deadline: Option<u64>| {
            deadline
                .map(|at| Duration::from_millis(at.saturating_sub(elapsed_ms())))
                .unwrap_or(IDLE_WAIT)
        };
        let wait = wait_until(game.next_deadline()).min(wait_until(hold.deadline()));

        let ev = match rx.recv_timeout(wait) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => {
                warn!("input channel closed, leaving the game");
                return Ok(());
            }
        };

        // Key events are timed from now, not from the last timer.
        game.run_due(elapsed_ms(), &mut renderer)?;

        match ev {
            Event::Key(KeyEvent {
                code, kind, modifiers, ..
            }) => {
                if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }
                let key = match code {
                    KeyCode::Char(c) => c,
                    _ => continue,
                };
                let control = match kind {
                    KeyEventKind::Press => {
                        if !keyboard_enhanced && matches!(key, 'h' | 'H' | 'l' | 'L') {
                            hold.press(key, elapsed_ms());
                        }
                        game.key_down(key)
                    }
                    // Auto-repeat is not a new press.
                    KeyEventKind::Repeat => Control::Continue,
                    KeyEventKind::Release => game.key_up(key),
                };
                if control == Control::Quit {
                    return Ok(());
                }
            }
            Event::Resize(w, h) => renderer.resize(w, h),
            _ => {}
        }
    }
}
