mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::Print,
    terminal, ExecutableCommand, QueueableCommand,
};

use alien_platformer::audio::{AudioQueue, AudioRequest};
use alien_platformer::compute::{self, Controls, Flow, Key, MenuAction};
use alien_platformer::config::{HEIGHT, WIDTH};
use alien_platformer::entities::{GameSession, Mode, Point};
use alien_platformer::level::Level;

use display::Screen;

#[derive(Parser)]
#[command(name = "alien_platformer")]
#[command(about = "A small tile-based platformer played in the terminal")]
struct Cli {
    /// Start with sound effects and music switched off
    #[arg(long)]
    mute: bool,

    /// Log destination; the terminal itself is busy drawing the game
    #[arg(long, default_value = "alien_platformer.log")]
    log_file: PathBuf,

    /// Frames per second. Physics advances one fixed step per frame.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,
}

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// Without key-release events a key counts as "held" while its last press or
/// repeat event is younger than this. It has to outlast the OS delay before
/// auto-repeat kicks in (250-600 ms), not just the gap between repeats.
const HOLD_WINDOW: Duration = Duration::from_millis(500);

/// How long a key stays held after its last press/repeat. `None` means until
/// its release event arrives, which needs the keyboard enhancement flags.
fn hold_window(keyboard_enhanced: bool) -> Option<Duration> {
    if keyboard_enhanced {
        None
    } else {
        Some(HOLD_WINDOW)
    }
}

fn is_held(
    key_seen: &HashMap<KeyCode, Instant>,
    keys: &[KeyCode],
    now: Instant,
    window: Option<Duration>,
) -> bool {
    keys.iter().any(|key| match (key_seen.get(key), window) {
        (Some(_), None) => true,
        (Some(&last), Some(window)) => now.saturating_duration_since(last) <= window,
        (None, _) => false,
    })
}

const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];

// ── Input translation ─────────────────────────────────────────────────────────

fn button_center(state: &GameSession, action: MenuAction) -> Option<Point> {
    compute::menu_buttons(&state.audio)
        .iter()
        .find(|b| b.action == action)
        .map(|b| b.rect.center())
}

/// Keyboard shortcuts that stand in for clicks on the menu and end screens.
fn shortcut_click(state: &GameSession, code: KeyCode) -> Option<Point> {
    match (state.mode, code) {
        (Mode::Menu, KeyCode::Enter | KeyCode::Char(' ')) => {
            button_center(state, MenuAction::Start)
        }
        (Mode::Menu, KeyCode::Char('s' | 'S' | 'm' | 'M')) => {
            button_center(state, MenuAction::ToggleSound)
        }
        (Mode::Menu, KeyCode::Char('q' | 'Q') | KeyCode::Esc) => {
            button_center(state, MenuAction::Exit)
        }
        (Mode::Win | Mode::Lose, KeyCode::Enter | KeyCode::Char(' ')) => {
            Some(Point::new(WIDTH / 2.0, HEIGHT / 2.0))
        }
        _ => None,
    }
}

fn key_for(code: KeyCode) -> Key {
    match code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | ' ') => Key::Jump,
        _ => Key::Other,
    }
}

/// Ring the bell for sound effects; music has no terminal equivalent and is
/// only logged.
fn play_requests<W: Write>(out: &mut W, audio: &mut AudioQueue) -> std::io::Result<()> {
    for request in audio.drain() {
        match request {
            AudioRequest::Sound(_) => {
                out.queue(Print('\x07'))?;
            }
            AudioRequest::Music(track) => log::info!("music start: {track}"),
            AudioRequest::Volume(volume) => log::debug!("music volume: {volume}"),
            AudioRequest::StopMusic => log::info!("music stop"),
        }
    }
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the menu's Exit button (or Ctrl-C).
///
/// Each frame: drain input events (they only ever touch the session
/// synchronously), sample held movement keys, run one update, then one draw.
/// Input arrives over a channel from a dedicated reader thread, so the
/// session itself only ever has one writer.
fn game_loop<W: Write>(
    out: &mut W,
    mut state: GameSession,
    rx: &mpsc::Receiver<Event>,
    frame: Duration,
    keyboard_enhanced: bool,
) -> std::io::Result<()> {
    let mut audio = AudioQueue::new();
    let window = hold_window(keyboard_enhanced);

    // Maps each held key → the instant it was last seen (press or repeat).
    let mut key_seen: HashMap<KeyCode, Instant> = HashMap::new();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let click = match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => match kind {
                    KeyEventKind::Press => {
                        key_seen.insert(code, frame_start);
                        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                            log::info!("interrupted");
                            return Ok(());
                        }
                        if state.mode == Mode::Playing {
                            state = compute::on_key_down(&state, key_for(code), &mut audio);
                            None
                        } else {
                            shortcut_click(&state, code)
                        }
                    }
                    KeyEventKind::Repeat => {
                        key_seen.insert(code, frame_start);
                        None
                    }
                    KeyEventKind::Release => {
                        key_seen.remove(&code);
                        None
                    }
                },
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => Some(display::cell_to_world(column, row)),
                _ => None,
            };

            if let Some(pos) = click {
                match compute::on_mouse_down(&state, pos) {
                    Flow::Continue(next) => state = next,
                    Flow::Exit => return Ok(()),
                }
            }
        }

        // ── Update ────────────────────────────────────────────────────────────
        let controls = Controls {
            left: is_held(&key_seen, &LEFT_KEYS, frame_start, window),
            right: is_held(&key_seen, &RIGHT_KEYS, frame_start, window),
        };
        state = compute::tick(&state, controls, &mut audio);
        play_requests(out, &mut audio)?;

        // ── Draw ──────────────────────────────────────────────────────────────
        let (cols, rows) = terminal::size()?;
        display::render(out, &state, Screen { cols, rows })?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let level = Level::standard().context("built-in level is malformed")?;
    log::info!(
        "level {}x{}: {} solid tiles, goal {:?}",
        level.cols(),
        level.rows(),
        level.solids().len(),
        level.goal()
    );
    let state = compute::new_session(Rc::new(level), !cli.mute);
    let frame = Duration::from_secs_f64(1.0 / f64::from(cli.fps));

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal. Only
    // Kitty-protocol terminals honour the flags; the rest silently ignore them
    // and would never release a key, so ask first. Must run before the reader
    // thread starts since the query consumes terminal input.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    log::info!(
        "key release events {}",
        if keyboard_enhanced { "available" } else { "unavailable, using hold window" }
    );

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    log::info!("starting at {} fps, sound {}", cli.fps, if cli.mute { "off" } else { "on" });
    let result = game_loop(&mut out, state, &rx, frame, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("game loop failed")
}
