mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use fighter_fury::compute::{init_state, tick};
use fighter_fury::input::{handle_event, Flow, InputEvent, Key};
use fighter_fury::{GameEvent, GameState, Orientation, Settings};

use display::Viewport;

/// A movement key counts as "held" if its last press/repeat event arrived
/// within this many frames. Covers terminals that don't emit key-release
/// events: the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames
/// (≈130 ms at 60 FPS) is refreshed before it expires.
const HOLD_WINDOW: u64 = 8;

#[derive(Parser, Debug)]
#[command(name = "fighter_fury", about = "Shoot down the fleet before it reaches you")]
struct Args {
    /// JSON settings file; missing fields use the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Which edge the player defends: vertical (bottom) or horizontal (left)
    #[arg(short, long, value_parser = parse_orientation)]
    orientation: Option<Orientation>,

    /// Seed for enemy fire
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_orientation(s: &str) -> Result<Orientation, String> {
    Orientation::from_str(s).ok_or_else(|| format!("unknown orientation '{s}'"))
}

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|key| {
        key_frame
            .get(key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    })
}

const NEAR_KEYS: [KeyCode; 6] = [
    KeyCode::Left,
    KeyCode::Up,
    KeyCode::Char('a'),
    KeyCode::Char('A'),
    KeyCode::Char('w'),
    KeyCode::Char('W'),
];
const FAR_KEYS: [KeyCode; 6] = [
    KeyCode::Right,
    KeyCode::Down,
    KeyCode::Char('d'),
    KeyCode::Char('D'),
    KeyCode::Char('s'),
    KeyCode::Char('S'),
];

/// One-shot keys. Movement is handled through the held-key map instead.
fn action_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Key> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Key::Quit),
        KeyCode::Char(' ') => Some(Key::Fire),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Key::Start),
        _ => None,
    }
}

/// Feed one event to the controller. Returns `true` when the player quit.
fn dispatch(state: &mut GameState, event: InputEvent) -> bool {
    match handle_event(state, event) {
        Flow::Continue(next) => {
            *state = next;
            false
        }
        Flow::Quit => true,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: a `key_frame` map records the frame number of the last
/// press/repeat event for every key. Each frame, movement keys that went
/// fresh or stale are turned into `KeyDown` / `KeyUp` events, so terminals
/// with and without key-release reporting drive the same intent flags.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
) -> anyhow::Result<()> {
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let frame_budget = state.settings.frame();
    let hit_pause = state.settings.hit_pause();

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let input = match ev {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => match kind {
                    KeyEventKind::Press => {
                        key_frame.insert(code.clone(), frame);
                        action_key(code, modifiers).map(InputEvent::KeyDown)
                    }
                    KeyEventKind::Repeat => {
                        key_frame.insert(code.clone(), frame);
                        None
                    }
                    KeyEventKind::Release => {
                        key_frame.remove(&code);
                        None
                    }
                },
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    let (width, height) = terminal::size()?;
                    let (x, y) = Viewport::new(width, height, state.playfield()).to_world(column, row);
                    Some(InputEvent::PointerClick { x, y })
                }
                _ => None,
            };
            if let Some(input) = input {
                if dispatch(state, input) {
                    return Ok(());
                }
            }
        }

        // ── Movement intent from held keys ────────────────────────────────────
        let near = is_held(&key_frame, &NEAR_KEYS, frame);
        let far = is_held(&key_frame, &FAR_KEYS, frame);
        if near != state.player.moving_toward_near_edge {
            let ev = if near { InputEvent::KeyDown(Key::MoveNear) } else { InputEvent::KeyUp(Key::MoveNear) };
            dispatch(state, ev);
        }
        if far != state.player.moving_toward_far_edge {
            let ev = if far { InputEvent::KeyDown(Key::MoveFar) } else { InputEvent::KeyUp(Key::MoveFar) };
            dispatch(state, ev);
        }

        if state.is_active() {
            *state = tick(state, rng);
            // Stall the whole loop, input included, after a hit
            if state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::LifeLost { .. }))
            {
                thread::sleep(hit_pause);
            }
        }

        display::render(out, state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            thread::sleep(frame_budget - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging() -> anyhow::Result<PathBuf> {
    let path = std::env::temp_dir().join("fighter_fury.log");
    let file = std::fs::File::create(&path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    // stdout is the game screen, so logs go to a file
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(path)
}

fn load_settings(args: &Args) -> anyhow::Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(orientation) = args.orientation {
        settings.orientation = orientation;
    }
    settings.validate().context("validating settings")?;
    Ok(settings)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let log_path = init_logging()?;
    let settings = load_settings(&args)?;
    log::info!("Logging to {}, settings: {:?}", log_path.display(), settings);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut state = init_state(settings);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

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
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &mut state, &rx, &mut rng);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    log::info!(
        "Exiting: high score {}, last score {}",
        state.stats.high_score,
        state.stats.score
    );
    result
}
