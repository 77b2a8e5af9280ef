use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    style::Color,
    terminal,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::EnvFilter;

use boss_rush::audio::{open_player, CuePlayer};
use boss_rush::compute::{init_state, tick};
use boss_rush::display::Screen;
use boss_rush::entities::{GameState, GameStatus, FPS};
use boss_rush::input::KeyTracker;

const FRAME: Duration = Duration::from_micros(1_000_000 / FPS);

#[derive(Parser, Debug)]
#[command(name = "boss_rush")]
#[command(about = "One ship, one boss, one arena")]
struct Cli {
    /// Seed for the boss's decisions; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs here (filtered by RUST_LOG, default `info`)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Disable sound cues
    #[arg(long)]
    mute: bool,

    /// How long the win/lose banner stays up, in milliseconds
    #[arg(long, default_value_t = 5000)]
    end_delay_ms: u64,
}

// ── Logging ──────────────────────────────────────────────────────────────────

/// The terminal is owned by the game, so logs only go to a file.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ── Game loop ────────────────────────────────────────────────────────────────

/// Runs one match at 60 FPS.  Key events are fed to a `KeyTracker`; each
/// frame takes whatever it collected.
fn game_loop<W: Write>(
    screen: &mut Screen<W>,
    audio: &mut dyn CuePlayer,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
) -> Result<GameState> {
    let mut state = init_state();
    let mut keys = KeyTracker::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(key) => keys.record(key, frame),
                Event::Resize(cols, rows) => screen.resize(cols, rows),
                _ => {}
            }
        }
        let input = keys.frame_input(frame);

        let outcome = tick(&state, input, rng);
        audio.play_all(&outcome.cues);
        state = outcome.state;

        if state.status == GameStatus::Closed {
            return Ok(state);
        }

        screen.render(&state).context("failed to draw frame")?;

        if state.status.is_terminal() {
            return Ok(state);
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

fn show_result<W: Write>(screen: &mut Screen<W>, status: GameStatus, delay: Duration) -> Result<()> {
    let (text, color) = match status {
        GameStatus::PlayerWon => ("You WIN! :)", Color::Green),
        GameStatus::PlayerLost => ("You LOSE! :(", Color::Red),
        GameStatus::Running | GameStatus::Closed => return Ok(()),
    };
    screen
        .render_end_message(text, color)
        .context("failed to draw end banner")?;
    thread::sleep(delay);
    Ok(())
}

fn play_match<W: Write>(
    screen: &mut Screen<W>,
    audio: &mut dyn CuePlayer,
    rng: &mut StdRng,
    cli: &Cli,
) -> Result<()> {
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

    let viewport = screen.viewport();
    info!(cols = viewport.cols, rows = viewport.rows, seed = ?cli.seed, "match started");

    let state = game_loop(screen, audio, rng, &rx)?;
    info!(status = ?state.status, frames = state.frame, "match finished");
    show_result(screen, state.status, Duration::from_millis(cli.end_delay_ms))
}

// ── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut audio = open_player(cli.mute);

    let (cols, rows) = terminal::size().unwrap_or((120, 40));
    let mut screen = Screen::new(BufWriter::new(stdout()), cols, rows);

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    let result = screen
        .enter()
        .context("failed to set up the terminal")
        .and_then(|()| play_match(&mut screen, audio.as_mut(), &mut rng, &cli));

    // Always restore the terminal, including after a failed setup
    screen.leave();
    let _ = terminal::disable_raw_mode();

    result
}
