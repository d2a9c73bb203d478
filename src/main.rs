//! Snake Arcade entry point
//!
//! Parses the command line, builds the session and runs the fixed-tick loop.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};

use snake_arcade::audio::AudioManager;
use snake_arcade::input::{InputState, map_key};
use snake_arcade::persistence::FileStore;
use snake_arcade::renderer::{self, TerminalRenderer};
use snake_arcade::{GameSession, Settings};

#[derive(Parser)]
#[command(name = "snake-arcade")]
#[command(version, about = "Classic snake: eat apples, don't bite yourself, stay on the board")]
struct Cli {
    /// JSON settings file (missing keys use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where the best score is kept
    #[arg(long)]
    best_score_file: Option<PathBuf>,

    /// Playfield width in pixels
    #[arg(long)]
    width: Option<i32>,

    /// Playfield height in pixels
    #[arg(long)]
    height: Option<i32>,

    /// Milliseconds per tick
    #[arg(long)]
    tick_ms: Option<u64>,

    /// RNG seed for apple placement (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the terminal bell
    #[arg(long)]
    mute: bool,

    /// Write the effective settings to this file and exit
    #[arg(long)]
    write_config: Option<PathBuf>,

    /// Append log output to this file instead of printing it on exit
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        if let Some(path) = &self.best_score_file {
            settings.best_score_path = path.clone();
        }
        if let Some(width) = self.width {
            settings.window_width = width;
        }
        if let Some(height) = self.height {
            settings.window_height = height;
        }
        if let Some(ms) = self.tick_ms {
            settings.tick_interval_ms = ms;
        }
        if self.mute {
            settings.muted = true;
        }
        Ok(settings)
    }
}

/// Log sink shared with env_logger. Lines are held while the game owns the
/// terminal and written to stderr afterwards.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn take(&self) -> Vec<u8> {
        self.0
            .lock()
            .map(|mut buf| std::mem::take(&mut *buf))
            .unwrap_or_default()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self
            .0
            .lock()
            .map_err(|_| io::Error::other("log buffer poisoned"))?;
        inner.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    let buffer = LogBuffer::default();
    match &cli.log_file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            logger.target(env_logger::Target::Pipe(Box::new(buffer.clone())));
        }
    }
    logger.init();

    let result = play(&cli);

    let held = buffer.take();
    if !held.is_empty() {
        let _ = io::stderr().write_all(&held);
    }
    result
}

fn play(cli: &Cli) -> Result<()> {
    let settings = cli.settings()?;

    if let Some(path) = &cli.write_config {
        settings.validate().context("Invalid settings")?;
        settings.save(path)?;
        return Ok(());
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("Snake Arcade starting (seed {})", seed);

    let mut audio = AudioManager::new();
    audio.set_master_volume(settings.effective_volume());

    let store = FileStore::new(settings.best_score_path.clone());
    let tick_interval = settings.tick_interval();
    let mut session = GameSession::new(settings, store, audio, seed)?;

    run(&mut session, tick_interval)
}

/// Poll input, tick, draw, sleep - until the player quits
fn run(session: &mut GameSession<FileStore, AudioManager>, tick_interval: Duration) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.setup()?;

    let mut input = InputState::new();
    term.draw(&renderer::compose(session.state()))?;

    loop {
        let frame_start = Instant::now();
        while event::poll(Duration::ZERO).context("Failed to poll input")? {
            if let Event::Key(key) = event::read().context("Failed to read input")? {
                input.apply(map_key(key));
            }
        }
        if input.quit_requested() {
            break;
        }

        session.update(&input.take_tick_input());
        term.draw(&renderer::compose(session.state()))?;

        thread::sleep(frame_delay(tick_interval, frame_start.elapsed()));
    }

    term.restore()?;
    log::info!("Bye (best score {})", session.state().best_score);
    Ok(())
}

/// Sleep left in a tick after the frame's own work
fn frame_delay(tick_interval: Duration, spent: Duration) -> Duration {
    tick_interval.saturating_sub(spent)
}
