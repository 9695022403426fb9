mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Mutex;
use std::thread;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal, ExecutableCommand,
};

use snake_game::engine::GameEngine;
use snake_game::entities::{Difficulty, GameStatus};
use snake_game::high_score::{self, FileScoreStore, MemoryScoreStore, ScoreStore};
use snake_game::input::{map_key, Command, DifficultyMenu, MenuChoice};
use snake_game::schedule::Ticker;

#[derive(Parser)]
#[command(name = "snake_game")]
#[command(version, about = "Classic snake in the terminal")]
struct Cli {
    /// Difficulty highlighted when the menu opens
    #[arg(long, value_enum, default_value = "medium")]
    difficulty: DifficultyArg,

    /// High-score file (default: $HOME/.snake_highscore.dat)
    #[arg(long)]
    score_file: Option<PathBuf>,

    /// Keep the high score in memory only
    #[arg(long)]
    no_save: bool,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal belongs to the game, so logs only ever go to a file.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let initial = Difficulty::from(cli.difficulty);
    if cli.no_save {
        play(MemoryScoreStore::default(), initial)
    } else {
        let store = FileScoreStore::new(cli.score_file.unwrap_or_else(high_score::default_path));
        tracing::info!(path = %store.path().display(), "using high score file");
        play(store, initial)
    }
}

fn play<S: ScoreStore>(store: S, initial: Difficulty) -> Result<()> {
    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)
        .context("failed to enter alternate screen")?;
    out.execute(cursor::Hide)?;

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
            Err(err) => {
                tracing::error!(%err, "failed to read terminal event");
                break;
            }
        }
    });

    let result = run(&mut out, &rx, store, initial);

    // Always restore the terminal
    if let Err(err) = out.execute(cursor::Show) {
        tracing::error!(%err, "failed to show cursor");
    }
    if let Err(err) = out.execute(terminal::LeaveAlternateScreen) {
        tracing::error!(%err, "failed to leave alternate screen");
    }
    if let Err(err) = terminal::disable_raw_mode() {
        tracing::error!(%err, "failed to disable raw mode");
    }

    result
}

fn run<W: Write, S: ScoreStore>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    store: S,
    initial: Difficulty,
) -> Result<()> {
    let mut engine = GameEngine::new(store, initial);
    let mut menu = DifficultyMenu::new(initial);

    let (cols, rows) = terminal::size()?;
    let (need_cols, need_rows) = display::required_size(engine.state());
    if cols < need_cols || rows < need_rows {
        bail!("terminal is {cols}x{rows}, the game needs at least {need_cols}x{need_rows}");
    }

    loop {
        let difficulty = match choose_difficulty(out, rx, &mut menu, engine.high_score())? {
            MenuChoice::Quit => break,
            MenuChoice::Start(difficulty) => difficulty,
        };
        menu.selected = difficulty;
        engine.reset(difficulty);

        if game_loop(out, &mut engine, rx)? {
            break;
        }
        // Play Again: back to difficulty selection
    }
    Ok(())
}

// ── Menu ──────────────────────────────────────────────────────────────────────

fn next_key(rx: &mpsc::Receiver<Event>) -> Result<Option<KeyEvent>> {
    match rx.recv().context("input thread stopped")? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}

fn choose_difficulty<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    menu: &mut DifficultyMenu,
    high_score: u32,
) -> Result<MenuChoice> {
    loop {
        display::render_menu(out, menu.selected, high_score).context("failed to draw menu")?;
        if let Some(key) = next_key(rx)? {
            if let Some(choice) = menu.handle_key(key) {
                return Ok(choice);
            }
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program,  `false` → back to the menu.
///
/// While the round runs the loop sleeps on the input channel until the next
/// tick is due.  Once the ticker has stopped it blocks on input alone.
fn game_loop<W: Write, S: ScoreStore>(
    out: &mut W,
    engine: &mut GameEngine<S>,
    rx: &mpsc::Receiver<Event>,
) -> Result<bool> {
    let mut ticker = Ticker::new(engine.tick_interval(), Instant::now());
    display::render(out, engine.state()).context("failed to draw frame")?;

    loop {
        let event = if ticker.is_running() {
            match rx.recv_timeout(ticker.time_until_due(Instant::now())) {
                Ok(ev) => Some(ev),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => bail!("input thread stopped"),
            }
        } else {
            Some(rx.recv().context("input thread stopped")?)
        };

        let mut redraw = false;
        match event {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => match map_key(key) {
                Command::Turn(direction) if engine.status() == GameStatus::Running => {
                    engine.set_direction(direction);
                }
                Command::PlayAgain if engine.status() == GameStatus::GameOver => {
                    return Ok(false);
                }
                Command::Quit => return Ok(true),
                _ => {}
            },
            Some(Event::Resize(..)) => redraw = true,
            _ => {}
        }

        if ticker.drive(engine, Instant::now()).is_some() {
            redraw = true;
        }
        if redraw {
            display::render(out, engine.state()).context("failed to draw frame")?;
        }
    }
}
