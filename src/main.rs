//! Terminal runner (default binary).
//!
//! Takes no arguments. Enters full-screen mode, plays until the player quits
//! or the stack tops out, restores the terminal and exits with status 0.
//!
//! Set `TETRIS_LOG_FILE` to capture logs; they never go to the screen.

use std::fs::File;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use log::info;

use tui_blockfall::core::{GameSession, SimpleRng};
use tui_blockfall::engine::{self, Clock, GameConfig, LoopExit, SystemClock};
use tui_blockfall::input::TerminalInput;
use tui_blockfall::term::TerminalRenderer;

const ENV_LOG_FILE: &str = "TETRIS_LOG_FILE";

fn main() -> Result<()> {
    init_logging()?;
    let config = GameConfig::from_env()?;

    let mut term = TerminalRenderer::new();
    if let Err(err) = term.enter() {
        let _ = term.exit();
        return Err(err.context("failed to enter full-screen terminal mode"));
    }

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let exit = result?;
    info!("session ended: {:?}", exit);
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<LoopExit> {
    let mut clock = SystemClock::new();
    let seed = config.seed.unwrap_or_else(clock_seed);
    info!("starting session with seed {seed}");

    let mut session =
        GameSession::with_gravity(SimpleRng::new(seed), config.gravity(), clock.now_ms());
    let mut input = TerminalInput::new();

    engine::run(&mut session, term, &mut input, &mut clock, config)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os(ENV_LOG_FILE) else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("cannot open log file {}", path.to_string_lossy()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
