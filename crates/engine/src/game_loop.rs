//! The fixed-order game loop.
//!
//! Each iteration: start a frame with the board and score, poll one key,
//! dispatch it, run the gravity check, overlay the active piece and present.
//! The loop ends on `Quit` (immediately) or when a spawn collides (after the
//! game-over notice has been acknowledged).

use anyhow::Result;
use log::info;

use crate::capability::{Clock, InputSource, Renderer};
use crate::config::GameConfig;
use crate::core::{GameSession, GravityTick, KindSource};
use crate::frame;
use crate::types::Key;

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    Quit,
    GameOver,
}

/// Run one loop iteration. Returns `Some` once the loop must stop.
pub fn step<S, R, I, C>(
    session: &mut GameSession<S>,
    renderer: &mut R,
    input: &mut I,
    clock: &C,
) -> Result<Option<LoopExit>>
where
    S: KindSource,
    R: Renderer + ?Sized,
    I: InputSource + ?Sized,
    C: Clock + ?Sized,
{
    frame::draw_board(renderer, session.board(), session.score());

    match input.poll_key()? {
        Some(Key::Quit) => {
            info!("quit with score {}", session.score());
            return Ok(Some(LoopExit::Quit));
        }
        Some(key) => {
            session.apply_key(key);
        }
        None => {}
    }

    if let GravityTick::Locked(outcome) = session.gravity_tick(clock.now_ms()) {
        if outcome.game_over {
            frame::draw_board(renderer, session.board(), session.score());
            frame::draw_game_over(renderer);
            renderer.present()?;
            input.wait_key()?;
            return Ok(Some(LoopExit::GameOver));
        }
    }

    frame::draw_piece(renderer, session.active());
    renderer.present()?;
    Ok(None)
}

/// Drive `session` until the player quits or the game ends.
pub fn run<S, R, I, C>(
    session: &mut GameSession<S>,
    renderer: &mut R,
    input: &mut I,
    clock: &mut C,
    config: &GameConfig,
) -> Result<LoopExit>
where
    S: KindSource,
    R: Renderer + ?Sized,
    I: InputSource + ?Sized,
    C: Clock + ?Sized,
{
    loop {
        if let Some(exit) = step(session, renderer, input, clock)? {
            return Ok(exit);
        }
        clock.sleep_ms(config.idle_sleep_ms);
    }
}
