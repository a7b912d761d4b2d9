//! Game session - board, active piece, score and gravity timing
//!
//! The session owns every piece of mutable game state. It has no notion of
//! wall-clock time: callers feed it millisecond timestamps, which keeps it
//! deterministic under test.

use log::{debug, info};

use crate::board::Board;
use crate::piece::ActivePiece;
use crate::rng::KindSource;
use crate::types::{Key, GRAVITY_MS, LINE_CLEAR_POINTS, SOFT_DROP_GRAVITY_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Gravity intervals used by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gravity {
    pub normal_ms: u32,
    pub soft_drop_ms: u32,
}

impl Default for Gravity {
    fn default() -> Self {
        Self {
            normal_ms: GRAVITY_MS,
            soft_drop_ms: SOFT_DROP_GRAVITY_MS,
        }
    }
}

/// Result of locking the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockOutcome {
    pub lines_cleared: usize,
    pub points: u32,
    /// The replacement piece collided on spawn.
    pub game_over: bool,
}

/// What a single gravity check did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityTick {
    /// Interval has not elapsed yet.
    Idle,
    /// Piece moved down one row.
    Fell,
    /// Piece could not fall and was locked.
    Locked(LockOutcome),
}

#[derive(Debug, Clone)]
pub struct GameSession<R: KindSource> {
    board: Board,
    active: ActivePiece,
    score: u32,
    status: GameStatus,
    gravity: Gravity,
    interval_ms: u32,
    last_drop_ms: u64,
    source: R,
}

impl<R: KindSource> GameSession<R> {
    /// Start a session with a freshly spawned piece, timing gravity from `now_ms`.
    pub fn new(source: R, now_ms: u64) -> Self {
        Self::with_gravity(source, Gravity::default(), now_ms)
    }

    pub fn with_gravity(mut source: R, gravity: Gravity, now_ms: u64) -> Self {
        let active = ActivePiece::new(source.next_kind());
        debug!("spawned {:?}", active.kind);
        Self {
            board: Board::new(),
            active,
            score: 0,
            status: GameStatus::Running,
            gravity,
            interval_ms: gravity.normal_ms,
            last_drop_ms: now_ms,
            source,
        }
    }

    /// Start from a prepared board and a given first piece.
    pub fn from_parts(board: Board, active: ActivePiece, source: R, now_ms: u64) -> Self {
        let gravity = Gravity::default();
        Self {
            board,
            active,
            score: 0,
            status: GameStatus::Running,
            gravity,
            interval_ms: gravity.normal_ms,
            last_drop_ms: now_ms,
            source,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Current gravity interval in milliseconds.
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn is_soft_dropping(&self) -> bool {
        self.interval_ms == self.gravity.soft_drop_ms
            && self.gravity.soft_drop_ms != self.gravity.normal_ms
    }

    pub fn try_move(&mut self, d_row: i8, d_col: i8) -> bool {
        self.active.try_move(&self.board, d_row, d_col)
    }

    pub fn try_rotate(&mut self) -> bool {
        self.active.try_rotate(&self.board)
    }

    /// Apply a gameplay key. Returns whether the piece or gravity changed.
    ///
    /// `Quit` is the loop's business and is ignored here, as is every key
    /// once the game is over.
    pub fn apply_key(&mut self, key: Key) -> bool {
        if self.is_game_over() {
            return false;
        }
        match key {
            Key::MoveLeft => self.try_move(0, -1),
            Key::MoveRight => self.try_move(0, 1),
            Key::SoftDrop => {
                // Standing modifier: stays engaged until the next lock.
                self.interval_ms = self.gravity.soft_drop_ms;
                true
            }
            Key::Rotate => self.try_rotate(),
            Key::Quit => false,
        }
    }

    /// Run one gravity check at `now_ms`.
    pub fn gravity_tick(&mut self, now_ms: u64) -> GravityTick {
        if self.is_game_over() {
            return GravityTick::Idle;
        }
        if now_ms.saturating_sub(self.last_drop_ms) <= u64::from(self.interval_ms) {
            return GravityTick::Idle;
        }
        self.last_drop_ms = now_ms;
        if self.try_move(1, 0) {
            GravityTick::Fell
        } else {
            GravityTick::Locked(self.lock())
        }
    }

    /// Merge the active piece, clear lines, score, and spawn the next piece.
    pub fn lock(&mut self) -> LockOutcome {
        self.board.merge(&self.active.cells());
        let cleared = self.board.clear_full_rows();
        let lines_cleared = cleared.len();
        let points = LINE_CLEAR_POINTS * lines_cleared as u32;
        self.score = self.score.saturating_add(points);
        if lines_cleared > 0 {
            debug!("cleared rows {:?}, score now {}", cleared.as_slice(), self.score);
        }

        self.active.spawn(self.source.next_kind());
        self.interval_ms = self.gravity.normal_ms;
        debug!("spawned {:?}", self.active.kind);

        let game_over = self.active.is_blocked(&self.board);
        if game_over {
            self.status = GameStatus::GameOver;
            info!("game over with score {}", self.score);
        }

        LockOutcome {
            lines_cleared,
            points,
            game_over,
        }
    }
}
