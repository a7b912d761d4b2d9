//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and state. It has **no** dependency on
//! a terminal, a clock or an OS random source:
//!
//! - **Deterministic**: the piece source and the clock are injected
//! - **Testable**: every rule is reachable without a terminal
//! - **Fast**: fixed-size arrays, no allocation on the hot path
//!
//! # Module Structure
//!
//! - [`shapes`]: the classic rotation table for the seven tetrominoes
//! - [`board`]: 10x20 occupancy grid with collision testing and line clearing
//! - [`piece`]: the active falling piece and its move/rotate rules
//! - [`rng`]: uniform random piece selection
//! - [`session`]: board + piece + score + gravity timing
//!
//! # Game Rules
//!
//! - Pieces spawn at row -2 (partially above the board) in rotation 0
//! - Rotation has no wall kicks: a colliding rotation is simply rejected
//! - A piece that cannot fall locks on the next gravity tick
//! - Every cleared line is worth 100 points
//! - The game ends when a freshly spawned piece collides
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{GameSession, GravityTick, ScriptedKinds};
//! use tui_blockfall_types::{Key, ShapeKind};
//!
//! let mut session = GameSession::new(ScriptedKinds::new([ShapeKind::O]), 0);
//! assert!(session.apply_key(Key::MoveLeft));
//! assert_eq!(session.gravity_tick(501), GravityTick::Fell);
//! assert_eq!(session.score(), 0);
//! ```

pub mod board;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shapes;

pub use tui_blockfall_types as types;

pub use board::Board;
pub use piece::ActivePiece;
pub use rng::{KindSource, ScriptedKinds, SimpleRng};
pub use session::{GameSession, GameStatus, Gravity, GravityTick, LockOutcome};
pub use shapes::{get_shape, rotation_count, rotation_states, ShapeCells};
