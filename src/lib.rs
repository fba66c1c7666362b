//! Tic-Tac-Toe solver
//!
//! This crate provides:
//! - An immutable board model: turn derivation, legal moves, move application,
//!   win/draw detection and terminal utility
//! - Exhaustive minimax search for the optimal move, with optional alpha-beta
//!   pruning or a symmetry-reduced transposition cache that never change the
//!   selected move
//! - Move selector adapters and a match driver for self-play
//!
//! ```
//! use tictactoe_solver::{Board, GameOutcome, best_move};
//!
//! let mut board = Board::initial();
//! while let Some(mv) = best_move(&board) {
//!     board = board.apply(mv).unwrap();
//! }
//! assert_eq!(board.outcome(), Some(GameOutcome::Draw));
//! ```

pub mod adapters;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{Minimax, SearchConfig, SearchReport, SearchStrategy, best_move};
pub use tictactoe::{Board, Cell, Game, GameOutcome, Mark, Move};
