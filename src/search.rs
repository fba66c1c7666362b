//! Minimax move search
//!
//! [`best_move`], [`max_value`] and [`min_value`] are the reference
//! implementation: plain mutually recursive minimax returning a
//! `(value, move)` pair at every level. [`Minimax`] is a configurable engine
//! that reports node counts and can prune or cache without changing the
//! selected move.
//!
//! Ties are broken by enumeration order: a later move replaces the current
//! best only when its value is strictly better, so the earliest optimal move
//! in row-major order wins.

pub mod config;
pub mod minimax;

pub use config::{SearchConfig, SearchStrategy};
pub use minimax::{Minimax, SearchReport};

use crate::tictactoe::{Board, Mark, Move};

/// The optimal move for the side to move, or `None` if the game is over.
///
/// # Examples
///
/// ```
/// use tictactoe_solver::{Board, Move, best_move};
///
/// // X threatens the top row; O must block at (0, 2)
/// let board = Board::from_string("XX. .O. ...").unwrap();
/// assert_eq!(best_move(&board), Some(Move::new(0, 2)));
/// ```
pub fn best_move(board: &Board) -> Option<Move> {
    match board.turn_to_move()? {
        Mark::X => max_value(board).1,
        Mark::O => min_value(board).1,
    }
}

/// Best achievable value for X (the maximizing side) and the move reaching it.
///
/// Terminal boards yield their utility and no move.
pub fn max_value(board: &Board) -> (i32, Option<Move>) {
    if let Some(value) = board.terminal_value() {
        return (value, None);
    }
    let mut best = (i32::MIN, None);
    for (mv, next) in board.successors() {
        let (value, _) = min_value(&next);
        if value > best.0 {
            best = (value, Some(mv));
        }
    }
    best
}

/// Best achievable value for O (the minimizing side) and the move reaching it.
///
/// Terminal boards yield their utility and no move.
pub fn min_value(board: &Board) -> (i32, Option<Move>) {
    if let Some(value) = board.terminal_value() {
        return (value, None);
    }
    let mut best = (i32::MAX, None);
    for (mv, next) in board.successors() {
        let (value, _) = max_value(&next);
        if value < best.0 {
            best = (value, Some(mv));
        }
    }
    best
}
