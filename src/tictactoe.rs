//! Tic-Tac-Toe board model

pub mod board;
pub mod game;
pub mod game_tree;
pub mod lines;
pub mod symmetry;
pub mod validation;

pub use board::{Board, Cell, Mark, Move};
pub use game::{Game, GameOutcome};
pub use game_tree::reachable_boards;
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use symmetry::SYMMETRIES;
