//! Move selector port

use crate::{
    Result,
    tictactoe::{Board, Move},
};

/// Anything that can choose a move for a board: the minimax engine, a random
/// baseline, or a presentation layer relaying a human's choice.
///
/// # Examples
///
/// ```
/// use tictactoe_solver::{
///     Board, Move, Result,
///     ports::MoveSelector,
/// };
///
/// struct FirstFree;
///
/// impl MoveSelector for FirstFree {
///     fn select_move(&mut self, board: &Board) -> Result<Move> {
///         board
///             .legal_moves()
///             .first()
///             .copied()
///             .ok_or(tictactoe_solver::Error::GameOver)
///     }
///
///     fn name(&self) -> &str {
///         "first-free"
///     }
/// }
///
/// assert_eq!(FirstFree.select_move(&Board::initial()).unwrap(), Move::new(0, 0));
/// ```
pub trait MoveSelector: Send {
    /// Choose a move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns `GameOver` if the board is terminal.
    fn select_move(&mut self, board: &Board) -> Result<Move>;

    /// Name used in logs and summaries
    fn name(&self) -> &str;
}
