//! Board state validation logic

use super::{
    Mark,
    board::{Board, PieceCount},
    lines::LineAnalyzer,
};
use crate::{Error, Result};

impl Board {
    /// Check if the board could arise from alternating play with X first
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Like [`Board::is_valid`], but says what is wrong.
    ///
    /// # Errors
    ///
    /// - `InvalidPieceCounts` unless X has as many marks as O or one more
    /// - `ConflictingWinners` if both marks own a line, the winner did not
    ///   move last, or one mark owns two lines no single move could complete
    pub fn validate(&self) -> Result<()> {
        let count = PieceCount::of(self.cells());
        if !(count.x == count.o || count.x == count.o + 1) {
            return Err(Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        let conflict = |reason: &str| Error::ConflictingWinners {
            board: self.encode(),
            reason: reason.to_string(),
        };

        let x_wins = self.has_won(Mark::X);
        let o_wins = self.has_won(Mark::O);

        if x_wins && o_wins {
            return Err(conflict("both marks cannot have winning lines"));
        }
        if x_wins && count.x != count.o + 1 {
            return Err(conflict("X can only win on its own move"));
        }
        if o_wins && count.x != count.o {
            return Err(conflict("O can only win on its own move"));
        }

        for mark in [Mark::X, Mark::O] {
            if !self.winning_lines_share_cell(mark) {
                return Err(conflict("play continued after a completed line"));
            }
        }

        Ok(())
    }

    /// Check if all winning lines for a mark share at least one cell.
    /// Several lines can only be completed together by the same final move.
    pub fn winning_lines_share_cell(&self, mark: Mark) -> bool {
        let lines = LineAnalyzer::winning_lines(self.cells(), mark);
        if lines.len() < 2 {
            return true;
        }
        (0..9).any(|pos| lines.iter().all(|line| line.contains(&pos)))
    }
}
