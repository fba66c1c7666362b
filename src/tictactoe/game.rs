//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, Mark, Move};
use crate::{Error, Result};

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
}

impl GameOutcome {
    /// Signed value from X's perspective: +1 X wins, -1 O wins, 0 draw
    pub fn value(self) -> i32 {
        match self {
            GameOutcome::Win(Mark::X) => 1,
            GameOutcome::Win(Mark::O) => -1,
            GameOutcome::Draw => 0,
        }
    }
}

/// A complete game with history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_board(Board::initial())
    }

    /// Start recording from an arbitrary position
    pub fn from_board(initial: Board) -> Self {
        Game {
            initial,
            moves: Vec::new(),
            outcome: initial.outcome(),
        }
    }

    /// Play a move for whichever side is to move
    ///
    /// # Errors
    ///
    /// Returns `GameOver` once an outcome is recorded, or `InvalidMove` if the
    /// board rejects the move.
    pub fn play(&mut self, mv: Move) -> Result<Board> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }

        let next = self.current_board()?.apply(mv)?;
        self.moves.push(mv);
        self.outcome = next.outcome();
        Ok(next)
    }

    /// Replay the full history
    ///
    /// # Errors
    ///
    /// Returns error if a recorded move is illegal, which means the record
    /// was corrupted (for instance by hand-editing a serialized game).
    pub fn current_board(&self) -> Result<Board> {
        self.moves
            .iter()
            .try_fold(self.initial, |board, &mv| board.apply(mv))
    }

    /// Every board of the game, starting with the initial one
    ///
    /// # Errors
    ///
    /// Same conditions as [`Game::current_board`].
    pub fn boards(&self) -> Result<Vec<Board>> {
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        boards.push(self.initial);
        let mut board = self.initial;
        for &mv in &self.moves {
            board = board.apply(mv)?;
            boards.push(board);
        }
        Ok(boards)
    }

    /// Serialize the record as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Load a record from JSON, replaying it to reject corrupted histories
    ///
    /// # Errors
    ///
    /// Returns `Serialization` for malformed JSON or an unreachable initial
    /// board, `InvalidMove` for an illegal recorded move, and
    /// `CorruptedRecord` when the stored outcome disagrees with the replay.
    pub fn from_json(json: &str) -> Result<Self> {
        let game: Game = serde_json::from_str(json)?;
        let replayed = game.current_board()?.outcome();
        if replayed != game.outcome {
            return Err(Error::CorruptedRecord {
                reason: format!(
                    "stored outcome {:?} but replay ends with {:?}",
                    game.outcome, replayed
                ),
            });
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_records_outcome() {
        let mut game = Game::new();
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            game.play(Move::new(r, c)).unwrap();
            assert_eq!(game.outcome, None);
        }
        let last = game.play(Move::new(0, 2)).unwrap();
        assert_eq!(last.winner(), Some(Mark::X));
        assert_eq!(game.outcome, Some(GameOutcome::Win(Mark::X)));
        assert!(matches!(game.play(Move::new(2, 2)), Err(Error::GameOver)));
        assert_eq!(game.moves.len(), 5);
    }

    #[test]
    fn test_rejected_move_leaves_history_untouched() {
        let mut game = Game::new();
        game.play(Move::new(1, 1)).unwrap();
        assert!(game.play(Move::new(1, 1)).unwrap_err().is_invalid_move());
        assert_eq!(game.moves, vec![Move::new(1, 1)]);
    }

    #[test]
    fn test_boards_sequence() {
        let mut game = Game::new();
        game.play(Move::new(0, 0)).unwrap();
        game.play(Move::new(2, 2)).unwrap();
        let boards = game.boards().unwrap();
        assert_eq!(boards.len(), 3);
        assert_eq!(boards[0], Board::initial());
        assert_eq!(boards[2], game.current_board().unwrap());
        assert_eq!(boards[2].encode(), "X.......O");
    }

    #[test]
    fn test_json_roundtrip_rejects_corruption() {
        let mut game = Game::new();
        game.play(Move::new(1, 1)).unwrap();
        let json = game.to_json().unwrap();
        assert_eq!(Game::from_json(&json).unwrap(), game);

        let mut corrupted = game.clone();
        corrupted.moves.push(Move::new(1, 1));
        let json = serde_json::to_string(&corrupted).unwrap();
        assert!(Game::from_json(&json).unwrap_err().is_invalid_move());
    }

    #[test]
    fn test_from_json_rejects_unreachable_initial() {
        let initial = r#"["O","O","O","Empty","Empty","Empty","Empty","Empty","Empty"]"#;
        let json = format!(r#"{{"initial":{initial},"moves":[],"outcome":{{"Win":"O"}}}}"#);
        assert!(matches!(Game::from_json(&json), Err(Error::Serialization(_))));
    }

    #[test]
    fn test_from_json_rejects_mismatched_outcome() {
        let mut game = Game::new();
        game.play(Move::new(1, 1)).unwrap();

        let mut draw = game.clone();
        draw.outcome = Some(GameOutcome::Draw);
        let json = serde_json::to_string(&draw).unwrap();
        assert!(matches!(
            Game::from_json(&json),
            Err(Error::CorruptedRecord { .. })
        ));

        let mut finished = Game::new();
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            finished.play(Move::new(r, c)).unwrap();
        }
        finished.outcome = None;
        let json = serde_json::to_string(&finished).unwrap();
        assert!(matches!(
            Game::from_json(&json),
            Err(Error::CorruptedRecord { .. })
        ));
    }

    #[test]
    fn test_outcome_values() {
        assert_eq!(GameOutcome::Win(Mark::X).value(), 1);
        assert_eq!(GameOutcome::Win(Mark::O).value(), -1);
        assert_eq!(GameOutcome::Draw.value(), 0);
    }
}
