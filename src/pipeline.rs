//! Match driver: alternate two selectors from the empty board until the game ends

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    Error, Result,
    ports::MoveSelector,
    tictactoe::{Game, GameOutcome, Mark},
};

/// Play one game, `x` opening.
///
/// # Errors
///
/// Propagates selector failures and rejects illegal selections with
/// `InvalidMove`.
#[instrument(skip_all, fields(x = x.name(), o = o.name()))]
pub fn play_match(x: &mut dyn MoveSelector, o: &mut dyn MoveSelector) -> Result<Game> {
    let mut game = Game::new();
    let mut board = game.initial;

    while let Some(mark) = board.turn_to_move() {
        let (mv, name) = match mark {
            Mark::X => (x.select_move(&board)?, x.name()),
            Mark::O => (o.select_move(&board)?, o.name()),
        };
        debug!(%mark, %mv, selector = name, "move selected");
        board = game.play(mv)?;
    }

    debug!(outcome = ?game.outcome, plies = game.moves.len(), "game finished");
    Ok(game)
}

/// Tally of a series of games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl SeriesSummary {
    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }

    fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Mark::X) => self.x_wins += 1,
            GameOutcome::Win(Mark::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }
}

/// Play `games` games with the same seating.
pub fn play_series(
    x: &mut dyn MoveSelector,
    o: &mut dyn MoveSelector,
    games: usize,
) -> Result<SeriesSummary> {
    let mut summary = SeriesSummary::default();
    for _ in 0..games {
        let game = play_match(x, o)?;
        let outcome = game.outcome.ok_or(Error::GameOver)?;
        summary.record(outcome);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::{MinimaxSelector, RandomSelector},
        search::{SearchConfig, SearchStrategy},
        tictactoe::{Board, Move},
    };

    struct Scripted(Vec<Move>);

    impl MoveSelector for Scripted {
        fn select_move(&mut self, _board: &Board) -> Result<Move> {
            if self.0.is_empty() {
                return Err(Error::GameOver);
            }
            Ok(self.0.remove(0))
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    #[test]
    fn test_scripted_game() {
        let mut x = Scripted(vec![Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)]);
        let mut o = Scripted(vec![Move::new(1, 0), Move::new(1, 1)]);
        let game = play_match(&mut x, &mut o).unwrap();
        assert_eq!(game.outcome, Some(GameOutcome::Win(Mark::X)));
        assert_eq!(game.moves.len(), 5);
    }

    #[test]
    fn test_illegal_selection_is_reported() {
        let mut x = Scripted(vec![Move::new(1, 1), Move::new(1, 1)]);
        let mut o = Scripted(vec![Move::new(0, 0)]);
        let err = play_match(&mut x, &mut o).unwrap_err();
        assert!(err.is_invalid_move());
    }

    #[test]
    fn test_minimax_never_loses_to_random() {
        let mut optimal = MinimaxSelector::new(
            "Optimal",
            SearchConfig::new().with_strategy(SearchStrategy::Memoized),
        );
        let mut random = RandomSelector::with_seed("Random", 2024);

        let as_x = play_series(&mut optimal, &mut random, 20).unwrap();
        assert_eq!(as_x.o_wins, 0);
        assert_eq!(as_x.total(), 20);

        let as_o = play_series(&mut random, &mut optimal, 20).unwrap();
        assert_eq!(as_o.x_wins, 0);
    }
}
