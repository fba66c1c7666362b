//! Move selector implementations

use rand::{SeedableRng, random, rngs::StdRng, seq::IndexedRandom};
use tracing::warn;

use crate::{
    Error, Result,
    ports::MoveSelector,
    search::{Minimax, SearchConfig},
    tictactoe::{Board, Move},
};

/// Optimal play via the minimax engine
pub struct MinimaxSelector {
    name: String,
    engine: Minimax,
}

impl MinimaxSelector {
    pub fn new(name: impl Into<String>, config: SearchConfig) -> Self {
        Self {
            name: name.into(),
            engine: Minimax::new(config),
        }
    }
}

impl MoveSelector for MinimaxSelector {
    fn select_move(&mut self, board: &Board) -> Result<Move> {
        self.engine.best_move(board).ok_or_else(|| {
            warn!(
                selector = %self.name,
                board = %board.encode(),
                "asked to move on a finished game"
            );
            Error::GameOver
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Uniformly random legal moves (baseline)
pub struct RandomSelector {
    name: String,
    rng: StdRng,
}

impl RandomSelector {
    /// Create a new random selector
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a new random selector with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveSelector for RandomSelector {
    fn select_move(&mut self, board: &Board) -> Result<Move> {
        board
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| {
                warn!(
                    selector = %self.name,
                    board = %board.encode(),
                    "asked to move on a finished game"
                );
                Error::GameOver
            })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
