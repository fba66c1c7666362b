//! Configurable minimax engine

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use super::config::{SearchConfig, SearchStrategy};
use crate::tictactoe::{Board, Mark, Move};

/// Result of a top-level search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Chosen move, `None` for a terminal board
    pub best_move: Option<Move>,
    /// Minimax value of the position from X's perspective, `None` for a terminal board
    pub value: Option<i32>,
    /// Positions visited below the root
    pub nodes: u64,
    /// Strategy that produced the report
    pub strategy: SearchStrategy,
}

/// Minimax search engine.
///
/// The memoized strategy keeps its transposition table between searches;
/// entries hold exact values keyed by canonical board, so they never go stale.
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    config: SearchConfig,
    cache: HashMap<Board, i32>,
    nodes: u64,
}

impl Minimax {
    /// Create an engine with the given configuration
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            cache: HashMap::new(),
            nodes: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Number of cached positions (memoized strategy only)
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Pick the optimal move for the side to move.
    ///
    /// Root moves are scanned in enumeration order and a move replaces the
    /// current best only on a strictly better value, whatever the strategy.
    #[instrument(
        skip(self, board),
        fields(strategy = %self.config.strategy, board = %board.encode())
    )]
    pub fn search(&mut self, board: &Board) -> SearchReport {
        self.nodes = 0;
        let strategy = self.config.strategy;
        let Some(mover) = board.turn_to_move() else {
            return SearchReport {
                best_move: None,
                value: None,
                nodes: 0,
                strategy,
            };
        };

        let mut best: Option<(Move, i32)> = None;
        for (mv, next) in board.successors() {
            let bound = best.map(|(_, value)| value);
            let value = self.root_child_value(&next, mover, bound);
            trace!(%mv, value, "root move evaluated");

            let improves = match (best, mover) {
                (None, _) => true,
                (Some((_, current)), Mark::X) => value > current,
                (Some((_, current)), Mark::O) => value < current,
            };
            if improves {
                best = Some((mv, value));
            }
        }

        let report = SearchReport {
            best_move: best.map(|(mv, _)| mv),
            value: best.map(|(_, value)| value),
            nodes: self.nodes,
            strategy,
        };
        debug!(
            best_move = ?report.best_move,
            value = ?report.value,
            nodes = report.nodes,
            "search complete"
        );
        report
    }

    /// Convenience wrapper returning only the move
    pub fn best_move(&mut self, board: &Board) -> Option<Move> {
        self.search(board).best_move
    }

    /// Exact minimax value of every legal move, in enumeration order.
    pub fn evaluate_moves(&mut self, board: &Board) -> Vec<(Move, i32)> {
        board
            .successors()
            .map(|(mv, next)| (mv, self.exact_value(&next)))
            .collect()
    }

    /// Exact minimax value of a position from X's perspective
    pub fn value(&mut self, board: &Board) -> i32 {
        self.exact_value(board)
    }

    /// Value of a root child. Under alpha-beta the current best is passed as
    /// the bound, so the result is exact whenever it beats that bound and is
    /// otherwise no better than it.
    fn root_child_value(&mut self, child: &Board, mover: Mark, bound: Option<i32>) -> i32 {
        match self.config.strategy {
            SearchStrategy::AlphaBeta => match mover {
                Mark::X => self.alpha_beta(child, bound.unwrap_or(i32::MIN), i32::MAX),
                Mark::O => self.alpha_beta(child, i32::MIN, bound.unwrap_or(i32::MAX)),
            },
            _ => self.exact_value(child),
        }
    }

    fn exact_value(&mut self, board: &Board) -> i32 {
        match self.config.strategy {
            SearchStrategy::Exhaustive => self.exhaustive(board),
            SearchStrategy::Memoized => self.memoized(board),
            SearchStrategy::AlphaBeta => self.alpha_beta(board, i32::MIN, i32::MAX),
        }
    }

    fn exhaustive(&mut self, board: &Board) -> i32 {
        self.nodes += 1;
        if let Some(value) = board.terminal_value() {
            return value;
        }
        let maximizing = board.turn_to_move() == Some(Mark::X);
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for (_, next) in board.successors() {
            let value = self.exhaustive(&next);
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }
        best
    }

    fn memoized(&mut self, board: &Board) -> i32 {
        self.nodes += 1;
        let key = board.canonical();
        if let Some(&value) = self.cache.get(&key) {
            return value;
        }

        let value = match board.terminal_value() {
            Some(value) => value,
            None => {
                let maximizing = board.turn_to_move() == Some(Mark::X);
                let mut best = if maximizing { i32::MIN } else { i32::MAX };
                for (_, next) in board.successors() {
                    let value = self.memoized(&next);
                    best = if maximizing {
                        best.max(value)
                    } else {
                        best.min(value)
                    };
                }
                best
            }
        };

        self.cache.insert(key, value);
        value
    }

    /// Fail-soft alpha-beta: a result `<= alpha` is an upper bound, `>= beta`
    /// a lower bound, anything in between is exact.
    fn alpha_beta(&mut self, board: &Board, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;
        if let Some(value) = board.terminal_value() {
            return value;
        }

        match board.turn_to_move() {
            Some(Mark::X) => {
                let mut best = i32::MIN;
                for (_, next) in board.successors() {
                    best = best.max(self.alpha_beta(&next, alpha, beta));
                    if best >= beta {
                        break;
                    }
                    alpha = alpha.max(best);
                }
                best
            }
            _ => {
                let mut best = i32::MAX;
                for (_, next) in board.successors() {
                    best = best.min(self.alpha_beta(&next, alpha, beta));
                    if best <= alpha {
                        break;
                    }
                    beta = beta.min(best);
                }
                best
            }
        }
    }
}
