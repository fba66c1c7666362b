//! Minimax search: optimal choices, tie-break order, strategy agreement

use tictactoe_solver::{
    Board, GameOutcome, Mark, Minimax, Move, SearchConfig, SearchStrategy, best_move,
    search::{max_value, min_value},
    tictactoe::reachable_boards,
};

fn board(s: &str) -> Board {
    Board::from_string(s).expect("test board should parse")
}

mod reference_search {
    use super::*;

    #[test]
    fn opening_move_is_first_optimal_corner() {
        // every opening draws, so the first enumerated cell wins the tie
        let first = best_move(&Board::initial());
        assert_eq!(first, Some(Move::new(0, 0)));
        assert_eq!(best_move(&Board::initial()), first);
    }

    #[test]
    fn blocks_immediate_threat() {
        let b = board("XX. .O. ...");
        assert_eq!(best_move(&b), Some(Move::new(0, 2)));
    }

    #[test]
    fn takes_immediate_win() {
        // X completes the diagonal at (0, 0), which also blocks O's top row
        let b = board(".OO .X. ..X");
        assert_eq!(max_value(&b), (1, Some(Move::new(0, 0))));
    }

    #[test]
    fn single_empty_cell_is_chosen() {
        let b = board("XOX XOO OX.");
        assert_eq!(b.legal_moves(), vec![Move::new(2, 2)]);
        assert_eq!(best_move(&b), Some(Move::new(2, 2)));
        let after = b.apply(Move::new(2, 2)).unwrap();
        assert_eq!(after.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn o_to_move_minimizes() {
        // O to move with a win available at (2, 0) on the anti-diagonal
        let b = board("X.O XO. ..X");
        assert_eq!(min_value(&b), (-1, Some(Move::new(2, 0))));
    }

    #[test]
    fn self_play_is_a_draw() {
        let mut b = Board::initial();
        let mut plies = 0;
        while let Some(mv) = best_move(&b) {
            b = b.apply(mv).unwrap();
            plies += 1;
        }
        assert_eq!(plies, 9);
        assert_eq!(b.outcome(), Some(GameOutcome::Draw));
    }
}

mod strategies {
    use super::*;

    fn engine(strategy: SearchStrategy) -> Minimax {
        Minimax::new(SearchConfig::new().with_strategy(strategy))
    }

    #[test]
    fn engine_matches_reference_from_empty_board() {
        let reference = best_move(&Board::initial());
        for strategy in [
            SearchStrategy::Exhaustive,
            SearchStrategy::Memoized,
            SearchStrategy::AlphaBeta,
        ] {
            let report = engine(strategy).search(&Board::initial());
            assert_eq!(report.best_move, reference, "{strategy}");
            assert_eq!(report.value, Some(0), "{strategy}");
        }
    }

    #[test]
    fn pruned_and_cached_agree_on_every_position() {
        let mut memoized = engine(SearchStrategy::Memoized);
        let mut pruned = engine(SearchStrategy::AlphaBeta);
        for b in reachable_boards() {
            let a = memoized.search(&b);
            let p = pruned.search(&b);
            assert_eq!(a.best_move, p.best_move, "board:\n{b}");
            assert_eq!(a.value, p.value, "board:\n{b}");
        }
    }

    #[test]
    fn engines_agree_with_reference_midgame() {
        let mut engines = [
            engine(SearchStrategy::Exhaustive),
            engine(SearchStrategy::Memoized),
            engine(SearchStrategy::AlphaBeta),
        ];
        let positions = reachable_boards()
            .into_iter()
            .filter(|b| b.occupied_count() >= 3 && !b.is_terminal());
        for b in positions {
            let (value, mv) = match b.turn_to_move() {
                Some(Mark::X) => max_value(&b),
                _ => min_value(&b),
            };
            for minimax in &mut engines {
                let strategy = minimax.config().strategy;
                let report = minimax.search(&b);
                assert_eq!(report.best_move, mv, "{strategy} board:\n{b}");
                assert_eq!(report.value, Some(value), "{strategy} board:\n{b}");
            }
        }
    }

    #[test]
    fn engine_self_play_is_a_draw() {
        for strategy in [SearchStrategy::Memoized, SearchStrategy::AlphaBeta] {
            let mut minimax = engine(strategy);
            let mut b = Board::initial();
            while let Some(mv) = minimax.best_move(&b) {
                b = b.apply(mv).unwrap();
            }
            assert_eq!(b.outcome(), Some(GameOutcome::Draw), "{strategy}");
        }
    }
}
