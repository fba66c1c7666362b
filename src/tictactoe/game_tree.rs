//! Enumeration of the reachable state space

use std::collections::HashSet;

use super::board::Board;

/// Every board reachable from the empty board by legal play, terminal
/// positions included, in depth-first discovery order.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut ordered = Vec::new();
    let mut to_explore = vec![Board::initial()];

    while let Some(board) = to_explore.pop() {
        if !seen.insert(board) {
            continue;
        }
        ordered.push(board);
        to_explore.extend(board.successors().map(|(_, next)| next));
    }

    ordered
}
