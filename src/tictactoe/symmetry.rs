//! Board symmetries used to canonicalize transposition keys

use super::board::{Board, Cell};

/// The eight symmetries of the square as cell-index maps: `SYMMETRIES[k][i]`
/// is where cell `i` lands under symmetry `k`.
///
/// Even rows are the clockwise rotations by 0, 90, 180 and 270 degrees; odd
/// rows mirror left-right before the same rotation.
pub const SYMMETRIES: [[usize; 9]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8],
    [2, 1, 0, 5, 4, 3, 8, 7, 6],
    [2, 5, 8, 1, 4, 7, 0, 3, 6],
    [8, 5, 2, 7, 4, 1, 6, 3, 0],
    [8, 7, 6, 5, 4, 3, 2, 1, 0],
    [6, 7, 8, 3, 4, 5, 0, 1, 2],
    [6, 3, 0, 7, 4, 1, 8, 5, 2],
    [0, 3, 6, 1, 4, 7, 2, 5, 8],
];

impl Board {
    /// Image of the board under one entry of [`SYMMETRIES`]
    pub fn transform(&self, permutation: &[usize; 9]) -> Self {
        let mut cells = [Cell::Empty; 9];
        for (&target, &cell) in permutation.iter().zip(self.cells().iter()) {
            cells[target] = cell;
        }
        Board::from_cells_unchecked(cells)
    }

    /// The lexicographically minimal encoding among the 8 symmetric images.
    ///
    /// Symmetric boards share one canonical form, and minimax values are
    /// invariant under the group, so this works as a transposition key.
    pub fn canonical(&self) -> Self {
        SYMMETRIES
            .iter()
            .map(|permutation| self.transform(permutation))
            .min_by_key(Board::encode)
            .unwrap_or(*self)
    }
}
