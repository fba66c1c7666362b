//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{game::GameOutcome, lines::LineAnalyzer};
use crate::{Error, Result};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The mark occupying this cell, if any
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
            Cell::Empty => None,
        }
    }
}

/// One of the two symbols a player places. X always opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A (row, col) coordinate on the board, both in `0..3`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    /// Every coordinate in row-major order. This is the enumeration order of
    /// [`Board::legal_moves`] and therefore the search tie-break order.
    pub const ALL: [Move; 9] = [
        Move::new(0, 0),
        Move::new(0, 1),
        Move::new(0, 2),
        Move::new(1, 0),
        Move::new(1, 1),
        Move::new(1, 2),
        Move::new(2, 0),
        Move::new(2, 1),
        Move::new(2, 2),
    ];

    pub const fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Whether both coordinates lie on the board
    pub fn in_bounds(self) -> bool {
        self.row < 3 && self.col < 3
    }

    /// Row-major cell index (0-8). Only meaningful for in-bounds moves.
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Inverse of [`Move::index`]
    pub fn from_index(index: usize) -> Option<Move> {
        Move::ALL.get(index).copied()
    }
}

impl TryFrom<(i64, i64)> for Move {
    type Error = Error;

    fn try_from((row, col): (i64, i64)) -> Result<Self> {
        if !(0..3).contains(&row) || !(0..3).contains(&col) {
            return Err(Error::invalid_move(row, col, "coordinates out of range"));
        }
        Ok(Move::new(row as usize, col as usize))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Immutable 3x3 grid of cells in row-major order.
///
/// The side to move is never stored; it is derived from the piece counts.
/// This type is `Copy` (9 bytes), so every transition yields a fresh board
/// and search branches never share mutable state.
///
/// Serializes as a bare array of 9 cells; deserialization runs the same
/// reachability checks as [`Board::from_cells`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Cell; 9]", into = "[Cell; 9]")]
pub struct Board {
    cells: [Cell; 9],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PieceCount {
    pub(crate) x: usize,
    pub(crate) o: usize,
}

impl PieceCount {
    pub(crate) fn of(cells: &[Cell; 9]) -> Self {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }
}

impl TryFrom<[Cell; 9]> for Board {
    type Error = Error;

    fn try_from(cells: [Cell; 9]) -> Result<Self> {
        Board::from_cells(cells)
    }
}

impl From<Board> for [Cell; 9] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl Board {
    /// The empty starting board
    pub fn initial() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Build a board from raw cells, rejecting grids that cannot arise from
    /// alternating play with X first.
    ///
    /// # Errors
    ///
    /// Returns error if the piece counts are off or the winning lines are
    /// inconsistent with the move order.
    pub fn from_cells(cells: [Cell; 9]) -> Result<Self> {
        let board = Board { cells };
        board.validate()?;
        Ok(board)
    }

    /// Wrap raw cells without the reachability checks of [`Board::from_cells`].
    ///
    /// Search results on such boards are unspecified; the rule queries
    /// (`winner`, `is_terminal`, `utility`) still answer literally.
    pub fn from_cells_unchecked(cells: [Cell; 9]) -> Self {
        Board { cells }
    }

    /// Parse a board from 9 cell characters (whitespace is ignored).
    ///
    /// `X`/`x`, `O`/`o`/`0` are marks; `.`, `_` and `-` are empty cells.
    /// Rows are read top to bottom, e.g. `"XOX .O. ..."`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Anything other than exactly 9 non-whitespace characters is present
    /// - Any character is not a valid cell representation
    /// - The resulting grid is not reachable by alternating play
    pub fn from_string(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Self::from_cells(cells)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Cell at the given coordinate, or `None` when out of bounds
    pub fn cell(&self, mv: Move) -> Option<Cell> {
        mv.in_bounds().then(|| self.cells[mv.index()])
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = PieceCount::of(&self.cells);
        count.x + count.o
    }

    /// The mark whose turn it is, or `None` once the game has ended.
    ///
    /// The mark with fewer-or-equal occurrences moves next; X moves on ties.
    pub fn turn_to_move(&self) -> Option<Mark> {
        if self.is_terminal() {
            return None;
        }
        let count = PieceCount::of(&self.cells);
        if count.x <= count.o {
            Some(Mark::X)
        } else {
            Some(Mark::O)
        }
    }

    /// Empty cells in row-major order; empty when the board is terminal.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        Move::ALL
            .iter()
            .copied()
            .filter(|mv| self.cells[mv.index()] == Cell::Empty)
            .collect()
    }

    /// Place the side to move at `mv` and return the new board.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMove` if the coordinates are off the board, the cell is
    /// occupied, or the game has already ended.
    #[must_use = "apply returns a new board; the original is unchanged"]
    #[instrument(level = "trace", skip(self), fields(board = %self.encode()))]
    pub fn apply(&self, mv: Move) -> Result<Board> {
        let (row, col) = (
            i64::try_from(mv.row).unwrap_or(i64::MAX),
            i64::try_from(mv.col).unwrap_or(i64::MAX),
        );
        if !mv.in_bounds() {
            return Err(Error::invalid_move(row, col, "coordinates out of range"));
        }
        if self.cells[mv.index()] != Cell::Empty {
            return Err(Error::invalid_move(row, col, "cell is already occupied"));
        }
        let mark = self
            .turn_to_move()
            .ok_or_else(|| Error::invalid_move(row, col, "game is already over"))?;
        Ok(self.place(mv, mark))
    }

    /// Every legal move paired with the board it produces, in enumeration order.
    pub fn successors(&self) -> impl Iterator<Item = (Move, Board)> + use<> {
        let board = *self;
        let mark = self.turn_to_move();
        self.legal_moves()
            .into_iter()
            .filter_map(move |mv| mark.map(|m| (mv, board.place(mv, m))))
    }

    fn place(&self, mv: Move, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[mv.index()] = mark.to_cell();
        next
    }

    /// Check if a mark has three in a row
    pub fn has_won(&self, mark: Mark) -> bool {
        LineAnalyzer::has_won(&self.cells, mark)
    }

    /// The mark owning a complete line, if any
    pub fn winner(&self) -> Option<Mark> {
        LineAnalyzer::winner(&self.cells)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || !self.cells.contains(&Cell::Empty)
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        !self.cells.contains(&Cell::Empty) && self.winner().is_none()
    }

    /// Outcome of a finished game, `None` while play continues
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.winner() {
            Some(mark) => Some(GameOutcome::Win(mark)),
            None if self.is_draw() => Some(GameOutcome::Draw),
            None => None,
        }
    }

    /// Signed value of a terminal board from X's perspective: +1, -1 or 0.
    ///
    /// # Errors
    ///
    /// Returns `NotTerminal` when the game is still in progress.
    pub fn utility(&self) -> Result<i32> {
        self.terminal_value().ok_or_else(|| Error::NotTerminal {
            board: self.to_string(),
        })
    }

    pub(crate) fn terminal_value(&self) -> Option<i32> {
        self.outcome().map(GameOutcome::value)
    }

    /// Compact 9-character key, e.g. `"XO..X...."`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
