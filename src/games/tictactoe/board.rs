//! The 3x3 board: cells, lines, parsing and rendering.
//!
//! `Board` is `Copy`, so every transition works on a fresh value and no
//! two states ever share cells.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Error, PlayerId};

/// Board side length.
pub const SIZE: usize = 3;

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[(usize, usize); SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// A single square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Mark(PlayerId),
}

impl Cell {
    /// Check if nobody has played here.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Render as `x` (first player), `o` (second player) or a space.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Mark(PlayerId::FIRST) => 'x',
            Cell::Mark(_) => 'o',
        }
    }
}

/// A move: the 0-indexed `(row, col)` of an empty cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check if the coordinate lies on the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Check if the move is one of the four corners.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        (self.row == 0 || self.row == SIZE - 1) && (self.col == 0 || self.col == SIZE - 1)
    }

    /// Check if the move is the center cell.
    #[must_use]
    pub const fn is_center(self) -> bool {
        self.row == 1 && self.col == 1
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 grid of cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the cell at `(row, col)`.
    ///
    /// Returns `None` when the coordinate is off the board.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// A copy of this board with `player`'s mark at `mv`.
    ///
    /// Overwrites whatever was there; legality is the caller's concern.
    #[must_use]
    pub fn with_mark(mut self, mv: Move, player: PlayerId) -> Self {
        self.cells[mv.row][mv.col] = Cell::Mark(player);
        self
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| Move::new(row, col)))
            .filter(|mv| self.cells[mv.row][mv.col].is_empty())
    }

    /// Check if every cell is marked.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Number of marks `player` has placed.
    #[must_use]
    pub fn count(&self, player: PlayerId) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Mark(player))
            .count()
    }

    /// Check if `player` owns a complete row, column or diagonal.
    #[must_use]
    pub fn has_line(&self, player: PlayerId) -> bool {
        LINES.iter().any(|line| {
            line.iter()
                .all(|&(row, col)| self.cells[row][col] == Cell::Mark(player))
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            writeln!(
                f,
                " {} | {} | {}",
                row[0].symbol(),
                row[1].symbol(),
                row[2].symbol()
            )?;
            if i < SIZE - 1 {
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}

/// Parse nine cells in row-major order.
///
/// `x`/`X` is the first player, `o`/`O` the second, and `.`, `-` or `_` an
/// empty cell. Whitespace and `/` row separators are ignored, so
/// `"x.o/.x./..o"` and `"x.o .x. ..o"` are the same board.
impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(SIZE * SIZE);

        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '/') {
            let cell = match c {
                'x' | 'X' => Cell::Mark(PlayerId::FIRST),
                'o' | 'O' => Cell::Mark(PlayerId::SECOND),
                '.' | '-' | '_' => Cell::Empty,
                other => {
                    return Err(Error::InvalidBoard {
                        reason: format!("unexpected character '{other}' in '{s}'"),
                    })
                }
            };
            cells.push(cell);
        }

        if cells.len() != SIZE * SIZE {
            return Err(Error::InvalidBoard {
                reason: format!("expected {} cells, got {} in '{s}'", SIZE * SIZE, cells.len()),
            });
        }

        let mut board = Board::empty();
        for (i, cell) in cells.into_iter().enumerate() {
            board.cells[i / SIZE][i % SIZE] = cell;
        }
        Ok(board)
    }
}
