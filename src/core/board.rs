//! Immutable tic-tac-toe board.
//!
//! ## Value semantics
//!
//! A `Board` never changes after construction. `add_move` returns a new board
//! with one more mark, which is what the search relies on: every node owns its
//! own board and nothing needs undoing.
//!
//! Cells live inline in a `SmallVec` (at most 16), so cloning a board per
//! search node does not allocate.
//!
//! ## Literals
//!
//! Boards parse from strings, which keeps tests readable:
//!
//! ```
//! use tictactoe_core::core::{Board, Mark};
//!
//! let board: Board = "xo_ _o_ x__".parse().unwrap();
//! assert_eq!(board.mark_at(0), Some(Mark::X));
//! assert_eq!(board.available(), &[2, 3, 5, 7, 8]);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

use super::error::{BoardParseError, MoveError};
use super::mark::Mark;
use crate::rules::lines::{normalize_size, win_lines, DEFAULT_SIZE, MAX_SIZE};

/// Cell storage: one optional mark per square.
pub type Cells = SmallVec<[Option<Mark>; 16]>;

/// Immutable board state.
///
/// `available` is derived from `cells` at construction and always lists the
/// empty indices in ascending order.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(into = "Vec<Option<Mark>>", from = "Vec<Option<Mark>>")]
pub struct Board {
    size: usize,
    cells: Cells,
    available: SmallVec<[usize; 16]>,
}

impl Board {
    /// Empty board. Sizes other than 3 and 4 fall back to 3.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::from_cells(std::iter::empty(), size)
    }

    /// Board from a prior cell sequence.
    ///
    /// The sequence is truncated or padded with empty cells to `size²`.
    #[must_use]
    pub fn from_cells<I>(cells: I, size: usize) -> Self
    where
        I: IntoIterator<Item = Option<Mark>>,
    {
        let size = normalize_size(size);
        let len = size * size;
        let mut cells: Cells = cells.into_iter().take(len).collect();
        cells.resize(len, None);
        Self::from_normalized(size, cells)
    }

    fn from_normalized(size: usize, cells: Cells) -> Self {
        let available = cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
            .collect();
        Self {
            size,
            cells,
            available,
        }
    }

    /// Side length (3 or 4).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of squares.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: boards have 9 or 16 squares.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in index order.
    #[must_use]
    pub fn cells(&self) -> &[Option<Mark>] {
        &self.cells
    }

    /// Empty indices in ascending order.
    #[must_use]
    pub fn available(&self) -> &[usize] {
        &self.available
    }

    /// Number of squares holding a mark.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.len() - self.available.len()
    }

    /// New board with `mark` placed at `position`.
    ///
    /// Does not check that `position` is free; callers validate first. A
    /// position past the end of the board leaves the cells as they are.
    #[must_use]
    pub fn add_move(&self, position: usize, mark: Mark) -> Self {
        let mut cells = self.cells.clone();
        if let Some(cell) = cells.get_mut(position) {
            *cell = Some(mark);
        }
        Self::from_normalized(self.size, cells)
    }

    /// Mark at `position`, `None` if empty or off the board.
    #[must_use]
    pub fn mark_at(&self, position: usize) -> Option<Mark> {
        self.cells.get(position).copied().flatten()
    }

    /// Check that `position` can be played.
    pub fn validate(&self, position: usize) -> Result<usize, MoveError> {
        match self.cells.get(position) {
            None => Err(MoveError::OutOfRange {
                position,
                cells: self.cells.len(),
            }),
            Some(Some(_)) => Err(MoveError::Occupied(position)),
            Some(None) => Ok(position),
        }
    }

    /// True iff `position` is one of the available squares.
    #[must_use]
    pub fn is_valid_position(&self, position: usize) -> bool {
        self.validate(position).is_ok()
    }

    /// No empty square remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.available.is_empty()
    }

    /// Someone has won or the board is full.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_full() || self.winning_line().is_some()
    }

    /// First complete line, rows before columns before diagonals.
    #[must_use]
    pub fn winning_line(&self) -> Option<&'static [usize]> {
        win_lines(self.size)
            .iter()
            .copied()
            .find(|line| self.is_complete(line))
    }

    /// Mark occupying the winning line.
    #[must_use]
    pub fn winning_mark(&self) -> Option<Mark> {
        self.winning_line()
            .and_then(|line| line.first())
            .and_then(|&first| self.mark_at(first))
    }

    // Every adjacent pair holds the same mark and the first cell is occupied.
    fn is_complete(&self, line: &[usize]) -> bool {
        let Some(&first) = line.first() else {
            return false;
        };
        self.mark_at(first).is_some()
            && line
                .windows(2)
                .all(|pair| self.cells[pair[0]] == self.cells[pair[1]])
    }

    /// Rows for rendering; empty squares show their index.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.size)
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, cell)| match cell {
                        Some(mark) => Cell::Mark(*mark),
                        None => Cell::Index(r * self.size + c),
                    })
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Board {}

impl From<Vec<Option<Mark>>> for Board {
    fn from(cells: Vec<Option<Mark>>) -> Self {
        let size = if cells.len() == MAX_SIZE * MAX_SIZE {
            MAX_SIZE
        } else {
            DEFAULT_SIZE
        };
        Self::from_cells(cells, size)
    }
}

impl From<Board> for Vec<Option<Mark>> {
    fn from(board: Board) -> Self {
        board.cells.into_vec()
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '_' | '.' | '-' => Ok(None),
                _ => Mark::from_char(c).map(Some).ok_or(BoardParseError::InvalidCell(c)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        match cells.len() {
            9 => Ok(Self::from_cells(cells, DEFAULT_SIZE)),
            16 => Ok(Self::from_cells(cells, MAX_SIZE)),
            n => Err(BoardParseError::CellCount(n)),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|cell| format!("{cell:>2}")).collect();
            write!(f, "{}", line.join(" |"))?;
        }
        Ok(())
    }
}

/// One square of the rows view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Occupied square.
    Mark(Mark),
    /// Empty square, shown by its index.
    Index(usize),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Mark(mark) => f.pad(&mark.as_char().to_string()),
            Cell::Index(i) => f.pad(&i.to_string()),
        }
    }
}
