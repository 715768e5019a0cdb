use std::fmt;

use crate::error::MoveError;

pub const CELLS: usize = 9;
pub const SIDE: usize = 3;

/// The 8 fixed winning triples: 3 rows, 3 columns, 2 diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    X,
    O,
}

/// The 3x3 grid, stored flat in row-major cell order 0..9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Mark::Empty; CELLS],
        }
    }

    /// Get the mark at a cell. Cell 0 is the top-left corner, cell 8 the
    /// bottom-right.
    pub fn get(&self, cell: usize) -> Mark {
        self.cells[cell]
    }

    /// Check if a cell carries no mark yet
    pub fn is_free(&self, cell: usize) -> bool {
        cell < CELLS && self.cells[cell] == Mark::Empty
    }

    /// Place a mark on a cell. A mark is immutable once set.
    pub fn place(&mut self, cell: usize, mark: Mark) -> Result<(), MoveError> {
        if cell >= CELLS {
            return Err(MoveError::OutOfRange(cell));
        }
        if self.cells[cell] != Mark::Empty {
            return Err(MoveError::CellOccupied(cell));
        }
        self.cells[cell] = mark;
        Ok(())
    }

    /// Indices of all unmarked cells, in index order
    pub fn free_cells(&self) -> Vec<usize> {
        (0..CELLS).filter(|&cell| self.is_free(cell)).collect()
    }

    /// Check if every cell is marked
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&mark| mark != Mark::Empty)
    }

    /// Check if any win line is fully owned by the given mark
    pub fn has_win(&self, mark: Mark) -> bool {
        if mark == Mark::Empty {
            return false;
        }
        WIN_LINES
            .iter()
            .any(|line| line.iter().all(|&cell| self.cells[cell] == mark))
    }

    /// Wipe all marks, returning the board to its initial state
    pub fn clear(&mut self) {
        self.cells = [Mark::Empty; CELLS];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            for col in 0..SIDE {
                let symbol = match self.cells[row * SIDE + col] {
                    Mark::Empty => '-',
                    Mark::X => 'X',
                    Mark::O => 'O',
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
