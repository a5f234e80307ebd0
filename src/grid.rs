//! Square grids of cells: the fleet grid a player hides and the target grid
//! showing shots fired at the opponent.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::common::GridError;
use crate::config::{Alphabet, Rules};
use crate::ship::ShipId;

/// A cell of a fleet grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    /// Intact segment of a ship.
    Ship(ShipId),
    /// Segment of a ship that has been hit.
    ShipHit(ShipId),
}

impl Cell {
    /// Ship owning this cell, hit or not.
    pub fn ship(self) -> Option<ShipId> {
        match self {
            Cell::Empty => None,
            Cell::Ship(id) | Cell::ShipHit(id) => Some(id),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A cell of a target grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetCell {
    Unknown,
    Hit,
    Miss,
}

/// Conversion between a cell value and its single-character text form.
pub trait GridCell: Copy + PartialEq {
    fn to_char(self, alphabet: &Alphabet) -> char;
    fn from_char(c: char, alphabet: &Alphabet) -> Option<Self>;
}

impl GridCell for Cell {
    fn to_char(self, alphabet: &Alphabet) -> char {
        match self {
            Cell::Empty => alphabet.empty,
            Cell::Ship(id) => id.intact(),
            Cell::ShipHit(id) => id.hit(),
        }
    }

    /// Upper-case letters read as hit segments. Characters without a case
    /// (digits, punctuation) always read as intact.
    fn from_char(c: char, alphabet: &Alphabet) -> Option<Self> {
        if c == alphabet.empty {
            return Some(Cell::Empty);
        }
        if alphabet.is_reserved(c) {
            return None;
        }
        let id = ShipId::new(c)?;
        if c.is_ascii_uppercase() {
            Some(Cell::ShipHit(id))
        } else {
            Some(Cell::Ship(id))
        }
    }
}

impl GridCell for TargetCell {
    fn to_char(self, alphabet: &Alphabet) -> char {
        match self {
            TargetCell::Unknown => alphabet.unknown,
            TargetCell::Hit => alphabet.hit,
            TargetCell::Miss => alphabet.miss,
        }
    }

    fn from_char(c: char, alphabet: &Alphabet) -> Option<Self> {
        if c == alphabet.unknown {
            Some(TargetCell::Unknown)
        } else if c == alphabet.hit {
            Some(TargetCell::Hit)
        } else if c == alphabet.miss {
            Some(TargetCell::Miss)
        } else {
            None
        }
    }
}

/// Square `size`×`size` grid stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<C> {
    size: usize,
    cells: Vec<C>,
}

/// One player's ship layout.
pub type FleetGrid = Grid<Cell>;
/// One player's view of the shots fired at the opponent.
pub type TargetGrid = Grid<TargetCell>;

impl<C: GridCell> Grid<C> {
    /// Create a grid with every cell set to `fill`.
    pub fn new(size: usize, fill: C, rules: &Rules) -> Result<Self, GridError> {
        if size == 0 || size > rules.max_grid_size {
            return Err(GridError::InvalidGridSize {
                size,
                max: rules.max_grid_size,
            });
        }
        Ok(Grid {
            size,
            cells: alloc::vec![fill; size * size],
        })
    }

    /// Build a grid from text rows. Whitespace inside a row is ignored.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], rules: &Rules) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 || size > rules.max_grid_size {
            return Err(GridError::InvalidGridSize {
                size,
                max: rules.max_grid_size,
            });
        }
        let mut cells = Vec::with_capacity(size * size);
        for (r, line) in rows.iter().enumerate() {
            let start = cells.len();
            for ch in line.as_ref().chars().filter(|c| !c.is_whitespace()) {
                let col = cells.len() - start;
                let cell = C::from_char(ch, &rules.alphabet)
                    .ok_or(GridError::InvalidCell { row: r, col, ch })?;
                cells.push(cell);
            }
            let len = cells.len() - start;
            if len != size {
                return Err(GridError::RaggedGrid { row: r, len, size });
            }
        }
        Ok(Grid { size, cells })
    }

    /// Parse a grid written one row per line. Blank lines are skipped.
    pub fn parse(text: &str, rules: &Rules) -> Result<Self, GridError> {
        let rows: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        Self::from_rows(&rows, rules)
    }

    /// Render the grid one row per line using `alphabet`.
    pub fn render(&self, alphabet: &Alphabet) -> String {
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for row in self.rows() {
            out.extend(row.iter().map(|c| c.to_char(alphabet)));
            out.push('\n');
        }
        out
    }
}

impl<C: Copy + PartialEq> Grid<C> {
    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_valid_cell(&self, row: usize, col: usize) -> bool {
        is_valid_cell(row, col, self.size)
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if self.is_valid_cell(row, col) {
            Ok(row * self.size + col)
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<C, GridError> {
        self.index(row, col).map(|i| self.cells[i])
    }

    pub fn set(&mut self, row: usize, col: usize, cell: C) -> Result<(), GridError> {
        let i = self.index(row, col)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Returns `true` if the cell at (`row`, `col`) differs from `cell`.
    pub fn is_not(&self, row: usize, col: usize, cell: &C) -> Result<bool, GridError> {
        self.get(row, col).map(|c| c != *cell)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[C]> {
        self.cells.chunks(self.size)
    }

    /// Every cell with its coordinates, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), C)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| ((i / size, i % size), c))
    }

    /// Number of cells matching `pred`.
    pub fn count<F: Fn(&C) -> bool>(&self, pred: F) -> usize {
        self.cells.iter().filter(|c| pred(c)).count()
    }
}

impl<C: GridCell> fmt::Display for Grid<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Alphabet::STANDARD))
    }
}

impl<C: GridCell> fmt::Debug for Grid<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{ size: {},", self.size)?;
        for row in self.rows() {
            let line: String = row.iter().map(|c| c.to_char(&Alphabet::STANDARD)).collect();
            writeln!(f, "  {}", line)?;
        }
        write!(f, "}}")
    }
}

/// Returns `true` if (`row`, `col`) lies inside a `grid_size`×`grid_size` grid.
pub fn is_valid_cell(row: usize, col: usize, grid_size: usize) -> bool {
    row < grid_size && col < grid_size
}

/// Returns `true` if the cell at (`row`, `col`) is not `cell`.
pub fn is_not_given_char<C: Copy + PartialEq>(
    row: usize,
    col: usize,
    grid: &Grid<C>,
    cell: C,
) -> Result<bool, GridError> {
    grid.is_not(row, col, &cell)
}

/// A fleet grid with every cell empty.
pub fn make_empty_grid(grid_size: usize, rules: &Rules) -> Result<FleetGrid, GridError> {
    Grid::new(grid_size, Cell::Empty, rules)
}

/// A target grid with every cell unknown.
pub fn make_target_grid(grid_size: usize, rules: &Rules) -> Result<TargetGrid, GridError> {
    Grid::new(grid_size, TargetCell::Unknown, rules)
}
