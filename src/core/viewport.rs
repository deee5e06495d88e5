//! # Viewport
//!
//! Projects the lattice onto a bordered terminal window.
//!
//! Screen coordinates are 1-based `(row, col)` as terminals report them. Row 1,
//! row `rows`, col 1 and col `cols` hold the border, so cells are only drawn in
//! the interior. The lattice origin sits at `(origin_y + 1, origin_x + 1)`.

use crate::core::lattice::Cell;

/// Smallest side that still leaves room for a border.
pub const MIN_SIDE: u16 = 3;

/// 1-based terminal position. Signed because off-screen cells map outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenPos {
    pub row: i64,
    pub col: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    rows: u16,
    cols: u16,
    origin_x: i64,
    origin_y: i64,
}

impl Viewport {
    /// A viewport centered on the lattice origin.
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            origin_x: i64::from(cols / 2),
            origin_y: i64::from(rows / 2),
        }
    }

    pub fn with_origin(mut self, origin_x: i64, origin_y: i64) -> Self {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
        self
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn to_screen(&self, cell: Cell) -> ScreenPos {
        ScreenPos {
            row: self.origin_y - cell.y + 1,
            col: self.origin_x + cell.x + 1,
        }
    }

    /// Defined for every position, border and row/col 0 included; those map
    /// to cells that exist but are never drawn.
    pub fn to_lattice(&self, row: i64, col: i64) -> Cell {
        Cell {
            x: col - self.origin_x - 1,
            y: self.origin_y - row + 1,
        }
    }

    /// True strictly inside the border.
    pub fn is_interior(&self, pos: ScreenPos) -> bool {
        pos.row > 1
            && pos.col > 1
            && pos.row < i64::from(self.rows)
            && pos.col < i64::from(self.cols)
    }
}
