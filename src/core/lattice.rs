//! # Lattice
//!
//! The simulation grid. Conceptually infinite, stored sparsely: only live
//! cells are kept, so memory follows population, not area.
//!
//! ```text
//!   (-1, 1)  (0, 1)  (1, 1)
//!   (-1, 0)  (x, y)  (1, 0)
//!   (-1,-1)  (0,-1)  (1,-1)
//! ```
//!
//! `y` grows upwards. The viewport flips it when mapping to terminal rows.

use std::collections::HashSet;

/// A lattice position. Equality and hashing are structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// Moore neighborhood, clockwise from top-left.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
];

/// Sparse set of live cells. Absence means dead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lattice {
    live: HashSet<Cell>,
}

impl Lattice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: &[(i64, i64)]) -> Self {
        cells.iter().copied().map(Cell::from).collect()
    }

    pub fn add_cell(&mut self, cell: Cell) {
        self.live.insert(cell);
    }

    pub fn remove_cell(&mut self, cell: Cell) {
        self.live.remove(&cell);
    }

    pub fn is_live(&self, cell: Cell) -> bool {
        self.live.contains(&cell)
    }

    /// Splits the 8 neighbors of `cell` into `(dead, live)`.
    ///
    /// Both vectors keep the order of [`NEIGHBOR_OFFSETS`].
    pub fn neighbors(&self, cell: Cell) -> (Vec<Cell>, Vec<Cell>) {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy)| cell.offset(dx, dy))
            .partition(|&n| !self.is_live(n))
    }

    /// Same count as `neighbors(cell).1.len()` without allocating.
    pub fn live_neighbor_count(&self, cell: Cell) -> usize {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| self.is_live(cell.offset(dx, dy)))
            .count()
    }

    pub fn population(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Live cells in unspecified order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.live.iter().copied()
    }
}

impl FromIterator<Cell> for Lattice {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            live: iter.into_iter().collect(),
        }
    }
}
