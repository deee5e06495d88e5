//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::lattice::Lattice;
use crate::core::state::Universe;
use crate::core::viewport::Viewport;

/// An 80x24 universe loaded with the first catalog seed, paused.
pub fn test_universe() -> Universe {
    Universe::new(Viewport::new(24, 80))
}

pub fn lattice_of(cells: &[(i64, i64)]) -> Lattice {
    Lattice::from_cells(cells)
}
