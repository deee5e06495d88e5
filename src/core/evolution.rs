//! # Evolution
//!
//! B3/S23 on a [`Lattice`]. The rule reads a frozen snapshot and writes a fresh
//! lattice, so the scan order never affects the outcome.

use std::collections::HashSet;

use crate::core::lattice::{Cell, Lattice};

/// Computes the next generation of `lattice`.
///
/// Only live cells and their dead neighbors can be alive next generation, so
/// those are the only cells visited. Each dead candidate is evaluated once
/// even when several live cells border it.
pub fn tick(lattice: &Lattice) -> Lattice {
    let mut next = Lattice::new();
    let mut candidates: HashSet<Cell> = HashSet::new();

    for cell in lattice.cells() {
        let (dead, live) = lattice.neighbors(cell);
        if live.len() == 2 || live.len() == 3 {
            next.add_cell(cell);
        }
        candidates.extend(dead);
    }

    for cell in candidates {
        if lattice.live_neighbor_count(cell) == 3 {
            next.add_cell(cell);
        }
    }

    next
}
