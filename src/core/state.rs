//! # Universe State
//!
//! All simulation state in one place.
//!
//! ```text
//! Universe
//! ├── lattice: Lattice          // live cells
//! ├── generation: u64           // ticks since last seed load
//! ├── paused: bool              // editing allowed while true
//! ├── viewport: Viewport        // fixed at startup
//! ├── catalog: &[Seed]          // browsable patterns
//! └── seed_index: usize         // current catalog entry
//! ```
//!
//! State changes only happen through `update(universe, action)` in action.rs.

use crate::core::evolution;
use crate::core::lattice::Lattice;
use crate::core::seeds::{CATALOG, Seed};
use crate::core::viewport::Viewport;

pub struct Universe {
    pub lattice: Lattice,
    pub generation: u64,
    pub paused: bool,
    pub viewport: Viewport,
    catalog: &'static [Seed],
    seed_index: usize,
}

impl Universe {
    /// Paused, generation 0, first catalog entry loaded.
    pub fn new(viewport: Viewport) -> Self {
        Self::with_catalog(viewport, CATALOG)
    }

    /// An empty catalog yields an empty lattice and makes seed cycling a no-op.
    pub fn with_catalog(viewport: Viewport, catalog: &'static [Seed]) -> Self {
        let lattice = catalog.first().map(Seed::lattice).unwrap_or_default();
        Self {
            lattice,
            generation: 0,
            paused: true,
            viewport,
            catalog,
            seed_index: 0,
        }
    }

    pub fn seed_index(&self) -> usize {
        self.seed_index
    }

    pub fn seed_name(&self) -> &'static str {
        self.catalog
            .get(self.seed_index)
            .map(|seed| seed.name)
            .unwrap_or("EMPTY")
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    pub fn population(&self) -> usize {
        self.lattice.population()
    }

    /// Replaces the lattice with catalog entry `index` (wrapped) and resets
    /// the generation counter.
    pub fn select_seed(&mut self, index: usize) {
        if self.catalog.is_empty() {
            return;
        }
        self.seed_index = index % self.catalog.len();
        self.lattice = self.catalog[self.seed_index].lattice();
        self.generation = 0;
    }

    pub fn next_seed(&mut self) {
        self.select_seed(self.seed_index + 1);
    }

    pub fn prev_seed(&mut self) {
        let len = self.catalog_len().max(1);
        self.select_seed(self.seed_index + len - 1);
    }

    pub fn tick(&mut self) {
        self.lattice = evolution::tick(&self.lattice);
        self.generation += 1;
    }
}
