//! # Seed Catalog
//!
//! Fixed starting patterns, browsed with the arrow keys while paused.
//! Coordinates are lattice cells with `y` pointing up, roughly centered on the
//! origin so each pattern opens in the middle of the viewport.

use crate::core::lattice::Lattice;

pub struct Seed {
    pub name: &'static str,
    pub cells: &'static [(i64, i64)],
}

impl Seed {
    pub fn lattice(&self) -> Lattice {
        Lattice::from_cells(self.cells)
    }
}

pub const CATALOG: &[Seed] = &[
    Seed {
        name: "ACORN",
        cells: &[(-2, 1), (0, 0), (-3, -1), (-2, -1), (1, -1), (2, -1), (3, -1)],
    },
    Seed {
        name: "GLIDER",
        cells: &[(0, 0), (1, 0), (2, 0), (2, -1), (1, -2)],
    },
    Seed {
        name: "R_PENTOMINO",
        cells: &[(0, 0), (1, 0), (-1, 1), (0, 1), (0, 2)],
    },
    Seed {
        name: "BLINKER",
        cells: &[(-1, 0), (0, 0), (1, 0)],
    },
    Seed {
        name: "PULSAR",
        cells: &[
            (-4, 6), (-3, 6), (-2, 6), (2, 6), (3, 6), (4, 6),
            (-6, 4), (-1, 4), (1, 4), (6, 4),
            (-6, 3), (-1, 3), (1, 3), (6, 3),
            (-6, 2), (-1, 2), (1, 2), (6, 2),
            (-4, 1), (-3, 1), (-2, 1), (2, 1), (3, 1), (4, 1),
            (-4, -1), (-3, -1), (-2, -1), (2, -1), (3, -1), (4, -1),
            (-6, -2), (-1, -2), (1, -2), (6, -2),
            (-6, -3), (-1, -3), (1, -3), (6, -3),
            (-6, -4), (-1, -4), (1, -4), (6, -4),
            (-4, -6), (-3, -6), (-2, -6), (2, -6), (3, -6), (4, -6),
        ],
    },
    Seed {
        name: "GOSPER_GUN",
        cells: &[
            (6, 4),
            (4, 3), (6, 3),
            (-6, 2), (-5, 2), (2, 2), (3, 2), (16, 2), (17, 2),
            (-7, 1), (-3, 1), (2, 1), (3, 1), (16, 1), (17, 1),
            (-18, 0), (-17, 0), (-8, 0), (-2, 0), (2, 0), (3, 0),
            (-18, -1), (-17, -1), (-8, -1), (-4, -1), (-2, -1), (-1, -1), (4, -1), (6, -1),
            (-8, -2), (-2, -2), (6, -2),
            (-7, -3), (-3, -3),
            (-6, -4), (-5, -4),
        ],
    },
];

/// Case-insensitive lookup; `-` and `_` are interchangeable.
pub fn find(name: &str) -> Option<usize> {
    let wanted = name.trim().replace('-', "_");
    CATALOG
        .iter()
        .position(|seed| seed.name.eq_ignore_ascii_case(&wanted))
}
