//! # Actions
//!
//! Everything that can happen to the universe becomes an `Action`.
//! Space pressed? That's `Action::TogglePause`. Frame elapsed while running?
//! That's `Action::Tick`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state and returns an `Effect` telling the run loop what to do next.
//! No I/O here.
//!
//! ```text
//! Universe + Action  →  update()  →  Universe' + Effect
//! ```

use log::{debug, info};

use crate::core::lattice::Cell;
use crate::core::state::Universe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    TogglePause,
    Tick,
    NextSeed,
    PrevSeed,
    /// Mark a cell live.
    ToggleOn(Cell),
    /// Mark a cell dead.
    ToggleOff(Cell),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

/// Applies `action` to `universe`.
///
/// Edits and seed browsing are paused-only; while running they are dropped
/// here as well as in the input mapping.
pub fn update(universe: &mut Universe, action: Action) -> Effect {
    match action {
        Action::Quit => {
            info!("Quit requested at generation {}", universe.generation);
            return Effect::Quit;
        }
        Action::TogglePause => {
            universe.paused = !universe.paused;
            info!(
                "{} at generation {}",
                if universe.paused { "Paused" } else { "Running" },
                universe.generation
            );
        }
        Action::Tick => universe.tick(),
        Action::NextSeed | Action::PrevSeed if !universe.paused => {
            debug!("Ignoring {:?} while running", action);
        }
        Action::NextSeed => {
            universe.next_seed();
            info!("Seed selected: {}", universe.seed_name());
        }
        Action::PrevSeed => {
            universe.prev_seed();
            info!("Seed selected: {}", universe.seed_name());
        }
        Action::ToggleOn(_) | Action::ToggleOff(_) if !universe.paused => {
            debug!("Ignoring {:?} while running", action);
        }
        Action::ToggleOn(cell) => {
            universe.lattice.add_cell(cell);
            debug!("Cell on at ({}, {})", cell.x, cell.y);
        }
        Action::ToggleOff(cell) => {
            universe.lattice.remove_cell(cell);
            debug!("Cell off at ({}, {})", cell.x, cell.y);
        }
    }
    Effect::None
}
