//! # Core Simulation Logic
//!
//! This module contains the Game of Life itself.
//! It knows nothing about any specific terminal technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Lattice (live cells) │
//!                    │  • tick() (B3/S23)      │
//!                    │  • Viewport mapping     │
//!                    │  • Universe + update()  │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`lattice`]: `Cell` and the sparse `Lattice`
//! - [`evolution`]: `tick()`, one generation step
//! - [`viewport`]: lattice ↔ terminal coordinates
//! - [`seeds`]: the fixed pattern catalog
//! - [`state`]: the `Universe` struct, all simulation state in one place
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`config`]: settings resolution (file, env, CLI)

pub mod action;
pub mod config;
pub mod evolution;
pub mod lattice;
pub mod seeds;
pub mod state;
pub mod viewport;
