//! # TUI Components
//!
//! ```text
//! components/
//! ├── mod.rs       (this file)
//! └── board.rs     (Bordered simulation window with status bars)
//! ```

pub mod board;
pub use board::Board;
