//! # Board Component
//!
//! The whole simulation window: border, seed label, status line and cells.
//!
//! ```text
//! ┌───────────────────── GLIDER ─────────────────────┐
//! │                                                  │
//! │                       ▣▣▣                        │
//! │                         ▣                        │
//! │                        ▣                         │
//! │                                                  │
//! └─ GENERATION: 0 | POPULATION: 5 | PAUSED: true ───┘
//! ```
//!
//! Every frame is painted from scratch; ratatui only flushes the cells that
//! differ from the previous frame.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Block;

use crate::core::state::Universe;
use crate::tui::component::Component;

pub struct Board<'a> {
    pub universe: &'a Universe,
    pub cell_glyph: &'a str,
}

impl<'a> Board<'a> {
    pub fn new(universe: &'a Universe, cell_glyph: &'a str) -> Self {
        Self {
            universe,
            cell_glyph,
        }
    }

    pub fn seed_label(&self) -> String {
        format!(" {} ", self.universe.seed_name())
    }

    pub fn status_line(&self) -> String {
        format!(
            " GENERATION: {} | POPULATION: {} | PAUSED: {} ",
            self.universe.generation,
            self.universe.population(),
            self.universe.paused
        )
    }
}

impl Component for Board<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let viewport = self.universe.viewport;
        let area = Rect::new(area.x, area.y, viewport.cols(), viewport.rows()).intersection(area);

        let block = Block::bordered()
            .title_top(Line::from(self.seed_label()).centered())
            .title_bottom(Line::from(self.status_line()).centered());
        frame.render_widget(block, area);

        let buf = frame.buffer_mut();
        for cell in self.universe.lattice.cells() {
            let pos = viewport.to_screen(cell);
            if !viewport.is_interior(pos) {
                continue;
            }
            // Screen positions are 1-based, the buffer is 0-based.
            let (Ok(col), Ok(row)) = (u16::try_from(pos.col - 1), u16::try_from(pos.row - 1))
            else {
                continue;
            };
            if let Some(target) = buf.cell_mut((area.x + col, area.y + row)) {
                target.set_symbol(self.cell_glyph);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_universe;

    #[test]
    fn test_status_line_format() {
        let mut universe = test_universe();
        universe.generation = 12;
        universe.paused = false;
        let board = Board::new(&universe, "#");
        assert_eq!(
            board.status_line(),
            " GENERATION: 12 | POPULATION: 7 | PAUSED: false "
        );
        assert_eq!(board.seed_label(), " ACORN ");
    }
}
