use ratatui::Frame;

use crate::core::state::Universe;
use crate::tui::component::Component;
use crate::tui::components::Board;

pub fn draw_ui(frame: &mut Frame, universe: &Universe, cell_glyph: &str) {
    let area = frame.area();
    Board::new(universe, cell_glyph).render(frame, area);
}
