use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::Navigator;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{MenuList, StatusLine, TitleBar};

pub const TITLE: &str = "OpenAI Model Viewer";
/// Column of the title text.
pub const TITLE_COL: u16 = 1;
/// Column where menu rows start.
pub const MENU_COL: u16 = 3;

/// Draw one frame: title on row 1, menu rows from row 3, status on the last row.
pub fn draw_ui(frame: &mut Frame, nav: &Navigator, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Length(1), Min(0), Length(1)]);
    let [_, title_row, _, menu_area, status_row] = layout.areas(frame.area());

    TitleBar::new(TITLE).render(frame, indent(title_row, TITLE_COL));

    MenuList::new(nav.menu_items(), nav.current_choice(), &mut tui.menu_state)
        .render(frame, indent(menu_area, MENU_COL));

    StatusLine::new(nav.banner(), nav.mode()).render(frame, indent(status_row, TITLE_COL));
}

/// Shift an area right by `cols`, clipped to its original width.
fn indent(area: Rect, cols: u16) -> Rect {
    let cols = cols.min(area.width);
    Rect {
        x: area.x + cols,
        width: area.width - cols,
        ..area
    }
}
