//! # Menu List Component
//!
//! Numbered rows of the current view with the selected row reverse-highlighted.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ListState` lives in `TuiState` so the scroll offset survives frames
//! - `MenuList` is created each frame with borrowed state and props

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{List, ListItem, ListState};

use crate::tui::component::Component;

/// Transient render wrapper for the menu rows.
pub struct MenuList<'a> {
    items: &'a [String],
    selected: Option<usize>,
    state: &'a mut ListState,
}

impl<'a> MenuList<'a> {
    /// `selected` of `None` draws every row unhighlighted.
    pub fn new(items: &'a [String], selected: Option<usize>, state: &'a mut ListState) -> Self {
        Self {
            items,
            selected,
            state,
        }
    }
}

/// Row text as shown on screen: one-based number, then the item.
pub fn numbered(index: usize, item: &str) -> String {
    format!("{}. {}", index + 1, item)
}

impl Component for MenuList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| ListItem::new(numbered(i, item)))
            .collect();

        // The list widget scrolls to keep the selection visible
        self.state.select(self.selected);
        if self.selected.is_none() {
            *self.state.offset_mut() = 0;
        }

        let list =
            List::new(rows).highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(list, area, &mut *self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn items(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("model-{i}")).collect()
    }

    fn draw(
        items: &[String],
        selected: Option<usize>,
        state: &mut ListState,
        height: u16,
    ) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(30, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                MenuList::new(items, selected, state).render(f, area);
            })
            .unwrap();
        terminal
    }

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer.cell((x, y)).unwrap().symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    fn is_reversed(terminal: &Terminal<TestBackend>, y: u16) -> bool {
        let cell = terminal.backend().buffer().cell((0, y)).unwrap();
        cell.modifier.contains(Modifier::REVERSED)
    }

    #[test]
    fn test_numbered_rows() {
        assert_eq!(numbered(0, "Quit"), "1. Quit");
        assert_eq!(numbered(9, "Back"), "10. Back");
    }

    #[test]
    fn test_only_selected_row_is_reversed() {
        let items = items(3);
        let mut state = ListState::default();
        let terminal = draw(&items, Some(1), &mut state, 5);
        assert_eq!(row_text(&terminal, 0), "1. model-0");
        assert_eq!(row_text(&terminal, 1), "2. model-1");
        assert!(!is_reversed(&terminal, 0));
        assert!(is_reversed(&terminal, 1));
        assert!(!is_reversed(&terminal, 2));
    }

    #[test]
    fn test_no_row_reversed_without_selection() {
        let items = items(2);
        let mut state = ListState::default();
        let terminal = draw(&items, None, &mut state, 4);
        assert!(!is_reversed(&terminal, 0));
        assert!(!is_reversed(&terminal, 1));
    }

    #[test]
    fn test_scrolls_to_keep_selection_visible() {
        let items = items(10);
        let mut state = ListState::default();
        let terminal = draw(&items, Some(7), &mut state, 3);
        assert_eq!(row_text(&terminal, 2), "8. model-7");
        assert!(is_reversed(&terminal, 2));
    }
}
