//! # TitleBar Component
//!
//! The fixed, emphasized title drawn at the top of every view.
//!
//! Purely presentational: it receives the text as a prop and has no state.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(TITLE);
//! title_bar.render(frame, title_area);
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Single-line title, bold white on blue.
pub struct TitleBar<'a> {
    /// Title text (e.g., "OpenAI Model Viewer")
    pub title: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    pub fn style() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    }
}

impl Component for TitleBar<'_> {
    /// Only the text itself is highlighted, not the rest of the row.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::styled(self.title, Self::style()), area);
    }
}
