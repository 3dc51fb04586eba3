//! # Status Line Component
//!
//! Bottom row: the navigator's banner when there is one, otherwise the key
//! hints for the current view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::{Banner, Mode};
use crate::tui::component::Component;

pub struct StatusLine<'a> {
    pub banner: Option<&'a Banner>,
    pub mode: Mode,
}

impl<'a> StatusLine<'a> {
    pub fn new(banner: Option<&'a Banner>, mode: Mode) -> Self {
        Self { banner, mode }
    }
}

pub fn key_hints(mode: Mode) -> &'static str {
    match mode {
        Mode::MainMenu => "↑/↓ Move  Enter Select  q Quit",
        Mode::ListModels => "↑/↓ Move  Enter Details  ← Back  q Quit",
        Mode::ViewModel => "← Back  q Quit",
    }
}

impl Component for StatusLine<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = match self.banner {
            Some(banner) => {
                let color = match banner {
                    Banner::Error(_) => Color::Red,
                    Banner::Info(_) => Color::Yellow,
                };
                Span::styled(banner.text(), Style::default().fg(color))
            }
            None => Span::styled(key_hints(self.mode), Style::default().fg(Color::DarkGray)),
        };
        frame.render_widget(span, area);
    }
}
