//! Keyboard input as the core sees it.

use std::io;

/// A key press, already decoded from the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Backspace,
    Escape,
    /// Ctrl+C. Raw mode turns it into a key instead of a signal.
    Interrupt,
    Char(char),
    /// An Alt chord the backend delivered as a single event.
    Alt(char),
    /// Terminal resized. Only triggers a redraw.
    Resize,
    Other,
}

impl Key {
    /// Enter or Right: select the highlighted row.
    pub fn is_confirm(self) -> bool {
        matches!(self, Key::Enter | Key::Right)
    }

    /// Backspace or Left: go back one view.
    pub fn is_back(self) -> bool {
        matches!(self, Key::Backspace | Key::Left)
    }

    pub fn is_quit(self) -> bool {
        matches!(self, Key::Char('q' | 'Q') | Key::Interrupt)
    }
}

/// Where keys come from.
///
/// `try_read_key` is the non-blocking probe used to tell a lone Escape from
/// the first half of an Alt chord.
pub trait KeySource {
    /// Block until the next key is available.
    fn read_key(&mut self) -> io::Result<Key>;

    /// Return the next key if one is already pending, `None` otherwise.
    fn try_read_key(&mut self) -> io::Result<Option<Key>>;
}
