use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::key::{Key, KeySource};

/// Key source backed by the crossterm event queue.
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            if let Some(key) = translate_event(event::read()?) {
                return Ok(key);
            }
        }
    }

    fn try_read_key(&mut self) -> io::Result<Option<Key>> {
        while event::poll(Duration::ZERO)? {
            match translate_event(event::read()?) {
                // A resize is not the second half of a chord
                Some(Key::Resize) | None => continue,
                Some(key) => return Ok(Some(key)),
            }
        }
        Ok(None)
    }
}

/// Map a terminal event to a core key. Events the viewer ignores map to `None`.
pub fn translate_event(event: Event) -> Option<Key> {
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            Some(translate_key(key_event))
        }
        Event::Resize(_, _) => Some(Key::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Key {
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Key::Interrupt,
        (m, KeyCode::Char(c)) if m.contains(KeyModifiers::ALT) => Key::Alt(c),
        // Alt with Enter, arrows or Backspace is still a chord, not navigation
        (m, _) if m.contains(KeyModifiers::ALT) => Key::Other,
        (_, KeyCode::Char(c)) => Key::Char(c),
        (_, KeyCode::Up) => Key::Up,
        (_, KeyCode::Down) => Key::Down,
        (_, KeyCode::Left) => Key::Left,
        (_, KeyCode::Right) => Key::Right,
        (_, KeyCode::Enter) => Key::Enter,
        (_, KeyCode::Backspace) => Key::Backspace,
        (_, KeyCode::Esc) => Key::Escape,
        _ => Key::Other,
    }
}
