//! Key mapping from characters and terminal events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{Direction, INTERRUPT_CODE};

/// Fixed steering table. Case-sensitive; anything else is ignored.
pub fn direction_for_key(ch: char) -> Option<Direction> {
    match ch {
        'w' => Some(Direction::Up),
        'a' => Some(Direction::Left),
        's' => Some(Direction::Down),
        'd' => Some(Direction::Right),
        _ => None,
    }
}

/// Check if key is the hard-stop interrupt (Ctrl+C or a raw ETX byte).
pub fn is_interrupt(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char(ch) => ch as u32 == INTERRUPT_CODE,
        _ => false,
    }
}

/// Reduce a key event to the single character the game loop buffers.
///
/// Arrow keys are folded onto the `w/a/s/d` steering keys. Chords with
/// Ctrl/Alt and all other special keys yield `None`.
pub fn key_to_char(key: KeyEvent) -> Option<char> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(ch) => Some(ch),
        KeyCode::Up => Some('w'),
        KeyCode::Left => Some('a'),
        KeyCode::Down => Some('s'),
        KeyCode::Right => Some('d'),
        _ => None,
    }
}
