//! crossterm-backed input source for real terminals.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use log::{trace, warn};

use crate::map::{is_interrupt, key_to_char};
use crate::source::{InputError, InputSource};

/// Reads one key press per poll via `crossterm::event::poll`.
///
/// The terminal must be in raw mode for keys to arrive unbuffered and
/// unechoed; the renderer enables it for the game, [`RawModeGuard`] does it
/// for standalone use.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self, timeout: Duration) -> Result<Option<char>, InputError> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if is_interrupt(key) {
                    warn!("interrupt key received");
                    return Err(InputError::Interrupted);
                }
                let ch = key_to_char(key);
                trace!("key {:?} -> {:?}", key.code, ch);
                Ok(ch)
            }
            // Releases, repeats, resizes and mouse events count as an empty poll.
            _ => Ok(None),
        }
    }
}

/// Enables raw mode for its lifetime.
pub struct RawModeGuard(());

impl RawModeGuard {
    pub fn enable() -> Result<Self, InputError> {
        terminal::enable_raw_mode()?;
        Ok(Self(()))
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
