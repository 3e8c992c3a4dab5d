//! Terminal input module (engine-facing).
//!
//! The game loop only depends on the [`InputSource`] capability: a timed poll
//! that yields at most one character. This crate provides that trait, the
//! bounded [`InputBuffer`] ring the loop keeps polled keys in, the fixed
//! `w/a/s/d` steering table, and a crossterm adapter for real terminals.
//!
//! The hard-stop interrupt (Ctrl+C) is surfaced as
//! [`InputError::Interrupted`], separate from the game's own exit key.

pub mod buffer;
pub mod map;
pub mod source;
pub mod terminal;

pub use snake_loop_types as types;

pub use buffer::InputBuffer;
pub use map::{direction_for_key, is_interrupt, key_to_char};
pub use source::{InputError, InputSource, ScriptedInput};
pub use terminal::{RawModeGuard, TerminalInput};
