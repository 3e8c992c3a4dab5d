//! Terminal output module.
//!
//! The game loop hands each rendered [`Frame`](crate::core::Frame) and its
//! diagnostics to a [`FrameSink`]. [`TerminalRenderer`] is the crossterm
//! sink: it clears the terminal, homes the cursor and prints the two-tone
//! bordered grid followed by the diagnostics dump. [`RecordingSink`] keeps
//! plain-text copies for headless runs and tests.

pub mod renderer;
pub mod sink;

pub use snake_loop_core as core;
pub use snake_loop_types as types;

pub use renderer::{encode_frame_into, TerminalRenderer};
pub use sink::{FrameSink, RecordingSink};
