//! Game loop engine.
//!
//! [`Controller`] owns the [`World`](crate::core::World), the
//! [`Screen`](crate::core::Screen), an [`InputSource`](crate::input::InputSource)
//! and a [`FrameSink`](crate::term::FrameSink), and drives the
//! `Running -> Terminated` state machine one tick at a time.
//!
//! # Example
//!
//! ```
//! use snake_loop_engine::{Controller, GameConfig, LoopState};
//! use snake_loop_input::ScriptedInput;
//! use snake_loop_term::RecordingSink;
//!
//! let mut game = Controller::new(
//!     GameConfig::default(),
//!     ScriptedInput::from_keys("ssq"),
//!     RecordingSink::new(),
//! )
//! .unwrap();
//!
//! game.run().unwrap();
//! assert_eq!(game.state(), LoopState::Terminated);
//! ```

pub mod config;
pub mod controller;
pub mod error;

pub use snake_loop_core as core;
pub use snake_loop_input as input;
pub use snake_loop_term as term;
pub use snake_loop_types as types;

pub use config::{ConfigError, GameConfig};
pub use controller::{Controller, LoopState, TickReport};
pub use error::GameError;
