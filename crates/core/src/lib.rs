//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the pixel buffer, the entity model and the world that
//! ties them together. It has **zero dependencies** on terminals or I/O, so
//! every rule can be exercised from unit tests.
//!
//! # Module Structure
//!
//! - [`screen`]: fixed-size glyph/color grid, bounds-checked writes, bordered
//!   text projection ([`Frame`])
//! - [`entity`]: the multi-segment [`Actor`] and the static [`Item`], unified
//!   by the closed [`Entity`] enum
//! - [`world`]: ordered entity list plus the toroidal grid dimensions
//! - [`diagnostics`]: per-tick `{source: [values]}` dump
//!
//! # Example
//!
//! ```
//! use snake_loop_core::{Actor, Item, Screen, World};
//! use snake_loop_types::{Position, Rgb};
//!
//! let mut world = World::new(20, 20);
//! let snake = world.add(Actor::new(Position::new(0, 0), 9).with_glyph('▀'));
//! world.add(Item::new(Position::new(10, 10)).with_glyph('∆'));
//!
//! world.advance();
//! assert_eq!(world.actor(snake).unwrap().head(), Position::new(1, 0));
//!
//! let mut screen = Screen::new(20, 20, Rgb::BLACK);
//! world.draw(&mut screen);
//! assert!(screen.errors().is_empty());
//! ```

pub mod diagnostics;
pub mod entity;
pub mod screen;
pub mod world;

pub use snake_loop_types as types;

pub use diagnostics::Diagnostics;
pub use entity::{Actor, Entity, Item, Size, HIGHLIGHT};
pub use screen::{Frame, Overflow, Pixel, Screen, Token, Tone};
pub use world::{EntityId, World};
