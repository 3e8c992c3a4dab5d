//! Construction-time configuration of the game loop.

use std::time::Duration;

use thiserror::Error;

use crate::types::{
    Direction, Position, Rgb, BACKGROUND_GLYPH, DEFAULT_ACTOR_GLYPH, DEFAULT_ACTOR_LENGTH,
    DEFAULT_ACTOR_SPEED, DEFAULT_ACTOR_START, DEFAULT_EXIT_KEY, DEFAULT_HEIGHT,
    DEFAULT_INPUT_BUFFER_LIMIT, DEFAULT_ITEM_GLYPH, DEFAULT_ITEM_POSITION,
    DEFAULT_POLL_TIMEOUT_MS, DEFAULT_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid width must be non-zero")]
    ZeroWidth,
    #[error("grid height must be non-zero")]
    ZeroHeight,
    #[error("actor length must be non-zero")]
    ZeroActorLength,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub exit_key: char,
    /// The input ring evicts once it holds more than this many keys.
    pub buffer_limit: usize,
    pub poll_timeout: Duration,
    pub background: Rgb,
    pub background_glyph: char,
    pub actor_start: Position,
    pub actor_length: usize,
    pub actor_glyph: char,
    pub actor_direction: Direction,
    pub actor_speed: i32,
    pub item_position: Position,
    pub item_glyph: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            exit_key: DEFAULT_EXIT_KEY,
            buffer_limit: DEFAULT_INPUT_BUFFER_LIMIT,
            poll_timeout: Duration::from_millis(DEFAULT_POLL_TIMEOUT_MS),
            background: Rgb::BLACK,
            background_glyph: BACKGROUND_GLYPH,
            actor_start: DEFAULT_ACTOR_START,
            actor_length: DEFAULT_ACTOR_LENGTH,
            actor_glyph: DEFAULT_ACTOR_GLYPH,
            actor_direction: Direction::Right,
            actor_speed: DEFAULT_ACTOR_SPEED,
            item_position: DEFAULT_ITEM_POSITION,
            item_glyph: DEFAULT_ITEM_GLYPH,
        }
    }
}

impl GameConfig {
    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_exit_key(mut self, key: char) -> Self {
        self.exit_key = key;
        self
    }

    pub fn with_buffer_limit(mut self, limit: usize) -> Self {
        self.buffer_limit = limit;
        self
    }

    pub fn with_poll_timeout(mut self, timeout: Duration) -> Self {
        self.poll_timeout = timeout;
        self
    }

    pub fn with_background_glyph(mut self, glyph: char) -> Self {
        self.background_glyph = glyph;
        self
    }

    pub fn with_actor(mut self, start: Position, length: usize, glyph: char) -> Self {
        self.actor_start = start;
        self.actor_length = length;
        self.actor_glyph = glyph;
        self
    }

    pub fn with_actor_motion(mut self, direction: Direction, speed: i32) -> Self {
        self.actor_direction = direction;
        self.actor_speed = speed;
        self
    }

    pub fn with_item(mut self, position: Position, glyph: char) -> Self {
        self.item_position = position;
        self.item_glyph = glyph;
        self
    }

    /// Reject configurations the loop cannot run with. An item placed off
    /// the grid is allowed; it only produces overflow diagnostics.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.actor_length == 0 {
            return Err(ConfigError::ZeroActorLength);
        }
        Ok(())
    }
}
