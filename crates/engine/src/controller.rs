//! The game loop state machine.
//!
//! One tick:
//!
//! 1. pop the oldest buffered key and, if it is a steering key, turn the actor
//! 2. advance every entity
//! 3. clear the screen and draw the world in insertion order
//! 4. render the frame
//! 5. collect this tick's diagnostics and present frame + diagnostics
//! 6. poll input (blocking up to the poll timeout) into the bounded ring
//! 7. terminate if the exit key is anywhere in the ring
//!
//! The poll timeout is the only pacing mechanism; there is no separate clock.

use log::{debug, info};

use crate::config::GameConfig;
use crate::core::{Actor, Diagnostics, EntityId, Frame, Item, Screen, World};
use crate::error::GameError;
use crate::input::{direction_for_key, InputBuffer, InputSource};
use crate::term::FrameSink;
use crate::types::{Direction, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// What one call to [`Controller::step`] produced.
#[derive(Debug, Clone)]
pub struct TickReport {
    pub state: LoopState,
    pub tick: u64,
    /// Steering applied this tick, if a buffered key mapped to one.
    pub turned: Option<Direction>,
    pub head: Position,
    pub frame: Frame,
    pub diagnostics: Diagnostics,
}

pub struct Controller<I, S> {
    config: GameConfig,
    world: World,
    screen: Screen,
    player: EntityId,
    input: I,
    sink: S,
    buffer: InputBuffer,
    state: LoopState,
    ticks: u64,
}

impl<I: InputSource, S: FrameSink> Controller<I, S> {
    /// Build the world (actor first, then the item) and an empty screen.
    pub fn new(config: GameConfig, input: I, sink: S) -> Result<Self, GameError> {
        config.validate()?;

        let mut world = World::new(config.width, config.height);
        let player = world.add(
            Actor::new(config.actor_start, config.actor_length)
                .with_glyph(config.actor_glyph)
                .with_direction(config.actor_direction)
                .with_speed(config.actor_speed),
        );
        world.add(Item::new(config.item_position).with_glyph(config.item_glyph));

        let screen = Screen::new(config.width, config.height, config.background)
            .with_background_glyph(config.background_glyph);
        let buffer = InputBuffer::new(config.buffer_limit);

        Ok(Self {
            config,
            world,
            screen,
            player,
            input,
            sink,
            buffer,
            state: LoopState::Running,
            ticks: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn actor(&self) -> Option<&Actor> {
        self.world.actor(self.player)
    }

    pub fn input_buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    pub fn input_buffer_mut(&mut self) -> &mut InputBuffer {
        &mut self.buffer
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (I, S) {
        (self.input, self.sink)
    }

    /// Present an initial frame, then tick until the exit key is seen.
    ///
    /// Returns `Err(GameError::Interrupted)` on the hard-stop key without
    /// changing the loop state.
    pub fn run(&mut self) -> Result<(), GameError> {
        info!(
            "game loop starting: {}x{} grid, exit key {:?}",
            self.config.width, self.config.height, self.config.exit_key
        );

        self.redraw();
        let frame = self.screen.render();
        let diagnostics = self.collect_diagnostics();
        self.sink
            .present(&frame, &diagnostics)
            .map_err(GameError::Render)?;

        while self.state == LoopState::Running {
            self.step()?;
        }

        info!("game loop terminated after {} ticks", self.ticks);
        Ok(())
    }

    /// Run one tick. A terminated controller returns its last state without
    /// polling or drawing.
    pub fn step(&mut self) -> Result<TickReport, GameError> {
        if self.state == LoopState::Terminated {
            return Ok(TickReport {
                state: self.state,
                tick: self.ticks,
                turned: None,
                head: self.head(),
                frame: self.screen.render(),
                diagnostics: Diagnostics::new(),
            });
        }

        let turned = self.consume_input();
        self.world.advance();
        self.redraw();

        let frame = self.screen.render();
        let diagnostics = self.collect_diagnostics();
        self.sink
            .present(&frame, &diagnostics)
            .map_err(GameError::Render)?;

        let key = self.input.poll(self.config.poll_timeout)?;
        self.buffer.push(key);

        if self.buffer.contains(self.config.exit_key) {
            debug!("exit key {:?} found in input buffer", self.config.exit_key);
            self.state = LoopState::Terminated;
        }
        self.ticks += 1;

        Ok(TickReport {
            state: self.state,
            tick: self.ticks,
            turned,
            head: self.head(),
            frame,
            diagnostics,
        })
    }

    /// Only the oldest key is consulted; it is consumed whether or not it
    /// steers.
    fn consume_input(&mut self) -> Option<Direction> {
        let dir = self.buffer.pop_front().and_then(direction_for_key)?;
        let actor = self.world.actor_mut(self.player)?;
        actor.set_direction(dir);
        debug!("actor turned {}", dir.as_str());
        Some(dir)
    }

    fn redraw(&mut self) {
        self.screen.clear();
        self.world.draw(&mut self.screen);
    }

    fn collect_diagnostics(&mut self) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        let errors = self.screen.take_errors();
        if !errors.is_empty() {
            debug!("{} pixel writes dropped", errors.len());
            diagnostics.set("screen", errors);
        }
        diagnostics.set("input buffer", self.buffer.as_slice().iter().copied());
        diagnostics
    }

    fn head(&self) -> Position {
        self.actor().map(Actor::head).unwrap_or_default()
    }
}
