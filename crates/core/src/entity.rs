//! Entity model: the player-controlled snake and static items.
//!
//! Both variants share one capability set (`place`, `move_by`, `draw`,
//! `collides_with`), dispatched through the closed [`Entity`] enum.

use crate::screen::Screen;
use crate::types::{Direction, Position, Rgb, DEFAULT_ACTOR_SPEED, DEFAULT_OBJECT_GLYPH};

/// Color every actor segment is drawn with.
pub const HIGHLIGHT: Rgb = Rgb::WHITE;

/// Logical footprint of an entity. Only 1x1 is drawn today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
        }
    }
}

/// Multi-segment mover. `body[0]` is the head and `position` mirrors it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    size: Size,
    position: Position,
    color: Rgb,
    glyph: char,
    body: Vec<Position>,
    direction: Direction,
    speed: i32,
}

impl Actor {
    /// Lay out `length` segments in a vertical line starting at `start`
    /// (segment `i` at `(x, y + i)`). A zero length is treated as one.
    pub fn new(start: Position, length: usize) -> Self {
        let body = (0..length.max(1))
            .map(|i| start.offset(0, i as i32))
            .collect();
        Self {
            size: Size::default(),
            position: start,
            color: Rgb::WHITE,
            glyph: DEFAULT_OBJECT_GLYPH,
            body,
            direction: Direction::Right,
            speed: DEFAULT_ACTOR_SPEED,
        }
    }

    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_speed(mut self, speed: i32) -> Self {
        self.speed = speed;
        self
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Takes effect on the next [`Actor::advance`].
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    /// Step once along `direction * speed` on a `width x height` torus.
    pub fn advance(&mut self, width: u16, height: u16) {
        let (dx, dy) = self.direction.delta();
        self.translate(dx * self.speed, dy * self.speed, width, height);
    }

    /// Shift every segment into its predecessor's cell, then move the head
    /// by `(dx, dy)` and wrap it into the grid.
    pub fn translate(&mut self, dx: i32, dy: i32, width: u16, height: u16) {
        let head = self.body[0];
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        self.body[0] = head.offset(dx, dy).wrapped(width, height);
        self.position = self.body[0];
    }

    /// Rigid translation of the whole body, no wrapping.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        for seg in &mut self.body {
            *seg = seg.offset(dx, dy);
        }
        self.position = self.body[0];
    }

    /// Rigid translation so the head lands on `(x, y)`.
    pub fn place(&mut self, x: i32, y: i32) {
        let head = self.body[0];
        self.move_by(x - head.x, y - head.y);
    }

    /// Every segment, head first. Revisited cells are last-write-wins.
    pub fn draw(&self, screen: &mut Screen) {
        for seg in &self.body {
            screen.set_cell(seg.x, seg.y, self.glyph, HIGHLIGHT);
        }
    }
}

/// Static single-cell marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    size: Size,
    position: Position,
    color: Rgb,
    glyph: char,
}

impl Item {
    pub fn new(position: Position) -> Self {
        Self {
            size: Size::default(),
            position,
            color: Rgb::WHITE,
            glyph: DEFAULT_OBJECT_GLYPH,
        }
    }

    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn draw(&self, screen: &mut Screen) {
        screen.set_cell(self.position.x, self.position.y, self.glyph, self.color);
    }
}

/// Closed set of drawable world objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Actor(Actor),
    Item(Item),
}

impl Entity {
    pub fn position(&self) -> Position {
        match self {
            Entity::Actor(a) => a.position,
            Entity::Item(i) => i.position,
        }
    }

    pub fn size(&self) -> Size {
        match self {
            Entity::Actor(a) => a.size,
            Entity::Item(i) => i.size,
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            Entity::Actor(a) => a.color,
            Entity::Item(i) => i.color,
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Entity::Actor(a) => a.glyph,
            Entity::Item(i) => i.glyph,
        }
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) {
        match self {
            Entity::Actor(a) => a.move_by(dx, dy),
            Entity::Item(i) => i.position = i.position.offset(dx, dy),
        }
    }

    pub fn place(&mut self, x: i32, y: i32) {
        match self {
            Entity::Actor(a) => a.place(x, y),
            Entity::Item(i) => i.position = Position::new(x, y),
        }
    }

    /// Per-tick motion. Items never move.
    pub fn advance(&mut self, width: u16, height: u16) {
        if let Entity::Actor(a) = self {
            a.advance(width, height);
        }
    }

    pub fn draw(&self, screen: &mut Screen) {
        match self {
            Entity::Actor(a) => a.draw(screen),
            Entity::Item(i) => i.draw(screen),
        }
    }

    /// Hook for future rule systems. Collisions currently have no effect.
    pub fn collides_with(&self, _other: &Entity) -> bool {
        false
    }
}

impl From<Actor> for Entity {
    fn from(actor: Actor) -> Self {
        Entity::Actor(actor)
    }
}

impl From<Item> for Entity {
    fn from(item: Item) -> Self {
        Entity::Item(item)
    }
}
