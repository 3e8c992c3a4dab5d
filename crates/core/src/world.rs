//! World: the grid dimensions plus an ordered list of entities.

use crate::entity::{Actor, Entity};
use crate::screen::Screen;

/// Handle returned by [`World::add`]. Entities are never removed, so a
/// handle stays valid for the lifetime of the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(usize);

#[derive(Debug, Clone)]
pub struct World {
    width: u16,
    height: u16,
    entities: Vec<Entity>,
}

impl World {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            entities: Vec::new(),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn add(&mut self, entity: impl Into<Entity>) -> EntityId {
        self.entities.push(entity.into());
        EntityId(self.entities.len() - 1)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.0)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.0)
    }

    pub fn actor(&self, id: EntityId) -> Option<&Actor> {
        match self.get(id) {
            Some(Entity::Actor(a)) => Some(a),
            _ => None,
        }
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut Actor> {
        match self.get_mut(id) {
            Some(Entity::Actor(a)) => Some(a),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Advance every entity one tick on this world's torus.
    pub fn advance(&mut self) {
        let (w, h) = (self.width, self.height);
        for entity in &mut self.entities {
            entity.advance(w, h);
        }
    }

    /// Draw in insertion order; later entities overwrite earlier ones.
    pub fn draw(&self, screen: &mut Screen) {
        for entity in &self.entities {
            entity.draw(screen);
        }
    }
}
