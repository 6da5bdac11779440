// The game world: entities and the camera that follows them

use super::entity::{Entity, FrameContext};
use crate::core::FloatRect;
use crate::engine::input::InputState;
use crate::engine::renderer::{Camera, DrawTarget};

/// Entities in insertion order plus the camera view
///
/// Insertion order is also update and draw order. The camera follows the
/// first entity.
pub struct World {
    entities: Vec<Entity>,
    camera: Camera,
}

impl World {
    /// Create an empty world viewed through `view`
    pub fn new(view: FloatRect) -> Self {
        Self {
            entities: Vec::new(),
            camera: Camera::from_rect(view),
        }
    }

    /// Add an entity and return its index
    pub fn spawn(&mut self, entity: impl Into<Entity>) -> usize {
        self.entities.push(entity.into());
        self.entities.len() - 1
    }

    /// Run one simulation step and return the sounds entities asked for
    pub fn update(&mut self, dt: f32, input: &InputState) -> Vec<&'static str> {
        let mut ctx = FrameContext::new(input);

        for entity in self.entities.iter_mut().filter(|e| e.is_active()) {
            entity.update(dt, &mut ctx);
        }

        if let Some(first) = self.entities.first() {
            self.camera.set_center(first.bounds().position());
        }

        self.check_collisions();

        ctx.into_sound_cues()
    }

    /// Collision pass, run after every update. Nothing collides yet.
    pub fn check_collisions(&mut self) {}

    /// Draw every active entity in insertion order
    pub fn render(&self, target: &mut dyn DrawTarget) {
        for entity in self.entities.iter().filter(|e| e.is_active()) {
            entity.render(target);
        }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.entities.get_mut(index)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}
