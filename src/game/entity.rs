// Game entities

use super::animation::AnimationSet;
use super::player::Player;
use crate::core::FloatRect;
use crate::engine::input::InputState;
use crate::engine::renderer::{DrawTarget, Sprite};
use glam::Vec2;

/// Per-frame data handed to entity updates
pub struct FrameContext<'a> {
    input: &'a InputState,
    sound_cues: Vec<&'static str>,
}

impl<'a> FrameContext<'a> {
    pub fn new(input: &'a InputState) -> Self {
        Self {
            input,
            sound_cues: Vec::new(),
        }
    }

    pub fn input(&self) -> &'a InputState {
        self.input
    }

    /// Ask for the named cached sound to be played after the update pass
    pub fn play_sound(&mut self, name: &'static str) {
        self.sound_cues.push(name);
    }

    /// Sounds requested during this frame, in request order
    pub fn into_sound_cues(self) -> Vec<&'static str> {
        self.sound_cues
    }
}

/// State shared by every kind of entity
#[derive(Debug, Clone)]
pub struct EntityBase {
    pub sprite: Sprite,
    pub animations: AnimationSet,
    position: Vec2,
    active: bool,
}

impl EntityBase {
    pub fn new(sprite: Sprite) -> Self {
        Self {
            position: sprite.position,
            sprite,
            animations: AnimationSet::new(),
            active: true,
        }
    }

    /// Draw the sprite if the entity is active
    pub fn render(&self, target: &mut dyn DrawTarget) {
        if self.active {
            target.draw(&self.sprite);
        }
    }

    /// World-space bounds of the sprite
    pub fn bounds(&self) -> FloatRect {
        self.sprite.global_bounds()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Move the entity and its sprite
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.sprite.set_position(position);
    }

    /// Tick the current animation against this entity's sprite
    pub fn update_animation(&mut self, dt: f32) {
        self.animations.update(dt, &mut self.sprite);
    }
}

/// Every kind of entity the game knows about
#[derive(Debug, Clone)]
pub enum Entity {
    Player(Player),
}

impl Entity {
    pub fn update(&mut self, dt: f32, ctx: &mut FrameContext<'_>) {
        match self {
            Entity::Player(player) => player.update(dt, ctx),
        }
    }

    pub fn base(&self) -> &EntityBase {
        match self {
            Entity::Player(player) => player.base(),
        }
    }

    pub fn base_mut(&mut self) -> &mut EntityBase {
        match self {
            Entity::Player(player) => player.base_mut(),
        }
    }

    pub fn render(&self, target: &mut dyn DrawTarget) {
        self.base().render(target);
    }

    pub fn bounds(&self) -> FloatRect {
        self.base().bounds()
    }

    pub fn is_active(&self) -> bool {
        self.base().is_active()
    }

    pub fn set_active(&mut self, active: bool) {
        self.base_mut().set_active(active);
    }

    pub fn position(&self) -> Vec2 {
        self.base().position()
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.base_mut().set_position(position);
    }

    pub fn as_player(&self) -> Option<&Player> {
        match self {
            Entity::Player(player) => Some(player),
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut Player> {
        match self {
            Entity::Player(player) => Some(player),
        }
    }
}

impl From<Player> for Entity {
    fn from(player: Player) -> Self {
        Entity::Player(player)
    }
}
