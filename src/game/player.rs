// Keyboard-controlled player

use super::animation::Animation;
use super::entity::{EntityBase, FrameContext};
use crate::config::{PhysicsConfig, PlayerStats};
use crate::engine::assets::ResourceCache;
use crate::engine::input::Action;
use crate::engine::physics::PhysicsBody;
use crate::engine::renderer::Sprite;
use glam::Vec2;

/// Cache key of the player texture
pub const PLAYER_TEXTURE: &str = "player";
/// Cache key of the sound played on jump
pub const JUMP_SOUND: &str = "jump";

pub const IDLE_ANIMATION: &str = "idle";
pub const RUN_ANIMATION: &str = "run";

/// The player character: runs left/right and jumps when grounded
#[derive(Debug, Clone)]
pub struct Player {
    base: EntityBase,
    stats: PlayerStats,
    physics: PhysicsBody,
    facing_right: bool,
}

impl Player {
    /// Create the player using the cached "player" texture (blank if it failed to load)
    pub fn new(cache: &ResourceCache, stats: PlayerStats, physics: &PhysicsConfig) -> Self {
        let sprite = Sprite::with_texture(PLAYER_TEXTURE, cache.texture(PLAYER_TEXTURE));
        let mut base = EntityBase::new(sprite);

        // Frames are added by whoever knows the sprite sheet layout
        base.animations
            .add(Animation::new(IDLE_ANIMATION, stats.idle_frame_time));
        base.animations
            .add(Animation::new(RUN_ANIMATION, stats.run_frame_time));
        base.animations.play(IDLE_ANIMATION);

        Self {
            base,
            stats,
            physics: PhysicsBody::new(physics),
            facing_right: true,
        }
    }

    /// Input, then physics, then animation
    pub fn update(&mut self, dt: f32, ctx: &mut FrameContext<'_>) {
        self.handle_input(ctx);

        let mut position = self.base.position();
        self.physics.integrate(&mut position, dt);
        self.base.set_position(position);

        self.base.update_animation(dt);
    }

    fn handle_input(&mut self, ctx: &mut FrameContext<'_>) {
        let input = ctx.input();
        let mut moving = false;

        if input.is_pressed(Action::MoveRight) {
            self.physics.velocity.x = self.stats.speed;
            self.face(true);
            moving = true;
        } else if input.is_pressed(Action::MoveLeft) {
            self.physics.velocity.x = -self.stats.speed;
            self.face(false);
            moving = true;
        } else {
            self.physics.velocity.x = 0.0;
        }

        let jump = input.is_pressed(Action::Jump);
        if jump && self.physics.grounded {
            self.physics.velocity.y = self.stats.jump_impulse;
            self.physics.grounded = false;
            ctx.play_sound(JUMP_SOUND);
        }

        self.base
            .animations
            .play(if moving { RUN_ANIMATION } else { IDLE_ANIMATION });
    }

    /// Turn to face a direction, mirroring the sprite when it changes
    fn face(&mut self, right: bool) {
        if self.facing_right != right {
            self.base.sprite.scale_by(Vec2::new(-1.0, 1.0));
            self.facing_right = right;
        }
    }

    pub fn base(&self) -> &EntityBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut EntityBase {
        &mut self.base
    }

    pub fn physics(&self) -> &PhysicsBody {
        &self.physics
    }

    pub fn physics_mut(&mut self) -> &mut PhysicsBody {
        &mut self.physics
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    pub fn is_facing_right(&self) -> bool {
        self.facing_right
    }

    pub fn current_animation(&self) -> Option<&str> {
        self.base.animations.current_name()
    }
}
