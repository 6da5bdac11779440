// Per-entity motion state and integration step

use crate::config::PhysicsConfig;
use glam::Vec2;

/// Motion state for a single entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsBody {
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Downward acceleration applied while airborne
    pub gravity: f32,
    /// Set by external code only; nothing here detects ground contact
    pub grounded: bool,
}

impl PhysicsBody {
    /// Create a body at rest, airborne, using the configured gravity
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            gravity: config.gravity,
            grounded: false,
        }
    }

    /// Advance one step with semi-implicit Euler: velocity is updated first
    /// and the new velocity moves the position.
    pub fn integrate(&mut self, position: &mut Vec2, dt: f32) {
        self.velocity += self.acceleration * dt;
        if !self.grounded {
            self.velocity.y += self.gravity * dt;
        }
        *position += self.velocity * dt;
    }
}

impl Default for PhysicsBody {
    fn default() -> Self {
        Self::new(&PhysicsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_free_fall_one_second() {
        let mut body = PhysicsBody::default();
        let mut position = Vec2::ZERO;

        body.integrate(&mut position, 1.0);

        assert_eq!(body.velocity, Vec2::new(0.0, 980.0));
        assert_eq!(position, Vec2::new(0.0, 980.0));
    }

    #[test]
    fn test_grounded_ignores_gravity() {
        let mut body = PhysicsBody::default();
        body.grounded = true;
        body.velocity = Vec2::new(200.0, 0.0);
        let mut position = Vec2::new(10.0, 50.0);

        body.integrate(&mut position, 0.5);

        assert_eq!(body.velocity, Vec2::new(200.0, 0.0));
        assert_eq!(position, Vec2::new(110.0, 50.0));
    }

    #[test]
    fn test_acceleration_applied_before_position() {
        let mut body = PhysicsBody::new(&PhysicsConfig { gravity: 0.0 });
        body.acceleration = Vec2::new(10.0, 0.0);
        let mut position = Vec2::ZERO;

        body.integrate(&mut position, 0.5);

        assert_relative_eq!(body.velocity.x, 5.0);
        assert_relative_eq!(position.x, 2.5);
    }

    #[test]
    fn test_custom_gravity() {
        let mut body = PhysicsBody::new(&PhysicsConfig { gravity: 10.0 });
        let mut position = Vec2::ZERO;

        body.integrate(&mut position, 0.1);
        body.integrate(&mut position, 0.1);

        assert_relative_eq!(body.velocity.y, 2.0);
        assert_relative_eq!(position.y, 0.3, epsilon = 1e-6);
    }

    #[test]
    fn test_jump_impulse_rises_then_falls() {
        let mut body = PhysicsBody::default();
        body.velocity.y = -400.0;
        let mut position = Vec2::ZERO;

        body.integrate(&mut position, 0.1);
        assert!(position.y < 0.0);

        for _ in 0..10 {
            body.integrate(&mut position, 0.1);
        }
        assert!(body.velocity.y > 0.0);
    }
}
