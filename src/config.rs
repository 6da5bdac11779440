// Game configuration
//
// All tunables live here as plain values with compiled-in defaults. Nothing is
// read from disk; the values are passed explicitly to whatever needs them.

/// Window and frame pacing settings
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    /// Maximum frames per second (0 = uncapped)
    pub frame_rate_limit: u32,
}

/// Constants for the physics integrator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConfig {
    /// Downward acceleration in units/s² (y grows downward)
    pub gravity: f32,
}

/// Movement and animation tuning for the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerStats {
    /// Horizontal speed in units/second
    pub speed: f32,
    /// Vertical velocity applied on jump (negative = up)
    pub jump_impulse: f32,
    /// Seconds per frame of the idle animation
    pub idle_frame_time: f32,
    /// Seconds per frame of the run animation
    pub run_frame_time: f32,
}

/// Top-level configuration
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub player: PlayerStats,
    /// Directory asset paths are resolved against
    pub asset_root: &'static str,
    /// Background clear color (sRGB)
    pub clear_color: [u8; 3],
}

pub const BASE_WINDOW: WindowConfig = WindowConfig {
    title: "2D Game",
    width: 800,
    height: 600,
    frame_rate_limit: 60,
};

pub const BASE_PHYSICS: PhysicsConfig = PhysicsConfig { gravity: 980.0 };

pub const BASE_PLAYER: PlayerStats = PlayerStats {
    speed: 200.0,
    jump_impulse: -400.0,
    idle_frame_time: 0.2,
    run_frame_time: 0.1,
};

/// Sky blue
pub const BASE_CLEAR_COLOR: [u8; 3] = [135, 206, 235];

impl Default for WindowConfig {
    fn default() -> Self {
        BASE_WINDOW
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        BASE_PHYSICS
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        BASE_PLAYER
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: BASE_WINDOW,
            physics: BASE_PHYSICS,
            player: BASE_PLAYER,
            asset_root: "assets",
            clear_color: BASE_CLEAR_COLOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window() {
        let config = GameConfig::default();
        assert_eq!(config.window.title, "2D Game");
        assert_eq!((config.window.width, config.window.height), (800, 600));
        assert_eq!(config.window.frame_rate_limit, 60);
    }

    #[test]
    fn test_default_physics_and_player() {
        let config = GameConfig::default();
        assert_eq!(config.physics.gravity, 980.0);
        assert_eq!(config.player.speed, 200.0);
        assert_eq!(config.player.jump_impulse, -400.0);
        assert_eq!(config.asset_root, "assets");
    }
}
