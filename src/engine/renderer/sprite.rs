// Sprite description and per-frame draw queue

use crate::core::{FloatRect, IntRect};
use crate::engine::assets::TextureAsset;
use glam::{UVec2, Vec2, Vec4};

/// A textured quad in world space
///
/// The origin is the top-left corner of the texture rect; scaling (including
/// negative scale for mirroring) happens around that origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// Cache key of the texture (None = nothing to draw)
    texture: Option<String>,
    /// Size of the texture at the time it was assigned
    texture_size: UVec2,
    /// Visible sub-region of the texture, in pixels
    texture_rect: IntRect,
    /// Position in world space
    pub position: Vec2,
    /// Scale (1.0 = original size, negative x mirrors horizontally)
    pub scale: Vec2,
    /// Color tint (RGBA, 1.0 = full color)
    pub color: Vec4,
}

impl Sprite {
    pub fn new() -> Self {
        Self {
            texture: None,
            texture_size: UVec2::ZERO,
            texture_rect: IntRect::default(),
            position: Vec2::ZERO,
            scale: Vec2::ONE,
            color: Vec4::ONE,
        }
    }

    /// Create a sprite showing the whole of a texture
    pub fn with_texture(name: &str, texture: &TextureAsset) -> Self {
        let mut sprite = Self::new();
        sprite.set_texture(name, texture);
        sprite
    }

    /// Assign a texture and reset the visible rect to cover all of it
    pub fn set_texture(&mut self, name: &str, texture: &TextureAsset) {
        let size = texture.size();
        self.texture = Some(name.to_string());
        self.texture_size = size;
        self.texture_rect = IntRect::new(0, 0, size.x as i32, size.y as i32);
    }

    pub fn texture(&self) -> Option<&str> {
        self.texture.as_deref()
    }

    pub fn set_texture_rect(&mut self, rect: IntRect) {
        self.texture_rect = rect;
    }

    pub fn texture_rect(&self) -> IntRect {
        self.texture_rect
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Multiply the current scale
    pub fn scale_by(&mut self, factor: Vec2) {
        self.scale *= factor;
    }

    /// Bounds before position and scale are applied
    pub fn local_bounds(&self) -> FloatRect {
        FloatRect::new(
            0.0,
            0.0,
            self.texture_rect.width.unsigned_abs() as f32,
            self.texture_rect.height.unsigned_abs() as f32,
        )
    }

    /// Axis-aligned bounds in world space
    pub fn global_bounds(&self) -> FloatRect {
        let [top_left, _, bottom_right, _] = self.corners();
        FloatRect::from_corners(top_left, bottom_right)
    }

    /// World-space corners: top-left, top-right, bottom-right, bottom-left
    /// (before mirroring)
    pub fn corners(&self) -> [Vec2; 4] {
        let size = self.local_bounds().size() * self.scale;
        [
            self.position,
            self.position + Vec2::new(size.x, 0.0),
            self.position + size,
            self.position + Vec2::new(0.0, size.y),
        ]
    }

    /// Texture coordinates of the visible rect: (u_min, v_min, u_max, v_max)
    pub fn uv_rect(&self) -> (f32, f32, f32, f32) {
        if self.texture_size.x == 0 || self.texture_size.y == 0 {
            return (0.0, 0.0, 0.0, 0.0);
        }
        let w = self.texture_size.x as f32;
        let h = self.texture_size.y as f32;
        let rect = self.texture_rect;
        (
            rect.left as f32 / w,
            rect.top as f32 / h,
            (rect.left + rect.width) as f32 / w,
            (rect.top + rect.height) as f32 / h,
        )
    }

    /// Whether drawing this sprite would produce any pixels
    pub fn is_drawable(&self) -> bool {
        self.texture.is_some()
            && self.texture_size.x > 0
            && self.texture_size.y > 0
            && !self.texture_rect.is_empty()
    }
}

impl Default for Sprite {
    fn default() -> Self {
        Self::new()
    }
}

/// Something sprites can be drawn onto
pub trait DrawTarget {
    fn draw(&mut self, sprite: &Sprite);
}

/// Sprites queued for the current frame, in draw order
#[derive(Debug, Default)]
pub struct SpriteBatch {
    sprites: Vec<Sprite>,
}

impl SpriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all sprites
    pub fn clear(&mut self) {
        self.sprites.clear();
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    /// Get the number of sprites queued for rendering
    pub fn sprite_count(&self) -> usize {
        self.sprites.len()
    }
}

impl DrawTarget for SpriteBatch {
    fn draw(&mut self, sprite: &Sprite) {
        self.sprites.push(sprite.clone());
    }
}
