// 2D camera: a fixed-size view rectangle centered on a world point

use crate::core::FloatRect;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// 2D camera for sprite rendering
///
/// World coordinates grow right and down, matching texture space.
#[derive(Debug, Clone)]
pub struct Camera {
    /// World point shown at the middle of the window
    center: Vec2,
    /// Size of the visible world area
    size: Vec2,
    /// View-projection matrix
    view_proj: Mat4,
}

impl Camera {
    /// Create a camera showing the given rectangle of the world
    pub fn from_rect(rect: FloatRect) -> Self {
        let mut camera = Self {
            center: rect.center(),
            size: rect.size(),
            view_proj: Mat4::IDENTITY,
        };
        camera.update_view_proj();
        camera
    }

    fn update_view_proj(&mut self) {
        let half = self.size / 2.0;

        // Top of the view maps to +1 in clip space, so y grows downward on screen
        self.view_proj = Mat4::orthographic_rh(
            self.center.x - half.x,
            self.center.x + half.x,
            self.center.y + half.y,
            self.center.y - half.y,
            -100.0, // Near plane
            100.0,  // Far plane
        );
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
        self.update_view_proj();
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Get the view-projection matrix
    pub fn view_proj_matrix(&self) -> Mat4 {
        self.view_proj
    }
}

/// Camera uniform for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Create a new camera uniform from a camera
    pub fn new(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
        }
    }
}
