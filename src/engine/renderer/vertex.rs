// Vertex layout for sprite quads

use super::Sprite;
use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Vertex for 2D sprite rendering
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in world space
    pub position: [f32; 2],
    /// Texture coordinates (UV)
    pub tex_coords: [f32; 2],
    /// Vertex color (RGBA)
    pub color: [f32; 4],
}

/// Index pattern for one quad (two counter-clockwise triangles)
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

impl Vertex {
    /// Build the four corners of a sprite: top-left, top-right, bottom-right, bottom-left
    pub fn quad(sprite: &Sprite) -> [Vertex; 4] {
        let corners = sprite.corners();
        let (u0, v0, u1, v1) = sprite.uv_rect();
        let uvs = [
            Vec2::new(u0, v0),
            Vec2::new(u1, v0),
            Vec2::new(u1, v1),
            Vec2::new(u0, v1),
        ];
        let color = sprite.color.to_array();

        std::array::from_fn(|i| Vertex {
            position: corners[i].to_array(),
            tex_coords: uvs[i].to_array(),
            color,
        })
    }

    /// Get the vertex buffer layout descriptor
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // Tex Coords
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // Color
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::TextureAsset;
    use image::RgbaImage;

    #[test]
    fn test_quad_positions_and_uvs() {
        let texture = TextureAsset::from_pixels(RgbaImage::new(32, 16), 1);
        let mut sprite = Sprite::with_texture("t", &texture);
        sprite.set_position(Vec2::new(10.0, 20.0));

        let quad = Vertex::quad(&sprite);

        assert_eq!(quad[0].position, [10.0, 20.0]);
        assert_eq!(quad[2].position, [42.0, 36.0]);
        assert_eq!(quad[0].tex_coords, [0.0, 0.0]);
        assert_eq!(quad[2].tex_coords, [1.0, 1.0]);
        assert_eq!(quad[3].color, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_mirrored_quad_swaps_horizontal_extent() {
        let texture = TextureAsset::from_pixels(RgbaImage::new(32, 16), 1);
        let mut sprite = Sprite::with_texture("t", &texture);
        sprite.scale_by(Vec2::new(-1.0, 1.0));

        let quad = Vertex::quad(&sprite);

        assert_eq!(quad[1].position, [-32.0, 0.0]);
        assert_eq!(quad[1].tex_coords, [1.0, 0.0]);
    }

    #[test]
    fn test_vertex_size() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
    }
}
