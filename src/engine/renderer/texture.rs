// GPU copies of cached textures

use crate::engine::assets::TextureAsset;
use std::collections::HashMap;

/// A texture uploaded to the GPU together with its bind group
pub struct GpuTexture {
    // Only reached through the bind group
    _texture: wgpu::Texture,
    _view: wgpu::TextureView,
    _sampler: wgpu::Sampler,
    pub bind_group: wgpu::BindGroup,
    /// Revision of the cached texture this copy was made from
    pub revision: u64,
}

impl GpuTexture {
    /// Upload a cached texture. The asset must not be blank.
    pub fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        asset: &TextureAsset,
        label: &str,
    ) -> Self {
        let dimensions = asset.size();
        let size = wgpu::Extent3d {
            width: dimensions.x,
            height: dimensions.y,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            asset.pixels().as_raw(),
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * dimensions.x),
                rows_per_image: Some(dimensions.y),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        // Nearest filtering keeps pixel art crisp
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        Self {
            _texture: texture,
            _view: view,
            _sampler: sampler,
            bind_group,
            revision: asset.revision(),
        }
    }
}

/// GPU textures keyed by the same names as the resource cache
#[derive(Default)]
pub struct GpuTextureCache {
    textures: HashMap<String, GpuTexture>,
}

impl GpuTextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure the GPU copy of `name` matches the cached asset.
    /// Blank textures are never uploaded.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        name: &str,
        asset: &TextureAsset,
    ) {
        if asset.is_blank() {
            return;
        }
        let up_to_date = self
            .textures
            .get(name)
            .is_some_and(|gpu| gpu.revision == asset.revision());
        if !up_to_date {
            log::debug!("Uploading texture '{}' (revision {})", name, asset.revision());
            let gpu = GpuTexture::upload(device, queue, layout, asset, name);
            self.textures.insert(name.to_string(), gpu);
        }
    }

    /// Get a texture by name
    pub fn get(&self, name: &str) -> Option<&GpuTexture> {
        self.textures.get(name)
    }
}
