// Name-keyed resource cache for textures, sounds and fonts

use super::{AssetError, AssetKind, AssetLoader};
use glam::UVec2;
use image::RgbaImage;
use kira::sound::static_sound::StaticSoundData;
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;

/// A decoded texture kept in CPU memory
///
/// The GPU copy is created lazily by the renderer. `revision` changes every
/// time a texture is (re)loaded so stale GPU copies can be detected.
#[derive(Debug, Clone)]
pub struct TextureAsset {
    pixels: RgbaImage,
    revision: u64,
}

impl TextureAsset {
    /// Wrap already decoded pixels
    pub fn from_pixels(pixels: RgbaImage, revision: u64) -> Self {
        Self { pixels, revision }
    }

    /// The 0x0 texture handed out for names that were never loaded
    pub fn blank() -> Self {
        Self {
            pixels: RgbaImage::new(0, 0),
            revision: 0,
        }
    }

    pub fn size(&self) -> UVec2 {
        UVec2::new(self.pixels.width(), self.pixels.height())
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.width() == 0 || self.pixels.height() == 0
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Raw font file contents (TrueType / OpenType)
#[derive(Debug, Clone, Default)]
pub struct FontAsset {
    bytes: Vec<u8>,
}

impl FontAsset {
    const SIGNATURES: [[u8; 4]; 4] = [*b"\x00\x01\x00\x00", *b"OTTO", *b"true", *b"ttcf"];

    /// Validate the sfnt signature and keep the bytes
    pub fn from_bytes(bytes: Vec<u8>, path: &Path) -> Result<Self, AssetError> {
        let valid = bytes.len() >= 4 && Self::SIGNATURES.iter().any(|sig| bytes[..4] == sig[..]);
        if !valid {
            return Err(AssetError::Decode {
                path: path.to_string_lossy().to_string(),
                reason: "not a TrueType/OpenType font".to_string(),
            });
        }
        Ok(Self { bytes })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Counts of cached assets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetStats {
    pub texture_count: usize,
    pub sound_count: usize,
    pub font_count: usize,
}

/// Resource cache owned by the game and passed by reference to whatever
/// needs assets.
///
/// Entries live as long as the cache; loading a name twice replaces the
/// first entry.
pub struct ResourceCache {
    loader: AssetLoader,
    textures: HashMap<String, TextureAsset>,
    sounds: HashMap<String, StaticSoundData>,
    fonts: HashMap<String, FontAsset>,
    blank_texture: TextureAsset,
    empty_font: FontAsset,
    next_revision: u64,
}

impl ResourceCache {
    pub fn new(loader: AssetLoader) -> Self {
        Self {
            loader,
            textures: HashMap::new(),
            sounds: HashMap::new(),
            fonts: HashMap::new(),
            blank_texture: TextureAsset::blank(),
            empty_font: FontAsset::default(),
            next_revision: 1,
        }
    }

    /// Load an asset and store it under `name`.
    ///
    /// Failures are logged and otherwise ignored: whatever was stored under
    /// `name` before stays in place.
    pub fn load<P: AsRef<Path>>(&mut self, kind: AssetKind, name: &str, path: P) {
        let path = path.as_ref();
        let result = match kind {
            AssetKind::Texture => self.try_load_texture(name, path),
            AssetKind::Sound => self.try_load_sound(name, path),
            AssetKind::Font => self.try_load_font(name, path),
        };

        match result {
            Ok(()) => info!("Loaded {:?} '{}' from {}", kind, name, path.display()),
            Err(e) => warn!("Could not load {:?} '{}': {}", kind, name, e),
        }
    }

    /// Decode an image file and store it under `name`
    pub fn try_load_texture<P: AsRef<Path>>(&mut self, name: &str, path: P) -> Result<(), AssetError> {
        let full = self.loader.existing_path(path)?;
        let image = image::open(&full).map_err(|e| AssetError::Decode {
            path: full.to_string_lossy().to_string(),
            reason: e.to_string(),
        })?;

        let revision = self.next_revision;
        self.next_revision += 1;
        self.textures.insert(
            name.to_string(),
            TextureAsset::from_pixels(image.to_rgba8(), revision),
        );
        Ok(())
    }

    /// Decode a sound file and store it under `name`
    pub fn try_load_sound<P: AsRef<Path>>(&mut self, name: &str, path: P) -> Result<(), AssetError> {
        let full = self.loader.existing_path(path)?;
        let sound = StaticSoundData::from_file(&full).map_err(|e| AssetError::Decode {
            path: full.to_string_lossy().to_string(),
            reason: e.to_string(),
        })?;
        self.sounds.insert(name.to_string(), sound);
        Ok(())
    }

    /// Read a font file and store it under `name`
    pub fn try_load_font<P: AsRef<Path>>(&mut self, name: &str, path: P) -> Result<(), AssetError> {
        let full = self.loader.existing_path(path)?;
        let bytes = std::fs::read(&full)?;
        let font = FontAsset::from_bytes(bytes, &full)?;
        self.fonts.insert(name.to_string(), font);
        Ok(())
    }

    /// Get a texture, or the blank texture if `name` was never loaded
    pub fn texture(&self, name: &str) -> &TextureAsset {
        self.textures.get(name).unwrap_or(&self.blank_texture)
    }

    /// Get a sound by name
    pub fn sound(&self, name: &str) -> Option<&StaticSoundData> {
        self.sounds.get(name)
    }

    /// Get a font, or an empty font if `name` was never loaded
    pub fn font(&self, name: &str) -> &FontAsset {
        self.fonts.get(name).unwrap_or(&self.empty_font)
    }

    /// Check whether an asset of the given kind is stored under `name`
    pub fn contains(&self, kind: AssetKind, name: &str) -> bool {
        match kind {
            AssetKind::Texture => self.textures.contains_key(name),
            AssetKind::Sound => self.sounds.contains_key(name),
            AssetKind::Font => self.fonts.contains_key(name),
        }
    }

    pub fn stats(&self) -> AssetStats {
        AssetStats {
            texture_count: self.textures.len(),
            sound_count: self.sounds.len(),
            font_count: self.fonts.len(),
        }
    }

    pub fn loader(&self) -> &AssetLoader {
        &self.loader
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    fn write_png(dir: &TempDir, file: &str, width: u32, height: u32) {
        let img = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
        img.save(dir.path().join(file)).unwrap();
    }

    fn write_wav(dir: &TempDir, file: &str) {
        let samples: Vec<i16> = (0..441).map(|i| ((i % 50) * 400) as i16).collect();
        let data_len = (samples.len() * 2) as u32;
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
        bytes.extend_from_slice(b"WAVEfmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
        bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
        bytes.extend_from_slice(&44_100u32.to_le_bytes());
        bytes.extend_from_slice(&(44_100u32 * 2).to_le_bytes());
        bytes.extend_from_slice(&2u16.to_le_bytes());
        bytes.extend_from_slice(&16u16.to_le_bytes());
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&data_len.to_le_bytes());
        for sample in samples {
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
        std::fs::write(dir.path().join(file), bytes).unwrap();
    }

    fn cache_in(dir: &TempDir) -> ResourceCache {
        ResourceCache::new(AssetLoader::new(dir.path()))
    }

    #[test]
    fn test_load_texture() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir, "player.png", 32, 48);
        let mut cache = cache_in(&dir);

        cache.load(AssetKind::Texture, "player", "player.png");

        assert!(cache.contains(AssetKind::Texture, "player"));
        assert_eq!(cache.texture("player").size(), UVec2::new(32, 48));
    }

    #[test]
    fn test_second_load_replaces_first() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir, "small.png", 8, 8);
        write_png(&dir, "large.png", 64, 16);
        let mut cache = cache_in(&dir);

        cache.load(AssetKind::Texture, "player", "small.png");
        let first_revision = cache.texture("player").revision();
        cache.load(AssetKind::Texture, "player", "large.png");

        assert_eq!(cache.texture("player").size(), UVec2::new(64, 16));
        assert_ne!(cache.texture("player").revision(), first_revision);
        assert_eq!(cache.stats().texture_count, 1);
    }

    #[test]
    fn test_failed_load_keeps_previous_entry() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir, "player.png", 16, 16);
        let mut cache = cache_in(&dir);

        cache.load(AssetKind::Texture, "player", "player.png");
        cache.load(AssetKind::Texture, "player", "does_not_exist.png");

        assert_eq!(cache.texture("player").size(), UVec2::new(16, 16));
    }

    #[test]
    fn test_undecodable_reload_keeps_previous_entry() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir, "player.png", 16, 16);
        std::fs::write(dir.path().join("corrupt.png"), b"\x89PNG garbage").unwrap();
        let mut cache = cache_in(&dir);

        cache.load(AssetKind::Texture, "player", "player.png");
        let revision = cache.texture("player").revision();
        cache.load(AssetKind::Texture, "player", "corrupt.png");

        assert_eq!(cache.texture("player").size(), UVec2::new(16, 16));
        assert_eq!(cache.texture("player").revision(), revision);
    }

    #[test]
    fn test_undecodable_texture_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.png"), b"not a png").unwrap();
        let mut cache = cache_in(&dir);

        let result = cache.try_load_texture("broken", "broken.png");
        assert!(matches!(result, Err(AssetError::Decode { .. })));
        assert!(!cache.contains(AssetKind::Texture, "broken"));
    }

    #[test]
    fn test_missing_texture_returns_blank() {
        let dir = tempfile::tempdir().unwrap();
        let cache = cache_in(&dir);

        let texture = cache.texture("never_loaded");
        assert!(texture.is_blank());
        assert_eq!(texture.size(), UVec2::ZERO);
        assert_eq!(texture.revision(), 0);
    }

    #[test]
    fn test_load_sound() {
        let dir = tempfile::tempdir().unwrap();
        write_wav(&dir, "jump.wav");
        let mut cache = cache_in(&dir);

        cache.load(AssetKind::Sound, "jump", "jump.wav");

        assert!(cache.sound("jump").is_some());
        assert_eq!(cache.stats().sound_count, 1);
    }

    #[test]
    fn test_missing_sound_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = cache_in(&dir);

        cache.load(AssetKind::Sound, "jump", "jump.wav");

        assert!(cache.sound("jump").is_none());
        assert!(!cache.contains(AssetKind::Sound, "jump"));
    }

    #[test]
    fn test_load_font() {
        let dir = tempfile::tempdir().unwrap();
        let mut bytes = b"\x00\x01\x00\x00".to_vec();
        bytes.extend_from_slice(&[0u8; 32]);
        std::fs::write(dir.path().join("ui.ttf"), &bytes).unwrap();
        let mut cache = cache_in(&dir);

        cache.load(AssetKind::Font, "ui", "ui.ttf");

        assert_eq!(cache.font("ui").bytes(), bytes.as_slice());
    }

    #[test]
    fn test_invalid_font_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ui.ttf"), b"hello world").unwrap();
        let mut cache = cache_in(&dir);

        cache.load(AssetKind::Font, "ui", "ui.ttf");

        assert!(!cache.contains(AssetKind::Font, "ui"));
        assert!(cache.font("ui").is_empty());
    }
}
