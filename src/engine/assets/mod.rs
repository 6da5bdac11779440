// Asset management system
//
// Provides loading and name-keyed caching of textures, sounds and fonts.

mod cache;
mod loader;

pub use cache::{AssetStats, FontAsset, ResourceCache, TextureAsset};
pub use loader::{AssetKind, AssetLoader};

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
