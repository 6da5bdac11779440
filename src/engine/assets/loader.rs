// Asset path resolution

use super::AssetError;
use std::path::{Path, PathBuf};

/// Kinds of asset the cache knows how to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Texture,
    Sound,
    Font,
}

/// Resolves asset paths against a root directory
#[derive(Debug, Clone)]
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset. Absolute paths are returned unchanged.
    pub fn resolve_path<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }

    /// Resolve a path and fail with `NotFound` if nothing is there
    pub fn existing_path<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf, AssetError> {
        let full = self.resolve_path(path);
        if !full.is_file() {
            return Err(AssetError::NotFound(full.to_string_lossy().to_string()));
        }
        Ok(full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_path_resolution() {
        let loader = AssetLoader::new("/game/assets");
        let path = loader.resolve_path("player.png");
        assert_eq!(path, PathBuf::from("/game/assets/player.png"));
    }

    #[test]
    fn test_loader_keeps_absolute_paths() {
        let loader = AssetLoader::new("assets");
        let path = loader.resolve_path("/tmp/player.png");
        assert_eq!(path, PathBuf::from("/tmp/player.png"));
    }

    #[test]
    fn test_existing_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loader = AssetLoader::new(dir.path());
        let result = loader.existing_path("missing.png");
        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }

    #[test]
    fn test_existing_path_found() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("data.bin"), [1u8, 2, 3]).unwrap();
        let loader = AssetLoader::new(dir.path());
        assert_eq!(
            loader.existing_path("data.bin").unwrap(),
            dir.path().join("data.bin")
        );
    }

    #[test]
    fn test_directory_is_not_an_asset() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sprites")).unwrap();
        let loader = AssetLoader::new(dir.path());
        assert!(loader.existing_path("sprites").is_err());
    }
}
