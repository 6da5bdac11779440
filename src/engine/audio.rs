// Audio playback using kira
//
// Playback runs on kira's own backend thread; everything here is
// fire-and-forget from the game loop's point of view.

use kira::manager::backend::DefaultBackend;
use kira::manager::{AudioManager, AudioManagerSettings};
use kira::sound::static_sound::{StaticSoundData, StaticSoundHandle, StaticSoundSettings};
use kira::tween::Tween;
use log::info;
use std::path::{Path, PathBuf};

/// Errors that can occur in the audio system
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("failed to initialize audio backend: {0}")]
    InitFailed(String),

    #[error("failed to load audio file '{0}': {1}")]
    LoadFailed(PathBuf, String),

    #[error("audio playback failed: {0}")]
    PlaybackFailed(String),
}

/// Wraps kira's AudioManager with background music and one-shot sounds
pub struct AudioEngine {
    manager: AudioManager<DefaultBackend>,
    music: Option<StaticSoundHandle>,
}

impl AudioEngine {
    /// Open the default audio device
    pub fn new() -> Result<Self, AudioError> {
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|e| AudioError::InitFailed(e.to_string()))?;

        info!("Audio engine initialized");

        Ok(Self {
            manager,
            music: None,
        })
    }

    /// Start a music track, replacing whatever was playing
    pub fn play_music(&mut self, path: &Path, looping: bool) -> Result<(), AudioError> {
        let data = StaticSoundData::from_file(path)
            .map_err(|e| AudioError::LoadFailed(path.to_path_buf(), e.to_string()))?;
        let settings = if looping {
            StaticSoundSettings::new().loop_region(..)
        } else {
            StaticSoundSettings::new()
        };

        self.stop_music();
        let handle = self
            .manager
            .play(data.with_settings(settings))
            .map_err(|e| AudioError::PlaybackFailed(e.to_string()))?;
        self.music = Some(handle);

        info!("Playing music {}", path.display());
        Ok(())
    }

    /// Stop the current music track
    pub fn stop_music(&mut self) {
        if let Some(mut handle) = self.music.take() {
            handle.stop(Tween::default());
        }
    }

    /// Play a one-shot sound
    pub fn play_sound(&mut self, sound: &StaticSoundData) -> Result<(), AudioError> {
        self.manager
            .play(sound.clone())
            .map_err(|e| AudioError::PlaybackFailed(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_error_display() {
        let err = AudioError::LoadFailed(PathBuf::from("assets/music.ogg"), "missing".into());
        assert_eq!(
            err.to_string(),
            "failed to load audio file 'assets/music.ogg': missing"
        );
    }
}
