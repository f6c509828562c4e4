//! Studio configuration, read from a TOML file.

use std::path::{Path, PathBuf};

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::ModelId;
use crate::registry::{AssetEntry, AssetRegistry};

pub const DEFAULT_CONFIG_PATH: &str = "wardrobe.toml";

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub window: WindowConfig,
    pub assets: AssetsConfig,
    pub carousel: CarouselConfig,
    pub audio: AudioConfig,
    pub capture: CaptureConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Wardrobe".to_string(),
            width: 1280.0,
            height: 720.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory the asset server reads from.
    pub root: String,
    pub models: Vec<AssetEntry>,
    pub music: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: "assets".to_string(),
            models: ModelId::ALL
                .iter()
                .map(|&id| AssetEntry {
                    id,
                    path: id.default_path().to_string(),
                })
                .collect(),
            music: "audio/background.ogg".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Radians added to the spinning model's yaw every frame.
    pub rotation_step: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { rotation_step: 0.1 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub start_playing: bool,
    pub volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            start_playing: false,
            volume: 0.6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    pub directory: PathBuf,
    pub file_name: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            file_name: "avatar.png".to_string(),
        }
    }
}

impl CaptureConfig {
    pub fn output_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

impl StudioConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    /// Any other failure is returned.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let config = Self::from_file(path)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn registry(&self) -> AssetRegistry {
        AssetRegistry::new(self.assets.models.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = StudioConfig::from_toml("").unwrap();
        assert_eq!(config, StudioConfig::default());
        assert_eq!(config.registry().len(), 3);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = StudioConfig::from_toml(
            r#"
            [carousel]
            rotation_step = 0.25

            [assets]
            models = [
                { id = "formal", path = "chars/formal.glb" },
                { id = "streetwear", path = "chars/street.glb" },
            ]
            "#,
        )
        .unwrap();

        assert_eq!(config.carousel.rotation_step, 0.25);
        assert_eq!(config.assets.root, "assets");
        assert_eq!(config.capture.file_name, "avatar.png");

        let registry = config.registry();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.order_of(ModelId::Formal), Some(0));
        assert_eq!(registry.path_of(ModelId::Streetwear), Some("chars/street.glb"));
        assert_eq!(registry.order_of(ModelId::Athletic), None);
    }

    #[test]
    fn unknown_model_id_is_rejected() {
        let result = StudioConfig::from_toml(
            r#"
            [assets]
            models = [{ id = "pirate", path = "pirate.glb" }]
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = StudioConfig::load_or_default("definitely/not/here.toml").unwrap();
        assert_eq!(config, StudioConfig::default());
    }

    #[test]
    fn capture_path_joins_directory() {
        let capture = CaptureConfig {
            directory: PathBuf::from("shots"),
            file_name: "me.png".to_string(),
        };
        assert_eq!(capture.output_path(), PathBuf::from("shots").join("me.png"));
    }
}
