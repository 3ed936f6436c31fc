use crate::CONFY_APP_NAME;
use crate::camera::RigConfig;
use crate::error::Result;
use crate::input::InputSettings;
use crate::world::BubbleSettings;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Where the camera starts; the rig inherits this placement.
    pub camera_position: [f32; 3],
    pub target_position: [f32; 3],
    pub rig: RigConfig,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            camera_position: [0.0, 5.0, -10.0],
            target_position: [0.0, 0.0, 0.0],
            rig: RigConfig::default(),
        }
    }
}

impl CameraSettings {
    pub fn load() -> Self {
        let settings: Self = load_section("camera");
        if let Err(e) = settings.rig.validate() {
            log::warn!("stored rig config rejected ({e}), using defaults");
            return Self {
                rig: RigConfig::default(),
                ..settings
            };
        }
        settings
    }

    pub fn save(&self) -> Result<()> {
        Ok(confy::store(CONFY_APP_NAME, "camera", self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    /// Base URL of the world service REST API, e.g. `http://localhost:8081/api`.
    pub base_url: String,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081/api".to_string(),
        }
    }
}

impl WorldSettings {
    pub fn load() -> Self {
        load_section("world")
    }

    pub fn save(&self) -> Result<()> {
        Ok(confy::store(CONFY_APP_NAME, "world", self)?)
    }
}

impl BubbleSettings {
    pub fn load() -> Self {
        load_section("bubble")
    }

    pub fn save(&self) -> Result<()> {
        Ok(confy::store(CONFY_APP_NAME, "bubble", self)?)
    }
}

impl InputSettings {
    pub fn load() -> Self {
        load_section("input")
    }

    pub fn save(&self) -> Result<()> {
        Ok(confy::store(CONFY_APP_NAME, "input", self)?)
    }
}

fn load_section<T>(name: &str) -> T
where
    T: Serialize + serde::de::DeserializeOwned + Default,
{
    confy::load(CONFY_APP_NAME, name).unwrap_or_else(|e| {
        log::warn!("failed to load {name} settings ({e}), using defaults");
        T::default()
    })
}

// Aggregate struct for convenience
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub camera: CameraSettings,
    pub world: WorldSettings,
    pub bubble: BubbleSettings,
    pub input: InputSettings,
}

impl Settings {
    pub fn load() -> Self {
        Self {
            camera: CameraSettings::load(),
            world: WorldSettings::load(),
            bubble: BubbleSettings::load(),
            input: InputSettings::load(),
        }
    }
}
