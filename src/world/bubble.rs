use nalgebra_glm as glm;
use serde::{Deserialize, Serialize};

/// Anything that can be resized to a world radius.
pub trait BubbleSink {
    fn apply_radius(&mut self, radius: f32);
}

impl<T: BubbleSink + ?Sized> BubbleSink for &mut T {
    fn apply_radius(&mut self, radius: f32) {
        (**self).apply_radius(radius);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BubbleSettings {
    /// Spawn a fresh instance per world instead of resizing the template.
    pub create_instance: bool,
    pub auto_center: bool,
    /// Uniform scale on all axes.
    pub keep_proportion: bool,
}

impl Default for BubbleSettings {
    fn default() -> Self {
        Self {
            create_instance: true,
            auto_center: true,
            keep_proportion: true,
        }
    }
}

pub const BUBBLE_NAME: &str = "WorldBubble";

/// Placement of the sky sphere currently in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleInstance {
    pub name: String,
    /// 0 is the template itself, spawned instances count up from 1.
    pub generation: u32,
    pub position: glm::Vec3,
    pub scale: glm::Vec3,
}

/// Scales the decorative sky sphere around a world to its radius.
#[derive(Debug, Clone)]
pub struct WorldBubble {
    settings: BubbleSettings,
    template_position: glm::Vec3,
    instance: Option<BubbleInstance>,
    spawned: u32,
}

impl WorldBubble {
    pub fn new(settings: BubbleSettings) -> Self {
        Self::with_template_position(settings, glm::vec3(0.0, 0.0, 0.0))
    }

    pub fn with_template_position(settings: BubbleSettings, template_position: glm::Vec3) -> Self {
        Self {
            settings,
            template_position,
            instance: None,
            spawned: 0,
        }
    }

    pub fn instance(&self) -> Option<&BubbleInstance> {
        self.instance.as_ref()
    }

    fn scale_for(&self, radius: f32) -> glm::Vec3 {
        let diameter = radius * 2.0;
        if self.settings.keep_proportion {
            glm::vec3(diameter, diameter, diameter)
        } else {
            glm::vec3(diameter, radius * 1.8, diameter)
        }
    }
}

impl BubbleSink for WorldBubble {
    fn apply_radius(&mut self, radius: f32) {
        if !radius.is_finite() || radius < 0.0 {
            log::warn!("world bubble: ignoring invalid radius {radius}");
            return;
        }

        if let Some(old) = self.instance.take() {
            log::debug!("world bubble: dropping generation {}", old.generation);
        }

        let generation = if self.settings.create_instance {
            self.spawned += 1;
            self.spawned
        } else {
            0
        };

        let position = if self.settings.auto_center {
            glm::vec3(0.0, 0.0, 0.0)
        } else {
            self.template_position
        };

        let scale = self.scale_for(radius);
        log::info!("world bubble scaled to radius={radius} (scale={scale:?})");

        self.instance = Some(BubbleInstance {
            name: BUBBLE_NAME.to_string(),
            generation,
            position,
            scale,
        });
    }
}
