use std::f32::consts::FRAC_PI_2;

use nalgebra_glm as glm;

use super::config::RigConfig;
use super::state::{CameraTransform, DEGENERATE_EPSILON, RigState};
use crate::error::Result;

/// Distance kept from the poles so yaw stays defined.
pub const POLE_MARGIN: f32 = 0.01;
pub const MAX_PITCH: f32 = FRAC_PI_2 - POLE_MARGIN;

/// Squared orbit input magnitude below which a frame skips the orbit step.
pub const ORBIT_INPUT_THRESHOLD: f32 = 0.001;
pub const ZOOM_INPUT_THRESHOLD: f32 = 0.001;

/// Input held during one frame, in input-device units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigInput {
    /// x = yaw rate, y = pitch rate (positive looks down).
    pub orbit: glm::Vec2,
    /// Positive zooms in.
    pub zoom: f32,
}

impl Default for RigInput {
    fn default() -> Self {
        Self {
            orbit: glm::vec2(0.0, 0.0),
            zoom: 0.0,
        }
    }
}

/// Orbit and zoom camera around a fixed pivot.
///
/// The rig inherits whatever placement the camera had when it was created
/// and only moves it in response to input. Orbit steps re-derive the
/// spherical angles from the live transform every call; zoom steps move
/// along the stored direction and never touch the angles.
#[derive(Debug, Clone)]
pub struct OrbitRig {
    config: RigConfig,
    state: RigState,
    transform: CameraTransform,
    initial: RigState,
}

impl OrbitRig {
    pub fn initialize(
        camera_position: glm::Vec3,
        target_position: glm::Vec3,
        config: RigConfig,
    ) -> Result<Self> {
        config.validate()?;

        let state = RigState::from_placement(camera_position, target_position);
        let transform = CameraTransform::looking_at(camera_position, target_position);
        log::debug!(
            "rig initialized: radius={:.3} direction={:?}",
            state.radius,
            state.direction
        );

        Ok(Self {
            config,
            initial: state.clone(),
            state,
            transform,
        })
    }

    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    pub fn state(&self) -> &RigState {
        &self.state
    }

    pub fn transform(&self) -> &CameraTransform {
        &self.transform
    }

    /// Yaw and pitch of the live camera offset, in radians.
    pub fn spherical_angles(&self) -> (f32, f32) {
        let offset = self.transform.position - self.state.target_position;
        spherical_angles(&offset, glm::length(&offset))
    }

    /// Move the pivot. The camera stays where it is until the next update.
    pub fn set_target(&mut self, target_position: glm::Vec3) {
        self.state.target_position = target_position;
    }

    /// Swap the tuning. The radius is brought back into the new bounds by the
    /// next zoom step.
    pub fn reconfigure(&mut self, config: RigConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Return to the placement sampled at initialization.
    pub fn reset(&mut self) {
        self.state = self.initial.clone();
        self.transform =
            CameraTransform::looking_at(self.state.camera_position(), self.state.target_position);
    }

    /// Run one frame of input. Returns whether the camera moved.
    pub fn update(&mut self, input: &RigInput, dt: f32) -> bool {
        let mut moved = false;

        if glm::length2(&input.orbit) > ORBIT_INPUT_THRESHOLD {
            self.apply_orbit(input.orbit, dt);
            moved = true;
        }

        if input.zoom.abs() > ZOOM_INPUT_THRESHOLD {
            self.apply_zoom(input.zoom, dt);
            moved = true;
        }

        moved
    }

    pub fn apply_orbit(&mut self, delta: glm::Vec2, dt: f32) {
        let step = self.config.orbit_speed.to_radians() * dt;
        let yaw_step = delta.x * step;
        let pitch_step = delta.y * step;

        if !yaw_step.is_finite() || !pitch_step.is_finite() {
            log::warn!("ignoring non-finite orbit step (delta={delta:?}, dt={dt})");
            return;
        }
        if yaw_step == 0.0 && pitch_step == 0.0 {
            return;
        }

        let pivot = self.state.target_position;
        let mut offset = self.transform.position - pivot;
        let mut radius = glm::length(&offset);

        if radius < DEGENERATE_EPSILON {
            radius = self.state.radius.max(self.config.min_distance);
            offset = self.state.direction * radius;
        }

        let (yaw, pitch) = spherical_angles(&offset, radius);
        let yaw = yaw + yaw_step;
        let pitch = (pitch - pitch_step).clamp(-MAX_PITCH, MAX_PITCH);

        let offset = spherical_offset(radius, yaw, pitch);
        self.transform = CameraTransform::looking_at(pivot + offset, pivot);

        self.state.direction = offset / radius;
        self.state.radius = radius;
    }

    pub fn apply_zoom(&mut self, delta: f32, dt: f32) {
        let step = delta * self.config.zoom_speed * dt;

        if !step.is_finite() {
            log::warn!("ignoring non-finite zoom step (delta={delta}, dt={dt})");
            return;
        }
        if step == 0.0 {
            return;
        }

        self.state.radius =
            (self.state.radius - step).clamp(self.config.min_distance, self.config.max_distance);

        let pivot = self.state.target_position;
        let position = pivot + self.zoom_direction() * self.state.radius;
        self.transform = CameraTransform::looking_at(position, pivot);
    }

    fn zoom_direction(&self) -> glm::Vec3 {
        let direction = self.state.direction;
        if !self.config.lock_vertical_axis_on_zoom {
            return direction;
        }

        let flat = glm::vec3(direction.x, 0.0, direction.z);
        let length = glm::length(&flat);
        if length < DEGENERATE_EPSILON {
            log::debug!("vertical zoom lock skipped, camera is over a pole");
            return direction;
        }
        flat / length
    }
}

fn spherical_angles(offset: &glm::Vec3, radius: f32) -> (f32, f32) {
    let yaw = offset.x.atan2(offset.z);
    let pitch = if radius < DEGENERATE_EPSILON {
        0.0
    } else {
        (offset.y / radius).clamp(-1.0, 1.0).asin()
    };
    (yaw, pitch)
}

fn spherical_offset(radius: f32, yaw: f32, pitch: f32) -> glm::Vec3 {
    glm::vec3(
        radius * yaw.sin() * pitch.cos(),
        radius * pitch.sin(),
        radius * yaw.cos() * pitch.cos(),
    )
}
