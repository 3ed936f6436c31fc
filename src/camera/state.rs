use nalgebra_glm as glm;

/// Below this distance the camera and its target are treated as coincident.
pub const DEGENERATE_EPSILON: f32 = 1e-4;

/// Persistent orbit state: where the pivot is, how far the camera sits from it
/// and in which direction.
#[derive(Debug, Clone, PartialEq)]
pub struct RigState {
    pub target_position: glm::Vec3,
    pub radius: f32,
    /// Unit vector from the target to the camera.
    pub direction: glm::Vec3,
}

impl RigState {
    /// Sample an existing camera placement relative to the target.
    pub fn from_placement(camera_position: glm::Vec3, target_position: glm::Vec3) -> Self {
        let offset = camera_position - target_position;
        let radius = glm::length(&offset);

        let direction = if radius < DEGENERATE_EPSILON {
            log::debug!("camera coincides with target, falling back to forward axis");
            forward_axis()
        } else {
            offset / radius
        };

        Self {
            target_position,
            radius,
            direction,
        }
    }

    pub fn camera_position(&self) -> glm::Vec3 {
        self.target_position + self.direction * self.radius
    }
}

/// World-space camera pose. Derived from [`RigState`], never authoritative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    pub position: glm::Vec3,
    /// Camera-to-world rotation; the camera looks down its local -Z.
    pub orientation: glm::Quat,
}

impl CameraTransform {
    pub fn looking_at(position: glm::Vec3, target: glm::Vec3) -> Self {
        let to_target = target - position;
        let distance = glm::length(&to_target);
        if distance < DEGENERATE_EPSILON {
            return Self {
                position,
                orientation: glm::quat_identity(),
            };
        }

        let forward = to_target / distance;
        let mut up = glm::vec3(0.0, 1.0, 0.0);
        if glm::length(&glm::cross(&forward, &up)) < DEGENERATE_EPSILON {
            // Straight above or below the target
            up = glm::vec3(0.0, 0.0, 1.0);
        }

        // quat_look_at yields the world-to-view rotation
        let view = glm::quat_look_at(&forward, &up);

        Self {
            position,
            orientation: glm::quat_inverse(&view),
        }
    }

    pub fn forward(&self) -> glm::Vec3 {
        glm::quat_rotate_vec3(&self.orientation, &glm::vec3(0.0, 0.0, -1.0))
    }

    pub fn up(&self) -> glm::Vec3 {
        glm::quat_rotate_vec3(&self.orientation, &glm::vec3(0.0, 1.0, 0.0))
    }

    pub fn view_matrix(&self) -> glm::Mat4 {
        glm::look_at(&self.position, &(self.position + self.forward()), &self.up())
    }
}

pub(crate) fn forward_axis() -> glm::Vec3 {
    glm::vec3(0.0, 0.0, 1.0)
}
