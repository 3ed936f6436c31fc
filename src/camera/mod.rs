pub mod config;
pub mod rig;
pub mod state;

pub use config::RigConfig;
pub use rig::{MAX_PITCH, OrbitRig, RigInput};
pub use state::{CameraTransform, RigState};
