//! Drift-free orbit and zoom camera rig, plus the world-service pieces that
//! sit around it in the viewer.

pub mod camera;
pub mod error;
pub mod input;
pub mod settings;
pub mod world;

pub use error::{Error, Result};

pub const CONFY_APP_NAME: &str = "orbit-rig";
