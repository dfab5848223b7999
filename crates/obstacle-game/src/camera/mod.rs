//! Debug camera module
//!
//! Provides a keyboard-driven free-fly camera for inspecting 2D screens,
//! configured from a JSON file in the assets directory.

mod config;
mod controller;

pub use config::{
    is_action_active, CameraAction, CameraConfigError, DebugCameraConfig, KeyBindings,
    CONFIG_PATH,
};
pub use controller::DebugCameraController;
