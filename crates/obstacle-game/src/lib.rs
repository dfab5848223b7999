//! Obstacle Game - Game-side logic for the obstacle-avoid game
//!
//! Provides keyboard input snapshots and the debug camera.

pub mod camera;
pub mod input;

pub use camera::{
    is_action_active, CameraAction, CameraConfigError, DebugCameraConfig, DebugCameraController,
    KeyBindings,
};
pub use input::{key_from_name, key_name, FrameInput, KeyboardState};
