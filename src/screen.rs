//! Main gameplay screen

use obstacle_core::OrthographicCamera;
use obstacle_game::{DebugCameraController, FrameInput};
use tracing::debug;

use crate::game::Screen;

/// World width in world units
pub const WORLD_WIDTH: f32 = 6.0;
/// World height in world units
pub const WORLD_HEIGHT: f32 = 10.0;

/// World center, where the camera starts
pub const WORLD_CENTER_X: f32 = WORLD_WIDTH / 2.0;
pub const WORLD_CENTER_Y: f32 = WORLD_HEIGHT / 2.0;

/// Gameplay screen viewed through the debug camera
pub struct GameScreen {
    camera: OrthographicCamera,
    debug_camera: DebugCameraController,
}

impl GameScreen {
    /// Create the screen with the debug camera from its config file
    pub fn new() -> Self {
        Self::with_controller(DebugCameraController::new())
    }

    /// Create the screen with a custom debug camera
    pub fn with_controller(debug_camera: DebugCameraController) -> Self {
        Self {
            camera: OrthographicCamera::new(WORLD_WIDTH, WORLD_HEIGHT),
            debug_camera,
        }
    }

    /// Get the render camera
    pub fn camera(&self) -> &OrthographicCamera {
        &self.camera
    }

    /// Get the debug camera controller
    pub fn debug_camera(&self) -> &DebugCameraController {
        &self.debug_camera
    }
}

impl Default for GameScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for GameScreen {
    fn show(&mut self) {
        self.debug_camera
            .set_start_position(WORLD_CENTER_X, WORLD_CENTER_Y);
        self.debug_camera.apply_to(&mut self.camera);
    }

    fn render(&mut self, input: &FrameInput) {
        self.debug_camera.handle_input(input);
        self.debug_camera.apply_to(&mut self.camera);
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        // World height stays fixed; width follows the window aspect ratio
        let aspect = width as f32 / height as f32;
        self.camera.resize(WORLD_HEIGHT * aspect, WORLD_HEIGHT);
        self.debug_camera.apply_to(&mut self.camera);
        debug!(
            "Viewport resized to {}x{} world units",
            self.camera.viewport_width, self.camera.viewport_height
        );
    }
}
