//! Free-fly debug camera controller
//!
//! Pans and zooms a 2D camera from the keyboard while debugging a screen.
//! At most one action runs per frame; see [`CameraAction::PRIORITY`].

use glam::Vec2;
use obstacle_core::Camera2d;
use tracing::{debug, error};

use crate::input::FrameInput;

use super::{is_action_active, CameraAction, DebugCameraConfig};

/// Debug camera controller
#[derive(Debug, Clone)]
pub struct DebugCameraController {
    config: DebugCameraConfig,
    position: Vec2,
    start_position: Vec2,
    zoom: f32,
}

impl DebugCameraController {
    /// Create a controller with the config from the debug camera file
    pub fn new() -> Self {
        Self::with_config(DebugCameraConfig::load())
    }

    /// Create a controller with a custom config.
    ///
    /// An invalid config is replaced by the defaults.
    pub fn with_config(config: DebugCameraConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                error!("Invalid debug camera config, using defaults: {}", e);
                DebugCameraConfig::default()
            }
        };
        debug!("{}", config);
        let mut controller = Self {
            zoom: config.min_zoom,
            config,
            position: Vec2::ZERO,
            start_position: Vec2::ZERO,
        };
        controller.set_zoom(controller.config.zoom_start);
        controller
    }

    /// Get the config in use
    pub fn config(&self) -> &DebugCameraConfig {
        &self.config
    }

    /// Current focus point
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Point the camera returns to on reset
    pub fn start_position(&self) -> Vec2 {
        self.start_position
    }

    /// Current zoom factor
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set the reset anchor and move the camera there
    pub fn set_start_position(&mut self, x: f32, y: f32) {
        self.start_position = Vec2::new(x, y);
        self.position = self.start_position;
    }

    /// Set the zoom, clamped to the configured range
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = self.config.clamp_zoom(zoom);
    }

    /// Snap back to the start position and starting zoom
    pub fn reset(&mut self) {
        self.position = self.start_position;
        self.set_zoom(self.config.zoom_start);
    }

    /// Push position and zoom into a render camera
    pub fn apply_to(&self, camera: &mut impl Camera2d) {
        camera.set_position(self.position.extend(0.0));
        camera.set_zoom(self.zoom);
        camera.update();
    }

    /// Handle this frame's input (call each frame).
    ///
    /// Returns the action that ran, if any. Does nothing while the debug
    /// camera is disabled.
    pub fn handle_input(&mut self, input: &FrameInput) -> Option<CameraAction> {
        if !self.config.enabled {
            return None;
        }

        let action = CameraAction::PRIORITY
            .into_iter()
            .find(|action| is_action_active(&self.config, input, *action))?;

        let move_delta = self.config.move_speed * input.delta;
        let zoom_delta = self.config.zoom_speed * input.delta;

        match action {
            CameraAction::PanLeft => self.move_camera(-move_delta, 0.0),
            CameraAction::PanRight => self.move_camera(move_delta, 0.0),
            CameraAction::PanUp => self.move_camera(0.0, move_delta),
            CameraAction::PanDown => self.move_camera(0.0, -move_delta),
            CameraAction::ZoomIn => self.set_zoom(self.zoom + zoom_delta),
            CameraAction::ZoomOut => self.set_zoom(self.zoom - zoom_delta),
            CameraAction::Reset => self.reset(),
            CameraAction::LogState => {
                debug!("position= {}, zoom= {}", self.position, self.zoom);
            }
        }

        Some(action)
    }

    fn move_camera(&mut self, dx: f32, dy: f32) {
        self.position += Vec2::new(dx, dy);
    }
}

impl Default for DebugCameraController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use obstacle_core::OrthographicCamera;
    use winit::keyboard::KeyCode;

    use super::*;

    fn enabled_controller() -> DebugCameraController {
        DebugCameraController::with_config(DebugCameraConfig {
            enabled: true,
            ..DebugCameraConfig::default()
        })
    }

    fn press(delta: f32, key: KeyCode) -> FrameInput {
        FrameInput::new(delta).with_key(key)
    }

    #[test]
    fn test_controller_creation() {
        let camera = enabled_controller();
        assert_eq!(camera.position(), Vec2::ZERO);
        assert_eq!(camera.start_position(), Vec2::ZERO);
        assert_eq!(camera.zoom(), 1.0);
    }

    #[test]
    fn test_starting_zoom_uses_config() {
        let config = DebugCameraConfig {
            zoom_start: 4.0,
            ..DebugCameraConfig::default()
        };
        let camera = DebugCameraController::with_config(config);
        assert_eq!(camera.zoom(), 4.0);

        let out_of_range = DebugCameraConfig {
            zoom_start: 50.0,
            ..DebugCameraConfig::default()
        };
        let camera = DebugCameraController::with_config(out_of_range);
        assert_eq!(camera.zoom(), 1.0);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let inverted = DebugCameraConfig {
            enabled: true,
            min_zoom: 5.0,
            max_zoom: 1.0,
            ..DebugCameraConfig::default()
        };
        let mut camera = DebugCameraController::with_config(inverted);
        assert_eq!(camera.config(), &DebugCameraConfig::default());
        assert_eq!(camera.zoom(), 1.0);

        camera.set_zoom(100.0);
        assert_eq!(camera.zoom(), 10.0);

        let nan = DebugCameraConfig {
            enabled: true,
            min_zoom: f32::NAN,
            move_speed: f32::INFINITY,
            ..DebugCameraConfig::default()
        };
        let camera = DebugCameraController::with_config(nan);
        assert_eq!(camera.config(), &DebugCameraConfig::default());
    }

    #[test]
    fn test_pan_left_then_reset() {
        let mut camera = enabled_controller();
        camera.set_start_position(5.0, 7.0);

        let action = camera.handle_input(&press(0.5, KeyCode::KeyA));
        assert_eq!(action, Some(CameraAction::PanLeft));
        assert_eq!(camera.position(), Vec2::new(-5.0, 7.0));

        camera.handle_input(&press(0.5, KeyCode::Backspace));
        assert_eq!(camera.position(), Vec2::new(5.0, 7.0));
    }

    #[test]
    fn test_pan_directions() {
        let mut camera = enabled_controller();

        camera.handle_input(&press(0.1, KeyCode::KeyD));
        assert_eq!(camera.position(), Vec2::new(2.0, 0.0));
        camera.handle_input(&press(0.1, KeyCode::KeyW));
        assert_eq!(camera.position(), Vec2::new(2.0, 2.0));
        camera.handle_input(&press(0.25, KeyCode::KeyS));
        assert_eq!(camera.position(), Vec2::new(2.0, -3.0));
        assert_eq!(camera.zoom(), 1.0);
    }

    #[test]
    fn test_zoom_stays_in_range() {
        let mut camera = enabled_controller();
        let (min, max) = (camera.config().min_zoom, camera.config().max_zoom);

        for _ in 0..100 {
            camera.handle_input(&press(0.5, KeyCode::Comma));
            assert!(camera.zoom() >= min && camera.zoom() <= max);
        }
        assert_eq!(camera.zoom(), max);

        for _ in 0..100 {
            camera.handle_input(&press(0.5, KeyCode::Period));
            assert!(camera.zoom() >= min && camera.zoom() <= max);
        }
        assert_eq!(camera.zoom(), min);

        camera.set_zoom(-3.0);
        assert_eq!(camera.zoom(), min);
        camera.set_zoom(f32::MAX);
        assert_eq!(camera.zoom(), max);
    }

    #[test]
    fn test_zoom_step() {
        let mut camera = enabled_controller();
        camera.handle_input(&press(0.5, KeyCode::Comma));
        assert_eq!(camera.zoom(), 2.0);
        camera.handle_input(&press(0.25, KeyCode::Period));
        assert_eq!(camera.zoom(), 1.5);
    }

    #[test]
    fn test_reset_restores_start() {
        let mut camera = enabled_controller();
        camera.set_start_position(3.0, 5.0);

        let history = [
            KeyCode::KeyA,
            KeyCode::Comma,
            KeyCode::KeyW,
            KeyCode::Comma,
            KeyCode::KeyD,
            KeyCode::Period,
        ];
        for key in history {
            camera.handle_input(&press(0.3, key));
        }
        assert_ne!(camera.position(), camera.start_position());

        camera.handle_input(&press(0.3, KeyCode::Backspace));
        assert_eq!(camera.position(), Vec2::new(3.0, 5.0));
        assert_eq!(camera.zoom(), camera.config().zoom_start);
    }

    #[test]
    fn test_disabled_ignores_input() {
        let mut camera = DebugCameraController::with_config(DebugCameraConfig::default());
        camera.set_start_position(1.0, 2.0);

        let mut input = FrameInput::new(1.0);
        for action in CameraAction::PRIORITY {
            input.pressed.insert(camera.config().key_for(action));
        }
        for _ in 0..10 {
            assert_eq!(camera.handle_input(&input), None);
        }
        assert_eq!(camera.position(), Vec2::new(1.0, 2.0));
        assert_eq!(camera.zoom(), 1.0);
    }

    #[test]
    fn test_first_match_wins() {
        let mut camera = enabled_controller();
        let input = FrameInput::new(0.5)
            .with_key(KeyCode::Comma)
            .with_key(KeyCode::KeyA);

        assert_eq!(camera.handle_input(&input), Some(CameraAction::PanLeft));
        assert_eq!(camera.position(), Vec2::new(-10.0, 0.0));
        assert_eq!(camera.zoom(), 1.0);

        let input = FrameInput::new(0.5)
            .with_key(KeyCode::Backspace)
            .with_key(KeyCode::Period);
        assert_eq!(camera.handle_input(&input), Some(CameraAction::ZoomOut));
        assert_eq!(camera.position(), Vec2::new(-10.0, 0.0));
    }

    #[test]
    fn test_no_keys_no_action() {
        let mut camera = enabled_controller();
        assert_eq!(camera.handle_input(&FrameInput::new(0.5)), None);
        assert_eq!(camera.position(), Vec2::ZERO);
    }

    #[test]
    fn test_log_does_not_change_state() {
        let mut camera = enabled_controller();
        camera.set_start_position(4.0, 4.0);
        let action = camera.handle_input(&press(0.5, KeyCode::Enter));
        assert_eq!(action, Some(CameraAction::LogState));
        assert_eq!(camera.position(), Vec2::new(4.0, 4.0));
        assert_eq!(camera.zoom(), 1.0);
    }

    #[test]
    fn test_apply_to_camera() {
        let mut controller = enabled_controller();
        controller.set_start_position(3.0, 5.0);
        controller.handle_input(&press(0.5, KeyCode::Comma));

        let mut camera = OrthographicCamera::new(6.0, 10.0);
        controller.apply_to(&mut camera);

        assert_eq!(camera.position, glam::Vec3::new(3.0, 5.0, 0.0));
        assert_eq!(camera.zoom, 2.0);
        assert!(camera.project(glam::Vec3::new(3.0, 5.0, 0.0)).length() < 1e-5);
        // Projection is one-way
        assert_eq!(controller.position(), Vec2::new(3.0, 5.0));
    }

    #[test]
    fn test_remapped_keys() {
        let mut config = DebugCameraConfig {
            enabled: true,
            ..DebugCameraConfig::default()
        };
        config.bindings.left = KeyCode::ArrowLeft;
        let mut camera = DebugCameraController::with_config(config);

        assert_eq!(camera.handle_input(&press(0.5, KeyCode::KeyA)), None);
        assert_eq!(
            camera.handle_input(&press(0.5, KeyCode::ArrowLeft)),
            Some(CameraAction::PanLeft)
        );
    }
}
