//! Debug camera configuration
//!
//! Loaded once from `debug/debug-camera.json` under the assets root. A missing
//! file means defaults; a file that cannot be fully applied means defaults too,
//! never a mix of loaded and default values.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use obstacle_core::internal_file;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};
use winit::keyboard::KeyCode;

use crate::input::{key_from_name, key_name, FrameInput};

/// Logical path of the debug camera config file
pub const CONFIG_PATH: &str = "debug/debug-camera.json";

/// Actions the debug camera responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraAction {
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    ZoomIn,
    ZoomOut,
    Reset,
    LogState,
}

impl CameraAction {
    /// All actions, in the order they are checked each frame
    pub const PRIORITY: [CameraAction; 8] = [
        CameraAction::PanLeft,
        CameraAction::PanRight,
        CameraAction::PanUp,
        CameraAction::PanDown,
        CameraAction::ZoomIn,
        CameraAction::ZoomOut,
        CameraAction::Reset,
        CameraAction::LogState,
    ];

    /// Name of the binding in the config file
    pub fn config_key(&self) -> &'static str {
        match self {
            CameraAction::PanLeft => "leftKey",
            CameraAction::PanRight => "rightKey",
            CameraAction::PanUp => "upKey",
            CameraAction::PanDown => "downKey",
            CameraAction::ZoomIn => "zoomInKey",
            CameraAction::ZoomOut => "zoomOutKey",
            CameraAction::Reset => "resetKey",
            CameraAction::LogState => "logKey",
        }
    }
}

/// Physical key bound to each camera action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub left: KeyCode,
    pub right: KeyCode,
    pub up: KeyCode,
    pub down: KeyCode,
    pub zoom_in: KeyCode,
    pub zoom_out: KeyCode,
    pub reset: KeyCode,
    pub log: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            up: KeyCode::KeyW,
            down: KeyCode::KeyS,
            zoom_in: KeyCode::Comma,
            zoom_out: KeyCode::Period,
            reset: KeyCode::Backspace,
            log: KeyCode::Enter,
        }
    }
}

impl KeyBindings {
    /// Key bound to an action
    pub fn key_for(&self, action: CameraAction) -> KeyCode {
        match action {
            CameraAction::PanLeft => self.left,
            CameraAction::PanRight => self.right,
            CameraAction::PanUp => self.up,
            CameraAction::PanDown => self.down,
            CameraAction::ZoomIn => self.zoom_in,
            CameraAction::ZoomOut => self.zoom_out,
            CameraAction::Reset => self.reset,
            CameraAction::LogState => self.log,
        }
    }
}

/// Reasons a config file could not be applied
#[derive(Debug, thiserror::Error)]
pub enum CameraConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed camera config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown key name '{name}' for {field}")]
    UnknownKey { field: &'static str, name: String },

    #[error("invalid zoom range: min {min}, start {start}, max {max}")]
    InvalidZoomRange { min: f32, start: f32, max: f32 },

    #[error("{field} must be a finite number, got {value}")]
    InvalidSpeed { field: &'static str, value: f32 },
}

/// Debug camera configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DebugCameraConfig {
    /// Master switch; when off the debug camera ignores all input
    pub enabled: bool,
    /// Pan speed in world units per second
    pub move_speed: f32,
    /// Zoom speed in zoom units per second
    pub zoom_speed: f32,
    /// Zoom applied at startup and on reset
    pub zoom_start: f32,
    /// Smallest zoom factor (closest view)
    pub min_zoom: f32,
    /// Largest zoom factor (widest view)
    pub max_zoom: f32,
    /// Key bindings
    pub bindings: KeyBindings,
}

impl Default for DebugCameraConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            move_speed: 20.0,
            zoom_speed: 2.0,
            zoom_start: 1.0,
            min_zoom: 0.25,
            max_zoom: 10.0,
            bindings: KeyBindings::default(),
        }
    }
}

impl DebugCameraConfig {
    /// Load from the fixed config path under the assets root
    pub fn load() -> Self {
        Self::load_from_path(&internal_file(CONFIG_PATH))
    }

    /// Load from a file, falling back to defaults if it is missing or invalid
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            info!("Using defaults, file does not exist: {:?}", path);
            return Self::default();
        }

        match Self::read(path) {
            Ok(config) => {
                debug!("Camera config loaded from {:?}", path);
                config
            }
            Err(e) => {
                error!("Error loading {:?}, using defaults: {}", path, e);
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self, CameraConfigError> {
        let content = fs::read_to_string(path).map_err(|source| CameraConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Parse a config document. Keys that are absent keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, CameraConfigError> {
        let document: CameraDocument = serde_json::from_str(json)?;
        Self::try_from(document)
    }

    /// Serialize back into the config file format
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&CameraDocument::from(self))
    }

    /// Key bound to an action
    pub fn key_for(&self, action: CameraAction) -> KeyCode {
        self.bindings.key_for(action)
    }

    /// Clamp a zoom value into `[min_zoom, max_zoom]`.
    ///
    /// The range must be valid, see [`DebugCameraConfig::validate`].
    pub fn clamp_zoom(&self, zoom: f32) -> f32 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }

    /// Check that `0 < min_zoom <= zoom_start <= max_zoom` and that the
    /// speeds are finite
    pub fn validate(&self) -> Result<(), CameraConfigError> {
        let (min, start, max) = (self.min_zoom, self.zoom_start, self.max_zoom);
        if !(min > 0.0 && min <= start && start <= max && max.is_finite()) {
            return Err(CameraConfigError::InvalidZoomRange { min, start, max });
        }
        if !self.move_speed.is_finite() {
            return Err(CameraConfigError::InvalidSpeed {
                field: "moveSpeed",
                value: self.move_speed,
            });
        }
        if !self.zoom_speed.is_finite() {
            return Err(CameraConfigError::InvalidSpeed {
                field: "zoomSpeed",
                value: self.zoom_speed,
            });
        }
        Ok(())
    }

    /// Whether the pan left key is held this frame
    pub fn is_left_pressed(&self, input: &FrameInput) -> bool {
        is_action_active(self, input, CameraAction::PanLeft)
    }

    /// Whether the pan right key is held this frame
    pub fn is_right_pressed(&self, input: &FrameInput) -> bool {
        is_action_active(self, input, CameraAction::PanRight)
    }

    /// Whether the pan up key is held this frame
    pub fn is_up_pressed(&self, input: &FrameInput) -> bool {
        is_action_active(self, input, CameraAction::PanUp)
    }

    /// Whether the pan down key is held this frame
    pub fn is_down_pressed(&self, input: &FrameInput) -> bool {
        is_action_active(self, input, CameraAction::PanDown)
    }

    /// Whether the zoom in key is held this frame
    pub fn is_zoom_in_pressed(&self, input: &FrameInput) -> bool {
        is_action_active(self, input, CameraAction::ZoomIn)
    }

    /// Whether the zoom out key is held this frame
    pub fn is_zoom_out_pressed(&self, input: &FrameInput) -> bool {
        is_action_active(self, input, CameraAction::ZoomOut)
    }

    /// Whether the reset key is held this frame
    pub fn is_reset_pressed(&self, input: &FrameInput) -> bool {
        is_action_active(self, input, CameraAction::Reset)
    }

    /// Whether the log state key is held this frame
    pub fn is_log_pressed(&self, input: &FrameInput) -> bool {
        is_action_active(self, input, CameraAction::LogState)
    }
}

/// Whether the key bound to `action` is held in this frame's input
pub fn is_action_active(
    config: &DebugCameraConfig,
    input: &FrameInput,
    action: CameraAction,
) -> bool {
    input.is_pressed(config.key_for(action))
}

impl fmt::Display for DebugCameraConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DebugCameraConfig {{")?;
        writeln!(f, "    enabled= {}", self.enabled)?;
        writeln!(f, "    zoomStart= {}", self.zoom_start)?;
        writeln!(f, "    minZoom= {}", self.min_zoom)?;
        writeln!(f, "    maxZoom= {}", self.max_zoom)?;
        writeln!(f, "    moveSpeed= {}", self.move_speed)?;
        writeln!(f, "    zoomSpeed= {}", self.zoom_speed)?;
        for action in CameraAction::PRIORITY {
            writeln!(
                f,
                "    {}= {}",
                action.config_key(),
                key_name(self.key_for(action))
            )?;
        }
        write!(f, "}}")
    }
}

/// On-disk shape of the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CameraDocument {
    enable_debug_camera: bool,
    max_zoom_in: f32,
    max_zoom_out: f32,
    move_speed: f32,
    zoom_speed: f32,
    zoom_start: f32,
    left_key: String,
    right_key: String,
    up_key: String,
    down_key: String,
    zoom_in_key: String,
    zoom_out_key: String,
    reset_key: String,
    log_key: String,
}

impl Default for CameraDocument {
    fn default() -> Self {
        Self::from(&DebugCameraConfig::default())
    }
}

impl From<&DebugCameraConfig> for CameraDocument {
    fn from(config: &DebugCameraConfig) -> Self {
        let name = |action| key_name(config.key_for(action)).to_string();
        Self {
            enable_debug_camera: config.enabled,
            max_zoom_in: config.min_zoom,
            max_zoom_out: config.max_zoom,
            move_speed: config.move_speed,
            zoom_speed: config.zoom_speed,
            zoom_start: config.zoom_start,
            left_key: name(CameraAction::PanLeft),
            right_key: name(CameraAction::PanRight),
            up_key: name(CameraAction::PanUp),
            down_key: name(CameraAction::PanDown),
            zoom_in_key: name(CameraAction::ZoomIn),
            zoom_out_key: name(CameraAction::ZoomOut),
            reset_key: name(CameraAction::Reset),
            log_key: name(CameraAction::LogState),
        }
    }
}

fn resolve_key(action: CameraAction, name: &str) -> Result<KeyCode, CameraConfigError> {
    key_from_name(name).ok_or_else(|| CameraConfigError::UnknownKey {
        field: action.config_key(),
        name: name.to_string(),
    })
}

impl TryFrom<CameraDocument> for DebugCameraConfig {
    type Error = CameraConfigError;

    fn try_from(doc: CameraDocument) -> Result<Self, Self::Error> {
        let bindings = KeyBindings {
            left: resolve_key(CameraAction::PanLeft, &doc.left_key)?,
            right: resolve_key(CameraAction::PanRight, &doc.right_key)?,
            up: resolve_key(CameraAction::PanUp, &doc.up_key)?,
            down: resolve_key(CameraAction::PanDown, &doc.down_key)?,
            zoom_in: resolve_key(CameraAction::ZoomIn, &doc.zoom_in_key)?,
            zoom_out: resolve_key(CameraAction::ZoomOut, &doc.zoom_out_key)?,
            reset: resolve_key(CameraAction::Reset, &doc.reset_key)?,
            log: resolve_key(CameraAction::LogState, &doc.log_key)?,
        };

        let config = Self {
            enabled: doc.enable_debug_camera,
            move_speed: doc.move_speed,
            zoom_speed: doc.zoom_speed,
            zoom_start: doc.zoom_start,
            min_zoom: doc.max_zoom_in,
            max_zoom: doc.max_zoom_out,
            bindings,
        };
        config.validate()?;
        Ok(config)
    }
}
