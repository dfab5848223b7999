//! Keyboard input snapshots
//!
//! Window keyboard events are folded into a [`KeyboardState`]; once per frame
//! the game takes a [`FrameInput`] snapshot of it, so game logic never reads
//! global input state.

use std::collections::HashSet;

use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Everything a frame of game logic gets to see about input and time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Elapsed time of this frame in seconds
    pub delta: f32,
    /// Physical keys held down this frame
    pub pressed: HashSet<KeyCode>,
}

impl FrameInput {
    /// Create a snapshot with no keys held
    pub fn new(delta: f32) -> Self {
        Self {
            delta,
            pressed: HashSet::new(),
        }
    }

    /// Add a held key to the snapshot
    pub fn with_key(mut self, key: KeyCode) -> Self {
        self.pressed.insert(key);
        self
    }

    /// Check if a key is held this frame
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }
}

/// Tracks which physical keys are currently held
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Create a keyboard state with nothing held
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a keyboard event
    pub fn handle_keyboard(&mut self, physical_key: PhysicalKey, element_state: ElementState) {
        if let PhysicalKey::Code(key_code) = physical_key {
            match element_state {
                ElementState::Pressed => {
                    self.held.insert(key_code);
                }
                ElementState::Released => {
                    self.held.remove(&key_code);
                }
            }
        }
    }

    /// Check if a key is currently held
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Release every key (call when the window loses focus)
    pub fn clear_all(&mut self) {
        self.held.clear();
    }

    /// Take the snapshot for this frame
    pub fn snapshot(&self, delta: f32) -> FrameInput {
        FrameInput {
            delta,
            pressed: self.held.clone(),
        }
    }
}

/// Human-readable key names. The first entry for a key is its canonical name.
const KEY_NAMES: &[(&str, KeyCode)] = &[
    ("A", KeyCode::KeyA),
    ("B", KeyCode::KeyB),
    ("C", KeyCode::KeyC),
    ("D", KeyCode::KeyD),
    ("E", KeyCode::KeyE),
    ("F", KeyCode::KeyF),
    ("G", KeyCode::KeyG),
    ("H", KeyCode::KeyH),
    ("I", KeyCode::KeyI),
    ("J", KeyCode::KeyJ),
    ("K", KeyCode::KeyK),
    ("L", KeyCode::KeyL),
    ("M", KeyCode::KeyM),
    ("N", KeyCode::KeyN),
    ("O", KeyCode::KeyO),
    ("P", KeyCode::KeyP),
    ("Q", KeyCode::KeyQ),
    ("R", KeyCode::KeyR),
    ("S", KeyCode::KeyS),
    ("T", KeyCode::KeyT),
    ("U", KeyCode::KeyU),
    ("V", KeyCode::KeyV),
    ("W", KeyCode::KeyW),
    ("X", KeyCode::KeyX),
    ("Y", KeyCode::KeyY),
    ("Z", KeyCode::KeyZ),
    ("0", KeyCode::Digit0),
    ("1", KeyCode::Digit1),
    ("2", KeyCode::Digit2),
    ("3", KeyCode::Digit3),
    ("4", KeyCode::Digit4),
    ("5", KeyCode::Digit5),
    ("6", KeyCode::Digit6),
    ("7", KeyCode::Digit7),
    ("8", KeyCode::Digit8),
    ("9", KeyCode::Digit9),
    (",", KeyCode::Comma),
    ("Comma", KeyCode::Comma),
    (".", KeyCode::Period),
    ("Period", KeyCode::Period),
    ("/", KeyCode::Slash),
    ("Slash", KeyCode::Slash),
    (";", KeyCode::Semicolon),
    ("Semicolon", KeyCode::Semicolon),
    ("'", KeyCode::Quote),
    ("Apostrophe", KeyCode::Quote),
    ("[", KeyCode::BracketLeft),
    ("Left Bracket", KeyCode::BracketLeft),
    ("]", KeyCode::BracketRight),
    ("Right Bracket", KeyCode::BracketRight),
    ("-", KeyCode::Minus),
    ("Minus", KeyCode::Minus),
    ("=", KeyCode::Equal),
    ("Equals", KeyCode::Equal),
    ("`", KeyCode::Backquote),
    ("Grave", KeyCode::Backquote),
    ("\\", KeyCode::Backslash),
    ("Backspace", KeyCode::Backspace),
    // Older config files name backspace "Delete"
    ("Delete", KeyCode::Backspace),
    ("Enter", KeyCode::Enter),
    ("Return", KeyCode::Enter),
    ("Space", KeyCode::Space),
    ("Tab", KeyCode::Tab),
    ("Escape", KeyCode::Escape),
    ("Esc", KeyCode::Escape),
    ("Forward Delete", KeyCode::Delete),
    ("Insert", KeyCode::Insert),
    ("Home", KeyCode::Home),
    ("End", KeyCode::End),
    ("Page Up", KeyCode::PageUp),
    ("Page Down", KeyCode::PageDown),
    ("Left", KeyCode::ArrowLeft),
    ("Right", KeyCode::ArrowRight),
    ("Up", KeyCode::ArrowUp),
    ("Down", KeyCode::ArrowDown),
    ("L-Shift", KeyCode::ShiftLeft),
    ("R-Shift", KeyCode::ShiftRight),
    ("L-Ctrl", KeyCode::ControlLeft),
    ("R-Ctrl", KeyCode::ControlRight),
    ("L-Alt", KeyCode::AltLeft),
    ("R-Alt", KeyCode::AltRight),
    ("F1", KeyCode::F1),
    ("F2", KeyCode::F2),
    ("F3", KeyCode::F3),
    ("F4", KeyCode::F4),
    ("F5", KeyCode::F5),
    ("F6", KeyCode::F6),
    ("F7", KeyCode::F7),
    ("F8", KeyCode::F8),
    ("F9", KeyCode::F9),
    ("F10", KeyCode::F10),
    ("F11", KeyCode::F11),
    ("F12", KeyCode::F12),
    ("Numpad 0", KeyCode::Numpad0),
    ("Numpad 1", KeyCode::Numpad1),
    ("Numpad 2", KeyCode::Numpad2),
    ("Numpad 3", KeyCode::Numpad3),
    ("Numpad 4", KeyCode::Numpad4),
    ("Numpad 5", KeyCode::Numpad5),
    ("Numpad 6", KeyCode::Numpad6),
    ("Numpad 7", KeyCode::Numpad7),
    ("Numpad 8", KeyCode::Numpad8),
    ("Numpad 9", KeyCode::Numpad9),
    ("Numpad +", KeyCode::NumpadAdd),
    ("Numpad -", KeyCode::NumpadSubtract),
];

/// Resolve a key name from a config file to a physical key.
///
/// Matching ignores ASCII case and surrounding whitespace, and also accepts
/// winit's own identifiers (`KeyA`, `ArrowLeft`, `Digit1`). `Delete` means
/// backspace; the key labelled Delete is `Forward Delete`.
pub fn key_from_name(name: &str) -> Option<KeyCode> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    KEY_NAMES
        .iter()
        .find(|(key_name, code)| {
            key_name.eq_ignore_ascii_case(name) || format!("{code:?}").eq_ignore_ascii_case(name)
        })
        .map(|(_, code)| *code)
}

/// Canonical human-readable name of a key
pub fn key_name(key: KeyCode) -> &'static str {
    KEY_NAMES
        .iter()
        .find(|(_, code)| *code == key)
        .map(|(name, _)| *name)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_state() {
        let mut keyboard = KeyboardState::new();
        keyboard.handle_keyboard(PhysicalKey::Code(KeyCode::KeyA), ElementState::Pressed);
        keyboard.handle_keyboard(PhysicalKey::Code(KeyCode::Comma), ElementState::Pressed);
        keyboard.handle_keyboard(PhysicalKey::Code(KeyCode::KeyA), ElementState::Released);

        assert!(!keyboard.is_held(KeyCode::KeyA));
        assert!(keyboard.is_held(KeyCode::Comma));

        let frame = keyboard.snapshot(0.016);
        assert_eq!(frame.delta, 0.016);
        assert!(frame.is_pressed(KeyCode::Comma));
        assert!(!frame.is_pressed(KeyCode::KeyA));

        keyboard.clear_all();
        assert!(!keyboard.is_held(KeyCode::Comma));
        // Snapshots taken earlier are unaffected
        assert!(frame.is_pressed(KeyCode::Comma));
    }

    #[test]
    fn test_frame_input_builder() {
        let frame = FrameInput::new(0.5).with_key(KeyCode::KeyW);
        assert!(frame.is_pressed(KeyCode::KeyW));
        assert!(!frame.is_pressed(KeyCode::KeyS));
    }

    #[test]
    fn test_key_from_name() {
        assert_eq!(key_from_name("A"), Some(KeyCode::KeyA));
        assert_eq!(key_from_name("a"), Some(KeyCode::KeyA));
        assert_eq!(key_from_name(" Enter "), Some(KeyCode::Enter));
        assert_eq!(key_from_name("Return"), Some(KeyCode::Enter));
        assert_eq!(key_from_name(","), Some(KeyCode::Comma));
        assert_eq!(key_from_name("period"), Some(KeyCode::Period));
        assert_eq!(key_from_name("KeyW"), Some(KeyCode::KeyW));
        assert_eq!(key_from_name("ArrowLeft"), Some(KeyCode::ArrowLeft));
        assert_eq!(key_from_name("Backspace"), Some(KeyCode::Backspace));

        assert_eq!(key_from_name("Bakcspace"), None);
        assert_eq!(key_from_name(""), None);
    }

    #[test]
    fn test_delete_names() {
        assert_eq!(key_from_name("Delete"), Some(KeyCode::Backspace));
        assert_eq!(key_from_name("delete"), Some(KeyCode::Backspace));
        assert_eq!(key_from_name("Forward Delete"), Some(KeyCode::Delete));
        assert_eq!(key_name(KeyCode::Backspace), "Backspace");
        assert_eq!(key_name(KeyCode::Delete), "Forward Delete");
    }

    #[test]
    fn test_key_name_is_canonical() {
        assert_eq!(key_name(KeyCode::KeyA), "A");
        assert_eq!(key_name(KeyCode::Comma), ",");
        assert_eq!(key_name(KeyCode::Enter), "Enter");
        assert_eq!(key_name(KeyCode::ArrowUp), "Up");
        assert_eq!(key_name(KeyCode::MediaStop), "Unknown");
    }

    #[test]
    fn test_every_canonical_name_resolves_back() {
        for (_, code) in KEY_NAMES {
            assert_eq!(key_from_name(key_name(*code)), Some(*code));
        }
    }
}
