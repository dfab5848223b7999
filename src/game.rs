//! Game shell and screen lifecycle
//!
//! The game owns exactly one active screen. Switching screens hides the old
//! one before the new one is shown.

use obstacle_game::FrameInput;
use tracing::debug;

use crate::screen::GameScreen;

/// A full-window game screen
pub trait Screen {
    /// Called when the screen becomes the active screen
    fn show(&mut self) {}

    /// Called once per frame with that frame's input
    fn render(&mut self, input: &FrameInput);

    /// Called when the window size changes, in physical pixels
    fn resize(&mut self, _width: u32, _height: u32) {}

    /// Called when the screen stops being the active screen
    fn hide(&mut self) {}
}

/// Top-level game object
#[derive(Default)]
pub struct ObstacleAvoidGame {
    screen: Option<Box<dyn Screen>>,
    size: Option<(u32, u32)>,
}

impl ObstacleAvoidGame {
    /// Create a game with no active screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Set up the first screen
    pub fn create(&mut self) {
        debug!("Init GameScreen");
        self.set_screen(Box::new(GameScreen::new()));
    }

    /// Replace the active screen
    pub fn set_screen(&mut self, mut screen: Box<dyn Screen>) {
        if let Some(previous) = self.screen.as_mut() {
            previous.hide();
        }
        screen.show();
        if let Some((width, height)) = self.size {
            screen.resize(width, height);
        }
        self.screen = Some(screen);
    }

    /// Whether a screen is active
    pub fn has_screen(&self) -> bool {
        self.screen.is_some()
    }

    /// Render one frame of the active screen
    pub fn render(&mut self, input: &FrameInput) {
        if let Some(screen) = self.screen.as_mut() {
            screen.render(input);
        }
    }

    /// Forward a window resize to the active screen and any later ones
    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = Some((width, height));
        if let Some(screen) = self.screen.as_mut() {
            screen.resize(width, height);
        }
    }

    /// Hide and drop the active screen
    pub fn dispose(&mut self) {
        if let Some(mut screen) = self.screen.take() {
            screen.hide();
        }
    }
}
