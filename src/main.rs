//! Obstacle Avoid - a small 2D obstacle-avoidance arcade game
//!
//! This is the main entry point: window, event loop, and frame pacing.

mod game;
mod screen;

use std::time::Instant;

use anyhow::{Context, Result};
use obstacle_core::GameTime;
use obstacle_game::KeyboardState;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::game::ObstacleAvoidGame;

/// Log filter used when `RUST_LOG` is not set
const DEFAULT_LOG_FILTER: &str = "info,obstacle_avoid=debug,obstacle_game=debug";

/// Application state
struct App {
    window: Option<Window>,
    game: ObstacleAvoidGame,
    keyboard: KeyboardState,
    game_time: GameTime,
    last_frame: Instant,
}

impl App {
    fn new() -> Self {
        let mut game = ObstacleAvoidGame::new();
        game.create();
        Self {
            window: None,
            game,
            keyboard: KeyboardState::new(),
            game_time: GameTime::default(),
            last_frame: Instant::now(),
        }
    }

    fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.game_time.update(delta);
        let input = self.keyboard.snapshot(self.game_time.delta_time);
        self.game.render(&input);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("Obstacle Avoid")
            .with_inner_size(LogicalSize::new(480, 800));

        match event_loop.create_window(attributes) {
            Ok(window) => {
                let size = window.inner_size();
                self.game.resize(size.width, size.height);
                self.last_frame = Instant::now();
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Window close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                info!("Window resized to {}x{}", size.width, size.height);
                self.game.resize(size.width, size.height);
            }
            WindowEvent::Focused(focused) => {
                if !focused {
                    self.keyboard.clear_all();
                }
                self.game_time.focus_changed(focused);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.keyboard.handle_keyboard(event.physical_key, event.state);
            }
            WindowEvent::RedrawRequested => self.update(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting Obstacle Avoid...");

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop
        .run_app(&mut app)
        .context("Event loop terminated with an error")?;

    app.game.dispose();
    info!("Goodbye");
    Ok(())
}
