//! Obstacle Core - Core types and utilities for the obstacle-avoid game
//!
//! This crate provides the pieces of the host engine the game logic talks to:
//! - Mathematical primitives (re-exported from glam)
//! - Frame time tracking
//! - The 2D orthographic render camera
//! - Internal asset path resolution

pub mod camera;
pub mod files;
pub mod time;

pub use camera::{Camera2d, OrthographicCamera};
pub use files::{assets_root, internal_file};
pub use glam::{Mat4, Vec2, Vec3};
pub use time::{GameTime, TimeConfig};
