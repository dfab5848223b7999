//! 2D orthographic camera
//!
//! The render camera the game screens draw through. Anything that drives the
//! camera (the debug camera controller, a follow camera) talks to it through
//! the [`Camera2d`] trait.

use glam::{Mat4, Vec2, Vec3};

/// Near clipping plane of the orthographic projection
const NEAR: f32 = 0.0;
/// Far clipping plane of the orthographic projection
const FAR: f32 = 100.0;

/// A camera that can be positioned and zoomed in 2D
pub trait Camera2d {
    /// Set the focus point (z is kept for parity with the render camera)
    fn set_position(&mut self, position: Vec3);

    /// Set the zoom factor (1.0 = viewport-sized view, larger shows more)
    fn set_zoom(&mut self, zoom: f32);

    /// Recompute the derived matrices after position or zoom changed
    fn update(&mut self);
}

/// Orthographic camera with a world-unit viewport
#[derive(Debug, Clone, PartialEq)]
pub struct OrthographicCamera {
    /// Focus point of the camera
    pub position: Vec3,
    /// Zoom factor applied to the viewport size
    pub zoom: f32,
    /// Visible width in world units at zoom 1.0
    pub viewport_width: f32,
    /// Visible height in world units at zoom 1.0
    pub viewport_height: f32,
    projection: Mat4,
    view: Mat4,
    combined: Mat4,
}

impl OrthographicCamera {
    /// Create a camera looking at the origin with the given viewport size
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            zoom: 1.0,
            viewport_width,
            viewport_height,
            projection: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            combined: Mat4::IDENTITY,
        };
        camera.update();
        camera
    }

    /// Change the viewport size; takes effect at the next [`Camera2d::update`]
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        self.viewport_width = viewport_width;
        self.viewport_height = viewport_height;
    }

    /// Projection matrix as of the last update
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// View matrix as of the last update
    pub fn view(&self) -> Mat4 {
        self.view
    }

    /// Combined projection * view matrix as of the last update
    pub fn combined(&self) -> Mat4 {
        self.combined
    }

    /// Map a world point to normalized device coordinates
    pub fn project(&self, world: Vec3) -> Vec2 {
        self.combined.project_point3(world).truncate()
    }

    /// Visible area in world units at the current zoom
    pub fn visible_size(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height) * self.zoom
    }
}

impl Camera2d for OrthographicCamera {
    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
    }

    fn update(&mut self) {
        let half = self.visible_size() / 2.0;
        self.projection = Mat4::orthographic_rh(-half.x, half.x, -half.y, half.y, NEAR, FAR);
        self.view = Mat4::from_translation(-self.position);
        self.combined = self.projection * self.view;
    }
}
