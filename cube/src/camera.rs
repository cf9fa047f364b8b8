#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{FOLLOW_RATE, ZOOM_FAR, ZOOM_MAX, ZOOM_MIN, ZOOM_NEAR};
use crate::geom::Point;

/// Follow camera.
///
/// `center` is the world point shown in the middle of the viewport.
/// `zoom` is a scale factor (1.0 = one world pixel per CSS pixel), always
/// within [`ZOOM_MIN`]..=[`ZOOM_MAX`].
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub center: Point,
    zoom: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { center: Point::default(), zoom: 1.0, viewport_width: 0.0, viewport_height: 0.0 }
    }
}

impl Camera {
    /// A 1x camera looking at `center`, with no viewport yet.
    #[must_use]
    pub fn centered_on(center: Point) -> Self {
        Self { center, ..Self::default() }
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Set the zoom, clamped to the allowed range. Non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
        }
    }

    pub fn zoom_by(&mut self, factor: f64) {
        self.set_zoom(self.zoom * factor);
    }

    /// Switch between the near and far zoom levels, whichever is farther
    /// from the current zoom.
    pub fn toggle_zoom(&mut self) {
        let midpoint = (ZOOM_NEAR + ZOOM_FAR) * 0.5;
        self.set_zoom(if self.zoom < midpoint { ZOOM_NEAR } else { ZOOM_FAR });
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width.max(0.0);
        self.viewport_height = height.max(0.0);
    }

    /// Ease `center` toward `target`; `dt` is in seconds.
    ///
    /// Frame-rate independent: two steps of `dt` land where one step of
    /// `2 * dt` does.
    pub fn follow(&mut self, target: Point, dt: f64) {
        if dt <= 0.0 {
            return;
        }
        let t = 1.0 - (-FOLLOW_RATE * dt).exp();
        self.center.x += (target.x - self.center.x) * t;
        self.center.y += (target.y - self.center.y) * t;
    }

    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: self.center.x + (screen.x - self.viewport_width * 0.5) / self.zoom,
            y: self.center.y + (screen.y - self.viewport_height * 0.5) / self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: (world.x - self.center.x) * self.zoom + self.viewport_width * 0.5,
            y: (world.y - self.center.y) * self.zoom + self.viewport_height * 0.5,
        }
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }
}
