//! Camera module for pan/zoom transforms.

use kurbo::{Affine, Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Minimum allowed scale (extreme zoom-out).
pub const MIN_SCALE: f64 = 0.02;

/// Maximum allowed scale (extreme zoom-in).
pub const MAX_SCALE: f64 = 50.0;

/// Camera manages the view transform for the drawing surface.
///
/// It handles panning (translation) and zooming (scaling), converting
/// between screen and world coordinates: `world = (screen - offset) / scale`.
/// Shape geometry lives in world units; input and rendering use screen
/// pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Current translation offset (pan), in screen pixels.
    pub offset: Vec2,
    /// Current scale (1.0 = one world unit per screen pixel).
    pub scale: f64,
    /// Minimum allowed scale.
    pub min_scale: f64,
    /// Maximum allowed scale.
    pub max_scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
        }
    }
}

impl Camera {
    /// Create a new camera at the default origin placement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the affine transform for rendering.
    ///
    /// This transform converts world coordinates to screen coordinates.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Get the inverse transform for input handling.
    ///
    /// This transform converts screen coordinates to world coordinates.
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.scale) * Affine::translate(-self.offset)
    }

    /// Convert a screen point to world coordinates.
    pub fn screen_to_world(&self, screen_point: Point) -> Point {
        self.inverse_transform() * screen_point
    }

    /// Convert a world point to screen coordinates.
    pub fn world_to_screen(&self, world_point: Point) -> Point {
        self.transform() * world_point
    }

    /// Pan the camera by a delta in screen pixels.
    ///
    /// Deliberately scale-independent: panning speed matches physical
    /// pointer movement at every zoom level.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Zoom the camera by `factor`, keeping the given screen point fixed.
    ///
    /// Non-finite or non-positive factors are ignored, as is any factor the
    /// scale clamp reduces to a no-op.
    pub fn zoom_at(&mut self, screen_point: Point, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let new_scale = (self.scale * factor).clamp(self.min_scale, self.max_scale);
        if (new_scale - self.scale).abs() < f64::EPSILON {
            return;
        }

        // The world anchor must be captured before the scale changes.
        let anchor = self.screen_to_world(screen_point);
        self.scale = new_scale;

        // Adjust offset so the anchor stays under the pointer.
        let new_screen = self.world_to_screen(anchor);
        self.offset += Vec2::new(
            screen_point.x - new_screen.x,
            screen_point.y - new_screen.y,
        );
    }

    /// Reset to the default origin placement at 100% scale.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
        self.scale = 1.0;
    }

    /// World-space rectangle visible through a viewport of the given pixel
    /// size, derived from the canvas corners. Never persisted.
    pub fn viewport_bounds(&self, size: Size) -> Rect {
        let corners = [
            self.screen_to_world(Point::ZERO),
            self.screen_to_world(Point::new(size.width, 0.0)),
            self.screen_to_world(Point::new(0.0, size.height)),
            self.screen_to_world(Point::new(size.width, size.height)),
        ];
        corners
            .iter()
            .skip(1)
            .fold(Rect::from_points(corners[0], corners[0]), |rect, p| {
                rect.union_pt(*p)
            })
    }
}

/// Zoom factor from two successive pinch distances.
///
/// Returns `None` when the previous distance is zero, degenerate, or
/// non-finite, which would otherwise produce an invalid factor.
pub fn pinch_zoom_factor(previous_distance: f64, current_distance: f64) -> Option<f64> {
    if !previous_distance.is_finite() || !current_distance.is_finite() {
        return None;
    }
    if previous_distance <= f64::EPSILON || current_distance <= 0.0 {
        return None;
    }
    Some(current_distance / previous_distance)
}
