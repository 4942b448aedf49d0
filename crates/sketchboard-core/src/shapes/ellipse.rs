//! Ellipse shape.

use super::{ShapeId, ShapeStyle};
use kurbo::{BezPath, Ellipse as KurboEllipse, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An ellipse, stored as its bounding-box-derived center and radii.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ellipse {
    pub(crate) id: ShapeId,
    /// Center point.
    pub center: Point,
    /// Horizontal radius.
    pub radius_x: f64,
    /// Vertical radius.
    pub radius_y: f64,
    /// Rotation angle in radians (reserved, not applied yet).
    #[serde(default)]
    pub rotation: f64,
    /// Whether this shape is the current selection.
    #[serde(default)]
    pub selected: bool,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Ellipse {
    /// Create a new ellipse.
    pub fn new(center: Point, radius_x: f64, radius_y: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            radius_x,
            radius_y,
            rotation: 0.0,
            selected: false,
            style: ShapeStyle::default(),
        }
    }

    /// Create an ellipse inscribed in the given bounds.
    pub fn from_rect(rect: Rect, style: ShapeStyle) -> Self {
        let mut shape = Self::new(rect.center(), rect.width() / 2.0, rect.height() / 2.0);
        shape.style = style;
        shape
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius_x,
            self.center.y - self.radius_y,
            self.center.x + self.radius_x,
            self.center.y + self.radius_y,
        )
    }

    pub(crate) fn set_bounds(&mut self, rect: Rect) {
        self.center = rect.center();
        self.radius_x = rect.width() / 2.0;
        self.radius_y = rect.height() / 2.0;
    }

    /// Normalized-distance containment test.
    ///
    /// Degenerate (zero-radius) ellipses never contain any point.
    pub fn contains_point(&self, point: Point) -> bool {
        if self.radius_x <= f64::EPSILON || self.radius_y <= f64::EPSILON {
            return false;
        }
        let dx = (point.x - self.center.x) / self.radius_x;
        let dy = (point.y - self.center.y) / self.radius_y;
        dx * dx + dy * dy <= 1.0
    }

    pub fn to_path(&self) -> BezPath {
        KurboEllipse::new(self.center, (self.radius_x, self.radius_y), 0.0).to_path(0.1)
    }
}
