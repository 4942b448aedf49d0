//! Rectangle shape.

use super::{ShapeId, ShapeStyle};
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Top-left corner position.
    pub position: Point,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
    /// Rotation angle in radians (reserved, not applied yet).
    #[serde(default)]
    pub rotation: f64,
    /// Whether this shape is the current selection.
    #[serde(default)]
    pub selected: bool,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            width,
            height,
            rotation: 0.0,
            selected: false,
            style: ShapeStyle::default(),
        }
    }

    /// Create a rectangle filling the given bounds.
    pub fn from_rect(rect: Rect, style: ShapeStyle) -> Self {
        let mut shape = Self::new(rect.origin(), rect.width(), rect.height());
        shape.style = style;
        shape
    }

    /// Get the rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    pub(crate) fn set_bounds(&mut self, rect: Rect) {
        self.position = rect.origin();
        self.width = rect.width();
        self.height = rect.height();
    }

    /// Axis-aligned containment test, edges inclusive.
    pub fn contains_point(&self, point: Point) -> bool {
        let rect = self.as_rect();
        point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
    }

    pub fn to_path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
    }
}
