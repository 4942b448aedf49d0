//! Triangle shape.

use super::{ShapeId, ShapeStyle};
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An isosceles triangle: apex at the top-center of its bounding box, base
/// along the bottom edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Triangle {
    pub(crate) id: ShapeId,
    /// Top-left corner of the bounding box.
    pub position: Point,
    /// Width of the bounding box.
    pub width: f64,
    /// Height of the bounding box.
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

impl Triangle {
    /// Create a new triangle.
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

    /// Create a triangle filling the given bounds.
    pub fn from_rect(rect: Rect, style: ShapeStyle) -> Self {
        let mut shape = Self::new(rect.origin(), rect.width(), rect.height());
        shape.style = style;
        shape
    }

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

    /// Vertices in order: apex, bottom-right, bottom-left.
    pub fn vertices(&self) -> [Point; 3] {
        let rect = self.as_rect();
        [
            Point::new((rect.x0 + rect.x1) / 2.0, rect.y0),
            Point::new(rect.x1, rect.y1),
            Point::new(rect.x0, rect.y1),
        ]
    }

    /// Edge-sign containment test: the point is inside iff all three
    /// half-plane evaluations share a sign or are zero.
    pub fn contains_point(&self, point: Point) -> bool {
        let [a, b, c] = self.vertices();
        let d1 = edge_sign(a, b, point);
        let d2 = edge_sign(b, c, point);
        let d3 = edge_sign(c, a, point);

        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }

    pub fn to_path(&self) -> BezPath {
        let [a, b, c] = self.vertices();
        let mut path = BezPath::new();
        path.move_to(a);
        path.line_to(b);
        path.line_to(c);
        path.close_path();
        path
    }
}

/// Cross product sign of `p` relative to the directed edge a->b.
fn edge_sign(a: Point, b: Point, p: Point) -> f64 {
    (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
}
