//! Selection handles and resize logic.
//!
//! Handles are the 8 bounding-box anchors; they are derived on demand and
//! identical for every shape kind. Resize anchors the opposite side or
//! corner and silently clamps to the minimum shape size.

use crate::shapes::{MIN_SHAPE_SIZE, Shape};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Handle size in screen pixels (for the renderer).
pub const HANDLE_SIZE: f64 = 8.0;
/// Handle hit tolerance in screen pixels.
///
/// Divide by the camera scale at call sites so the on-screen target stays
/// constant across zoom levels.
pub const HANDLE_HIT_TOLERANCE: f64 = 12.0;

/// Corner positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Edge midpoint positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Type of resize handle: one of the 8 anchors of a shape's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleKind {
    /// Corner handle; resizes both axes.
    Corner(Corner),
    /// Edge midpoint handle; resizes a single axis.
    Edge(Edge),
}

/// A resize handle with its position.
#[derive(Debug, Clone, Copy)]
pub struct Handle {
    /// Position in world coordinates.
    pub position: Point,
    /// Handle type.
    pub kind: HandleKind,
}

impl Handle {
    /// Create a new handle.
    pub fn new(position: Point, kind: HandleKind) -> Self {
        Self { position, kind }
    }

    /// Check if a point (in world coordinates) hits this handle.
    /// `tolerance` should be adjusted for camera scale.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        dx * dx + dy * dy <= tolerance * tolerance
    }
}

/// The 8 bounding-box handles for a shape. Identical logic for every kind.
pub fn handles(shape: &Shape) -> Vec<Handle> {
    let bounds = shape.bounds();
    let center = bounds.center();
    vec![
        Handle::new(
            Point::new(bounds.x0, bounds.y0),
            HandleKind::Corner(Corner::TopLeft),
        ),
        Handle::new(Point::new(center.x, bounds.y0), HandleKind::Edge(Edge::Top)),
        Handle::new(
            Point::new(bounds.x1, bounds.y0),
            HandleKind::Corner(Corner::TopRight),
        ),
        Handle::new(Point::new(bounds.x0, center.y), HandleKind::Edge(Edge::Left)),
        Handle::new(Point::new(bounds.x1, center.y), HandleKind::Edge(Edge::Right)),
        Handle::new(
            Point::new(bounds.x0, bounds.y1),
            HandleKind::Corner(Corner::BottomLeft),
        ),
        Handle::new(
            Point::new(center.x, bounds.y1),
            HandleKind::Edge(Edge::Bottom),
        ),
        Handle::new(
            Point::new(bounds.x1, bounds.y1),
            HandleKind::Corner(Corner::BottomRight),
        ),
    ]
}

/// Find which handle (if any) is hit at the given point.
pub fn hit_test_handles(shape: &Shape, point: Point, tolerance: f64) -> Option<HandleKind> {
    handles(shape)
        .into_iter()
        .find(|handle| handle.hit_test(point, tolerance))
        .map(|handle| handle.kind)
}

/// Which end of an axis a handle drags.
#[derive(Clone, Copy)]
enum Side {
    Low,
    High,
}

/// The sides a handle moves on the (horizontal, vertical) axes.
fn handle_sides(kind: HandleKind) -> (Option<Side>, Option<Side>) {
    match kind {
        HandleKind::Corner(Corner::TopLeft) => (Some(Side::Low), Some(Side::Low)),
        HandleKind::Corner(Corner::TopRight) => (Some(Side::High), Some(Side::Low)),
        HandleKind::Corner(Corner::BottomLeft) => (Some(Side::Low), Some(Side::High)),
        HandleKind::Corner(Corner::BottomRight) => (Some(Side::High), Some(Side::High)),
        HandleKind::Edge(Edge::Top) => (None, Some(Side::Low)),
        HandleKind::Edge(Edge::Bottom) => (None, Some(Side::High)),
        HandleKind::Edge(Edge::Left) => (Some(Side::Low), None),
        HandleKind::Edge(Edge::Right) => (Some(Side::High), None),
    }
}

/// Resize a shape by dragging one of its handles by a world-space delta.
///
/// The opposite side or corner stays anchored. Each dimension is clamped to
/// `MIN_SHAPE_SIZE`; when the clamp bites on a low-side handle the position
/// shifts so the opposite edge stays fixed. Dimensions never go negative.
pub fn resize_by_handle(shape: &mut Shape, kind: HandleKind, delta: Vec2) {
    let bounds = shape.bounds();
    let (mut x0, mut y0, mut x1, mut y1) = (bounds.x0, bounds.y0, bounds.x1, bounds.y1);
    let (horizontal, vertical) = handle_sides(kind);

    match horizontal {
        Some(Side::Low) => x0 = (x0 + delta.x).min(x1 - MIN_SHAPE_SIZE),
        Some(Side::High) => x1 = (x1 + delta.x).max(x0 + MIN_SHAPE_SIZE),
        None => {}
    }
    match vertical {
        Some(Side::Low) => y0 = (y0 + delta.y).min(y1 - MIN_SHAPE_SIZE),
        Some(Side::High) => y1 = (y1 + delta.y).max(y0 + MIN_SHAPE_SIZE),
        None => {}
    }

    shape.set_bounds(Rect::new(x0, y0, x1, y1));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{ShapeKind, ShapeStyle};

    fn shape_100() -> Shape {
        Shape::from_rect(
            ShapeKind::Rectangle,
            Rect::new(0.0, 0.0, 100.0, 100.0),
            ShapeStyle::default(),
        )
    }

    #[test]
    fn test_eight_handles_from_bounds() {
        let shape = shape_100();
        let handles = handles(&shape);
        assert_eq!(handles.len(), 8);
        assert_eq!(handles[0].position, Point::new(0.0, 0.0));
        assert_eq!(handles[1].position, Point::new(50.0, 0.0));
        assert_eq!(handles[4].position, Point::new(100.0, 50.0));
        assert_eq!(handles[7].position, Point::new(100.0, 100.0));
    }

    #[test]
    fn test_handles_identical_across_kinds() {
        let rect = Rect::new(10.0, 20.0, 110.0, 80.0);
        let positions = |kind: ShapeKind| -> Vec<Point> {
            let shape = Shape::from_rect(kind, rect, ShapeStyle::default());
            handles(&shape).iter().map(|h| h.position).collect()
        };
        let a = positions(ShapeKind::Rectangle);
        let b = positions(ShapeKind::Ellipse);
        let c = positions(ShapeKind::Triangle);
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_handle_hit_test_tolerance() {
        let handle = Handle::new(Point::new(50.0, 50.0), HandleKind::Edge(Edge::Top));
        assert!(handle.hit_test(Point::new(50.0, 50.0), 10.0));
        assert!(handle.hit_test(Point::new(56.0, 58.0), 10.0));
        assert!(!handle.hit_test(Point::new(58.0, 58.0), 10.0));
    }

    #[test]
    fn test_hit_test_handles_finds_corner() {
        let shape = shape_100();
        let kind = hit_test_handles(&shape, Point::new(99.0, 101.0), 5.0);
        assert_eq!(kind, Some(HandleKind::Corner(Corner::BottomRight)));
        assert_eq!(hit_test_handles(&shape, Point::new(50.0, 50.0), 5.0), None);
    }

    #[test]
    fn test_resize_bottom_right_grows() {
        let mut shape = shape_100();
        resize_by_handle(
            &mut shape,
            HandleKind::Corner(Corner::BottomRight),
            Vec2::new(50.0, 30.0),
        );
        let bounds = shape.bounds();
        assert!((bounds.width() - 150.0).abs() < f64::EPSILON);
        assert!((bounds.height() - 130.0).abs() < f64::EPSILON);
        assert!((bounds.x0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_clamps_to_minimum() {
        let mut shape = shape_100();
        resize_by_handle(
            &mut shape,
            HandleKind::Corner(Corner::BottomRight),
            Vec2::new(-200.0, -200.0),
        );
        let bounds = shape.bounds();
        assert!((bounds.width() - MIN_SHAPE_SIZE).abs() < f64::EPSILON);
        assert!((bounds.height() - MIN_SHAPE_SIZE).abs() < f64::EPSILON);
        // Anchored corner stays put; nothing went negative.
        assert!((bounds.x0).abs() < f64::EPSILON);
        assert!((bounds.y0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_low_side_clamp_keeps_opposite_edge_fixed() {
        let mut shape = shape_100();
        resize_by_handle(
            &mut shape,
            HandleKind::Corner(Corner::TopLeft),
            Vec2::new(250.0, 250.0),
        );
        let bounds = shape.bounds();
        // Clamp bites: the shape shrinks to the minimum against the
        // bottom-right corner.
        assert!((bounds.x0 - 90.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 90.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 100.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_edge_handle_single_axis() {
        let mut shape = shape_100();
        resize_by_handle(&mut shape, HandleKind::Edge(Edge::Right), Vec2::new(25.0, 99.0));
        let bounds = shape.bounds();
        assert!((bounds.width() - 125.0).abs() < f64::EPSILON);
        assert!((bounds.height() - 100.0).abs() < f64::EPSILON);

        resize_by_handle(&mut shape, HandleKind::Edge(Edge::Top), Vec2::new(99.0, 10.0));
        let bounds = shape.bounds();
        assert!((bounds.width() - 125.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_ellipse_through_shared_contract() {
        let mut shape = Shape::from_rect(
            ShapeKind::Ellipse,
            Rect::new(0.0, 0.0, 100.0, 100.0),
            ShapeStyle::default(),
        );
        resize_by_handle(
            &mut shape,
            HandleKind::Corner(Corner::BottomRight),
            Vec2::new(100.0, -50.0),
        );
        let bounds = shape.bounds();
        assert!((bounds.width() - 200.0).abs() < f64::EPSILON);
        assert!((bounds.height() - 50.0).abs() < f64::EPSILON);
    }
}
