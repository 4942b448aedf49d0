//! Shape definitions for the drawing surface.

mod ellipse;
mod rectangle;
mod triangle;

pub use ellipse::Ellipse;
pub use rectangle::Rectangle;
pub use triangle::Triangle;

use kurbo::{BezPath, Point, Rect, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum shape dimension in world units.
///
/// Every committed mutation (resize, draw) keeps width and height at or
/// above this floor; drags that would end below it are discarded instead.
pub const MIN_SHAPE_SIZE: f64 = 10.0;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Style properties for shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Fill color.
    pub fill_color: SerializableColor,
    /// Stroke color.
    pub stroke_color: SerializableColor,
    /// Stroke width in world units.
    pub stroke_width: f64,
    /// Overall opacity (0.0 = fully transparent, 1.0 = fully opaque).
    pub opacity: f64,
}

impl ShapeStyle {
    /// Get the fill color as a peniko Color.
    pub fn fill(&self) -> Color {
        self.fill_color.into()
    }

    /// Get the stroke color as a peniko Color.
    pub fn stroke(&self) -> Color {
        self.stroke_color.into()
    }

    /// Get the fill color with opacity applied.
    pub fn fill_with_opacity(&self) -> Color {
        apply_opacity(self.fill_color, self.opacity)
    }

    /// Get the stroke color with opacity applied.
    pub fn stroke_with_opacity(&self) -> Color {
        apply_opacity(self.stroke_color, self.opacity)
    }
}

fn apply_opacity(color: SerializableColor, opacity: f64) -> Color {
    let alpha = (color.a as f64 * opacity.clamp(0.0, 1.0)) as u8;
    Color::from_rgba8(color.r, color.g, color.b, alpha)
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill_color: SerializableColor::white(),
            stroke_color: SerializableColor::black(),
            stroke_width: 2.0,
            opacity: 1.0,
        }
    }
}

/// Partial style update; `None` fields leave the target untouched.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StylePatch {
    pub fill_color: Option<SerializableColor>,
    pub stroke_color: Option<SerializableColor>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
}

impl StylePatch {
    /// Apply the populated fields to `style`. Out-of-range numeric values
    /// are silently corrected, never rejected.
    pub fn apply_to(&self, style: &mut ShapeStyle) {
        if let Some(fill) = self.fill_color {
            style.fill_color = fill;
        }
        if let Some(stroke) = self.stroke_color {
            style.stroke_color = stroke;
        }
        if let Some(width) = self.stroke_width {
            style.stroke_width = width.max(0.0);
        }
        if let Some(opacity) = self.opacity {
            style.opacity = opacity.clamp(0.0, 1.0);
        }
    }
}

/// Available shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Ellipse,
    Triangle,
}

/// Enum wrapper for all shape variants.
///
/// The kinds differ only in their containment predicate and render path;
/// bounds, handles, move, and resize all go through the shared accessors
/// below.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Triangle(Triangle),
}

impl Shape {
    /// Create a shape of the given kind filling `rect`.
    pub fn from_rect(kind: ShapeKind, rect: Rect, style: ShapeStyle) -> Self {
        match kind {
            ShapeKind::Rectangle => Shape::Rectangle(Rectangle::from_rect(rect, style)),
            ShapeKind::Ellipse => Shape::Ellipse(Ellipse::from_rect(rect, style)),
            ShapeKind::Triangle => Shape::Triangle(Triangle::from_rect(rect, style)),
        }
    }

    /// Get the unique identifier.
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Rectangle(s) => s.id,
            Shape::Ellipse(s) => s.id,
            Shape::Triangle(s) => s.id,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::Triangle(_) => ShapeKind::Triangle,
        }
    }

    /// Get the bounding box in world coordinates.
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rectangle(s) => s.as_rect(),
            Shape::Ellipse(s) => s.bounds(),
            Shape::Triangle(s) => s.as_rect(),
        }
    }

    /// Replace the bounding box, reshaping the geometry to fill it.
    pub fn set_bounds(&mut self, rect: Rect) {
        match self {
            Shape::Rectangle(s) => s.set_bounds(rect),
            Shape::Ellipse(s) => s.set_bounds(rect),
            Shape::Triangle(s) => s.set_bounds(rect),
        }
    }

    /// Move the shape by a world-space delta.
    pub fn translate(&mut self, delta: Vec2) {
        let bounds = self.bounds();
        self.set_bounds(bounds + delta);
    }

    /// Check if a point (in world coordinates) is inside this shape.
    pub fn contains_point(&self, point: Point) -> bool {
        match self {
            Shape::Rectangle(s) => s.contains_point(point),
            Shape::Ellipse(s) => s.contains_point(point),
            Shape::Triangle(s) => s.contains_point(point),
        }
    }

    /// Get the path representation for rendering.
    pub fn to_path(&self) -> BezPath {
        match self {
            Shape::Rectangle(s) => s.to_path(),
            Shape::Ellipse(s) => s.to_path(),
            Shape::Triangle(s) => s.to_path(),
        }
    }

    /// Get the style.
    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Rectangle(s) => &s.style,
            Shape::Ellipse(s) => &s.style,
            Shape::Triangle(s) => &s.style,
        }
    }

    /// Get mutable style.
    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        match self {
            Shape::Rectangle(s) => &mut s.style,
            Shape::Ellipse(s) => &mut s.style,
            Shape::Triangle(s) => &mut s.style,
        }
    }

    /// Whether this shape is the current selection.
    pub fn selected(&self) -> bool {
        match self {
            Shape::Rectangle(s) => s.selected,
            Shape::Ellipse(s) => s.selected,
            Shape::Triangle(s) => s.selected,
        }
    }

    pub fn set_selected(&mut self, selected: bool) {
        match self {
            Shape::Rectangle(s) => s.selected = selected,
            Shape::Ellipse(s) => s.selected = selected,
            Shape::Triangle(s) => s.selected = selected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rect_kinds() {
        let rect = Rect::new(10.0, 20.0, 110.0, 70.0);
        for kind in [ShapeKind::Rectangle, ShapeKind::Ellipse, ShapeKind::Triangle] {
            let shape = Shape::from_rect(kind, rect, ShapeStyle::default());
            assert_eq!(shape.kind(), kind);
            let bounds = shape.bounds();
            assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
            assert!((bounds.y1 - 70.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_translate_moves_bounds() {
        let mut shape = Shape::from_rect(
            ShapeKind::Ellipse,
            Rect::new(0.0, 0.0, 100.0, 50.0),
            ShapeStyle::default(),
        );
        shape.translate(Vec2::new(15.0, -5.0));
        let bounds = shape.bounds();
        assert!((bounds.x0 - 15.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - -5.0).abs() < f64::EPSILON);
        assert!((bounds.width() - 100.0).abs() < f64::EPSILON);
        assert!((bounds.height() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_style_patch_partial_update() {
        let mut style = ShapeStyle::default();
        let patch = StylePatch {
            stroke_width: Some(4.0),
            opacity: Some(2.5),
            ..StylePatch::default()
        };
        patch.apply_to(&mut style);
        assert!((style.stroke_width - 4.0).abs() < f64::EPSILON);
        assert!((style.opacity - 1.0).abs() < f64::EPSILON);
        assert_eq!(style.fill_color, SerializableColor::white());
    }

    #[test]
    fn test_opacity_applied_to_colors() {
        let style = ShapeStyle {
            opacity: 0.5,
            ..ShapeStyle::default()
        };
        let stroke = style.stroke_with_opacity().to_rgba8();
        assert_eq!(stroke.a, 127);
        let fill = style.fill_with_opacity().to_rgba8();
        assert_eq!(fill.a, 127);
    }

    #[test]
    fn test_selection_flag_roundtrip() {
        let mut shape = Shape::from_rect(
            ShapeKind::Triangle,
            Rect::new(0.0, 0.0, 50.0, 50.0),
            ShapeStyle::default(),
        );
        assert!(!shape.selected());
        shape.set_selected(true);
        assert!(shape.selected());
    }
}
