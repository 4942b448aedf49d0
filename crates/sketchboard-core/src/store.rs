//! Shape collection with z-ordering and selection.

use crate::shapes::{Shape, ShapeId};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ordered shape collection.
///
/// Z-order is insertion/reorder order, back to front: later entries render
/// on top and win hit-tests. At most one shape is selected at a time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShapeStore {
    /// All shapes, keyed by ID.
    shapes: HashMap<ShapeId, Shape>,
    /// Z-order of shapes (back to front).
    z_order: Vec<ShapeId>,
}

impl ShapeStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a shape at the top of the z-order, returning its id.
    pub fn add(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id();
        self.z_order.push(id);
        self.shapes.insert(id, shape);
        id
    }

    /// Remove a shape. Unknown ids are a silent no-op.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        self.z_order.retain(|&shape_id| shape_id != id);
        self.shapes.remove(&id)
    }

    /// Remove all shapes.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.z_order.clear();
    }

    /// Get a shape by ID.
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Get a mutable reference to a shape by ID.
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(&id)
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Shapes in z-order (back to front), the order the renderer draws them.
    pub fn iter_ordered(&self) -> impl Iterator<Item = &Shape> {
        self.z_order.iter().filter_map(|id| self.shapes.get(id))
    }

    /// Topmost shape containing the point, if any.
    ///
    /// Scans front to back; the first match wins.
    pub fn shape_at(&self, point: Point) -> Option<ShapeId> {
        self.z_order
            .iter()
            .rev()
            .copied()
            .find(|id| {
                self.shapes
                    .get(id)
                    .is_some_and(|shape| shape.contains_point(point))
            })
    }

    /// Bring a shape to the front (topmost). Unknown ids are a no-op.
    pub fn bring_to_front(&mut self, id: ShapeId) {
        if self.shapes.contains_key(&id) {
            self.z_order.retain(|&shape_id| shape_id != id);
            self.z_order.push(id);
        }
    }

    /// Send a shape to the back (bottommost). Unknown ids are a no-op.
    pub fn send_to_back(&mut self, id: ShapeId) {
        if self.shapes.contains_key(&id) {
            self.z_order.retain(|&shape_id| shape_id != id);
            self.z_order.insert(0, id);
        }
    }

    /// Move a shape one layer forward (towards the front).
    /// Returns true if the shape moved, false if already at the front.
    pub fn bring_forward(&mut self, id: ShapeId) -> bool {
        if let Some(pos) = self.z_order.iter().position(|&shape_id| shape_id == id) {
            if pos < self.z_order.len() - 1 {
                self.z_order.swap(pos, pos + 1);
                return true;
            }
        }
        false
    }

    /// Move a shape one layer backward (towards the back).
    /// Returns true if the shape moved, false if already at the back.
    pub fn send_backward(&mut self, id: ShapeId) -> bool {
        if let Some(pos) = self.z_order.iter().position(|&shape_id| shape_id == id) {
            if pos > 0 {
                self.z_order.swap(pos, pos - 1);
                return true;
            }
        }
        false
    }

    /// Select a shape, clearing any previous selection.
    /// Returns false (leaving the selection untouched) for unknown ids.
    pub fn select(&mut self, id: ShapeId) -> bool {
        if !self.shapes.contains_key(&id) {
            return false;
        }
        self.clear_selection();
        if let Some(shape) = self.shapes.get_mut(&id) {
            shape.set_selected(true);
        }
        true
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) {
        for shape in self.shapes.values_mut() {
            shape.set_selected(false);
        }
    }

    /// The selected shape's id, if any.
    pub fn selected_id(&self) -> Option<ShapeId> {
        self.shapes
            .values()
            .find(|shape| shape.selected())
            .map(|shape| shape.id())
    }

    /// The selected shape, if any.
    pub fn selected(&self) -> Option<&Shape> {
        self.shapes.values().find(|shape| shape.selected())
    }

    /// Mutable reference to the selected shape, if any.
    pub fn selected_mut(&mut self) -> Option<&mut Shape> {
        self.shapes.values_mut().find(|shape| shape.selected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{ShapeKind, ShapeStyle};
    use kurbo::Rect;

    fn rect_shape(x0: f64, y0: f64, x1: f64, y1: f64) -> Shape {
        Shape::from_rect(
            ShapeKind::Rectangle,
            Rect::new(x0, y0, x1, y1),
            ShapeStyle::default(),
        )
    }

    #[test]
    fn test_add_remove() {
        let mut store = ShapeStore::new();
        let id = store.add(rect_shape(0.0, 0.0, 100.0, 100.0));
        assert_eq!(store.len(), 1);
        assert!(store.get(id).is_some());

        assert!(store.remove(id).is_some());
        assert!(store.is_empty());
        // Removing again is a no-op.
        assert!(store.remove(id).is_none());
    }

    #[test]
    fn test_z_order_reordering() {
        let mut store = ShapeStore::new();
        let id1 = store.add(rect_shape(0.0, 0.0, 100.0, 100.0));
        let id2 = store.add(rect_shape(50.0, 50.0, 150.0, 150.0));
        let id3 = store.add(rect_shape(10.0, 10.0, 20.0, 20.0));

        let order: Vec<_> = store.iter_ordered().map(Shape::id).collect();
        assert_eq!(order, vec![id1, id2, id3]);

        store.bring_to_front(id1);
        let order: Vec<_> = store.iter_ordered().map(Shape::id).collect();
        assert_eq!(order, vec![id2, id3, id1]);

        store.send_to_back(id1);
        assert!(!store.send_backward(id1));
        assert!(store.bring_forward(id1));
        let order: Vec<_> = store.iter_ordered().map(Shape::id).collect();
        assert_eq!(order, vec![id2, id1, id3]);
    }

    #[test]
    fn test_hit_test_front_first() {
        let mut store = ShapeStore::new();
        let bottom = store.add(rect_shape(0.0, 0.0, 100.0, 100.0));
        let top = store.add(rect_shape(50.0, 50.0, 150.0, 150.0));

        // Overlap region hits the topmost shape.
        assert_eq!(store.shape_at(Point::new(75.0, 75.0)), Some(top));
        // Region covered only by the bottom shape.
        assert_eq!(store.shape_at(Point::new(25.0, 25.0)), Some(bottom));
        // Empty space.
        assert_eq!(store.shape_at(Point::new(300.0, 300.0)), None);
    }

    #[test]
    fn test_bring_to_front_wins_hit_test() {
        let mut store = ShapeStore::new();
        let bottom = store.add(rect_shape(0.0, 0.0, 100.0, 100.0));
        let _top = store.add(rect_shape(50.0, 50.0, 150.0, 150.0));

        store.bring_to_front(bottom);
        assert_eq!(store.shape_at(Point::new(75.0, 75.0)), Some(bottom));
    }

    #[test]
    fn test_single_selection() {
        let mut store = ShapeStore::new();
        let id1 = store.add(rect_shape(0.0, 0.0, 100.0, 100.0));
        let id2 = store.add(rect_shape(50.0, 50.0, 150.0, 150.0));

        assert!(store.select(id1));
        assert_eq!(store.selected_id(), Some(id1));

        assert!(store.select(id2));
        assert_eq!(store.selected_id(), Some(id2));
        let selected_count = store
            .iter_ordered()
            .filter(|shape| shape.selected())
            .count();
        assert_eq!(selected_count, 1);

        store.clear_selection();
        assert_eq!(store.selected_id(), None);
    }

    #[test]
    fn test_select_unknown_id_keeps_selection() {
        let mut store = ShapeStore::new();
        let id = store.add(rect_shape(0.0, 0.0, 100.0, 100.0));
        store.select(id);

        assert!(!store.select(ShapeId::new_v4()));
        assert_eq!(store.selected_id(), Some(id));
    }

    #[test]
    fn test_remove_selected_clears_selection() {
        let mut store = ShapeStore::new();
        let id = store.add(rect_shape(0.0, 0.0, 100.0, 100.0));
        store.select(id);
        store.remove(id);
        assert_eq!(store.selected_id(), None);
    }
}
