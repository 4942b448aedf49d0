//! Board facade.
//!
//! Owns the camera, shape store, and gesture machine behind one
//! event-driven entry point plus the discrete command surface the host UI
//! calls between events. The renderer only reads from here.

use crate::camera::Camera;
use crate::grid::{self, GridSpacing};
use crate::input::InputEvent;
use crate::interaction::{Effect, Interaction, Mode};
use crate::shapes::{ShapeKind, StylePatch};
use crate::store::ShapeStore;
use kurbo::{Affine, Rect, Size};
use thiserror::Error;

/// Board errors.
///
/// Steady-state interaction never fails; the one fallible point is
/// construction against a degenerate drawing surface, which the host
/// reports once and does not retry.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("invalid drawing surface size: {width}x{height}")]
    InvalidSurface { width: f64, height: f64 },
}

/// The drawing surface: shape store, camera, and gesture state.
#[derive(Debug, Clone)]
pub struct Board {
    /// Shape collection.
    pub store: ShapeStore,
    /// View transform.
    pub camera: Camera,
    /// Gesture state machine, including the persistent mode and draw style.
    pub interaction: Interaction,
    /// Drawing surface size in pixels.
    viewport_size: Size,
}

impl Board {
    /// Create a board for a drawing surface of the given pixel size.
    pub fn new(width: f64, height: f64) -> Result<Self, BoardError> {
        if !surface_size_valid(width, height) {
            return Err(BoardError::InvalidSurface { width, height });
        }
        Ok(Self {
            store: ShapeStore::new(),
            camera: Camera::new(),
            interaction: Interaction::new(),
            viewport_size: Size::new(width, height),
        })
    }

    /// Update the cached surface size after a host-side resize.
    /// Degenerate sizes are ignored and the previous size kept.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        if surface_size_valid(width, height) {
            self.viewport_size = Size::new(width, height);
        }
    }

    /// Route one normalized input event through the gesture machine.
    pub fn handle_event(&mut self, event: InputEvent) -> Vec<Effect> {
        self.interaction
            .handle(event, &mut self.store, &mut self.camera)
    }

    /// Switch the persistent mode, cancelling any gesture in progress.
    pub fn set_mode(&mut self, mode: Mode) -> Vec<Effect> {
        self.interaction.cancel(&mut self.store);
        if self.interaction.mode == mode {
            return Vec::new();
        }
        self.interaction.mode = mode;
        vec![Effect::ModeChanged(mode)]
    }

    /// Choose the kind of shape drawn by subsequent draw gestures.
    pub fn set_shape_kind(&mut self, kind: ShapeKind) {
        self.interaction.shape_kind = kind;
    }

    /// Update the style applied to newly drawn shapes.
    pub fn set_style(&mut self, patch: StylePatch) {
        patch.apply_to(&mut self.interaction.style);
    }

    /// Apply a partial style to the selected shape; no-op without one.
    pub fn apply_style_to_selected(&mut self, patch: StylePatch) {
        if let Some(shape) = self.store.selected_mut() {
            patch.apply_to(shape.style_mut());
        }
    }

    /// Return the view to the default origin at 100% scale.
    pub fn reset_view(&mut self) -> Vec<Effect> {
        self.camera.reset();
        vec![Effect::TransformChanged(self.camera.clone())]
    }

    /// Delete the selected shape; no-op without one.
    pub fn delete_selected(&mut self) -> Vec<Effect> {
        match self.store.selected_id() {
            Some(id) => {
                self.store.remove(id);
                vec![Effect::SelectionChanged(None)]
            }
            None => Vec::new(),
        }
    }

    // Render boundary: everything below is read-only for the host renderer.

    /// World-to-screen transform for the current frame.
    pub fn transform(&self) -> Affine {
        self.camera.transform()
    }

    /// World-space rectangle currently visible.
    pub fn viewport_bounds(&self) -> Rect {
        self.camera.viewport_bounds(self.viewport_size)
    }

    /// Drawing surface size in pixels.
    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    /// Grid spacing for the current scale.
    pub fn grid_spacing(&self) -> GridSpacing {
        grid::grid_spacing(self.camera.scale)
    }

    /// World distance between labeled axis ticks for the current scale.
    pub fn tick_spacing(&self) -> f64 {
        grid::tick_spacing(self.camera.scale)
    }
}

fn surface_size_valid(width: f64, height: f64) -> bool {
    width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}
