//! Gesture state machine.
//!
//! Routes normalized input events into shape and camera mutations, given
//! the persistent mode and the hit-test results. Exactly one gesture is
//! active at a time; gestures are delimited by pointer-down and
//! pointer-up/leave. All positions arriving here are screen pixels; the
//! machine converts to world coordinates where the mutation needs them.

use crate::camera::{Camera, pinch_zoom_factor};
use crate::input::{InputEvent, Key, MouseButton};
use crate::selection::{HANDLE_HIT_TOLERANCE, HandleKind, hit_test_handles, resize_by_handle};
use crate::shapes::{MIN_SHAPE_SIZE, Shape, ShapeId, ShapeKind, ShapeStyle};
use crate::store::ShapeStore;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Exponent rate mapping scroll deltas to zoom factors.
const SCROLL_ZOOM_RATE: f64 = 0.002;

/// Persistent gesture family selected by the user.
///
/// Independent of the active gesture; governs what a pointer-down
/// initiates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Select,
    Pan,
    Draw,
}

/// Active gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Moving the selected shape under the pointer.
    Dragging {
        shape_id: ShapeId,
        last_world: Point,
    },
    /// Dragging a resize handle of the selected shape.
    Resizing {
        shape_id: ShapeId,
        handle: HandleKind,
        last_world: Point,
    },
    /// Rubber-banding a new shape from its anchor corner.
    Drawing {
        shape_id: ShapeId,
        anchor_world: Point,
        last_world: Point,
    },
    /// Moving the viewport with raw screen deltas.
    Panning {
        last_screen: Point,
    },
}

/// State changes reported to the host layer, each at most once per event.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// The view transform changed (zoom or pan).
    TransformChanged(Camera),
    /// The pointer moved; position in world coordinates.
    PointerMoved(Point),
    /// The persistent mode changed.
    ModeChanged(Mode),
    /// The selection changed.
    SelectionChanged(Option<ShapeId>),
}

/// The gesture state machine.
///
/// Owns the persistent mode and draw settings plus the active gesture;
/// mutates the store and camera it is handed. Operating on a missing
/// selection or a vanished shape id is always a silent no-op.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    /// Active gesture.
    pub state: InteractionState,
    /// Persistent mode.
    pub mode: Mode,
    /// Kind of shape created by draw gestures.
    pub shape_kind: ShapeKind,
    /// Style applied to newly drawn shapes.
    pub style: ShapeStyle,
}

impl Interaction {
    /// Create a new machine in select mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self.state, InteractionState::Idle)
    }

    /// Route one event. Returns the effects the host should dispatch.
    pub fn handle(
        &mut self,
        event: InputEvent,
        store: &mut ShapeStore,
        camera: &mut Camera,
    ) -> Vec<Effect> {
        match event {
            InputEvent::PointerDown { position, button } => {
                self.on_pointer_down(position, button, store, camera)
            }
            InputEvent::PointerMove { position } => self.on_pointer_move(position, store, camera),
            InputEvent::PointerUp { position, .. } => {
                self.on_pointer_up(Some(position), store, camera)
            }
            InputEvent::PointerLeave => self.on_pointer_up(None, store, camera),
            InputEvent::Scroll { position, delta } => {
                let factor = (-delta.y * SCROLL_ZOOM_RATE).exp();
                Self::zoom(position, factor, camera)
            }
            InputEvent::Pinch {
                center,
                previous_distance,
                distance,
            } => match pinch_zoom_factor(previous_distance, distance) {
                Some(factor) => Self::zoom(center, factor, camera),
                None => Vec::new(),
            },
            InputEvent::KeyDown(key) => self.on_key_down(key, store),
        }
    }

    /// Abort any gesture in progress. A provisional drawing is removed.
    pub fn cancel(&mut self, store: &mut ShapeStore) {
        if let InteractionState::Drawing { shape_id, .. } = self.state {
            store.remove(shape_id);
            log::debug!("draw gesture cancelled");
        }
        self.state = InteractionState::Idle;
    }

    fn zoom(anchor: Point, factor: f64, camera: &mut Camera) -> Vec<Effect> {
        let before = camera.scale;
        camera.zoom_at(anchor, factor);
        if camera.scale == before {
            Vec::new()
        } else {
            vec![Effect::TransformChanged(camera.clone())]
        }
    }

    fn on_pointer_down(
        &mut self,
        position: Point,
        button: MouseButton,
        store: &mut ShapeStore,
        camera: &Camera,
    ) -> Vec<Effect> {
        match button {
            // Middle button pans in any mode.
            MouseButton::Middle => {
                self.state = InteractionState::Panning {
                    last_screen: position,
                };
                return Vec::new();
            }
            MouseButton::Right => return Vec::new(),
            MouseButton::Left => {}
        }

        let mut effects = Vec::new();
        let world = camera.screen_to_world(position);
        match self.mode {
            Mode::Select => {
                // Handles of the selected shape take priority over shape
                // bodies.
                let tolerance = HANDLE_HIT_TOLERANCE / camera.scale;
                if let Some(selected) = store.selected() {
                    if let Some(handle) = hit_test_handles(selected, world, tolerance) {
                        self.state = InteractionState::Resizing {
                            shape_id: selected.id(),
                            handle,
                            last_world: world,
                        };
                        return effects;
                    }
                }

                if let Some(id) = store.shape_at(world) {
                    let previous = store.selected_id();
                    store.select(id);
                    if previous != Some(id) {
                        effects.push(Effect::SelectionChanged(Some(id)));
                    }
                    self.state = InteractionState::Dragging {
                        shape_id: id,
                        last_world: world,
                    };
                } else {
                    if store.selected_id().is_some() {
                        store.clear_selection();
                        effects.push(Effect::SelectionChanged(None));
                    }
                    self.state = InteractionState::Panning {
                        last_screen: position,
                    };
                }
            }
            Mode::Pan => {
                self.state = InteractionState::Panning {
                    last_screen: position,
                };
            }
            Mode::Draw => {
                // Start at minimal size; the move handler grows it.
                let seed = Rect::new(world.x, world.y, world.x + 1.0, world.y + 1.0);
                let id = store.add(Shape::from_rect(self.shape_kind, seed, self.style.clone()));
                log::trace!("draw gesture started for {:?}", self.shape_kind);
                self.state = InteractionState::Drawing {
                    shape_id: id,
                    anchor_world: world,
                    last_world: world,
                };
            }
        }
        effects
    }

    fn on_pointer_move(
        &mut self,
        position: Point,
        store: &mut ShapeStore,
        camera: &mut Camera,
    ) -> Vec<Effect> {
        let world = camera.screen_to_world(position);
        let mut effects = vec![Effect::PointerMoved(world)];

        match &mut self.state {
            InteractionState::Idle => {}
            InteractionState::Dragging {
                shape_id,
                last_world,
            } => {
                let delta = world - *last_world;
                if let Some(shape) = store.get_mut(*shape_id) {
                    shape.translate(delta);
                }
                *last_world = world;
            }
            InteractionState::Resizing {
                shape_id,
                handle,
                last_world,
            } => {
                let delta = world - *last_world;
                if let Some(shape) = store.get_mut(*shape_id) {
                    resize_by_handle(shape, *handle, delta);
                }
                *last_world = world;
            }
            InteractionState::Drawing {
                shape_id,
                anchor_world,
                last_world,
            } => {
                if let Some(shape) = store.get_mut(*shape_id) {
                    shape.set_bounds(drawing_bounds(*anchor_world, world));
                }
                *last_world = world;
            }
            InteractionState::Panning { last_screen } => {
                // Raw screen delta: panning speed is zoom-independent.
                let delta = position - *last_screen;
                camera.pan_by(delta);
                *last_screen = position;
                effects.push(Effect::TransformChanged(camera.clone()));
            }
        }
        effects
    }

    fn on_pointer_up(
        &mut self,
        position: Option<Point>,
        store: &mut ShapeStore,
        camera: &Camera,
    ) -> Vec<Effect> {
        let mut effects = Vec::new();

        if let InteractionState::Drawing {
            shape_id,
            anchor_world,
            last_world,
        } = self.state
        {
            // Pointer-leave carries no position; finish at the last one seen.
            let final_world = position.map_or(last_world, |p| camera.screen_to_world(p));
            let raw = Rect::from_points(anchor_world, final_world);
            if let Some(shape) = store.get_mut(shape_id) {
                shape.set_bounds(raw);
            }

            if raw.width() < MIN_SHAPE_SIZE || raw.height() < MIN_SHAPE_SIZE {
                // An undersized drag is a click, not a shape.
                store.remove(shape_id);
                log::debug!(
                    "draw gesture discarded at {:.1}x{:.1}",
                    raw.width(),
                    raw.height()
                );
            } else if store.select(shape_id) {
                effects.push(Effect::SelectionChanged(Some(shape_id)));
                if self.mode != Mode::Select {
                    self.mode = Mode::Select;
                    effects.push(Effect::ModeChanged(Mode::Select));
                }
                log::debug!("draw gesture committed {shape_id}");
            }
        }

        // Pointer-up/leave always lands in Idle, even without a matching
        // pointer-down.
        self.state = InteractionState::Idle;
        effects
    }

    fn on_key_down(&mut self, key: Key, store: &mut ShapeStore) -> Vec<Effect> {
        let mut effects = Vec::new();
        match key {
            Key::Delete | Key::Backspace => {
                if let Some(id) = store.selected_id() {
                    store.remove(id);
                    effects.push(Effect::SelectionChanged(None));
                    log::debug!("deleted selected shape {id}");
                }
            }
            Key::Escape => {
                if store.selected_id().is_some() {
                    store.clear_selection();
                    effects.push(Effect::SelectionChanged(None));
                    if self.mode != Mode::Select {
                        self.mode = Mode::Select;
                        effects.push(Effect::ModeChanged(Mode::Select));
                    }
                }
            }
        }
        effects
    }
}

/// Live bounds for a draw gesture: the flipped extent between anchor and
/// pointer, with both dimensions floored at the minimum size for feedback.
fn drawing_bounds(anchor: Point, current: Point) -> Rect {
    let x0 = anchor.x.min(current.x);
    let y0 = anchor.y.min(current.y);
    let width = (current.x - anchor.x).abs().max(MIN_SHAPE_SIZE);
    let height = (current.y - anchor.y).abs().max(MIN_SHAPE_SIZE);
    Rect::new(x0, y0, x0 + width, y0 + height)
}
