//! Sketchboard Core Library
//!
//! Platform-agnostic core for the Sketchboard infinite drawing surface:
//! viewport transform, shape model and hit-testing, the pointer gesture
//! state machine, and grid/tick metrics. Rendering and event wiring live
//! in the host layer; this crate is fully headless and event-driven.

pub mod board;
pub mod camera;
pub mod grid;
pub mod input;
pub mod interaction;
pub mod selection;
pub mod shapes;
pub mod store;

pub use board::{Board, BoardError};
pub use camera::{Camera, pinch_zoom_factor};
pub use grid::GridSpacing;
pub use input::{InputEvent, Key, MouseButton};
pub use interaction::{Effect, Interaction, InteractionState, Mode};
pub use selection::{Corner, Edge, Handle, HandleKind};
pub use shapes::{MIN_SHAPE_SIZE, SerializableColor, Shape, ShapeId, ShapeKind, ShapeStyle, StylePatch};
pub use store::ShapeStore;
