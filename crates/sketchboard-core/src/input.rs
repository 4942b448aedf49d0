//! Normalized input events.
//!
//! The host layer translates its pointer/keyboard callbacks into these
//! values, decoupling the core from any UI runtime. Event sequences are
//! plain data, so gestures can be recorded, serialized, and replayed in
//! headless tests.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Keys the core reacts to; everything else stays in the host layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Delete,
    Backspace,
    Escape,
}

/// Pointer/keyboard event with canvas-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown {
        position: Point,
        button: MouseButton,
    },
    PointerMove {
        position: Point,
    },
    PointerUp {
        position: Point,
        button: MouseButton,
    },
    /// The pointer left the canvas; ends any gesture like a pointer-up.
    PointerLeave,
    /// Wheel/trackpad scroll; the vertical delta zooms at `position`.
    Scroll {
        position: Point,
        delta: Vec2,
    },
    /// Two-finger pinch; distances are between the touch points in pixels.
    Pinch {
        center: Point,
        previous_distance: f64,
        distance: f64,
    },
    KeyDown(Key),
}
