//! Input handling: event types, the per-button gesture snapshot, and the
//! processor that turns raw window events into gestures.

/// Platform-agnostic input events.
pub mod event;
/// Per-button gesture records read by the camera manipulator.
pub mod gesture;
/// Accumulates raw events into gestures.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use gesture::{
    ButtonAction, ButtonState, DragConstraint, GestureInput, Modifiers,
};
pub use processor::InputProcessor;
