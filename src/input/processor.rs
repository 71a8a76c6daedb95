//! Converts raw platform events into a gesture snapshot.
//!
//! The `InputProcessor` owns all transient pointer state (cursor position,
//! press origins, modifier keys) and writes per-button gesture records
//! that the camera manipulator reads and consumes.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::gesture::{ButtonAction, DragConstraint, GestureInput, Modifiers};

/// Cursor travel in pixels before a shift-drag picks its locked axis.
const AXIS_LOCK_THRESHOLD: f32 = 4.0;

/// Accumulates [`InputEvent`]s into a [`GestureInput`].
///
/// A press records the cursor position and the modifiers held at that
/// moment; subsequent cursor motion turns the button into a drag whose
/// vector is measured from the press point. Holding shift at press time
/// locks the drag to whichever axis the cursor first moves along.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// processor.handle_event(event);
/// let gesture = processor.gesture_mut();
/// if manipulate_camera(viewport, gesture, &mut camera, &mut modifier) {
///     request_redraw();
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    gesture: GestureInput,
    cursor: Vec2,
    /// Cursor position at press, per button; `None` while released.
    press_origin: [Option<Vec2>; 3],
    /// Whether the next shift-drag on a button still has to pick an axis.
    pending_axis_lock: [bool; 3],
    modifiers: Modifiers,
}

impl InputProcessor {
    /// Create a processor with no buttons held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Modifiers currently held.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Read-only gesture snapshot.
    #[must_use]
    pub fn gesture(&self) -> &GestureInput {
        &self.gesture
    }

    /// Gesture snapshot for the manipulator, which consumes releases.
    pub fn gesture_mut(&mut self) -> &mut GestureInput {
        &mut self.gesture
    }

    /// Process one raw input event.
    pub fn handle_event(&mut self, event: InputEvent) {
        self.drop_stale_releases();
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(Vec2::new(x, y));
            }
            InputEvent::MouseButton { button, pressed } => {
                if pressed {
                    self.handle_press(button);
                } else {
                    self.handle_release(button);
                }
            }
            InputEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers;
            }
        }
    }

    /// A release nobody consumed by the next event is forgotten so it
    /// does not linger into the next gesture.
    fn drop_stale_releases(&mut self) {
        for button in MouseButton::ALL {
            if self.gesture.button(button).action == ButtonAction::Release {
                self.gesture.reset(button);
            }
        }
    }

    fn handle_press(&mut self, button: MouseButton) {
        let slot = button.index();
        self.press_origin[slot] = Some(self.cursor);
        self.pending_axis_lock[slot] =
            self.modifiers.contains(Modifiers::SHIFT);

        let state = self.gesture.button_mut(button);
        state.action = ButtonAction::Press;
        state.drag = Vec2::ZERO;
        state.modifiers = self.modifiers;
        state.drag_constraint = DragConstraint::None;
    }

    fn handle_release(&mut self, button: MouseButton) {
        let slot = button.index();
        // Release without a tracked press (e.g. pressed outside the window).
        if self.press_origin[slot].take().is_none() {
            return;
        }
        self.pending_axis_lock[slot] = false;
        self.gesture.button_mut(button).action = ButtonAction::Release;
    }

    fn handle_cursor_moved(&mut self, position: Vec2) {
        self.cursor = position;
        for button in MouseButton::ALL {
            let slot = button.index();
            let Some(origin) = self.press_origin[slot] else {
                continue;
            };
            let drag = position - origin;

            let state = self.gesture.button_mut(button);
            state.action = ButtonAction::Drag;
            state.drag = drag;

            if self.pending_axis_lock[slot]
                && drag.abs().max_element() >= AXIS_LOCK_THRESHOLD
            {
                state.drag_constraint = if drag.x.abs() >= drag.y.abs() {
                    DragConstraint::Horizontal
                } else {
                    DragConstraint::Vertical
                };
                self.pending_axis_lock[slot] = false;
            }
        }
    }
}
