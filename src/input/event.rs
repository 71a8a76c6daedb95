use super::gesture::Modifiers;

/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// accumulates them into a [`GestureInput`](super::GestureInput) snapshot.
///
/// # Example
///
/// ```ignore
/// processor.handle_event(InputEvent::CursorMoved { x: 100.0, y: 200.0 });
/// let gesture = processor.gesture_mut();
/// let edited =
///     manipulate_camera(viewport, gesture, &mut camera, &mut modifier);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Modifier key state changed.
    ModifiersChanged(Modifiers),
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Middle mouse button (wheel click).
    Middle,
    /// Secondary (right) mouse button.
    Right,
}

impl MouseButton {
    /// Every button, in slot order.
    pub const ALL: [Self; 3] = [Self::Left, Self::Middle, Self::Right];

    /// Slot of this button in per-button arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Middle => 1,
            Self::Right => 2,
        }
    }
}

#[cfg(feature = "winit")]
impl MouseButton {
    /// Convert a winit button; back/forward/other buttons are not camera
    /// buttons.
    #[must_use]
    pub const fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        match button {
            winit::event::MouseButton::Left => Some(Self::Left),
            winit::event::MouseButton::Middle => Some(Self::Middle),
            winit::event::MouseButton::Right => Some(Self::Right),
            _ => None,
        }
    }
}

#[cfg(feature = "winit")]
impl From<winit::keyboard::ModifiersState> for Modifiers {
    fn from(state: winit::keyboard::ModifiersState) -> Self {
        let mut modifiers = Self::NONE;
        if state.shift_key() {
            modifiers |= Self::SHIFT;
        }
        // Command on macOS plays the role of ctrl for camera gestures.
        if state.control_key() || state.super_key() {
            modifiers |= Self::CTRL;
        }
        if state.alt_key() {
            modifiers |= Self::ALT;
        }
        modifiers
    }
}

#[cfg(feature = "winit")]
impl InputEvent {
    /// Translate the camera-relevant subset of winit window events.
    #[must_use]
    pub fn from_winit(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{ElementState, WindowEvent};

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(Self::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                Some(Self::MouseButton {
                    button: MouseButton::from_winit(*button)?,
                    pressed: *state == ElementState::Pressed,
                })
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                Some(Self::ModifiersChanged(modifiers.state().into()))
            }
            _ => None,
        }
    }
}
