//! Read-mostly snapshot of pointer gestures, one record per button.

use std::ops::{BitOr, BitOrAssign};

use glam::Vec2;

use super::event::MouseButton;

/// Phase of a button's gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonAction {
    /// Button idle, or its last gesture was consumed.
    #[default]
    None,
    /// Pressed this sample, no movement yet.
    Press,
    /// Held and moved.
    Drag,
    /// Released this sample; waiting to be consumed.
    Release,
}

/// Keyboard modifier bitset held during a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(u8);

impl Modifiers {
    /// No modifier.
    pub const NONE: Self = Self(0);
    /// Shift key.
    pub const SHIFT: Self = Self(1);
    /// Control key (command on macOS).
    pub const CTRL: Self = Self(1 << 1);
    /// Alt key (option on macOS).
    pub const ALT: Self = Self(1 << 2);
    /// Every modifier bit.
    pub const ALL: Self = Self(Self::SHIFT.0 | Self::CTRL.0 | Self::ALT.0);

    /// Whether all bits of `other` are set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no bit is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Bits of `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

impl BitOr for Modifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Axis lock applied to a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragConstraint {
    /// Free drag.
    #[default]
    None,
    /// Only the horizontal component counts.
    Horizontal,
    /// Only the vertical component counts.
    Vertical,
}

/// Gesture record for one button.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ButtonState {
    /// Current phase.
    pub action: ButtonAction,
    /// Drag in pixels accumulated since the press (x right, y down).
    pub drag: Vec2,
    /// Modifiers held when the button went down.
    pub modifiers: Modifiers,
    /// Axis lock for this drag.
    pub drag_constraint: DragConstraint,
}

impl ButtonState {
    /// Drag with the constrained axis zeroed.
    #[must_use]
    pub fn constrained_drag(&self) -> Vec2 {
        match self.drag_constraint {
            DragConstraint::None => self.drag,
            DragConstraint::Horizontal => Vec2::new(self.drag.x, 0.0),
            DragConstraint::Vertical => Vec2::new(0.0, self.drag.y),
        }
    }

    /// Whether the button is in the middle of a gesture (pressed or
    /// dragging, not yet released).
    #[must_use]
    pub fn in_progress(&self) -> bool {
        matches!(self.action, ButtonAction::Press | ButtonAction::Drag)
    }
}

/// Gesture snapshot for all camera buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureInput {
    buttons: [ButtonState; 3],
}

impl GestureInput {
    /// Record for `button`.
    #[must_use]
    pub fn button(&self, button: MouseButton) -> &ButtonState {
        &self.buttons[button.index()]
    }

    /// Mutable record for `button`.
    pub fn button_mut(&mut self, button: MouseButton) -> &mut ButtonState {
        &mut self.buttons[button.index()]
    }

    /// Whether `button` has an action and its modifiers are exactly
    /// `required`, ignoring any bits in `optional`.
    #[must_use]
    pub fn has_button_action(
        &self,
        button: MouseButton,
        required: Modifiers,
        optional: Modifiers,
    ) -> bool {
        let state = self.button(button);
        state.action != ButtonAction::None
            && state.modifiers.difference(optional)
                == required.difference(optional)
    }

    /// Consume the gesture on `button` so its release is not processed
    /// again.
    pub fn reset(&mut self, button: MouseButton) {
        *self.button_mut(button) = ButtonState::default();
    }

    /// Whether any button has an unconsumed action.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.buttons.iter().all(|b| b.action == ButtonAction::None)
    }
}
