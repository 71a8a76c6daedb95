//! Interactive camera manipulation driven by pointer gestures.
//!
//! [`manipulate_camera`] runs once per input sample. It picks one mode from
//! the gesture snapshot, stages the resulting edit in a
//! [`CameraModifier`] while the button is held, and commits it into the
//! [`Camera`] when the button is released.
//!
//! | Gesture                                  | Mode   |
//! |------------------------------------------|--------|
//! | middle drag, or alt + left drag          | track  |
//! | ctrl + middle drag                       | roll   |
//! | right drag, or ctrl + left drag          | dolly (shift: linear) |
//! | any other left drag                      | tumble |

mod dolly;
mod roll;
mod track;
/// Virtual trackball rotation used by tumble.
pub mod trackball;
mod tumble;

use glam::{Vec2, Vec3};

use crate::camera::{Camera, CameraModifier};
use crate::input::{ButtonAction, GestureInput, Modifiers, MouseButton};
use crate::options::ManipulationOptions;

/// Camera manipulation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Manipulation {
    /// Pan eye and target together in the image plane.
    Track,
    /// Move the eye toward or away from the target.
    Dolly,
    /// Rotate the up vector around the view direction.
    Roll,
    /// Orbit the eye around the target.
    Tumble,
}

/// One dispatch rule: a button whose modifiers equal `required` once the
/// `optional` bits are ignored selects `mode`.
#[derive(Debug, Clone, Copy)]
struct Rule {
    button: MouseButton,
    required: Modifiers,
    optional: Modifiers,
    mode: Manipulation,
}

impl Rule {
    const fn new(
        button: MouseButton,
        required: Modifiers,
        optional: Modifiers,
        mode: Manipulation,
    ) -> Self {
        Self {
            button,
            required,
            optional,
            mode,
        }
    }
}

/// Dispatch table, first match wins. The left-button tumble accepts any
/// modifier combination and must stay last.
const RULES: [Rule; 6] = {
    use Manipulation::{Dolly, Roll, Track, Tumble};
    use MouseButton::{Left, Middle, Right};
    const NONE: Modifiers = Modifiers::NONE;
    [
        Rule::new(Middle, NONE, NONE, Track),
        Rule::new(Left, Modifiers::ALT, NONE, Track),
        Rule::new(Middle, Modifiers::CTRL, NONE, Roll),
        Rule::new(Right, NONE, Modifiers::SHIFT, Dolly),
        Rule::new(Left, Modifiers::CTRL, Modifiers::SHIFT, Dolly),
        Rule::new(Left, NONE, Modifiers::ALL, Tumble),
    ]
};

/// Mode the current gesture selects, with the button driving it.
#[must_use]
pub fn active_manipulation(
    gesture: &GestureInput,
) -> Option<(MouseButton, Manipulation)> {
    RULES
        .iter()
        .find(|rule| {
            gesture.has_button_action(rule.button, rule.required, rule.optional)
        })
        .map(|rule| (rule.button, rule.mode))
}

/// Edit produced by one mode for the current drag, as offsets from the
/// committed camera.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Motion {
    position: Vec3,
    target: Vec3,
    up: Vec3,
    /// Multiplier for the orthographic scale on commit.
    ortho_factor: f32,
}

impl Motion {
    fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            up: Vec3::ZERO,
            ortho_factor: 1.0,
        }
    }

    fn stage(&self, modifier: &mut CameraModifier) {
        modifier.position = self.position;
        modifier.target = self.target;
        modifier.up = self.up;
    }

    fn commit(&self, camera: &mut Camera) {
        camera.ortho_scale *= self.ortho_factor;
        let (from, target, up) = (camera.from(), camera.target(), camera.up());
        camera.look_at(
            from + self.position,
            target + self.target,
            up + self.up,
        );
    }
}

/// [`manipulate_camera_with`] using the default sensitivities.
pub fn manipulate_camera(
    viewport: Vec2,
    gesture: &mut GestureInput,
    camera: &mut Camera,
    modifier: &mut CameraModifier,
) -> bool {
    let options = ManipulationOptions::default();
    manipulate_camera_with(&options, viewport, gesture, camera, modifier)
}

/// Apply the current gesture to the camera.
///
/// While a button is pressed or dragging, the edit is written to
/// `modifier` and `camera` is left alone. On release the edit is committed
/// into `camera`, the button's gesture is consumed and `modifier` is
/// zeroed. Returns whether the camera (or its preview) changed.
///
/// A release always clears `modifier`, including a zero-drag release that
/// leaves `camera` untouched and returns `false`.
///
/// `viewport` is the render target size in pixels. Invalid `options` (see
/// [`ManipulationOptions::validate`]) are logged and the call does
/// nothing.
pub fn manipulate_camera_with(
    options: &ManipulationOptions,
    viewport: Vec2,
    gesture: &mut GestureInput,
    camera: &mut Camera,
    modifier: &mut CameraModifier,
) -> bool {
    let Some((button, mode)) = active_manipulation(gesture) else {
        return false;
    };
    if let Err(e) = options.validate() {
        log::warn!("{mode:?} skipped: {e}");
        return false;
    }
    let state = *gesture.button(button);
    let drag = state.constrained_drag();

    let motion = match mode {
        Manipulation::Track => track::track(drag, camera, viewport),
        Manipulation::Dolly => {
            let linear = state.modifiers.contains(Modifiers::SHIFT);
            dolly::dolly(drag, linear, camera, options)
        }
        Manipulation::Roll => roll::roll(drag, camera, options),
        Manipulation::Tumble => tumble::tumble(drag, camera, options),
    };
    let released = state.action == ButtonAction::Release;

    match motion {
        Some(motion) if released => {
            motion.commit(camera);
            log::debug!(
                "{mode:?} committed: from={} target={} up={}",
                camera.from(),
                camera.target(),
                camera.up()
            );
            gesture.reset(button);
            modifier.clear();
            true
        }
        Some(motion) => {
            motion.stage(modifier);
            true
        }
        None => {
            if released {
                gesture.reset(button);
                modifier.clear();
            }
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ButtonState;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    fn gesture(
        button: MouseButton,
        action: ButtonAction,
        drag: Vec2,
        modifiers: Modifiers,
    ) -> GestureInput {
        let mut gesture = GestureInput::default();
        *gesture.button_mut(button) = ButtonState {
            action,
            drag,
            modifiers,
            ..ButtonState::default()
        };
        gesture
    }

    fn selected(
        button: MouseButton,
        modifiers: Modifiers,
    ) -> Option<Manipulation> {
        let input = gesture(button, ButtonAction::Drag, Vec2::X, modifiers);
        active_manipulation(&input).map(|(_, mode)| mode)
    }

    #[test]
    fn dispatch_precedence() {
        use Manipulation::{Dolly, Roll, Track, Tumble};
        use MouseButton::{Left, Middle, Right};
        let (none, shift) = (Modifiers::NONE, Modifiers::SHIFT);
        let (ctrl, alt) = (Modifiers::CTRL, Modifiers::ALT);

        assert_eq!(selected(Middle, none), Some(Track));
        assert_eq!(selected(Left, alt), Some(Track));
        assert_eq!(selected(Middle, ctrl), Some(Roll));
        assert_eq!(selected(Right, none), Some(Dolly));
        assert_eq!(selected(Right, shift), Some(Dolly));
        assert_eq!(selected(Left, ctrl), Some(Dolly));
        assert_eq!(selected(Left, ctrl | shift), Some(Dolly));
        assert_eq!(selected(Left, none), Some(Tumble));
        assert_eq!(selected(Left, shift), Some(Tumble));
        assert_eq!(selected(Left, alt | ctrl), Some(Tumble));
        assert_eq!(selected(Right, alt), None);
        assert_eq!(selected(Middle, shift), None);
    }

    #[test]
    fn idle_gesture_does_nothing() {
        let mut input = GestureInput::default();
        let mut camera = Camera::default();
        let mut modifier = CameraModifier::default();
        assert!(!manipulate_camera(
            VIEWPORT,
            &mut input,
            &mut camera,
            &mut modifier
        ));
        assert_eq!(camera, Camera::default());
    }

    #[test]
    fn zero_drag_leaves_everything_unchanged() {
        for (button, modifiers) in [
            (MouseButton::Middle, Modifiers::NONE),
            (MouseButton::Middle, Modifiers::CTRL),
            (MouseButton::Right, Modifiers::NONE),
            (MouseButton::Left, Modifiers::NONE),
        ] {
            let mut input =
                gesture(button, ButtonAction::Drag, Vec2::ZERO, modifiers);
            let mut camera = Camera::default();
            let staged = CameraModifier {
                position: Vec3::X,
                ..CameraModifier::default()
            };
            let mut modifier = staged;
            assert!(!manipulate_camera(
                VIEWPORT,
                &mut input,
                &mut camera,
                &mut modifier
            ));
            assert_eq!(camera, Camera::default());
            assert_eq!(modifier, staged);
            assert_eq!(input.button(button).action, ButtonAction::Drag);
        }
    }

    #[test]
    fn zero_drag_release_is_consumed() {
        let mut input = gesture(
            MouseButton::Left,
            ButtonAction::Release,
            Vec2::ZERO,
            Modifiers::NONE,
        );
        let mut camera = Camera::default();
        let mut modifier = CameraModifier {
            up: Vec3::X,
            ..CameraModifier::default()
        };
        assert!(!manipulate_camera(
            VIEWPORT,
            &mut input,
            &mut camera,
            &mut modifier
        ));
        assert!(input.is_idle());
        assert!(modifier.is_zero());
        assert_eq!(camera, Camera::default());
    }

    #[test]
    fn drag_stages_without_touching_camera() {
        let mut input = gesture(
            MouseButton::Left,
            ButtonAction::Drag,
            Vec2::new(40.0, 10.0),
            Modifiers::NONE,
        );
        let mut camera = Camera::default();
        let mut modifier = CameraModifier::default();
        assert!(manipulate_camera(
            VIEWPORT,
            &mut input,
            &mut camera,
            &mut modifier
        ));
        assert_eq!(camera, Camera::default());
        assert!(!modifier.is_zero());

        // abandoning the gesture means discarding the modifier
        let preview = modifier.apply(&camera);
        assert_ne!(preview.from(), camera.from());
        modifier.clear();
        assert_eq!(modifier.apply(&camera), Camera::default());
    }

    #[test]
    fn release_commits_preview_and_consumes() {
        let drag = Vec2::new(-25.0, 60.0);
        let mut camera = Camera::default();
        let mut modifier = CameraModifier::default();

        let mut input = gesture(
            MouseButton::Middle,
            ButtonAction::Drag,
            drag,
            Modifiers::NONE,
        );
        assert!(manipulate_camera(
            VIEWPORT,
            &mut input,
            &mut camera,
            &mut modifier
        ));
        let preview = modifier.apply(&camera);

        input.button_mut(MouseButton::Middle).action = ButtonAction::Release;
        assert!(manipulate_camera(
            VIEWPORT,
            &mut input,
            &mut camera,
            &mut modifier
        ));
        assert!(camera.from().abs_diff_eq(preview.from(), 1e-5));
        assert!(camera.target().abs_diff_eq(preview.target(), 1e-5));
        assert!(modifier.is_zero());
        assert!(input.is_idle());

        // second call sees the consumed release
        let committed = camera.clone();
        assert!(!manipulate_camera(
            VIEWPORT,
            &mut input,
            &mut camera,
            &mut modifier
        ));
        assert_eq!(camera, committed);
    }

    #[test]
    fn shift_right_release_dollies_linearly() {
        let mut input = gesture(
            MouseButton::Right,
            ButtonAction::Release,
            Vec2::new(70.0, 0.0),
            Modifiers::SHIFT,
        );
        let mut camera = Camera::default();
        let scale = camera.ortho_scale;
        let mut modifier = CameraModifier::default();
        assert!(manipulate_camera(
            VIEWPORT,
            &mut input,
            &mut camera,
            &mut modifier
        ));
        // v = (0, 0, 5) scaled by -70 / 700
        let motion = Vec3::new(0.0, 0.0, -0.5);
        let from = Vec3::new(0.0, 0.0, 5.0) + motion;
        assert!(camera.from().abs_diff_eq(from, 1e-5), "{}", camera.from());
        assert!(camera.target().abs_diff_eq(motion, 1e-5));
        assert_eq!(camera.ortho_scale, scale);
        assert!((camera.distance() - 5.0).abs() < 1e-5);
        assert!(modifier.is_zero());
        assert!(input.is_idle());
    }

    #[test]
    fn invalid_options_leave_camera_alone() {
        let options = ManipulationOptions {
            tumble_pixels_per_radian: 0.0,
            ..ManipulationOptions::default()
        };
        let mut input = gesture(
            MouseButton::Left,
            ButtonAction::Release,
            Vec2::new(30.0, 20.0),
            Modifiers::NONE,
        );
        let mut camera = Camera::default();
        let mut modifier = CameraModifier::default();
        assert!(!manipulate_camera_with(
            &options,
            VIEWPORT,
            &mut input,
            &mut camera,
            &mut modifier
        ));
        assert_eq!(camera, Camera::default());
        assert!(modifier.is_zero());
        assert!(camera.from().is_finite());
    }

    #[test]
    fn custom_sensitivity() {
        let options = ManipulationOptions {
            dolly_pixels_per_unit: 70.0,
            ..ManipulationOptions::default()
        };
        let mut input = gesture(
            MouseButton::Right,
            ButtonAction::Release,
            Vec2::new(70.0, 0.0),
            Modifiers::NONE,
        );
        let mut camera = Camera::default();
        let mut modifier = CameraModifier::default();
        assert!(manipulate_camera_with(
            &options,
            VIEWPORT,
            &mut input,
            &mut camera,
            &mut modifier
        ));
        // exp(-1) of distance 5
        assert!((camera.distance() - 5.0 * (-1.0_f32).exp()).abs() < 1e-4);
    }
}
