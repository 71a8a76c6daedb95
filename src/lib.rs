// -- Lint policy ---------------------------------------------------------
// Lint groups and levels live in Cargo.toml; the lints below need the
// thresholds in clippy.toml.

// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]

//! Camera geometry for interactive 3D viewers.
//!
//! camframe keeps a look-at camera with an orthonormal frame, places it on
//! canonical view presets, frames bounding boxes so they exactly fill the
//! view, and turns mouse gestures into track, dolly, roll and tumble
//! edits.
//!
//! # Key entry points
//!
//! - [`Camera`] - eye/target/up camera with view and projection matrices
//! - [`compute_fit_to_bounds`] - tight framing of a [`BoundingBox`]
//! - [`Camera::set_view_mode`] - front/back/side/isometric presets
//! - [`manipulate_camera`] - per-sample gesture handling, staging edits
//!   in a [`CameraModifier`] until the button is released
//! - [`InputProcessor`] - turns window events into a [`GestureInput`]
//! - [`Options`] - tunable defaults with TOML presets
//!
//! # Example
//!
//! ```
//! use camframe::{compute_fit_to_bounds, BoundingBox, Camera};
//! use glam::Vec3;
//!
//! let mut camera = Camera::default();
//! let bbox = BoundingBox::new(Vec3::splat(-1.0), Vec3::splat(1.0));
//! if let Some(fit) = compute_fit_to_bounds(&camera, &bbox) {
//!     camera.apply_fit(&fit);
//! }
//! assert_eq!(camera.target(), Vec3::ZERO);
//! ```

pub mod camera;
pub mod error;
pub mod geometry;
pub mod input;
pub mod manipulate;
pub mod options;

pub use camera::{
    compute_fit_to_bounds, compute_fit_to_bounds_padded, Camera,
    CameraModifier, CameraState, CameraUniform, FitResult, Frustum,
    ProjectionMode, ViewMode,
};
pub use error::CamframeError;
pub use geometry::{BoundingBox, Plane, Ray};
pub use input::{GestureInput, InputEvent, InputProcessor};
pub use manipulate::{
    manipulate_camera, manipulate_camera_with, Manipulation,
};
pub use options::Options;
