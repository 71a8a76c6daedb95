//! Camera state and the algorithms that place it.
//!
//! Provides the viewer camera with its orthonormal frame and matrices,
//! canonical view presets, bounding-box framing, frustum containment and
//! the transient modifier used to preview interactive edits.

/// Core camera struct and GPU uniform types.
pub mod core;
/// Bounding-box framing.
pub mod fit;
/// View frustum extraction and containment tests.
pub mod frustum;
/// Uncommitted gesture edits.
pub mod modifier;
/// Persistable camera snapshot.
pub mod state;
/// Canonical view presets.
pub mod view_mode;

pub use self::core::{
    Camera, CameraUniform, ProjectionMode, DEFAULT_ORTHO_SCALE,
};
pub use fit::{compute_fit_to_bounds, compute_fit_to_bounds_padded, FitResult};
pub use frustum::Frustum;
pub use modifier::CameraModifier;
pub use state::CameraState;
pub use view_mode::ViewMode;
