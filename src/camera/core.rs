use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::geometry::BoundingBox;
use crate::options::CameraOptions;

/// Default orthographic half-height, restored by view presets.
pub const DEFAULT_ORTHO_SCALE: f32 = 0.5;

/// Projection used to build the camera's projection matrix.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMode {
    /// Pinhole perspective with vertical field of view `fov_v`.
    #[default]
    Perspective,
    /// Parallel projection with half-height `ortho_scale`.
    Orthographic,
}

impl ProjectionMode {
    /// Stable integer id written by persistence layers.
    #[must_use]
    pub const fn persist_id(self) -> u32 {
        match self {
            Self::Perspective => 0,
            Self::Orthographic => 1,
        }
    }

    /// Inverse of [`persist_id`](Self::persist_id).
    #[must_use]
    pub const fn from_persist_id(id: u32) -> Option<Self> {
        match id {
            0 => Some(Self::Perspective),
            1 => Some(Self::Orthographic),
            _ => None,
        }
    }
}

/// Viewer camera: eye position, target and up vector plus projection
/// parameters.
///
/// `from`, `target` and `up` are only reachable through methods so the
/// orthonormal basis `(U, V, N)` is always in sync with them.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    from: Vec3,
    target: Vec3,
    up: Vec3,
    u: Vec3,
    v: Vec3,
    n: Vec3,
    /// Projection mode.
    pub projection: ProjectionMode,
    /// Vertical field of view in degrees.
    pub fov_v: f32,
    /// Orthographic half-height in world units.
    pub ortho_scale: f32,
    /// Render target aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
    scene_bounds: BoundingBox,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&CameraOptions::default())
    }
}

impl Camera {
    /// Camera at `(0, 0, 5)` looking at the origin with +Y up, projection
    /// parameters taken from `options`.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let mut camera = Self {
            from: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            u: Vec3::X,
            v: Vec3::Y,
            n: Vec3::Z,
            projection: options.projection,
            fov_v: options.fov_v,
            ortho_scale: options.ortho_scale,
            aspect: 1.0,
            near: options.znear,
            far: options.zfar,
            scene_bounds: BoundingBox::default(),
        };
        camera.update();
        camera
    }

    /// Eye position.
    #[must_use]
    pub fn from(&self) -> Vec3 {
        self.from
    }

    /// Look-at target.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Up vector as set (not necessarily orthogonal to the view direction).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Right basis vector `U`.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.u
    }

    /// Orthonormalized up basis vector `V`.
    #[must_use]
    pub fn basis_up(&self) -> Vec3 {
        self.v
    }

    /// Basis vector `N`, pointing from the target toward the eye.
    #[must_use]
    pub fn backward(&self) -> Vec3 {
        self.n
    }

    /// Distance from eye to target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.from.distance(self.target)
    }

    /// Scene bounds used by view presets.
    #[must_use]
    pub fn scene_bounds(&self) -> &BoundingBox {
        &self.scene_bounds
    }

    /// Replace the scene bounds used by view presets.
    pub fn set_scene_bounds(&mut self, bounds: BoundingBox) {
        self.scene_bounds = bounds;
    }

    /// Set eye, target and up at once and recompute the basis.
    pub fn look_at(&mut self, from: Vec3, target: Vec3, up: Vec3) {
        self.from = from;
        self.target = target;
        self.up = up;
        self.update();
    }

    /// Move the eye.
    pub fn set_from(&mut self, from: Vec3) {
        self.from = from;
        self.update();
    }

    /// Move the target.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        self.update();
    }

    /// Replace the up vector.
    pub fn set_up(&mut self, up: Vec3) {
        self.up = up;
        self.update();
    }

    /// Translate eye and target by independent offsets.
    pub fn translate(&mut self, from_delta: Vec3, target_delta: Vec3) {
        self.from += from_delta;
        self.target += target_delta;
        self.update();
    }

    /// Update aspect from render target size in pixels. Zero-sized targets
    /// are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Recompute `(U, V, N)` from `from`, `target` and `up`.
    ///
    /// A degenerate configuration (eye on target, up parallel to the view
    /// direction) keeps the previous basis rather than producing NaNs.
    fn update(&mut self) {
        let n = (self.from - self.target).normalize_or_zero();
        let u = self.up.cross(n).normalize_or_zero();
        if n == Vec3::ZERO || u == Vec3::ZERO {
            log::warn!(
                "degenerate camera basis (from={}, target={}, up={}), \
                 keeping previous frame",
                self.from,
                self.target,
                self.up
            );
            return;
        }
        self.n = n;
        self.u = u;
        self.v = n.cross(u);
    }

    /// Camera frame for matrix construction: `(right, up, view_dir)` where
    /// `view_dir` points from the eye into the scene.
    #[must_use]
    pub fn frame(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, -self.n)
    }

    /// Half vertical field of view in radians.
    #[must_use]
    pub fn half_fov_v_radians(&self) -> f32 {
        self.fov_v.to_radians() * 0.5
    }

    /// Horizontal field of view in radians, derived from `fov_v` and
    /// `aspect`.
    #[must_use]
    pub fn horizontal_fov_radians(&self) -> f32 {
        2.0 * (self.half_fov_v_radians().tan() * self.aspect).atan()
    }

    /// Half-width of the visible image plane at unit distance from the eye.
    ///
    /// For perspective this is `tan(hfov / 2)`. For orthographic the visible
    /// half-width is `ortho_scale * aspect` at any distance, so it is
    /// expressed relative to the current eye-target distance.
    #[must_use]
    pub fn half_horizontal_aperture(&self) -> f32 {
        match self.projection {
            ProjectionMode::Perspective => {
                (self.horizontal_fov_radians() * 0.5).tan()
            }
            ProjectionMode::Orthographic => {
                let distance = self.distance();
                if distance > 0.0 {
                    self.ortho_scale * self.aspect / distance
                } else {
                    0.0
                }
            }
        }
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.from, self.target, self.v)
    }

    /// Projection matrix for the current mode.
    #[must_use]
    pub fn proj_matrix(&self) -> Mat4 {
        // glam's *_rh constructors use the [0,1] depth range (wgpu/Vulkan
        // convention)
        match self.projection {
            ProjectionMode::Perspective => Mat4::perspective_rh(
                self.fov_v.to_radians(),
                self.aspect,
                self.near,
                self.far,
            ),
            ProjectionMode::Orthographic => {
                let half_h = self.ortho_scale;
                let half_w = half_h * self.aspect;
                Mat4::orthographic_rh(
                    -half_w, half_w, -half_h, half_h, self.near, self.far,
                )
            }
        }
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn view_proj_matrix(&self) -> Mat4 {
        self.proj_matrix() * self.view_matrix()
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform snapshot of a camera, safe to hand to a render thread.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Orthographic half-height.
    pub ortho_scale: f32,
    /// 0 = perspective, 1 = orthographic.
    pub projection: u32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [f32; 2],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.0,
            forward: [0.0, 0.0, -1.0],
            fovy: 45.0,
            ortho_scale: DEFAULT_ORTHO_SCALE,
            projection: 0,
            _pad: [0.0; 2],
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.view_proj_matrix().to_cols_array_2d();
        self.position = camera.from.to_array();
        self.aspect = camera.aspect;
        self.forward = (-camera.n).to_array();
        self.fovy = camera.fov_v;
        self.ortho_scale = camera.ortho_scale;
        self.projection = camera.projection.persist_id();
    }
}

impl From<&Camera> for CameraUniform {
    fn from(camera: &Camera) -> Self {
        let mut uniform = Self::new();
        uniform.update_view_proj(camera);
        uniform
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    fn assert_orthonormal(camera: &Camera) {
        let (u, v, w) = camera.frame();
        for axis in [u, v, w] {
            assert!((axis.length() - 1.0).abs() < 1e-5);
        }
        assert!(u.dot(v).abs() < 1e-5);
        assert!(u.dot(w).abs() < 1e-5);
        assert!(v.dot(w).abs() < 1e-5);
    }

    #[test]
    fn default_frame_is_canonical() {
        let camera = Camera::default();
        let (right, up, view_dir) = camera.frame();
        assert!(right.abs_diff_eq(Vec3::X, 1e-6));
        assert!(up.abs_diff_eq(Vec3::Y, 1e-6));
        assert!(view_dir.abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }

    #[test]
    fn basis_follows_mutation() {
        let mut camera = Camera::default();
        camera.look_at(
            Vec3::new(3.0, 4.0, -2.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.3, 1.0, 0.0),
        );
        assert_orthonormal(&camera);
        let expected_n = (camera.from() - camera.target()).normalize();
        assert!(camera.backward().abs_diff_eq(expected_n, 1e-6));

        camera.set_up(Vec3::Z);
        assert_orthonormal(&camera);
        assert!(camera.basis_up().dot(Vec3::Z) > 0.0);
    }

    #[test]
    fn degenerate_update_keeps_previous_basis() {
        let mut camera = Camera::default();
        let before = camera.frame();
        camera.set_from(camera.target());
        assert_eq!(camera.frame(), before);
        assert!(camera.right().is_finite());
    }

    #[test]
    fn horizontal_fov_matches_aspect() {
        let mut camera = Camera::default();
        camera.fov_v = 90.0;
        camera.aspect = 1.0;
        let hfov = camera.horizontal_fov_radians();
        assert!((hfov - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        camera.aspect = 2.0;
        let hfov = camera.horizontal_fov_radians();
        assert!((hfov - 2.0 * 2.0_f32.atan()).abs() < 1e-6);
        assert!((camera.half_horizontal_aperture() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn resize_ignores_zero_size() {
        let mut camera = Camera::default();
        camera.resize(800, 400);
        assert!((camera.aspect - 2.0).abs() < 1e-6);
        camera.resize(0, 400);
        assert!((camera.aspect - 2.0).abs() < 1e-6);
    }

    #[test]
    fn view_matrix_maps_target_onto_negative_z() {
        let camera = Camera::default();
        let p = camera.view_matrix() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((p.z + 5.0).abs() < 1e-5);
        assert!(p.x.abs() < 1e-6 && p.y.abs() < 1e-6);
    }

    #[test]
    fn orthographic_projection_spans_ortho_scale() {
        let mut camera = Camera::default();
        camera.projection = ProjectionMode::Orthographic;
        camera.ortho_scale = 2.0;
        camera.aspect = 1.5;
        let top_right = camera.proj_matrix() * Vec4::new(3.0, 2.0, -5.0, 1.0);
        assert!((top_right.x / top_right.w - 1.0).abs() < 1e-5);
        assert!((top_right.y / top_right.w - 1.0).abs() < 1e-5);
    }

    #[test]
    fn uniform_snapshot() {
        let camera = Camera::default();
        let uniform = CameraUniform::from(&camera);
        assert_eq!(uniform.position, [0.0, 0.0, 5.0]);
        assert_eq!(uniform.projection, 0);
        assert_eq!(
            uniform.view_proj,
            camera.view_proj_matrix().to_cols_array_2d()
        );
    }

    #[test]
    fn projection_persist_ids_round_trip() {
        for mode in [ProjectionMode::Perspective, ProjectionMode::Orthographic]
        {
            assert_eq!(
                ProjectionMode::from_persist_id(mode.persist_id()),
                Some(mode)
            );
        }
        assert_eq!(ProjectionMode::from_persist_id(7), None);
    }
}
