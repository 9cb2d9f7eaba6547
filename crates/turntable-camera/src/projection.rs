// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Camera → clip space transform.

use turntable_math::{deg_to_rad, Mat4};

/// Perspective parameters together with the matrix derived from them.
///
/// The parameters are kept so the matrix can be inspected or recomputed,
/// e.g. after a viewport resize via [`ProjectionInfo::with_aspect_ratio`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProjectionInfo {
    vertical_fov_degrees: f32,
    aspect_ratio: f32,
    z_near: f32,
    z_far: f32,
    projection_matrix: Mat4,
}

impl ProjectionInfo {
    /// Builds a right-handed, `[0, 1]`-depth perspective projection.
    ///
    /// `vertical_fov_degrees` is converted to radians before delegating to
    /// [`Mat4::perspective`]. A negative `z_far` selects an infinitely distant
    /// far plane.
    pub fn new(vertical_fov_degrees: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        let projection_matrix =
            Mat4::perspective(deg_to_rad(vertical_fov_degrees), aspect_ratio, z_near, z_far);
        Self {
            vertical_fov_degrees,
            aspect_ratio,
            z_near,
            z_far,
            projection_matrix,
        }
    }

    /// Same projection with a different aspect ratio.
    pub fn with_aspect_ratio(&self, aspect_ratio: f32) -> Self {
        Self::new(self.vertical_fov_degrees, aspect_ratio, self.z_near, self.z_far)
    }

    /// Vertical field of view in degrees.
    pub fn vertical_fov_degrees(&self) -> f32 {
        self.vertical_fov_degrees
    }

    /// Viewport width / height.
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Near plane distance.
    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    /// Far plane distance as configured (negative when infinite).
    pub fn z_far(&self) -> f32 {
        self.z_far
    }

    /// True when the far plane is at infinity.
    pub fn is_infinite(&self) -> bool {
        self.z_far < 0.0
    }

    /// Camera → clip space matrix.
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }
}
