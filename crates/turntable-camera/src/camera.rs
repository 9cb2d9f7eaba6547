// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::{debug, trace, warn};
use turntable_math::{Mat4, Point3};

use crate::{CameraCreateInfo, CameraError, ProjectionInfo, ViewInfo};

/// Camera orbiting a pivot point, holding its view and projection state and
/// the combined `projection · view` matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TurntableCamera {
    view_info: ViewInfo,
    projection_info: ProjectionInfo,
    view_projection: Mat4,
}

impl TurntableCamera {
    /// Builds the camera without validating `create_info`.
    ///
    /// Degenerate input (coincident eye and target, zero aspect ratio, …)
    /// produces non-finite matrices; use [`TurntableCamera::try_new`] for
    /// untrusted configuration.
    pub fn new(create_info: &CameraCreateInfo) -> Self {
        let view_info = ViewInfo::new(create_info.look_at, create_info.look_from);
        let projection_info = ProjectionInfo::new(
            create_info.vertical_fov_degrees,
            create_info.aspect_ratio,
            create_info.z_near,
            create_info.z_far,
        );
        let view_projection = projection_info
            .projection_matrix()
            .multiply(view_info.view_matrix());

        debug!(
            fov = create_info.vertical_fov_degrees,
            aspect = create_info.aspect_ratio,
            z_near = create_info.z_near,
            z_far = create_info.z_far,
            infinite_far = projection_info.is_infinite(),
            "turntable camera built"
        );
        trace!(rotation = %view_info.current_rotation(), "view rotation");

        Self {
            view_info,
            projection_info,
            view_projection,
        }
    }

    /// Validates `create_info` and then builds the camera.
    pub fn try_new(create_info: &CameraCreateInfo) -> Result<Self, CameraError> {
        if let Err(err) = create_info.validate() {
            warn!(error = %err, "rejecting camera configuration");
            return Err(err);
        }
        Ok(Self::new(create_info))
    }

    /// View matrix as 16 column-major floats.
    pub fn view_matrix(&self) -> &[f32; 16] {
        self.view_info.view_matrix().as_array()
    }

    /// Projection matrix as 16 column-major floats.
    pub fn projection_matrix(&self) -> &[f32; 16] {
        self.projection_info.projection_matrix().as_array()
    }

    /// `projection · view` as 16 column-major floats.
    pub fn view_projection_matrix(&self) -> &[f32; 16] {
        self.view_projection.as_array()
    }

    /// View state.
    pub fn view_info(&self) -> &ViewInfo {
        &self.view_info
    }

    /// Projection state.
    pub fn projection_info(&self) -> &ProjectionInfo {
        &self.projection_info
    }

    /// Maps a world-space point to normalized device coordinates.
    pub fn world_to_ndc(&self, point: &Point3) -> Point3 {
        self.view_projection.transform_point(point)
    }

    /// Recomputes the projection (and the combined matrix) for a new aspect
    /// ratio, keeping the view untouched.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.projection_info = self.projection_info.with_aspect_ratio(aspect_ratio);
        self.view_projection = self
            .projection_info
            .projection_matrix()
            .multiply(self.view_info.view_matrix());
    }
}

/// Allocates a camera on the heap.
///
/// Pair with [`destroy_turntable_camera`] (or simply drop the box). Heap
/// exhaustion aborts the process under the global allocator, so there is no
/// failure path to report.
pub fn create_turntable_camera(create_info: &CameraCreateInfo) -> Box<TurntableCamera> {
    Box::new(TurntableCamera::new(create_info))
}

/// Releases a camera created by [`create_turntable_camera`].
pub fn destroy_turntable_camera(camera: Box<TurntableCamera>) {
    drop(camera);
}
