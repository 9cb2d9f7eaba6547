// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type for camera configuration and construction.

use thiserror::Error;

/// Errors reported while loading or validating a [`crate::CameraCreateInfo`].
///
/// Construction from an already-validated configuration cannot fail; these
/// variants only surface through the checked entry points
/// ([`crate::TurntableCamera::try_new`], [`crate::CameraCreateInfo::validate`]
/// and the loaders).
#[derive(Debug, Error)]
pub enum CameraError {
    /// `look_at` and `look_from` coincide, so there is no forward direction.
    #[error("look_at and look_from coincide (distance {distance})")]
    CoincidentEye {
        /// Distance between the two points.
        distance: f32,
    },
    /// A parameter is NaN or infinite.
    #[error("{field} is not finite")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// Vertical field of view outside `(0, 180)` degrees.
    #[error("vertical field of view must be in (0, 180) degrees, got {0}")]
    InvalidFov(f32),
    /// Aspect ratio not strictly positive.
    #[error("aspect ratio must be positive, got {0}")]
    InvalidAspect(f32),
    /// Near plane distance not strictly positive.
    #[error("z_near must be positive, got {0}")]
    InvalidNear(f32),
    /// Far plane neither negative (infinite) nor beyond the near plane.
    #[error("z_far must be negative (infinite) or greater than z_near ({z_near}), got {z_far}")]
    InvalidFar {
        /// Configured near plane.
        z_near: f32,
        /// Configured far plane.
        z_far: f32,
    },
    /// I/O error while reading a configuration file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}
