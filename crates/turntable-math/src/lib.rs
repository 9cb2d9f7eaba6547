// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! turntable-math: float32 vector, point, quaternion and matrix primitives.
//!
//! Conventions shared by every type in this crate:
//! - Right-handed coordinates; the canonical camera looks down `-Z`.
//! - Quaternions are stored as `(s, x, y, z)` with `s` the scalar part.
//! - [`Mat4`] is column-major: element `(row, col)` lives at `col * 4 + row`,
//!   and vectors are treated as columns (`M · v`).
//!
//! Operations are pure value-in/value-out functions. Degenerate inputs (a
//! zero-length vector handed to `normalize`, a zero homogeneous `w`) are caller
//! bugs: they produce non-finite components instead of a reported error.
#![forbid(unsafe_code)]

mod mat4;
mod point3;
mod quat;
mod vec3;
mod vec4;

pub use mat4::Mat4;
pub use point3::Point3;
pub use quat::Quat;
pub use vec3::Vec3;
pub use vec4::Vec4;

use core::f32::consts::TAU;

/// Threshold used when classifying near-parallel directions.
pub const EPSILON: f32 = 1e-6;

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * (360.0 / TAU)
}
