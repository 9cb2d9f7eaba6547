// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::Mul;

use crate::{Mat4, Vec3, EPSILON};

/// Quaternion `s + xi + yj + zk` stored as `(s, x, y, z)`.
///
/// * Rotations are represented by unit quaternions; nothing here renormalizes
///   implicitly, so callers composing long chains should call
///   [`Quat::normalize`] themselves.
/// * All angles are expressed in radians.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f32; 4]", into = "[f32; 4]"))]
pub struct Quat {
    /// Scalar (real) part.
    pub s: f32,
    /// `i` coefficient.
    pub x: f32,
    /// `j` coefficient.
    pub y: f32,
    /// `k` coefficient.
    pub z: f32,
}

impl Quat {
    /// The identity rotation `(1, 0, 0, 0)`.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Creates a quaternion from its scalar part and vector part.
    pub const fn new(s: f32, x: f32, y: f32, z: f32) -> Self {
        Self { s, x, y, z }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the components as `[s, x, y, z]`.
    pub fn to_array(self) -> [f32; 4] {
        [self.s, self.x, self.y, self.z]
    }

    /// Constructs the rotation of `angle` radians about `axis`.
    ///
    /// The axis is normalized internally; an axis shorter than [`EPSILON`]
    /// yields the identity.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let len = axis.length();
        if len <= EPSILON {
            return Self::IDENTITY;
        }
        let (sin_half, cos_half) = (angle * 0.5).sin_cos();
        let k = sin_half / len;
        Self::new(cos_half, axis.x * k, axis.y * k, axis.z * k)
    }

    /// Euclidean norm of all four components.
    pub fn length(&self) -> f32 {
        (self.s * self.s + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Normalizes the quaternion in place.
    ///
    /// The quaternion must have non-zero norm; a zero quaternion turns into NaNs.
    pub fn normalize(&mut self) {
        let len = self.length();
        self.s /= len;
        self.x /= len;
        self.y /= len;
        self.z /= len;
    }

    /// Returns a normalized copy. Same precondition as [`Quat::normalize`].
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Conjugate `(s, -x, -y, -z)`; the inverse of a unit quaternion.
    pub fn conjugate(&self) -> Self {
        Self::new(self.s, -self.x, -self.y, -self.z)
    }

    /// Hamilton product `self * other`.
    ///
    /// Non-commutative. Applied to vectors, the product rotates by `other`
    /// first and by `self` second.
    pub fn multiply(&self, other: &Self) -> Self {
        let (a, b) = (self, other);
        Self::new(
            a.s * b.s - a.x * b.x - a.y * b.y - a.z * b.z,
            a.s * b.x + a.x * b.s + a.y * b.z - a.z * b.y,
            a.s * b.y - a.x * b.z + a.y * b.s + a.z * b.x,
            a.s * b.z + a.x * b.y - a.y * b.x + a.z * b.s,
        )
    }

    /// Rotates `v` with the sandwich product `q · (0, v) · q*`.
    ///
    /// `self` must be a unit quaternion: the conjugate stands in for the
    /// inverse.
    pub fn rotate_vec3(&self, v: &Vec3) -> Vec3 {
        let pure = Self::new(0.0, v.x, v.y, v.z);
        let r = self.multiply(&pure).multiply(&self.conjugate());
        Vec3::new(r.x, r.y, r.z)
    }

    /// Shortest-arc rotation taking `src` onto `dst`.
    ///
    /// Both inputs must already be unit length. The result is a unit
    /// quaternion.
    ///
    /// # Examples
    /// ```
    /// use turntable_math::{Quat, Vec3};
    /// let q = Quat::rotation_between(&Vec3::UNIT_Y, &Vec3::UNIT_X);
    /// let v = q.rotate_vec3(&Vec3::UNIT_Y);
    /// assert!((v.x - 1.0).abs() < 1e-6 && v.y.abs() < 1e-6 && v.z.abs() < 1e-6);
    /// ```
    pub fn rotation_between(src: &Vec3, dst: &Vec3) -> Self {
        let cos_theta = src.dot(dst);

        // Already aligned.
        if cos_theta > 1.0 - EPSILON {
            return Self::IDENTITY;
        }

        // Opposite directions: the cross product vanishes, so any axis
        // perpendicular to `src` works for a half turn.
        if cos_theta < -1.0 + EPSILON {
            let mut helper = Vec3::UNIT_X;
            let helper_cos = src.dot(&helper);
            if helper_cos > 1.0 - EPSILON || helper_cos < -1.0 + EPSILON {
                helper = Vec3::UNIT_Y;
            }
            let axis = helper.cross(src).normalized();
            // cos(π/2) = 0 and the axis is unit length, so this is already
            // normalized.
            return Self::new(0.0, axis.x, axis.y, axis.z);
        }

        // Half-angle construction: (1 + cos θ, src × dst) normalizes to the
        // rotation of θ about src × dst.
        let axis = src.cross(dst);
        Self::new(1.0 + cos_theta, axis.x, axis.y, axis.z).normalized()
    }

    /// Converts this unit quaternion into a rotation matrix.
    ///
    /// Forwards to [`Mat4::from_quat`].
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_quat(self)
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 4]> for Quat {
    fn from([s, x, y, z]: [f32; 4]) -> Self {
        Self::new(s, x, y, z)
    }
}

impl From<Quat> for [f32; 4] {
    fn from(q: Quat) -> Self {
        q.to_array()
    }
}

impl Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion: ( {:.6} + {:.6}i + {:.6}j + {:.6}k )",
            self.s, self.x, self.y, self.z
        )
    }
}
