// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Mul, MulAssign};

use crate::{Point3, Quat, Vec3, Vec4};

/// Column‑major 4×4 float32 matrix.
///
/// - Element `(row, col)` is stored at index `col * 4 + row`, which is also
///   the layout GPU uniform uploads expect.
/// - Vectors are columns: [`Mat4::mul_vec4`] computes `M · v`, and
///   `a.multiply(&b)` applies `b` first when used as a transform.
///
/// # Examples
/// ```
/// use turntable_math::{Mat4, Vec3};
/// let t = Mat4::translation(&Vec3::new(5.0, -3.0, 2.0));
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_vec3(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f32; 16]", into = "[f32; 16]"))]
pub struct Mat4 {
    data: [f32; 16],
}

impl Mat4 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Builds a pure translation matrix.
    pub fn translation(v: &Vec3) -> Self {
        let mut m = Self::identity();
        m.apply_translation(v);
        m
    }

    /// Returns the matrix as a column‑major array.
    pub fn to_array(self) -> [f32; 16] {
        self.data
    }

    /// Borrows the column‑major storage, e.g. for uploading to a GPU buffer.
    pub fn as_array(&self) -> &[f32; 16] {
        &self.data
    }

    /// Element at `row`, `col`.
    ///
    /// # Panics
    /// If `row` or `col` is outside `0..4`.
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.column(col).to_array()[row]
    }

    /// Column `col` as a homogeneous vector.
    ///
    /// # Panics
    /// If `col` is outside `0..4`.
    pub fn column(&self, col: usize) -> Vec4 {
        let c = col * 4;
        Vec4::new(
            self.data[c],
            self.data[c + 1],
            self.data[c + 2],
            self.data[c + 3],
        )
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[row * 4 + col] = self.at(row, col);
            }
        }
        Self::new(out)
    }

    /// Matrix product `self · rhs`.
    ///
    /// Non‑commutative; as a transform the result applies `rhs` first.
    ///
    /// # Examples
    /// ```
    /// use turntable_math::{Mat4, Vec3};
    /// let a = Mat4::identity();
    /// let b = Mat4::translation(&Vec3::new(1.0, 2.0, 3.0));
    /// assert_eq!(a.multiply(&b).to_array(), b.to_array());
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[col * 4 + row] = sum;
            }
        }
        Self::new(out)
    }

    /// Rotation matrix of a unit quaternion.
    ///
    /// The upper-left 3×3 block is the usual quaternion rotation formula; the
    /// last row and column are those of the identity.
    pub fn from_quat(q: &Quat) -> Self {
        let Quat { s, x, y, z } = *q;

        Self::new([
            // col 0
            1.0 - 2.0 * y * y - 2.0 * z * z,
            2.0 * x * y + 2.0 * s * z,
            2.0 * x * z - 2.0 * s * y,
            0.0,
            // col 1
            2.0 * x * y - 2.0 * s * z,
            1.0 - 2.0 * x * x - 2.0 * z * z,
            2.0 * y * z + 2.0 * s * x,
            0.0,
            // col 2
            2.0 * x * z + 2.0 * s * y,
            2.0 * y * z - 2.0 * s * x,
            1.0 - 2.0 * x * x - 2.0 * y * y,
            0.0,
            // col 3
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    /// Adds `v` to the translation column (indices 12, 13, 14) in place.
    ///
    /// Rotation and scale terms are left untouched, so this only means
    /// "translate afterwards" for matrices whose bottom row is `(0, 0, 0, 1)`.
    pub fn apply_translation(&mut self, v: &Vec3) {
        self.data[12] += v.x;
        self.data[13] += v.y;
        self.data[14] += v.z;
    }

    /// Right-handed perspective projection with depth mapped to `[0, 1]`.
    ///
    /// - `vertical_fov`: vertical field of view in radians.
    /// - `aspect_ratio`: viewport width / height.
    /// - `z_near`: distance to the near plane, which maps to depth `0`.
    /// - `z_far`: distance to the far plane, which maps to depth `1`. A
    ///   negative value selects an infinitely distant far plane: the matrix is
    ///   the `z_far → ∞` limit, with depth approaching `1` at infinity.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use turntable_math::{Mat4, Vec3};
    /// let p = Mat4::perspective(FRAC_PI_2, 1.0, 0.5, 10.0);
    /// let near_center = p.transform_vec3(&Vec3::new(0.0, 0.0, -0.5));
    /// assert!(near_center.z.abs() < 1e-6);
    /// ```
    pub fn perspective(vertical_fov: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        let f = 1.0 / (vertical_fov * 0.5).tan();

        let (depth_scale, depth_offset) = if z_far < 0.0 {
            (-1.0, -z_near)
        } else {
            let fn_inv = 1.0 / (z_near - z_far);
            (z_far * fn_inv, z_near * z_far * fn_inv)
        };

        let mut data = [0.0; 16];
        data[0] = f / aspect_ratio;
        data[5] = f;
        data[10] = depth_scale;
        data[11] = -1.0;
        data[14] = depth_offset;
        Self::new(data)
    }

    /// Matrix–vector product `self · v`.
    pub fn mul_vec4(&self, v: &Vec4) -> Vec4 {
        let row = |r: usize| {
            self.at(r, 0) * v.x + self.at(r, 1) * v.y + self.at(r, 2) * v.z + self.at(r, 3) * v.w
        };
        Vec4::new(row(0), row(1), row(2), row(3))
    }

    /// Transforms `v` as a homogeneous point (`w = 1`) and divides by the
    /// resulting `w`.
    ///
    /// A resulting `w` of zero yields non-finite components.
    pub fn transform_vec3(&self, v: &Vec3) -> Vec3 {
        let mut out = self.mul_vec4(&Vec4::from_vec3(*v, 1.0));
        out.homogenize();
        out.xyz()
    }

    /// [`Mat4::transform_vec3`] for points.
    pub fn transform_point(&self, p: &Point3) -> Point3 {
        Point3::from_vec3(self.transform_vec3(&p.to_vec3()))
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self { data: value }
    }
}

impl From<Mat4> for [f32; 16] {
    fn from(m: Mat4) -> Self {
        m.data
    }
}

impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<&Mat4> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: &Mat4) -> Self::Output {
        self.multiply(rhs)
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl MulAssign<&Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &Mat4) {
        *self = self.multiply(rhs);
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix 4x4:")?;
        for row in 0..4 {
            writeln!(
                f,
                "| {:7.2} {:7.2} {:7.2} {:7.2} |",
                self.at(row, 0),
                self.at(row, 1),
                self.at(row, 2),
                self.at(row, 3)
            )?;
        }
        Ok(())
    }
}
