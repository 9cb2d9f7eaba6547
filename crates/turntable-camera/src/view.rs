// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! World → camera space transform.

use turntable_math::{Mat4, Point3, Quat, Vec3};

/// Canonical forward direction of a right-handed camera.
pub const FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);

/// Builds `R(rotation) · T(-offset)`: translate `offset` to the origin, then
/// rotate.
pub fn view_matrix_from_rotation_and_offset(rotation: &Quat, offset: &Vec3) -> Mat4 {
    let rotation_matrix = Mat4::from_quat(rotation);
    let negative_offset_matrix = Mat4::translation(&-*offset);
    rotation_matrix.multiply(&negative_offset_matrix)
}

/// View half of the turntable camera state.
///
/// The total camera rotation is `current_rotation * rotation_modifier`; only
/// `current_rotation` is derived at construction, the modifier starts as the
/// identity and is reserved for in-progress turntable drags. The view matrix
/// is derived from the rest of the state and cannot be set directly.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewInfo {
    z_offset: Vec3,
    look_at: Point3,
    look_from: Point3,
    current_rotation: Quat,
    rotation_modifier: Quat,
    should_reverse: bool,
    view_matrix: Mat4,
}

impl ViewInfo {
    /// Derives the view transform for an eye at `look_from` looking at
    /// `look_at`.
    ///
    /// The resulting matrix maps `look_from` to the origin and `look_at` onto
    /// the ray `(0, 0, -t)`, `t > 0`, preserving distances. The two points must
    /// differ; coincident points produce a NaN matrix.
    ///
    /// # Examples
    /// ```
    /// use turntable_camera::ViewInfo;
    /// use turntable_math::Point3;
    /// let view = ViewInfo::new(Point3::new(0.0, -1.0, 0.0), Point3::new(0.0, 1.0, 0.0));
    /// let eye = view.view_matrix().transform_point(&Point3::new(0.0, 1.0, 0.0));
    /// assert!(eye.to_vec3().length() < 1e-6);
    /// ```
    pub fn new(look_at: Point3, look_from: Point3) -> Self {
        // Rotate the at-minus-from direction onto the canonical forward axis.
        let forward = (look_at - look_from).normalized();
        let current_rotation = Quat::rotation_between(&forward, &FORWARD);

        // Translate first so look_from sits at the origin, then rotate.
        let view_matrix =
            view_matrix_from_rotation_and_offset(&current_rotation, &look_from.to_vec3());

        Self {
            z_offset: Vec3::ZERO,
            look_at,
            look_from,
            current_rotation,
            rotation_modifier: Quat::IDENTITY,
            should_reverse: false,
            view_matrix,
        }
    }

    /// Offset from `look_at` to the eye before rotation is applied.
    pub fn z_offset(&self) -> Vec3 {
        self.z_offset
    }

    /// The turntable pivot.
    pub fn look_at(&self) -> Point3 {
        self.look_at
    }

    /// Eye position the view was built from.
    pub fn look_from(&self) -> Point3 {
        self.look_from
    }

    /// Rotation committed at construction (or by the last finished drag).
    pub fn current_rotation(&self) -> Quat {
        self.current_rotation
    }

    /// Rotation of an in-progress drag; identity when idle.
    pub fn rotation_modifier(&self) -> Quat {
        self.rotation_modifier
    }

    /// `current_rotation * rotation_modifier`.
    pub fn total_rotation(&self) -> Quat {
        self.current_rotation.multiply(&self.rotation_modifier)
    }

    /// Whether horizontal drag input is mirrored (scene seen upside down).
    pub fn should_reverse(&self) -> bool {
        self.should_reverse
    }

    /// World → camera space matrix.
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }
}
