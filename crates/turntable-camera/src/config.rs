// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Camera creation record and its JSON loaders.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use turntable_math::{Point3, EPSILON};

use crate::CameraError;

/// Parameters for [`crate::create_turntable_camera`].
///
/// Serialized as JSON with points written as `[x, y, z]`:
///
/// ```json
/// {
///   "look_at": [0.0, 0.0, 0.0],
///   "look_from": [0.0, 2.0, 5.0],
///   "vertical_fov_degrees": 60.0,
///   "aspect_ratio": 1.7777778,
///   "z_near": 0.1,
///   "z_far": -1.0
/// }
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraCreateInfo {
    /// Point the camera looks at (the turntable pivot).
    pub look_at: Point3,
    /// Eye position.
    pub look_from: Point3,
    /// Vertical field of view in degrees.
    #[serde(alias = "vertical_fov")]
    pub vertical_fov_degrees: f32,
    /// Viewport width / height.
    pub aspect_ratio: f32,
    /// Distance to the near clipping plane.
    pub z_near: f32,
    /// Distance to the far clipping plane; negative means infinitely far.
    pub z_far: f32,
}

impl CameraCreateInfo {
    /// Checks the preconditions the camera math relies on.
    pub fn validate(&self) -> Result<(), CameraError> {
        let scalars = [
            ("look_at", self.look_at.to_array().iter().all(|c| c.is_finite())),
            ("look_from", self.look_from.to_array().iter().all(|c| c.is_finite())),
            ("vertical_fov_degrees", self.vertical_fov_degrees.is_finite()),
            ("aspect_ratio", self.aspect_ratio.is_finite()),
            ("z_near", self.z_near.is_finite()),
            ("z_far", self.z_far.is_finite()),
        ];
        if let Some(&(field, _)) = scalars.iter().find(|(_, finite)| !finite) {
            return Err(CameraError::NonFinite { field });
        }

        let distance = self.look_at.distance(&self.look_from);
        if distance <= EPSILON {
            return Err(CameraError::CoincidentEye { distance });
        }
        if self.vertical_fov_degrees <= 0.0 || self.vertical_fov_degrees >= 180.0 {
            return Err(CameraError::InvalidFov(self.vertical_fov_degrees));
        }
        if self.aspect_ratio <= 0.0 {
            return Err(CameraError::InvalidAspect(self.aspect_ratio));
        }
        if self.z_near <= 0.0 {
            return Err(CameraError::InvalidNear(self.z_near));
        }
        if self.z_far >= 0.0 && self.z_far <= self.z_near {
            return Err(CameraError::InvalidFar {
                z_near: self.z_near,
                z_far: self.z_far,
            });
        }
        Ok(())
    }

    /// Parses a configuration from JSON text. Does not validate.
    pub fn from_json_str(json: &str) -> Result<Self, CameraError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a configuration from JSON bytes. Does not validate.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, CameraError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Reads and parses a JSON configuration file. Does not validate.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CameraError> {
        let bytes = fs::read(path)?;
        Self::from_json_slice(&bytes)
    }

    /// Pretty-printed JSON form.
    pub fn to_json_pretty(&self) -> Result<String, CameraError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the pretty-printed JSON form to `path`, creating parent
    /// directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CameraError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}
