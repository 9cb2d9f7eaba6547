// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Turntable camera built on `turntable-math`.

This crate provides:
- [`ViewInfo`]: the world → camera transform derived from a look-at/look-from
  pair (eye at the origin, looking down `-Z`).
- [`ProjectionInfo`]: a right-handed perspective projection with depth in
  `[0, 1]`, including the infinite-far-plane variant.
- [`TurntableCamera`]: both of the above plus `projection · view`, with flat
  column-major accessors for GPU uploads.
- [`CameraCreateInfo`]: the JSON-serializable creation record and its
  validation.

Design notes:
- Matrix construction is infallible; degenerate input yields non-finite
  matrices. Validation is opt-in through [`TurntableCamera::try_new`].
- Float32 throughout, column-vector convention (`M · v`).
"]
#![forbid(unsafe_code)]

mod camera;
mod config;
mod error;
mod projection;
mod view;

pub use camera::{create_turntable_camera, destroy_turntable_camera, TurntableCamera};
pub use config::CameraCreateInfo;
pub use error::CameraError;
pub use projection::ProjectionInfo;
pub use view::{view_matrix_from_rotation_and_offset, ViewInfo, FORWARD};
