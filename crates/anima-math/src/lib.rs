// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![doc = r"Math primitives for Anima.

This crate provides:
- 3D vectors (`Vec3`) and quaternions (`Quat`).
- Rigid transforms (`Isometry`: rotation + translation, no scale).
- Scaled transforms (`Transform`: an isometry plus non-uniform scale).

Design notes:
- Float32 throughout; operations favor clarity and reproducibility.
- Degenerate inputs (zero-length axes, near-zero norms) resolve to
  identity/zero values rather than NaN so callers can detect them
  deterministically.
- Rustdoc is treated as part of the contract; public items are documented.
"]

mod isometry;
mod quat;
mod transform;
mod vec3;

pub use isometry::Isometry;
pub use quat::Quat;
pub use transform::Transform;
pub use vec3::Vec3;

/// Global epsilon used by math routines when detecting degenerate values.
pub const EPSILON: f32 = 1e-6;

/// Clamps `value` to the inclusive `[min, max]` range using float32 rounding.
///
/// Ranges with `min > max` collapse to `max`; callers are expected to pass
/// well-ordered bounds.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}
