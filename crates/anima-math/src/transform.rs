// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::{Isometry, Quat, Vec3};

/// Rigid transform with non-uniform scale, as authored by client code.
///
/// Conventions:
/// - `translation` in world-space units.
/// - `rotation` as a unit quaternion (normalized by producers, not enforced
///   here).
/// - `scale` is non-uniform and applied before rotation/translation.
///
/// The scale component is client bookkeeping only: the simulation stores
/// bodies as unscaled [`Isometry`] values, and scale is reattached whenever a
/// world transform is reconstructed. Scale is never folded into the rigid
/// part.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    translation: Vec3,
    rotation: Quat,
    scale: Vec3,
}

impl Transform {
    /// Identity transform (no translation, no rotation, unit scale).
    pub const fn identity() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::identity(),
            scale: Vec3::ONE,
        }
    }

    /// Creates a transform from components.
    pub const fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Creates a scaled transform from a rigid part plus a scale.
    pub fn from_isometry(isometry: &Isometry, scale: Vec3) -> Self {
        Self::new(isometry.translation(), isometry.rotation(), scale)
    }

    /// Translation component.
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Rotation component.
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Scale component.
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// The rigid part of this transform; the scale is dropped, not applied.
    pub fn isometry(&self) -> Isometry {
        Isometry::new(self.rotation, self.translation)
    }

}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
