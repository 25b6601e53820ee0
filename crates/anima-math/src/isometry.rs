// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::{Quat, Vec3};

/// Rigid transform: a rotation followed by a translation, no scale.
///
/// Conventions:
/// - Maps points from a local frame into a parent frame:
///   `p' = rotation · p + translation`.
/// - Composition is right-to-left: `(a.mul(&b))(p) = a(b(p))`.
///
/// Rigid bodies are stored and composed exclusively through this type; scale
/// never participates (see [`crate::Transform`] for the scaled variant).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Isometry {
    rotation: Quat,
    translation: Vec3,
}

impl Isometry {
    /// Identity transform (no rotation, no translation).
    pub const fn identity() -> Self {
        Self {
            rotation: Quat::identity(),
            translation: Vec3::ZERO,
        }
    }

    /// Creates a rigid transform from components.
    pub const fn new(rotation: Quat, translation: Vec3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Creates a pure translation.
    pub const fn from_translation(translation: Vec3) -> Self {
        Self::new(Quat::identity(), translation)
    }

    /// Rotation component.
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Translation component.
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Returns a copy with the translation replaced.
    ///
    /// Used by callers that need the orientation of a frame without its
    /// positional offset.
    pub fn with_translation(&self, translation: Vec3) -> Self {
        Self::new(self.rotation, translation)
    }

    /// Maps a point from the local frame into the parent frame.
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.rotation.rotate(point).add(&self.translation)
    }

    /// Composes two rigid transforms; `other` is applied first.
    ///
    /// `(a.mul(&b)).transform_point(p) == a.transform_point(b.transform_point(p))`
    pub fn mul(&self, other: &Self) -> Self {
        Self::new(
            self.rotation.multiply(&other.rotation),
            self.rotation.rotate(&other.translation).add(&self.translation),
        )
    }

    /// Rigid inverse.
    ///
    /// Assumes a unit rotation quaternion; the inverse of a rigid transform
    /// is `(R⁻¹, −R⁻¹·t)`.
    pub fn inverse(&self) -> Self {
        let inv_rot = self.rotation.conjugate();
        let inv_trans = inv_rot.rotate(&self.translation.scale(-1.0));
        Self::new(inv_rot, inv_trans)
    }

    /// Reverse relative transform: removes `self` from `other`.
    ///
    /// Returns `other ∘ self⁻¹`, the transform that reproduces `other` when
    /// `self` is applied first. This is the single primitive behind every
    /// "undo this frame offset" read path:
    ///
    /// `self.relative_reverse(&a.mul(self)) == a` (up to float rounding).
    pub fn relative_reverse(&self, other: &Self) -> Self {
        other.mul(&self.inverse())
    }
}

impl Default for Isometry {
    fn default() -> Self {
        Self::identity()
    }
}
