// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Low-level body record: the unscaled per-body state the solver consumes.

use anima_math::{Isometry, Vec3};

/// Plain data record for one rigid body in the internal storage array.
///
/// Everything here is expressed in the internal body-space convention:
/// `body_to_world` places the body frame (origin at center of mass, axes
/// aligned to the principal inertia tensor) in world space, and no field
/// carries scale. Scale lives with the actor bookkeeping, never here.
///
/// Invariants
/// - `body_to_world` contains no scale component.
/// - `inv_mass == 0` designates a kinematic (infinite-mass) body.
/// - `inv_inertia` is a mass-space diagonal vector.
/// - No field is range-validated at this layer; writers are trusted and the
///   integration step is responsible for honoring the caps.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyRecord {
    /// World-frame rigid transform of the body frame.
    pub body_to_world: Isometry,
    /// Linear velocity in world units per second.
    pub linear_velocity: Vec3,
    /// Angular velocity in radians per second.
    pub angular_velocity: Vec3,
    /// Linear damping coefficient.
    pub linear_damping: f32,
    /// Angular damping coefficient.
    pub angular_damping: f32,
    /// Cap on squared linear velocity, enforced by the integration step.
    pub max_linear_velocity_sq: f32,
    /// Cap on squared angular velocity, enforced by the integration step.
    pub max_angular_velocity_sq: f32,
    /// Inverse mass; `0` designates a kinematic body.
    pub inv_mass: f32,
    /// Mass-space inverse inertia diagonal.
    pub inv_inertia: Vec3,
    /// Cap on the velocity used to resolve penetration.
    pub max_depenetration_velocity: f32,
    /// Cap on the impulse a single contact may apply.
    pub max_contact_impulse: f32,
}

impl Default for BodyRecord {
    /// A resting kinematic body at the world origin with uncapped limits.
    fn default() -> Self {
        Self {
            body_to_world: Isometry::identity(),
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            linear_damping: 0.0,
            angular_damping: 0.0,
            max_linear_velocity_sq: f32::MAX,
            max_angular_velocity_sq: f32::MAX,
            inv_mass: 0.0,
            inv_inertia: Vec3::ZERO,
            max_depenetration_velocity: f32::MAX,
            max_contact_impulse: f32::MAX,
        }
    }
}
