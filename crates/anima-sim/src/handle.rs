// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-actor handle: the sole read/write boundary onto one body slot.

use anima_math::{Isometry, Transform, Vec3};

use crate::convert;
use crate::forces::{ForceType, RadialFalloff};
use crate::simulation::{ActorIndex, LocalSimulation};

/// Handle associated with one rigid body. This is the proper way to read and
/// write that body's simulation state.
///
/// A handle is a reference-semantics view bound at construction to its
/// owning simulation and slot; it owns nothing and cleans up nothing. It is
/// obtained exclusively from [`LocalSimulation::actor`] and holds the
/// simulation's `&mut` for its lifetime, so two live handles onto the same
/// simulation cannot exist and handles cannot be duplicated:
///
/// ```compile_fail
/// use anima_sim::{ActorSetup, LocalSimulation, SimulationSettings};
///
/// let mut sim = LocalSimulation::new(SimulationSettings::default());
/// let index = sim.create_dynamic_actor(&ActorSetup::default());
/// let first = sim.actor(index);
/// let second = sim.actor(index); // no two live handles, even for one slot
/// let _ = first.is_simulated();
/// ```
///
/// `ActorHandle` implements neither `Copy` nor `Clone`: a duplicate would be
/// a second logical owner of the slot with independently-diverging
/// translation state.
///
/// Precondition for every method: the slot references a live actor in the
/// owning simulation. Index validity across removals is the simulation's
/// contract, not the handle's; a stale index reads like degraded mode
/// rather than being re-validated here.
#[derive(Debug)]
pub struct ActorHandle<'sim> {
    simulation: &'sim mut LocalSimulation,
    index: ActorIndex,
}

impl<'sim> ActorHandle<'sim> {
    pub(crate) fn new(simulation: &'sim mut LocalSimulation, index: ActorIndex) -> Self {
        Self { simulation, index }
    }

    /// The slot this handle is bound to.
    pub fn index(&self) -> ActorIndex {
        self.index
    }

    /// Actor→body rigid offset established at creation.
    ///
    /// Carries no scale component; scale lives in [`Self::actor_scale`] and
    /// is never folded into the rigid offset.
    pub fn actor_to_body(&self) -> Isometry {
        self.simulation
            .state(self.index)
            .map_or_else(Isometry::identity, |state| state.actor_to_body)
    }

    /// Client-supplied scale, reattached on world-transform reads.
    ///
    /// The internal body representation is unscaled (scale does not
    /// participate in mass/inertia math), so this is pure client
    /// bookkeeping.
    pub fn actor_scale(&self) -> Vec3 {
        self.simulation
            .state(self.index)
            .map_or(Vec3::ONE, |state| state.actor_scale)
    }

    /// Replaces the stored actor scale. Does not touch simulation state.
    pub fn set_actor_scale(&mut self, scale: Vec3) {
        if let Some(state) = self.simulation.state_mut(self.index) {
            state.actor_scale = scale;
        }
    }

    /// External discriminator of body kind; `-1` when unset.
    pub fn rigid_body_type(&self) -> i32 {
        self.simulation
            .state(self.index)
            .map_or(-1, |state| state.rigid_body_type)
    }

    /// Sets the world transform.
    ///
    /// Applies the actor→body offset on top of the supplied transform and
    /// writes the result as the record's world-frame rigid pose. The scale
    /// component is stripped, not written: the backend has no concept of
    /// scale. No-op without a backend.
    pub fn set_world_transform(&mut self, world_transform: &Transform) {
        let pose = world_transform.isometry().mul(&self.actor_to_body());
        if let Some(record) = self.simulation.record_mut(self.index) {
            record.body_to_world = convert::to_internal_pose(&pose);
        }
    }

    /// The world transform in the client's actor-space convention.
    ///
    /// Reverses the actor→body offset from the stored pose and reattaches
    /// the stored actor scale (scale is never derived from simulation
    /// state). Returns the identity transform without a backend.
    pub fn world_transform(&self) -> Transform {
        match self.simulation.record(self.index) {
            Some(record) => {
                let pose = convert::from_internal_pose(&record.body_to_world);
                let world = self.actor_to_body().relative_reverse(&pose);
                Transform::from_isometry(&world, self.actor_scale())
            }
            None => Transform::identity(),
        }
    }

    /// The raw body-frame pose: no actor-offset correction, no scale.
    ///
    /// Use this when the uncorrected inertia-aligned frame is needed.
    /// Identity without a backend.
    pub fn body_transform(&self) -> Isometry {
        self.simulation
            .record(self.index)
            .map_or_else(Isometry::identity, |record| {
                Isometry::identity()
                    .relative_reverse(&convert::from_internal_pose(&record.body_to_world))
            })
    }

    /// The body pose corrected by the actor orientation bias only.
    ///
    /// The actor→body translation is zeroed before the reversal, so the
    /// result carries the actor's orientation convention but none of its
    /// positional offset. No scale. Identity without a backend.
    pub fn projected_transform(&self) -> Isometry {
        match self.simulation.record(self.index) {
            Some(record) => {
                let orientation_only = self.actor_to_body().with_translation(Vec3::ZERO);
                orientation_only.relative_reverse(&convert::from_internal_pose(&record.body_to_world))
            }
            None => Isometry::identity(),
        }
    }

    /// Whether the body is simulating.
    pub fn is_simulated(&self) -> bool {
        self.simulation.is_simulated(self.index)
    }

    /// Sets the linear velocity.
    pub fn set_linear_velocity(&mut self, velocity: &Vec3) {
        if let Some(record) = self.simulation.record_mut(self.index) {
            record.linear_velocity = convert::to_internal_vec(velocity);
        }
    }

    /// The linear velocity; zero without a backend.
    pub fn linear_velocity(&self) -> Vec3 {
        self.simulation
            .record(self.index)
            .map_or(Vec3::ZERO, |record| {
                convert::from_internal_vec(&record.linear_velocity)
            })
    }

    /// Sets the angular velocity.
    pub fn set_angular_velocity(&mut self, velocity: &Vec3) {
        if let Some(record) = self.simulation.record_mut(self.index) {
            record.angular_velocity = convert::to_internal_vec(velocity);
        }
    }

    /// The angular velocity; zero without a backend.
    pub fn angular_velocity(&self) -> Vec3 {
        self.simulation
            .record(self.index)
            .map_or(Vec3::ZERO, |record| {
                convert::from_internal_vec(&record.angular_velocity)
            })
    }

    /// Sets the linear damping.
    pub fn set_linear_damping(&mut self, damping: f32) {
        if let Some(record) = self.simulation.record_mut(self.index) {
            record.linear_damping = damping;
        }
    }

    /// The linear damping; zero without a backend.
    pub fn linear_damping(&self) -> f32 {
        self.simulation
            .record(self.index)
            .map_or(0.0, |record| record.linear_damping)
    }

    /// Sets the angular damping.
    pub fn set_angular_damping(&mut self, damping: f32) {
        if let Some(record) = self.simulation.record_mut(self.index) {
            record.angular_damping = damping;
        }
    }

    /// The angular damping; zero without a backend.
    pub fn angular_damping(&self) -> f32 {
        self.simulation
            .record(self.index)
            .map_or(0.0, |record| record.angular_damping)
    }

    /// Sets the max linear velocity squared.
    pub fn set_max_linear_velocity_squared(&mut self, max: f32) {
        if let Some(record) = self.simulation.record_mut(self.index) {
            record.max_linear_velocity_sq = max;
        }
    }

    /// The max linear velocity squared; zero without a backend.
    pub fn max_linear_velocity_squared(&self) -> f32 {
        self.simulation
            .record(self.index)
            .map_or(0.0, |record| record.max_linear_velocity_sq)
    }

    /// Sets the max angular velocity squared.
    pub fn set_max_angular_velocity_squared(&mut self, max: f32) {
        if let Some(record) = self.simulation.record_mut(self.index) {
            record.max_angular_velocity_sq = max;
        }
    }

    /// The max angular velocity squared; zero without a backend.
    pub fn max_angular_velocity_squared(&self) -> f32 {
        self.simulation
            .record(self.index)
            .map_or(0.0, |record| record.max_angular_velocity_sq)
    }

    /// Sets the inverse mass. `0` designates a kinematic body.
    ///
    /// Written verbatim: no rounding or clamping is introduced here.
    pub fn set_inverse_mass(&mut self, inv_mass: f32) {
        if let Some(record) = self.simulation.record_mut(self.index) {
            record.inv_mass = inv_mass;
        }
    }

    /// The inverse mass; zero without a backend.
    pub fn inverse_mass(&self) -> f32 {
        self.simulation
            .record(self.index)
            .map_or(0.0, |record| record.inv_mass)
    }

    /// Sets the inverse inertia (mass-space diagonal vector).
    pub fn set_inverse_inertia(&mut self, inv_inertia: &Vec3) {
        if let Some(record) = self.simulation.record_mut(self.index) {
            record.inv_inertia = convert::to_internal_vec(inv_inertia);
        }
    }

    /// The inverse inertia (mass-space diagonal); zero without a backend.
    pub fn inverse_inertia(&self) -> Vec3 {
        self.simulation
            .record(self.index)
            .map_or(Vec3::ZERO, |record| {
                convert::from_internal_vec(&record.inv_inertia)
            })
    }

    /// Sets the max depenetration velocity.
    pub fn set_max_depenetration_velocity(&mut self, max: f32) {
        if let Some(record) = self.simulation.record_mut(self.index) {
            record.max_depenetration_velocity = max;
        }
    }

    /// The max depenetration velocity; zero without a backend.
    pub fn max_depenetration_velocity(&self) -> f32 {
        self.simulation
            .record(self.index)
            .map_or(0.0, |record| record.max_depenetration_velocity)
    }

    /// Sets the max contact impulse.
    pub fn set_max_contact_impulse(&mut self, max: f32) {
        if let Some(record) = self.simulation.record_mut(self.index) {
            record.max_contact_impulse = max;
        }
    }

    /// The max contact impulse; zero without a backend.
    pub fn max_contact_impulse(&self) -> f32 {
        self.simulation
            .record(self.index)
            .map_or(0.0, |record| record.max_contact_impulse)
    }

    /// Applies a radial force to this body by delegating to the simulation.
    ///
    /// The falloff curve and force-type semantics are the simulation's
    /// responsibility; nothing is computed locally.
    pub fn add_radial_force(
        &mut self,
        origin: &Vec3,
        strength: f32,
        radius: f32,
        falloff: RadialFalloff,
        force_type: ForceType,
    ) {
        self.simulation
            .apply_radial_force(self.index, origin, strength, radius, falloff, force_type);
    }
}
