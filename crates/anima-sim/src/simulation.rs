// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The simulation arena: record storage, actor bookkeeping, radial forces.

use anima_math::{Isometry, Transform, Vec3};
use thiserror::Error;
use tracing::{debug, trace};

use crate::backend::Backend;
use crate::body::BodyRecord;
use crate::convert;
use crate::forces::{ForceType, RadialFalloff};
use crate::handle::ActorHandle;
use crate::settings::SimulationSettings;

/// Opaque slot position of a body in the simulation's internal storage.
///
/// An index is meaningful only in the context of the simulation that issued
/// it, and only until that simulation reorders or removes bodies: creation
/// and removal both repair the simulated-first partition by swapping slots,
/// which relocates whichever actor previously occupied the touched slot.
/// The simulation is the sole authority on validity; nothing at this layer
/// re-validates an index on the caller's behalf.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ActorIndex(pub(crate) usize);

impl ActorIndex {
    /// Wraps a raw slot position.
    ///
    /// For hosts that track slot relocations themselves; the wrapped value
    /// is not validated.
    pub fn from_raw(index: usize) -> Self {
        Self(index)
    }

    /// Raw slot position, for hosts that key external data by slot.
    pub fn get(self) -> usize {
        self.0
    }
}

/// Errors emitted by arena mutation.
#[derive(Debug, Error)]
pub enum SimError {
    /// The index does not reference a live actor.
    #[error("unknown actor index {index}")]
    UnknownActor {
        /// The offending slot position.
        index: usize,
    },
}

/// Parameters for creating an actor.
///
/// `body_frame` is the actor→body offset: the rigid transform from the
/// client-authored actor frame to the internal body frame (origin at center
/// of mass, axes aligned to the principal inertia tensor). It is fixed at
/// creation; no mutator exists afterwards.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorSetup {
    /// Initial world transform in the actor frame, scale included.
    pub world_transform: Transform,
    /// Actor→body offset; identity when the authored origin is the center
    /// of mass.
    pub body_frame: Isometry,
}

/// Per-actor translation bookkeeping, parallel to the record array.
///
/// Lives here rather than in the handle because handles are transient
/// reborrows; the slot is the stable home for the actor→body offset, the
/// client-supplied scale, and the external body-type discriminator.
#[derive(Debug, Clone)]
pub(crate) struct ActorState {
    /// Actor→body rigid offset; no scale component, ever.
    pub(crate) actor_to_body: Isometry,
    /// Client-supplied scale, reattached on world-transform reads.
    pub(crate) actor_scale: Vec3,
    /// External discriminator of body kind; `-1` means unset.
    pub(crate) rigid_body_type: i32,
}

/// Arena owning the low-level body records and all per-actor bookkeeping.
///
/// Records are partitioned simulated-first: slots `0..simulated_count()` are
/// dynamic (simulated) bodies, the rest kinematic. All per-body access goes
/// through [`ActorHandle`] views obtained from [`LocalSimulation::actor`].
///
/// Single-threaded access model: handles mutate the backing array directly
/// with no locking; the exclusive borrow a handle takes on the simulation is
/// what makes aliased slot mutation unrepresentable.
#[derive(Debug)]
pub struct LocalSimulation {
    backend: Backend,
    actors: Vec<ActorState>,
    pending_forces: Vec<Vec3>,
    num_simulated: usize,
    settings: SimulationSettings,
}

impl LocalSimulation {
    /// Creates a simulation with a live record store.
    pub fn new(settings: SimulationSettings) -> Self {
        Self {
            backend: Backend::Active(Vec::with_capacity(settings.initial_body_capacity)),
            actors: Vec::with_capacity(settings.initial_body_capacity),
            pending_forces: Vec::with_capacity(settings.initial_body_capacity),
            num_simulated: 0,
            settings,
        }
    }

    /// Creates a simulation in degraded mode: no backend is active, reads
    /// return neutral defaults, and writes are silent no-ops.
    ///
    /// Bookkeeping (actor creation, partition queries) still functions so
    /// client code can run unchanged without a backend.
    pub fn without_backend(settings: SimulationSettings) -> Self {
        Self {
            backend: Backend::Null,
            actors: Vec::new(),
            pending_forces: Vec::new(),
            num_simulated: 0,
            settings,
        }
    }

    /// Whether a record store is active (`false` in degraded mode).
    pub fn has_backend(&self) -> bool {
        self.backend.is_active()
    }

    /// The settings this simulation was constructed with.
    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    /// Total number of actors, simulated and kinematic.
    pub fn body_count(&self) -> usize {
        self.actors.len()
    }

    /// Number of simulated (dynamic) actors; they occupy the low slots.
    pub fn simulated_count(&self) -> usize {
        self.num_simulated
    }

    /// Whether the slot holds a simulated body; `false` when out of range.
    pub fn is_simulated(&self, index: ActorIndex) -> bool {
        index.0 < self.num_simulated
    }

    /// Creates a dynamic (simulated) actor and returns its slot.
    ///
    /// The new record lands at the simulated partition boundary; if a
    /// kinematic actor occupied that slot it is relocated to the end of the
    /// array (see [`ActorIndex`] on index stability). Dynamic actors start
    /// with unit inverse mass and inertia; adjust them through the handle.
    pub fn create_dynamic_actor(&mut self, setup: &ActorSetup) -> ActorIndex {
        let record = BodyRecord {
            body_to_world: initial_pose(setup),
            inv_mass: 1.0,
            inv_inertia: Vec3::ONE,
            ..BodyRecord::default()
        };
        self.push_slot(record, setup);
        let slot = self.num_simulated;
        let end = self.actors.len() - 1;
        self.swap_slots(slot, end);
        self.num_simulated += 1;
        debug!(index = slot, "created dynamic actor");
        ActorIndex(slot)
    }

    /// Creates a kinematic actor (infinite mass, never simulated) and
    /// returns its slot at the end of the array.
    pub fn create_kinematic_actor(&mut self, setup: &ActorSetup) -> ActorIndex {
        let record = BodyRecord {
            body_to_world: initial_pose(setup),
            ..BodyRecord::default()
        };
        self.push_slot(record, setup);
        let slot = self.actors.len() - 1;
        debug!(index = slot, "created kinematic actor");
        ActorIndex(slot)
    }

    /// Removes the actor at `index`.
    ///
    /// Repairs the simulated-first partition by swapping, so the actor that
    /// previously occupied the last slot of the affected partition moves
    /// into `index`. Outstanding indices for relocated actors are the
    /// caller's to refresh.
    pub fn remove_actor(&mut self, index: ActorIndex) -> Result<(), SimError> {
        let idx = index.0;
        if idx >= self.actors.len() {
            return Err(SimError::UnknownActor { index: idx });
        }
        if idx < self.num_simulated {
            // Close the simulated partition over the gap first.
            let last_sim = self.num_simulated - 1;
            self.swap_slots(idx, last_sim);
            self.num_simulated -= 1;
            let last = self.actors.len() - 1;
            self.swap_slots(last_sim, last);
        } else {
            let last = self.actors.len() - 1;
            self.swap_slots(idx, last);
        }
        self.pop_slot();
        debug!(index = idx, "removed actor");
        Ok(())
    }

    /// Returns the handle for the actor at `index`.
    ///
    /// This is the only way to obtain an [`ActorHandle`]; the handle borrows
    /// the simulation exclusively for its lifetime. Precondition: `index`
    /// references a live actor — the simulation does not re-validate it.
    pub fn actor(&mut self, index: ActorIndex) -> ActorHandle<'_> {
        ActorHandle::new(self, index)
    }

    /// Applies a radial force or impulse centered at `origin`.
    ///
    /// Bodies outside `radius`, kinematic bodies, and non-simulated slots
    /// are unaffected. The push direction runs from `origin` to the body's
    /// center of mass; a body sitting exactly at the origin has no defined
    /// direction and is skipped. `Impulse` changes linear velocity
    /// immediately (scaled by inverse mass); `Force` accumulates into the
    /// pending-force buffer consumed by the host's integration step.
    pub fn apply_radial_force(
        &mut self,
        index: ActorIndex,
        origin: &Vec3,
        strength: f32,
        radius: f32,
        falloff: RadialFalloff,
        force_type: ForceType,
    ) {
        if !self.is_simulated(index) {
            return;
        }
        let idx = index.0;
        let Some(record) = self.backend.record_mut(idx) else {
            return;
        };
        if record.inv_mass <= 0.0 {
            return;
        }
        let com = convert::from_internal_pose(&record.body_to_world).translation();
        let delta = com.sub(origin);
        let distance = delta.length();
        if distance > radius {
            return;
        }
        let direction = delta.normalize();
        if direction == Vec3::ZERO {
            return;
        }
        let scaled = match falloff {
            RadialFalloff::Constant => strength,
            RadialFalloff::Linear => strength * (1.0 - distance / radius),
        };
        match force_type {
            ForceType::Impulse => {
                let dv = direction.scale(scaled * record.inv_mass);
                record.linear_velocity = record.linear_velocity.add(&convert::to_internal_vec(&dv));
            }
            ForceType::Force => {
                if let Some(pending) = self.pending_forces.get_mut(idx) {
                    *pending = pending.add(&direction.scale(scaled));
                }
            }
        }
        trace!(index = idx, strength, radius, "applied radial force");
    }

    /// Force accumulated for the slot since the last integration step.
    ///
    /// Zero for out-of-range slots and in degraded mode.
    pub fn pending_force(&self, index: ActorIndex) -> Vec3 {
        self.pending_forces.get(index.0).copied().unwrap_or(Vec3::ZERO)
    }

    /// Clears the pending-force buffer; the host calls this after it has
    /// consumed the accumulated forces in its integration step.
    pub fn clear_pending_forces(&mut self) {
        for pending in &mut self.pending_forces {
            *pending = Vec3::ZERO;
        }
    }

    pub(crate) fn record(&self, index: ActorIndex) -> Option<&BodyRecord> {
        self.backend.record(index.0)
    }

    pub(crate) fn record_mut(&mut self, index: ActorIndex) -> Option<&mut BodyRecord> {
        self.backend.record_mut(index.0)
    }

    pub(crate) fn state(&self, index: ActorIndex) -> Option<&ActorState> {
        self.actors.get(index.0)
    }

    pub(crate) fn state_mut(&mut self, index: ActorIndex) -> Option<&mut ActorState> {
        self.actors.get_mut(index.0)
    }

    fn push_slot(&mut self, record: BodyRecord, setup: &ActorSetup) {
        self.backend.push(record);
        self.actors.push(ActorState {
            actor_to_body: setup.body_frame,
            actor_scale: setup.world_transform.scale(),
            rigid_body_type: -1,
        });
        self.pending_forces.push(Vec3::ZERO);
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.backend.swap(a, b);
        self.actors.swap(a, b);
        self.pending_forces.swap(a, b);
    }

    fn pop_slot(&mut self) {
        let last = self.actors.len() - 1;
        self.backend.swap_remove(last);
        self.actors.pop();
        self.pending_forces.pop();
    }
}

/// Initial body pose: the actor→body offset applied on top of the authored
/// world transform, scale stripped. Mirrors
/// [`ActorHandle::set_world_transform`].
fn initial_pose(setup: &ActorSetup) -> Isometry {
    convert::to_internal_pose(&setup.world_transform.isometry().mul(&setup.body_frame))
}
