// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![doc = r"Local rigid-body simulation arena for Anima.

This crate owns a growable array of low-level body records and hands out
[`ActorHandle`] views over individual slots. The handle is the sole boundary
through which per-body state is read or written: it reconciles the client's
actor-space convention (arbitrary authored origin, scaled) with the internal
body-space convention (origin at center of mass, axes aligned to the
principal inertia tensor, unscaled).

What this crate does NOT do: integration, collision detection, or constraint
solving. Those belong to the host that drives [`LocalSimulation`] between
handle accesses.

Design notes:
- Backend selection happens once at construction: an active backend owns the
  record array; the null backend turns every read into a documented neutral
  default and every write into a no-op (degraded mode, not an error).
- Handles borrow the simulation exclusively, so aliased mutation of a slot
  is rejected at compile time.
- Rustdoc is treated as part of the contract; public items are documented.
"]

mod backend;
mod body;
mod convert;
mod forces;
mod handle;
mod settings;
mod simulation;

pub use body::BodyRecord;
pub use forces::{ForceType, RadialFalloff};
pub use handle::ActorHandle;
pub use settings::SimulationSettings;
pub use simulation::{ActorIndex, ActorSetup, LocalSimulation, SimError};
