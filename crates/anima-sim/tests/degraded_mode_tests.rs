// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::float_cmp)]
//! Behavior without a physics backend: every read is a documented neutral
//! default, every write a silent no-op. Not an error path.

use anima_math::{Isometry, Quat, Transform, Vec3};
use anima_sim::{ActorSetup, ForceType, LocalSimulation, RadialFalloff, SimulationSettings};

fn degraded_sim_with_actor() -> (LocalSimulation, anima_sim::ActorIndex) {
    let mut sim = LocalSimulation::without_backend(SimulationSettings::default());
    let index = sim.create_dynamic_actor(&ActorSetup::default());
    (sim, index)
}

#[test]
fn backend_flag_reports_degraded_mode() {
    let sim = LocalSimulation::without_backend(SimulationSettings::default());
    assert!(!sim.has_backend());
    assert!(LocalSimulation::new(SimulationSettings::default()).has_backend());
}

#[test]
fn transform_reads_return_identity() {
    let (mut sim, index) = degraded_sim_with_actor();
    let handle = sim.actor(index);
    assert_eq!(handle.world_transform(), Transform::identity());
    assert_eq!(handle.body_transform(), Isometry::identity());
    assert_eq!(handle.projected_transform(), Isometry::identity());
}

#[test]
fn scalar_and_vector_reads_return_zero() {
    let (mut sim, index) = degraded_sim_with_actor();
    let handle = sim.actor(index);
    assert_eq!(handle.linear_velocity(), Vec3::ZERO);
    assert_eq!(handle.angular_velocity(), Vec3::ZERO);
    assert_eq!(handle.linear_damping(), 0.0);
    assert_eq!(handle.angular_damping(), 0.0);
    assert_eq!(handle.max_linear_velocity_squared(), 0.0);
    assert_eq!(handle.max_angular_velocity_squared(), 0.0);
    assert_eq!(handle.inverse_mass(), 0.0);
    assert_eq!(handle.inverse_inertia(), Vec3::ZERO);
    assert_eq!(handle.max_depenetration_velocity(), 0.0);
    assert_eq!(handle.max_contact_impulse(), 0.0);
}

#[test]
fn writes_have_no_observable_effect() {
    let (mut sim, index) = degraded_sim_with_actor();
    let mut handle = sim.actor(index);

    handle.set_world_transform(&Transform::new(
        Vec3::new(10.0, 0.0, 0.0),
        Quat::from_axis_angle(Vec3::UNIT_Z, 1.0),
        Vec3::ONE,
    ));
    handle.set_linear_velocity(&Vec3::new(1.0, 2.0, 3.0));
    handle.set_angular_velocity(&Vec3::new(4.0, 5.0, 6.0));
    handle.set_linear_damping(0.5);
    handle.set_angular_damping(0.25);
    handle.set_max_linear_velocity_squared(100.0);
    handle.set_max_angular_velocity_squared(50.0);
    handle.set_inverse_mass(2.0);
    handle.set_inverse_inertia(&Vec3::ONE);
    handle.set_max_depenetration_velocity(3.0);
    handle.set_max_contact_impulse(7.0);

    assert_eq!(handle.world_transform(), Transform::identity());
    assert_eq!(handle.linear_velocity(), Vec3::ZERO);
    assert_eq!(handle.angular_velocity(), Vec3::ZERO);
    assert_eq!(handle.linear_damping(), 0.0);
    assert_eq!(handle.angular_damping(), 0.0);
    assert_eq!(handle.max_linear_velocity_squared(), 0.0);
    assert_eq!(handle.max_angular_velocity_squared(), 0.0);
    assert_eq!(handle.inverse_mass(), 0.0);
    assert_eq!(handle.inverse_inertia(), Vec3::ZERO);
    assert_eq!(handle.max_depenetration_velocity(), 0.0);
    assert_eq!(handle.max_contact_impulse(), 0.0);
}

#[test]
fn radial_force_is_a_no_op() {
    let (mut sim, index) = degraded_sim_with_actor();
    let mut handle = sim.actor(index);
    handle.add_radial_force(
        &Vec3::ZERO,
        100.0,
        50.0,
        RadialFalloff::Constant,
        ForceType::Force,
    );
    assert_eq!(sim.pending_force(index), Vec3::ZERO);
}

#[test]
fn bookkeeping_still_functions_without_backend() {
    let (mut sim, index) = degraded_sim_with_actor();
    // Partition bookkeeping is simulation state, not backend state.
    assert!(sim.is_simulated(index));
    assert_eq!(sim.body_count(), 1);
    assert_eq!(sim.simulated_count(), 1);

    // Actor-space bookkeeping survives too: scale is client-supplied.
    let mut handle = sim.actor(index);
    handle.set_actor_scale(Vec3::new(2.0, 2.0, 2.0));
    assert_eq!(handle.actor_scale(), Vec3::new(2.0, 2.0, 2.0));
    // But the transform read stays identity: scale is never attached to a
    // pose that does not exist.
    assert_eq!(handle.world_transform(), Transform::identity());

    assert!(sim.remove_actor(index).is_ok());
    assert_eq!(sim.body_count(), 0);
}
