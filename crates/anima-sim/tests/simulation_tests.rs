// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::float_cmp)]
//! Arena behavior: simulated-first partitioning, removal, radial forces.

use anima_math::{Quat, Transform, Vec3};
use anima_sim::{
    ActorIndex, ActorSetup, ForceType, LocalSimulation, RadialFalloff, SimError,
    SimulationSettings,
};

fn setup_at(x: f32) -> ActorSetup {
    ActorSetup {
        world_transform: Transform::new(Vec3::new(x, 0.0, 0.0), Quat::identity(), Vec3::ONE),
        ..ActorSetup::default()
    }
}

#[test]
fn dynamic_actors_occupy_the_low_slots() {
    let mut sim = LocalSimulation::new(SimulationSettings::default());
    let d0 = sim.create_dynamic_actor(&setup_at(0.0));
    let k0 = sim.create_kinematic_actor(&setup_at(1.0));
    assert_eq!(d0.get(), 0);
    assert_eq!(k0.get(), 1);

    // A later dynamic actor displaces the kinematic one to the end.
    let d1 = sim.create_dynamic_actor(&setup_at(2.0));
    assert_eq!(d1.get(), 1);
    assert_eq!(sim.body_count(), 3);
    assert_eq!(sim.simulated_count(), 2);
    assert!(sim.is_simulated(d0));
    assert!(sim.is_simulated(d1));
    assert!(!sim.is_simulated(ActorIndex::from_raw(2)));

    // The relocated kinematic body kept its state: its record now lives in
    // slot 2 with the infinite-mass marker.
    let relocated = sim.actor(ActorIndex::from_raw(2));
    assert_eq!(relocated.inverse_mass(), 0.0);
    assert_eq!(
        relocated.world_transform().translation(),
        Vec3::new(1.0, 0.0, 0.0)
    );
}

#[test]
fn settings_are_retained_for_the_host() {
    let settings = SimulationSettings {
        gravity: Vec3::new(0.0, -1.0, 0.0),
        initial_body_capacity: 4,
    };
    let sim = LocalSimulation::new(settings.clone());
    assert_eq!(sim.settings(), &settings);
}

#[test]
fn dynamic_actors_start_with_unit_mass_properties() {
    let mut sim = LocalSimulation::new(SimulationSettings::default());
    let index = sim.create_dynamic_actor(&ActorSetup::default());
    let handle = sim.actor(index);
    assert_eq!(handle.inverse_mass(), 1.0);
    assert_eq!(handle.inverse_inertia(), Vec3::ONE);
}

#[test]
fn kinematic_marker_is_written_verbatim() {
    let mut sim = LocalSimulation::new(SimulationSettings::default());
    let index = sim.create_dynamic_actor(&ActorSetup::default());
    let mut handle = sim.actor(index);
    handle.set_inverse_mass(0.0);
    // Exactly zero: no rounding or clamping at this layer.
    assert_eq!(handle.inverse_mass(), 0.0);

    handle.set_inverse_mass(-3.5);
    // Inputs are unconstrained here; even nonsense passes through untouched.
    assert_eq!(handle.inverse_mass(), -3.5);
}

#[test]
fn removal_repairs_the_partition() {
    let mut sim = LocalSimulation::new(SimulationSettings::default());
    let d0 = sim.create_dynamic_actor(&setup_at(0.0));
    let d1 = sim.create_dynamic_actor(&setup_at(1.0));
    let d2 = sim.create_dynamic_actor(&setup_at(2.0));
    let k0 = sim.create_kinematic_actor(&setup_at(3.0));

    // Tag each body so relocation is observable.
    sim.actor(d0).set_linear_damping(0.1);
    sim.actor(d1).set_linear_damping(0.2);
    sim.actor(d2).set_linear_damping(0.3);
    sim.actor(k0).set_linear_damping(0.9);

    sim.remove_actor(d0).unwrap();
    assert_eq!(sim.body_count(), 3);
    assert_eq!(sim.simulated_count(), 2);

    // The last simulated body backfills slot 0; the kinematic body closes
    // the tail gap.
    assert_eq!(sim.actor(ActorIndex::from_raw(0)).linear_damping(), 0.3);
    assert_eq!(sim.actor(ActorIndex::from_raw(1)).linear_damping(), 0.2);
    assert_eq!(sim.actor(ActorIndex::from_raw(2)).linear_damping(), 0.9);
    assert!(!sim.is_simulated(ActorIndex::from_raw(2)));
}

#[test]
fn removing_an_unknown_index_is_an_error() {
    let mut sim = LocalSimulation::new(SimulationSettings::default());
    let err = sim.remove_actor(ActorIndex::from_raw(99));
    assert!(matches!(err, Err(SimError::UnknownActor { index: 99 })));
}

#[test]
fn radial_impulse_pushes_away_from_origin() {
    let mut sim = LocalSimulation::new(SimulationSettings::default());
    let index = sim.create_dynamic_actor(&setup_at(4.0));
    let mut handle = sim.actor(index);

    handle.add_radial_force(
        &Vec3::ZERO,
        5.0,
        10.0,
        RadialFalloff::Constant,
        ForceType::Impulse,
    );
    // Unit inverse mass: the velocity change equals the strength.
    assert_eq!(handle.linear_velocity(), Vec3::new(5.0, 0.0, 0.0));
}

#[test]
fn radial_force_respects_radius_and_falloff() {
    let mut sim = LocalSimulation::new(SimulationSettings::default());
    let index = sim.create_dynamic_actor(&setup_at(4.0));

    // Outside the radius: nothing happens.
    let mut handle = sim.actor(index);
    handle.add_radial_force(
        &Vec3::ZERO,
        5.0,
        2.0,
        RadialFalloff::Constant,
        ForceType::Impulse,
    );
    assert_eq!(handle.linear_velocity(), Vec3::ZERO);

    // Linear falloff at half the radius applies half the strength.
    handle.add_radial_force(
        &Vec3::ZERO,
        6.0,
        8.0,
        RadialFalloff::Linear,
        ForceType::Impulse,
    );
    assert_eq!(handle.linear_velocity(), Vec3::new(3.0, 0.0, 0.0));
}

#[test]
fn radial_force_skips_kinematic_bodies() {
    let mut sim = LocalSimulation::new(SimulationSettings::default());
    let index = sim.create_dynamic_actor(&setup_at(4.0));
    let mut handle = sim.actor(index);
    handle.set_inverse_mass(0.0);
    handle.add_radial_force(
        &Vec3::ZERO,
        5.0,
        10.0,
        RadialFalloff::Constant,
        ForceType::Impulse,
    );
    assert_eq!(handle.linear_velocity(), Vec3::ZERO);
}

#[test]
fn radial_force_type_accumulates_instead_of_kicking() {
    let mut sim = LocalSimulation::new(SimulationSettings::default());
    let index = sim.create_dynamic_actor(&setup_at(4.0));

    let mut handle = sim.actor(index);
    handle.add_radial_force(
        &Vec3::ZERO,
        5.0,
        10.0,
        RadialFalloff::Constant,
        ForceType::Force,
    );
    handle.add_radial_force(
        &Vec3::ZERO,
        5.0,
        10.0,
        RadialFalloff::Constant,
        ForceType::Force,
    );
    // Velocity untouched; the host's integrator consumes the accumulation.
    assert_eq!(handle.linear_velocity(), Vec3::ZERO);
    assert_eq!(sim.pending_force(index), Vec3::new(10.0, 0.0, 0.0));

    sim.clear_pending_forces();
    assert_eq!(sim.pending_force(index), Vec3::ZERO);
}

#[test]
fn body_at_the_origin_has_no_defined_push_direction() {
    let mut sim = LocalSimulation::new(SimulationSettings::default());
    let index = sim.create_dynamic_actor(&setup_at(0.0));
    let mut handle = sim.actor(index);
    handle.add_radial_force(
        &Vec3::ZERO,
        5.0,
        10.0,
        RadialFalloff::Constant,
        ForceType::Impulse,
    );
    assert_eq!(handle.linear_velocity(), Vec3::ZERO);
}
