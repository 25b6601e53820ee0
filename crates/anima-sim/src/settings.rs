// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Simulation construction settings.

use anima_math::Vec3;

/// Settings fixed at simulation construction.
///
/// The simulation itself does not integrate; `gravity` is stored here for
/// the host's integration step to read back through
/// [`crate::LocalSimulation::settings`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationSettings {
    /// World-space gravity in units per second squared.
    pub gravity: Vec3,
    /// Record capacity reserved up front to avoid early reallocation.
    pub initial_body_capacity: usize,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -9.81, 0.0),
            initial_body_capacity: 16,
        }
    }
}
