// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Radial force parameters consumed by the simulation.

/// How a radial force's strength decays with distance from its origin.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RadialFalloff {
    /// Full strength everywhere inside the radius.
    Constant,
    /// Strength scales by `1 − distance/radius` inside the radius.
    Linear,
}

/// How a radial force is applied to a body.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ForceType {
    /// Accumulated as a force for the next integration step.
    Force,
    /// Applied immediately as a velocity change scaled by inverse mass.
    Impulse,
}
