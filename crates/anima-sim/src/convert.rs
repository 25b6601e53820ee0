// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Unit/axis-convention conversion at the simulation boundary.
//!
//! Every vector and pose crossing between the client-facing surface and the
//! internal record array routes through this pair. The current backend shares
//! the client's conventions, so each conversion is the value-preserving
//! identity, but keeping the seam explicit means a backend with a different
//! handedness or unit scale plugs in here without touching the handle.
//!
//! Round trips through any pair are lossless.

use anima_math::{Isometry, Vec3};

/// Converts a client-facing vector into the internal convention.
pub(crate) fn to_internal_vec(v: &Vec3) -> Vec3 {
    *v
}

/// Converts an internal vector into the client-facing convention.
pub(crate) fn from_internal_vec(v: &Vec3) -> Vec3 {
    *v
}

/// Converts a client-facing rigid pose into the internal convention.
pub(crate) fn to_internal_pose(pose: &Isometry) -> Isometry {
    *pose
}

/// Converts an internal rigid pose into the client-facing convention.
pub(crate) fn from_internal_pose(pose: &Isometry) -> Isometry {
    *pose
}

#[cfg(test)]
mod tests {
    use super::*;
    use anima_math::Quat;

    #[test]
    fn conversions_round_trip_losslessly() {
        let v = Vec3::new(1.5, -2.25, 0.125);
        assert_eq!(from_internal_vec(&to_internal_vec(&v)), v);

        let pose = Isometry::new(
            Quat::from_axis_angle(Vec3::UNIT_Y, 0.5),
            Vec3::new(-3.0, 7.0, 0.5),
        );
        assert_eq!(from_internal_pose(&to_internal_pose(&pose)), pose);
    }
}
