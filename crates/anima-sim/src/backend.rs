// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Backend selection: a live record store or the null degraded mode.

use crate::body::BodyRecord;

/// Storage backend chosen once at simulation construction.
///
/// `Active` owns the growable record array. `Null` models running without a
/// physics backend: every lookup yields `None`, which the handle layer maps
/// to neutral defaults (reads) and no-ops (writes). Selecting the variant at
/// configuration time replaces the original's conditional compilation.
#[derive(Debug)]
pub(crate) enum Backend {
    /// Records are stored and mutated.
    Active(Vec<BodyRecord>),
    /// Degraded mode: no storage, no effects.
    Null,
}

impl Backend {
    /// Returns `true` when records are actually stored.
    pub(crate) fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// Record at `index`, or `None` when out of range or in degraded mode.
    pub(crate) fn record(&self, index: usize) -> Option<&BodyRecord> {
        match self {
            Self::Active(records) => records.get(index),
            Self::Null => None,
        }
    }

    /// Mutable record at `index`, or `None` when out of range or degraded.
    pub(crate) fn record_mut(&mut self, index: usize) -> Option<&mut BodyRecord> {
        match self {
            Self::Active(records) => records.get_mut(index),
            Self::Null => None,
        }
    }

    /// Appends a record; silently dropped in degraded mode.
    pub(crate) fn push(&mut self, record: BodyRecord) {
        if let Self::Active(records) = self {
            records.push(record);
        }
    }

    /// Swaps two records; no-op in degraded mode.
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        if let Self::Active(records) = self {
            records.swap(a, b);
        }
    }

    /// Removes the record at `index` by swapping in the last one.
    pub(crate) fn swap_remove(&mut self, index: usize) {
        if let Self::Active(records) = self {
            if index < records.len() {
                records.swap_remove(index);
            }
        }
    }
}
