// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discrete zoom levels.

/// Multiplicative step between two adjacent zoom levels.
const ZOOM_STEP: f64 = 1.2;

/// A discrete zoom level.
///
/// Levels are small integers; the baseline level of a [`ZoomRange`] renders at
/// 100%, and every step above or below multiplies or divides the scale by 1.2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomLevel(pub u8);

impl ZoomLevel {
    /// Returns the raw level.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Scale factor of this level relative to `baseline`.
    #[must_use]
    pub fn scale_relative_to(self, baseline: Self) -> f64 {
        ZOOM_STEP.powi(i32::from(self.0) - i32::from(baseline.0))
    }

    /// The next level up, saturating at `u8::MAX`.
    #[must_use]
    pub const fn step_up(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// The next level down, saturating at zero.
    #[must_use]
    pub const fn step_down(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

/// Bounds and baseline for zoom searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomRange {
    /// Lowest level a search may consider.
    pub min: ZoomLevel,
    /// Highest level a search may consider.
    pub max: ZoomLevel,
    /// Level rendered at 100%; searches start here.
    pub baseline: ZoomLevel,
}

impl ZoomRange {
    /// Returns `true` if `min <= baseline <= max`.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.min <= self.baseline && self.baseline <= self.max
    }

    /// Scale factor of `level` relative to the baseline.
    #[must_use]
    pub fn scale(&self, level: ZoomLevel) -> f64 {
        level.scale_relative_to(self.baseline)
    }
}

impl Default for ZoomRange {
    fn default() -> Self {
        Self {
            min: ZoomLevel(1),
            max: ZoomLevel(20),
            baseline: ZoomLevel(10),
        }
    }
}
