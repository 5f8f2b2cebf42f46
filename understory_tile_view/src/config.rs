// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static layout configuration.

use crate::error::ConfigError;
use crate::zoom::ZoomRange;

/// Tile edge length used by the tile server unless configured otherwise.
pub const DEFAULT_TILE_SIZE: u32 = 256;

/// Settings that stay fixed for the lifetime of a layout.
///
/// Spacing values are given in CSS pixels and converted to core pixels with
/// [`LayoutConfig::pane_gap_px`] and [`LayoutConfig::top_margin_px`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Edge length of a square tile, in document pixels.
    pub tile_size: u32,
    /// Device pixels per CSS pixel.
    pub dpi_scale: f64,
    /// Gap between the two panes of a split layout, in CSS pixels.
    pub pane_gap: f64,
    /// Space above the first page, in CSS pixels.
    pub top_margin: f64,
    /// Zoom bounds used by the zoom-to-fit search.
    pub zoom: ZoomRange,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            dpi_scale: 1.0,
            pane_gap: 20.0,
            top_margin: 20.0,
            zoom: ZoomRange::default(),
        }
    }
}

impl LayoutConfig {
    /// Checks that every field can drive a layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size == 0 {
            return Err(ConfigError::TileSize);
        }
        if !self.dpi_scale.is_finite() || self.dpi_scale <= 0.0 {
            return Err(ConfigError::DpiScale(self.dpi_scale));
        }
        for (name, value) in [("pane gap", self.pane_gap), ("top margin", self.top_margin)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Spacing { name, value });
            }
        }
        if !self.zoom.is_ordered() {
            return Err(ConfigError::ZoomRange(self.zoom));
        }
        Ok(())
    }

    /// Gap between split panes in core pixels.
    #[must_use]
    pub fn pane_gap_px(&self) -> f64 {
        (self.pane_gap / self.dpi_scale).round()
    }

    /// Space above the first page in core pixels.
    #[must_use]
    pub fn top_margin_px(&self) -> f64 {
        (self.top_margin / self.dpi_scale).round()
    }

    /// Tile edge length as a float, for geometry.
    #[must_use]
    pub fn tile_extent(&self) -> f64 {
        f64::from(self.tile_size)
    }
}
