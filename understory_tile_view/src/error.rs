// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

use crate::zoom::ZoomRange;

/// A [`LayoutConfig`](crate::LayoutConfig) value that cannot drive a layout.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Tiles must have a non-zero edge length.
    #[error("tile size must be greater than zero")]
    TileSize,
    /// The pixel-density scale must be finite and positive.
    #[error("dpi scale must be finite and positive, got {0}")]
    DpiScale(f64),
    /// A spacing value (pane gap or top margin) is negative or not finite.
    #[error("{name} must be finite and non-negative, got {value}")]
    Spacing {
        /// Which spacing field was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The zoom range is inverted or its baseline lies outside it.
    #[error("zoom range must satisfy min <= baseline <= max, got {0:?}")]
    ZoomRange(ZoomRange),
}
