// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid-aligned tile coverage of a visible rectangle.

use crate::geometry::PixelRect;
use crate::zoom::ZoomLevel;

/// Which document pane a tile (or a point) belongs to.
///
/// The numeric tags match the tile-server encoding: `0` for the only pane of a
/// single-pane view, `1` and `2` for the left and right panes of a split view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pane {
    /// The only pane of a single-pane view.
    Single,
    /// Left pane of a split view.
    Left,
    /// Right pane of a split view.
    Right,
}

impl Pane {
    /// Wire tag of this pane.
    #[must_use]
    pub const fn tag(self) -> u8 {
        match self {
            Self::Single => 0,
            Self::Left => 1,
            Self::Right => 2,
        }
    }
}

/// Identifies one tile to request from the tile server.
///
/// `x` and `y` are document-pixel offsets of the tile's top-left corner and are
/// always multiples of the tile size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileCoordinate {
    /// Left edge in document pixels.
    pub x: u32,
    /// Top edge in document pixels.
    pub y: u32,
    /// Zoom level the tile is rendered at.
    pub zoom: ZoomLevel,
    /// Document part (page, sheet or slide) index.
    pub part: i32,
    /// Pane the tile is rendered for.
    pub pane: Pane,
}

/// Fixed-size square tile grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileGrid {
    tile_size: u32,
}

impl TileGrid {
    /// Creates a grid of `tile_size`-pixel tiles.
    ///
    /// A zero size produces a grid that never yields any tile.
    #[must_use]
    pub const fn new(tile_size: u32) -> Self {
        Self { tile_size }
    }

    /// Tile edge length in document pixels.
    #[must_use]
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Returns the tiles covering `rect`, one entry per cell and pane.
    ///
    /// The covering starts at the tile boundary at or before the rectangle's
    /// origin, so it may over-cover by up to one tile per edge. Cells with a
    /// negative origin are skipped. Columns are visited in the outer loop and
    /// every surviving cell is emitted once per entry of `panes`, in order.
    #[must_use]
    pub fn visible_tiles(
        &self,
        rect: &PixelRect,
        zoom: ZoomLevel,
        part: i32,
        panes: &[Pane],
    ) -> Vec<TileCoordinate> {
        let mut out = Vec::new();
        self.extend_visible_tiles(rect, zoom, part, panes, &mut out);
        out
    }

    /// Like [`TileGrid::visible_tiles`], but clears and fills `out` so callers
    /// can reuse its allocation.
    pub fn extend_visible_tiles(
        &self,
        rect: &PixelRect,
        zoom: ZoomLevel,
        part: i32,
        panes: &[Pane],
        out: &mut Vec<TileCoordinate>,
    ) {
        out.clear();
        if self.tile_size == 0 || panes.is_empty() {
            return;
        }
        let tile = f64::from(self.tile_size);
        let columns = cell_count(rect.width(), tile);
        let rows = cell_count(rect.height(), tile);
        let start_x = (rect.x1() / tile).floor() * tile;
        let start_y = (rect.y1() / tile).floor() * tile;

        out.reserve(columns * rows * panes.len());
        for i in 0..columns {
            let x = start_x + tile * i as f64;
            for j in 0..rows {
                let y = start_y + tile * j as f64;
                if x < 0.0 || y < 0.0 || x > f64::from(u32::MAX) || y > f64::from(u32::MAX) {
                    continue;
                }
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "x and y are non-negative integral values checked to fit in u32"
                )]
                let (x, y) = (x as u32, y as u32);
                out.extend(panes.iter().map(|&pane| TileCoordinate {
                    x,
                    y,
                    zoom,
                    part,
                    pane,
                }));
            }
        }
    }
}

fn cell_count(extent: f64, tile: f64) -> usize {
    if extent.is_nan() || extent <= 0.0 {
        return 0;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "a ceil()ed, positive cell count; saturates on absurd extents"
    )]
    {
        (extent / tile).ceil() as usize
    }
}
