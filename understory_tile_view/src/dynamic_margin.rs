// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single centered document with a side panel on its right.
//!
//! While the panel fits into the right-hand margin the document stays
//! centered. When the panel is wider than that margin, the document is moved
//! left just far enough for the panel to fit, provided the left margin can
//! absorb the move. Hiding or emptying the panel moves the document back.

use kurbo::{Size, Vec2};
use tracing::trace;

use crate::config::LayoutConfig;
use crate::geometry::PixelRect;
use crate::layout::Frame;
use crate::scroll::ScrollState;
use crate::zoom::{ZoomLevel, ZoomRange};

/// Placement of the document relative to its centered position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarginState {
    /// The document sits in the middle of the canvas.
    Centered,
    /// The document has been moved left to make room for the side panel.
    ShiftedLeft {
        /// Distance moved, in canvas pixels.
        offset: f64,
    },
}

#[derive(Clone, Debug)]
pub(crate) struct DynamicMargin {
    offset: f64,
    y_start: f64,
}

impl DynamicMargin {
    pub(crate) fn new(config: &LayoutConfig) -> Self {
        Self {
            offset: 0.0,
            y_start: config.top_margin_px(),
        }
    }

    pub(crate) fn offset(&self) -> f64 {
        self.offset
    }

    pub(crate) fn clear_offset(&mut self) {
        self.offset = 0.0;
    }

    pub(crate) fn shift_by(&mut self, delta: f64) {
        self.offset += delta;
    }

    pub(crate) fn state(&self) -> MarginState {
        if self.offset == 0.0 {
            MarginState::Centered
        } else {
            MarginState::ShiftedLeft {
                offset: self.offset,
            }
        }
    }

    /// Width of the empty space on each side of the centered document.
    pub(crate) fn margin(frame: &Frame) -> f64 {
        ((frame.canvas.width - frame.document.width) / 2.0).max(0.0)
    }

    pub(crate) fn view_size(&self, frame: &Frame, panel_width: f64) -> Size {
        Size::new(
            frame
                .canvas
                .width
                .max(frame.document.width + panel_width),
            frame
                .canvas
                .height
                .max(frame.document.height + self.y_start),
        )
    }

    pub(crate) fn visible_rect(&self, scroll: &ScrollState, frame: &Frame) -> PixelRect {
        PixelRect::from_core_pixels([
            scroll.view_x() - Self::margin(frame) + self.offset,
            scroll.view_y() - self.y_start,
            frame.canvas.width,
            frame.canvas.height,
        ])
    }

    /// Canvas position of document point `(0, 0)` at zero scroll.
    pub(crate) fn origin(&self, frame: &Frame) -> Vec2 {
        Vec2::new(Self::margin(frame) - self.offset, self.y_start)
    }
}

/// Whether moving the document left would make room for the panel.
///
/// The panel must be wider than the right margin (after `offset` has already
/// been moved), and the extra distance must not exceed what is left of the
/// left margin.
pub(crate) fn can_move_left(margin: f64, panel_width: f64, offset: f64) -> bool {
    let panel_wider_than_right_margin = margin + offset < panel_width;
    let enough_left_margin = panel_width - (margin + offset) <= margin - offset;
    panel_wider_than_right_margin && enough_left_margin
}

/// Extra distance to move the document left so the panel fits.
pub(crate) fn move_left_delta(margin: f64, panel_width: f64, offset: f64) -> f64 {
    panel_width - (margin + offset)
}

/// Whether the panel fits at full width if the document may use both margins.
pub(crate) fn has_space_for_full_width_panel(margin: f64, panel_width: f64) -> bool {
    margin * 2.0 >= panel_width
}

/// Projects the current view to other zoom levels to test whether document
/// and panel still fit side by side.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FitProbe {
    /// Canvas width in canvas pixels.
    pub(crate) canvas_width: f64,
    /// Document x under the canvas center at the current zoom, ignoring any
    /// panel shift.
    pub(crate) center_x: f64,
    /// Panel width, zero when the panel takes no space.
    pub(crate) panel_width: f64,
    pub(crate) current: ZoomLevel,
    pub(crate) range: ZoomRange,
}

impl FitProbe {
    /// Returns `true` if everything is still visible at `level`.
    pub(crate) fn fits(&self, level: ZoomLevel) -> bool {
        let ratio = self.range.scale(level) / self.range.scale(self.current);
        let center = self.center_x * ratio;
        let min_x = center - self.canvas_width / 2.0;
        let max_x = center + self.canvas_width / 2.0;
        // The window starts right of the document's left edge: the document
        // is wider than the canvas.
        if min_x > 0.0 {
            return false;
        }
        let canvas_width = max_x + min_x.abs();
        let document_width = max_x + min_x;
        let fits = document_width + self.panel_width <= canvas_width;
        trace!(level = level.get(), document_width, fits, "zoom probe");
        fits
    }
}

/// Largest zoom level at which `fits` holds, scanning from the baseline.
///
/// One step above the baseline is probed first. If it fits, levels are scanned
/// upward, otherwise downward; the scan keeps the last fitting level and stops
/// at the first failure. Both scans stop one short of the range bounds, and the
/// baseline itself is returned when the first scanned level fails. `fits` is
/// assumed monotonic in the scanned direction; otherwise the result is only a
/// local boundary.
pub(crate) fn search_max_zoom(
    range: ZoomRange,
    mut fits: impl FnMut(ZoomLevel) -> bool,
) -> ZoomLevel {
    let baseline = range.baseline;
    let mut zoom = baseline;
    if fits(baseline.step_up()) {
        for level in baseline.get().saturating_add(1)..range.max.get() {
            let level = ZoomLevel(level);
            if !fits(level) {
                break;
            }
            zoom = level;
        }
    } else {
        for level in (range.min.get().saturating_add(1)..baseline.get()).rev() {
            let level = ZoomLevel(level);
            if !fits(level) {
                break;
            }
            zoom = level;
        }
    }
    zoom
}
