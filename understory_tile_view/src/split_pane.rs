// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two documents side by side, for example when comparing revisions.
//!
//! The canvas is split at its horizontal center. The left pane shows its
//! document right-aligned against the center gap, the right pane shows its
//! document left-aligned after it. Both panes share one scroll state.

use kurbo::{Size, Vec2};

use crate::config::LayoutConfig;
use crate::geometry::PixelRect;
use crate::layout::Frame;
use crate::scroll::ScrollState;
use crate::tiles::Pane;

/// Panes every split-view tile is requested for, in request order.
pub(crate) const SPLIT_PANES: [Pane; 2] = [Pane::Left, Pane::Right];

#[derive(Clone, Debug)]
pub(crate) struct SplitPane {
    half_width: f64,
    gap: f64,
    y_start: f64,
}

impl SplitPane {
    pub(crate) fn new(config: &LayoutConfig) -> Self {
        Self {
            half_width: 0.0,
            gap: config.pane_gap_px(),
            y_start: config.top_margin_px(),
        }
    }

    pub(crate) fn half_width(&self) -> f64 {
        self.half_width
    }

    pub(crate) fn update(&mut self, frame: &Frame) {
        self.half_width = (frame.canvas.width * 0.5).round();
    }

    /// Total scrollable extent: one document plus the gap on both sides, but
    /// never less than half the canvas wide or the canvas high.
    pub(crate) fn view_size(&self, frame: &Frame) -> Size {
        Size::new(
            self.half_width.max(frame.document.width + 2.0 * self.gap),
            frame
                .canvas
                .height
                .max(frame.document.height + self.y_start),
        )
    }

    pub(crate) fn visible_rect(&self, scroll: &ScrollState, frame: &Frame) -> PixelRect {
        PixelRect::from_core_pixels([
            scroll.view_x(),
            scroll.view_y() - self.y_start,
            self.half_width - self.gap,
            frame.canvas.height,
        ])
    }

    /// Canvas position of document point `(0, 0)` in `pane` at zero scroll.
    ///
    /// Points without a pane are placed in the right pane.
    pub(crate) fn pane_origin(&self, pane: Option<Pane>, frame: &Frame) -> Vec2 {
        let x = match pane {
            Some(Pane::Left) => self.half_width - frame.document.width - self.gap,
            Some(Pane::Right | Pane::Single) | None => self.half_width + self.gap,
        };
        Vec2::new(x, self.y_start)
    }
}
