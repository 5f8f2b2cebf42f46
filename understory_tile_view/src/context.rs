// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborators a layout reads from and reports to.
//!
//! A layout never reaches for global state. Everything it consults (document
//! extent, canvas size, side panel, zoom) and everything it notifies
//! (transport, tile requests, redraw) is handed to it at construction in a
//! [`ViewContext`].

use core::fmt;

use kurbo::{Point, Size};

use crate::tiles::TileCoordinate;
use crate::zoom::ZoomLevel;

/// Read access to the document model.
pub trait DocumentSource {
    /// Document extent in document pixels at the current zoom.
    ///
    /// `None` while the page list is still empty; layouts skip every
    /// recompute until an extent is known.
    fn document_size(&self) -> Option<Size>;

    /// Index of the part (page, sheet or slide) currently shown.
    fn current_part(&self) -> i32 {
        0
    }
}

/// Read access to the drawing surface the document is laid out on.
pub trait CanvasSource {
    /// Extent of the document area of the canvas, in canvas pixels.
    fn canvas_size(&self) -> Size;
}

/// The selection inside a side panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelSelection {
    /// The selected item is being edited.
    pub in_edit_mode: bool,
}

/// A side panel (for example a comment list) next to the document.
pub trait SidePanel {
    /// Panel width in canvas pixels.
    fn width(&self) -> f64;

    /// Whether the panel is shown at all.
    fn is_visible(&self) -> bool;

    /// Number of items the panel holds.
    fn item_count(&self) -> usize;

    /// Current selection, if any.
    fn selection(&self) -> Option<PanelSelection>;

    /// Drops the current selection.
    fn unselect(&mut self);

    /// Returns `true` if the panel takes no space: hidden, or nothing to show.
    fn is_hidden_or_empty(&self) -> bool {
        !self.is_visible() || self.item_count() == 0
    }
}

/// A side panel that never shows, for layouts that have none.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPanel;

impl SidePanel for NoPanel {
    fn width(&self) -> f64 {
        0.0
    }

    fn is_visible(&self) -> bool {
        false
    }

    fn item_count(&self) -> usize {
        0
    }

    fn selection(&self) -> Option<PanelSelection> {
        None
    }

    fn unselect(&mut self) {}
}

/// The visible part of the document, in document pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleArea {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl fmt::Display for VisibleArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x={} y={} width={} height={}",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Receives visible-area notifications for the server. Fire and forget.
pub trait VisibleAreaSink {
    /// The visible area changed (or was recomputed).
    fn visible_area_changed(&mut self, area: VisibleArea);
}

/// Receives the tile set needed to cover the visible area.
///
/// Implementations own duplicate suppression across successive calls.
pub trait TileRequester {
    /// Request (or keep) the listed tiles.
    fn request_tiles(&mut self, tiles: &[TileCoordinate]);
}

/// Receives redraw requests.
pub trait RedrawSink {
    /// Something on screen is out of date.
    fn request_redraw(&mut self);
}

/// Reads and changes the zoom level.
pub trait ZoomControl {
    /// Current zoom level.
    fn zoom(&self) -> ZoomLevel;

    /// Switches to `level`, optionally keeping `anchor` fixed on screen.
    ///
    /// With `suppress_recenter` set the host must not re-run its own
    /// centering logic in response.
    fn set_zoom(&mut self, level: ZoomLevel, anchor: Option<Point>, suppress_recenter: bool);
}

/// All collaborators of one layout instance.
pub struct ViewContext {
    /// Document extent and current part.
    pub document: Box<dyn DocumentSource>,
    /// Canvas extent.
    pub canvas: Box<dyn CanvasSource>,
    /// Side panel; use [`NoPanel`] when there is none.
    pub panel: Box<dyn SidePanel>,
    /// Visible-area notifications.
    pub transport: Box<dyn VisibleAreaSink>,
    /// Tile requests.
    pub tiles: Box<dyn TileRequester>,
    /// Redraw requests.
    pub redraw: Box<dyn RedrawSink>,
    /// Zoom reads and writes.
    pub zoom: Box<dyn ZoomControl>,
}

impl fmt::Debug for ViewContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewContext")
            .field("document_size", &self.document.document_size())
            .field("canvas_size", &self.canvas.canvas_size())
            .field("panel_width", &self.panel.width())
            .field("zoom", &self.zoom.zoom())
            .finish_non_exhaustive()
    }
}
