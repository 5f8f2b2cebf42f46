// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tile_view --heading-base-level=0

//! Understory Tile View: visible-area and tile bookkeeping for paged documents.
//!
//! This crate models the view side of a tiled document renderer: a document
//! that is rendered remotely in square tiles and shown on a local canvas. For a
//! given document extent, canvas size, zoom level and scroll position it
//! derives:
//! - The document rectangle that is currently visible.
//! - The scrollable extent, scroll offsets and scrollbar thumbs.
//! - The tiles needed to cover the visible rectangle.
//! - Transforms between document and canvas coordinates.
//!
//! Two placements are supported, see [`LayoutMode`]. A split layout shows two
//! documents side by side for comparison. A dynamic-margin layout shows one
//! centered document and moves it left when a side panel needs room, and can
//! pick the largest zoom level at which document and panel fit together.
//!
//! It does **not** fetch or render tiles. Callers are expected to:
//! - Implement the collaborator traits in a [`ViewContext`], which the layout
//!   reads from (document, canvas, panel, zoom) and reports to (visible area,
//!   tile requests, redraw).
//! - Deliver [`LayoutEvent`]s matching the layout's subscription to
//!   [`ViewportLayout::handle_event`].
//! - Suppress duplicate tile requests across recomputes.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_tile_view::{
//!     CanvasSource, ConfigError, DocumentSource, EventBus, LayoutConfig, LayoutMode, NoPanel,
//!     RedrawSink, TileCoordinate, TileRequester, ViewContext, ViewportLayout, VisibleArea,
//!     VisibleAreaSink, ZoomControl, ZoomLevel,
//! };
//!
//! struct Document;
//! impl DocumentSource for Document {
//!     fn document_size(&self) -> Option<Size> {
//!         Some(Size::new(1000.0, 2000.0))
//!     }
//! }
//!
//! struct Canvas;
//! impl CanvasSource for Canvas {
//!     fn canvas_size(&self) -> Size {
//!         Size::new(1600.0, 900.0)
//!     }
//! }
//!
//! struct Discard;
//! impl VisibleAreaSink for Discard {
//!     fn visible_area_changed(&mut self, _: VisibleArea) {}
//! }
//! impl TileRequester for Discard {
//!     fn request_tiles(&mut self, _: &[TileCoordinate]) {}
//! }
//! impl RedrawSink for Discard {
//!     fn request_redraw(&mut self) {}
//! }
//!
//! struct Zoom(ZoomLevel);
//! impl ZoomControl for Zoom {
//!     fn zoom(&self) -> ZoomLevel {
//!         self.0
//!     }
//!     fn set_zoom(&mut self, level: ZoomLevel, _: Option<Point>, _: bool) {
//!         self.0 = level;
//!     }
//! }
//!
//! let context = ViewContext {
//!     document: Box::new(Document),
//!     canvas: Box::new(Canvas),
//!     panel: Box::new(NoPanel),
//!     transport: Box::new(Discard),
//!     tiles: Box::new(Discard),
//!     redraw: Box::new(Discard),
//!     zoom: Box::new(Zoom(ZoomLevel(10))),
//! };
//! let mut bus = EventBus::new();
//! let mut layout =
//!     ViewportLayout::new(LayoutMode::DynamicMargin, LayoutConfig::default(), context, &mut bus)?;
//!
//! // The document is centered: 300 pixels of margin on either side.
//! assert_eq!(layout.visible_rectangle().x1(), -300.0);
//! assert_eq!(layout.current_tiles().len(), 15);
//!
//! // Scrolling moves the thumb; the document moves proportionally further.
//! assert!(layout.scroll(0.0, 100.0));
//! assert_eq!(layout.visible_rectangle().y1(), 224.0 - 20.0);
//!
//! let _context = layout.teardown(&mut bus);
//! assert!(bus.is_empty());
//! # Ok::<(), ConfigError>(())
//! ```
//!
//! ## Coordinate spaces
//!
//! Document points ([`DocumentPoint`]) are in document pixels at the current
//! zoom. Canvas points ([`CanvasPoint`]) are in core pixels on the drawing
//! surface. Both carry the device pixel ratio so they can be converted to CSS
//! pixels. Converting a document point to the canvas adds the pane origin and
//! removes the scroll translation; [`ViewportLayout::view_to_document`] only
//! adds the scroll translation back.

mod config;
mod context;
mod dynamic_margin;
mod error;
mod events;
mod geometry;
mod layout;
mod mode;
mod scroll;
mod split_pane;
mod tiles;
mod zoom;

pub use config::{DEFAULT_TILE_SIZE, LayoutConfig};
pub use context::{
    CanvasSource, DocumentSource, NoPanel, PanelSelection, RedrawSink, SidePanel, TileRequester,
    ViewContext, VisibleArea, VisibleAreaSink, ZoomControl,
};
pub use dynamic_margin::MarginState;
pub use error::ConfigError;
pub use events::{EventBus, EventSet, EventSource, LayoutEvent, SubscriptionId};
pub use geometry::{CanvasPoint, CanvasSpace, DocumentPoint, DocumentSpace, PixelRect, ScaledPoint};
pub use layout::{LayoutSnapshot, ViewportLayout};
pub use mode::LayoutMode;
pub use scroll::{ScrollAxis, ScrollState, ScrollbarGeometry, ThumbGeometry};
pub use tiles::{Pane, TileCoordinate, TileGrid};
pub use zoom::{ZoomLevel, ZoomRange};
