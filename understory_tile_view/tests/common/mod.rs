// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared recording collaborators for layout integration tests.

#![allow(
    missing_docs,
    reason = "Integration-test helper module; not part of the public API."
)]
#![allow(
    dead_code,
    reason = "Each test binary uses a different subset of the helpers."
)]

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use kurbo::{Point, Size};
use understory_tile_view::{
    CanvasSource, DocumentSource, EventBus, LayoutConfig, LayoutMode, PanelSelection,
    RedrawSink, SidePanel, TileCoordinate, TileRequester, ViewContext, ViewportLayout,
    VisibleArea, VisibleAreaSink, ZoomControl, ZoomLevel, ZoomRange,
};

/// Everything the host knows and everything the layout told it.
#[derive(Debug)]
pub(crate) struct HostState {
    /// Document extent at the baseline zoom; `None` means no pages yet.
    pub(crate) document: Option<Size>,
    /// Scale the document extent with the current zoom level.
    pub(crate) zoom_scales_document: bool,
    pub(crate) canvas: Size,
    pub(crate) part: i32,
    pub(crate) zoom: ZoomLevel,

    pub(crate) panel_width: f64,
    pub(crate) panel_visible: bool,
    pub(crate) panel_items: usize,
    pub(crate) selection: Option<PanelSelection>,

    pub(crate) areas: Vec<VisibleArea>,
    pub(crate) tile_requests: Vec<Vec<TileCoordinate>>,
    pub(crate) redraws: usize,
    pub(crate) zoom_requests: Vec<(ZoomLevel, Option<Point>, bool)>,
    pub(crate) unselects: usize,
}

impl HostState {
    fn document_size(&self) -> Option<Size> {
        let base = self.document?;
        if !self.zoom_scales_document {
            return Some(base);
        }
        let scale = ZoomRange::default().scale(self.zoom);
        Some(Size::new(base.width * scale, base.height * scale))
    }
}

/// Cheaply clonable handle to one [`HostState`].
///
/// Every collaborator of a layout is a clone of the same handle, so tests can
/// change inputs and inspect notifications while the layout owns the context.
#[derive(Clone, Debug)]
pub(crate) struct Host(Rc<RefCell<HostState>>);

impl Host {
    pub(crate) fn new(document: Size, canvas: Size) -> Self {
        Self(Rc::new(RefCell::new(HostState {
            document: Some(document),
            zoom_scales_document: false,
            canvas,
            part: 0,
            zoom: ZoomLevel(10),
            panel_width: 0.0,
            panel_visible: false,
            panel_items: 0,
            selection: None,
            areas: Vec::new(),
            tile_requests: Vec::new(),
            redraws: 0,
            zoom_requests: Vec::new(),
            unselects: 0,
        })))
    }

    /// Shows a panel of `width` pixels holding `items` entries.
    pub(crate) fn with_panel(self, width: f64, items: usize) -> Self {
        {
            let mut state = self.state_mut();
            state.panel_width = width;
            state.panel_visible = true;
            state.panel_items = items;
        }
        self
    }

    pub(crate) fn state(&self) -> Ref<'_, HostState> {
        self.0.borrow()
    }

    pub(crate) fn state_mut(&self) -> RefMut<'_, HostState> {
        self.0.borrow_mut()
    }

    pub(crate) fn context(&self) -> ViewContext {
        ViewContext {
            document: Box::new(self.clone()),
            canvas: Box::new(self.clone()),
            panel: Box::new(self.clone()),
            transport: Box::new(self.clone()),
            tiles: Box::new(self.clone()),
            redraw: Box::new(self.clone()),
            zoom: Box::new(self.clone()),
        }
    }

    /// Creates a layout with the default configuration.
    pub(crate) fn layout(&self, mode: LayoutMode, bus: &mut EventBus) -> ViewportLayout {
        self.layout_with(mode, LayoutConfig::default(), bus)
    }

    pub(crate) fn layout_with(
        &self,
        mode: LayoutMode,
        config: LayoutConfig,
        bus: &mut EventBus,
    ) -> ViewportLayout {
        ViewportLayout::new(mode, config, self.context(), bus).expect("valid test config")
    }

    /// Forgets every notification recorded so far.
    pub(crate) fn clear_log(&self) {
        let mut state = self.state_mut();
        state.areas.clear();
        state.tile_requests.clear();
        state.redraws = 0;
        state.zoom_requests.clear();
        state.unselects = 0;
    }

    pub(crate) fn last_area(&self) -> Option<VisibleArea> {
        self.state().areas.last().copied()
    }
}

impl DocumentSource for Host {
    fn document_size(&self) -> Option<Size> {
        self.state().document_size()
    }

    fn current_part(&self) -> i32 {
        self.state().part
    }
}

impl CanvasSource for Host {
    fn canvas_size(&self) -> Size {
        self.state().canvas
    }
}

impl SidePanel for Host {
    fn width(&self) -> f64 {
        self.state().panel_width
    }

    fn is_visible(&self) -> bool {
        self.state().panel_visible
    }

    fn item_count(&self) -> usize {
        self.state().panel_items
    }

    fn selection(&self) -> Option<PanelSelection> {
        self.state().selection
    }

    fn unselect(&mut self) {
        let mut state = self.state_mut();
        state.selection = None;
        state.unselects += 1;
    }
}

impl VisibleAreaSink for Host {
    fn visible_area_changed(&mut self, area: VisibleArea) {
        self.state_mut().areas.push(area);
    }
}

impl TileRequester for Host {
    fn request_tiles(&mut self, tiles: &[TileCoordinate]) {
        self.state_mut().tile_requests.push(tiles.to_vec());
    }
}

impl RedrawSink for Host {
    fn request_redraw(&mut self) {
        self.state_mut().redraws += 1;
    }
}

impl ZoomControl for Host {
    fn zoom(&self) -> ZoomLevel {
        self.state().zoom
    }

    fn set_zoom(&mut self, level: ZoomLevel, anchor: Option<Point>, suppress_recenter: bool) {
        let mut state = self.state_mut();
        state.zoom = level;
        state.zoom_requests.push((level, anchor, suppress_recenter));
    }
}
