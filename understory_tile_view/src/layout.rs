// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};
use tracing::{debug, trace};

use crate::config::LayoutConfig;
use crate::context::{ViewContext, VisibleArea};
use crate::dynamic_margin::{self, DynamicMargin, FitProbe, MarginState};
use crate::error::ConfigError;
use crate::events::{EventSource, LayoutEvent, SubscriptionId};
use crate::geometry::{CanvasPoint, DocumentPoint, PixelRect};
use crate::mode::LayoutMode;
use crate::scroll::{ScrollState, ScrollbarGeometry};
use crate::split_pane::{SPLIT_PANES, SplitPane};
use crate::tiles::{Pane, TileCoordinate, TileGrid};
use crate::zoom::ZoomLevel;

/// Document and canvas extents a recompute is based on.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Frame {
    pub(crate) document: Size,
    pub(crate) canvas: Size,
}

#[derive(Clone, Debug)]
enum ModeState {
    SplitPane(SplitPane),
    DynamicMargin(DynamicMargin),
}

/// Read-only copy of a layout's derived state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutSnapshot {
    /// Document-pixel rectangle currently shown.
    pub visible_rectangle: PixelRect,
    /// Total scrollable document extent.
    pub view_size: Size,
    /// Scroll offsets and ranges.
    pub scroll: ScrollState,
    /// Document placement, for dynamic-margin layouts.
    pub margin: Option<MarginState>,
}

/// Visible-area and tile bookkeeping for one document view.
///
/// A `ViewportLayout` owns the scroll state, the visible rectangle and the
/// current tile set of a view. All of them are derived state: they are
/// recomputed by the layout from its [`ViewContext`] whenever an event arrives
/// or the view is scrolled, and callers only ever see copies.
///
/// Each recompute notifies the transport of the new visible area and hands the
/// covering tiles to the tile requester. Scrolling and margin changes also
/// request a redraw.
///
/// Until the document reports an extent, every recompute is skipped.
#[derive(Debug)]
pub struct ViewportLayout {
    config: LayoutConfig,
    grid: TileGrid,
    context: ViewContext,
    frame: Frame,
    scroll: ScrollState,
    visible: PixelRect,
    view_size: Size,
    tiles: Vec<TileCoordinate>,
    mode: ModeState,
    subscription: SubscriptionId,
}

impl ViewportLayout {
    /// Creates a layout, subscribes it to the events of `mode` and runs the
    /// first recompute.
    pub fn new(
        mode: LayoutMode,
        config: LayoutConfig,
        context: ViewContext,
        events: &mut dyn EventSource,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = match mode {
            LayoutMode::SplitPane => ModeState::SplitPane(SplitPane::new(&config)),
            LayoutMode::DynamicMargin => ModeState::DynamicMargin(DynamicMargin::new(&config)),
        };
        let subscription = events.subscribe(mode.events());
        debug!(?mode, subscription = subscription.get(), "layout created");

        let mut layout = Self {
            config,
            grid: TileGrid::new(config.tile_size),
            context,
            frame: Frame::default(),
            scroll: ScrollState::default(),
            visible: PixelRect::ZERO,
            view_size: Size::ZERO,
            tiles: Vec::new(),
            mode: state,
            subscription,
        };
        layout.reset();
        Ok(layout)
    }

    /// Unsubscribes from `events` and hands the collaborators back.
    pub fn teardown(self, events: &mut dyn EventSource) -> ViewContext {
        events.unsubscribe(self.subscription);
        debug!(subscription = self.subscription.get(), "layout torn down");
        self.context
    }

    /// The mode this layout was created with.
    #[must_use]
    pub fn mode(&self) -> LayoutMode {
        match self.mode {
            ModeState::SplitPane(_) => LayoutMode::SplitPane,
            ModeState::DynamicMargin(_) => LayoutMode::DynamicMargin,
        }
    }

    /// The configuration this layout was created with.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Subscription registered at construction.
    #[must_use]
    pub fn subscription(&self) -> SubscriptionId {
        self.subscription
    }

    /// Collaborators of this layout.
    #[must_use]
    pub fn context(&self) -> &ViewContext {
        &self.context
    }

    /// Mutable access to the collaborators, for hosts that swap them out.
    ///
    /// Changes take effect on the next recompute.
    pub fn context_mut(&mut self) -> &mut ViewContext {
        &mut self.context
    }

    /// Document-pixel rectangle currently shown.
    #[must_use]
    pub fn visible_rectangle(&self) -> PixelRect {
        self.visible
    }

    /// Total scrollable document extent.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Current scroll offsets and ranges.
    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        self.scroll
    }

    /// Scrollbar thumbs for the current content and canvas extents.
    #[must_use]
    pub fn scrollbar_geometry(&self) -> ScrollbarGeometry {
        self.scroll.scrollbars()
    }

    /// Tiles computed by the last recompute.
    #[must_use]
    pub fn current_tiles(&self) -> &[TileCoordinate] {
        &self.tiles
    }

    /// Document placement, or `None` for split layouts.
    #[must_use]
    pub fn margin_state(&self) -> Option<MarginState> {
        match &self.mode {
            ModeState::SplitPane(_) => None,
            ModeState::DynamicMargin(dm) => Some(dm.state()),
        }
    }

    /// Copies all derived state at once.
    #[must_use]
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            visible_rectangle: self.visible,
            view_size: self.view_size,
            scroll: self.scroll,
            margin: self.margin_state(),
        }
    }

    /// Canvas position of document point `(0, 0)` in `pane` at zero scroll.
    ///
    /// Single-pane layouts ignore `pane`. Split layouts place points without a
    /// pane in the right pane.
    #[must_use]
    pub fn pane_origin(&self, pane: Option<Pane>) -> Vec2 {
        match &self.mode {
            ModeState::SplitPane(split) => split.pane_origin(pane, &self.frame),
            ModeState::DynamicMargin(dm) => dm.origin(&self.frame),
        }
    }

    /// Converts a document point into canvas coordinates.
    #[must_use]
    pub fn document_to_view(&self, point: DocumentPoint, pane: Option<Pane>) -> CanvasPoint {
        point
            .translated(self.pane_origin(pane) - self.scroll_offset())
            .cast()
    }

    /// Converts a canvas point into document coordinates.
    ///
    /// Only the scroll translation is undone; the pane origin is not, since a
    /// canvas point alone does not say which pane it belongs to. Use
    /// [`ViewportLayout::view_to_document_in_pane`] when the pane is known.
    #[must_use]
    pub fn view_to_document(&self, point: CanvasPoint) -> DocumentPoint {
        point.translated(self.scroll_offset()).cast()
    }

    /// Exact inverse of [`ViewportLayout::document_to_view`] for a known pane.
    #[must_use]
    pub fn view_to_document_in_pane(&self, point: CanvasPoint, pane: Option<Pane>) -> DocumentPoint {
        point
            .translated(self.scroll_offset() - self.pane_origin(pane))
            .cast()
    }

    /// Returns `true` if the side panel fits at full width when the document
    /// may use both of its margins. Split layouts have no panel and always
    /// report `true`.
    ///
    /// The document and canvas extents are read fresh; while the document
    /// extent is unknown the last recomputed extents are used.
    #[must_use]
    pub fn view_has_space_for_full_width_panel(&self) -> bool {
        match &self.mode {
            ModeState::SplitPane(_) => true,
            ModeState::DynamicMargin(_) => {
                let frame = self.read_frame().unwrap_or(self.frame);
                dynamic_margin::has_space_for_full_width_panel(
                    DynamicMargin::margin(&frame),
                    self.context.panel.width(),
                )
            }
        }
    }

    /// Recomputes everything from the collaborators.
    pub fn reset(&mut self) {
        self.update_view_data();
    }

    /// Rebuilds scroll tracks, thumb sizes and steps from the canvas extent
    /// and the current view size.
    pub fn refresh_scroll_properties(&mut self) {
        let Some(frame) = self.read_frame() else {
            trace!("scroll refresh skipped: document extent unknown");
            return;
        };
        self.frame = frame;
        self.scroll.set_tracks(frame.canvas, self.view_size);
    }

    /// Scrolls by `(dx, dy)` track pixels, clamped to the scrollable range.
    ///
    /// Returns `true` if the view moved; in that case the visible area and
    /// tiles are recomputed and published and a redraw is requested.
    pub fn scroll(&mut self, dx: f64, dy: f64) -> bool {
        if self.read_frame().is_none() {
            trace!("scroll skipped: document extent unknown");
            return false;
        }
        self.refresh_scroll_properties();
        if !self.scroll.scroll_by(dx, dy) {
            return false;
        }
        debug!(
            start_x = self.scroll.start_x(),
            start_y = self.scroll.start_y(),
            view_x = self.scroll.view_x(),
            view_y = self.scroll.view_y(),
            "scrolled"
        );
        self.update_view_data();
        self.context.redraw.request_redraw();
        true
    }

    /// Returns `true` if `(x, y)` lies within the visible rectangle.
    ///
    /// This is a bounds check only; the view never moves.
    #[must_use]
    pub fn scroll_to(&self, x: f64, y: f64) -> bool {
        self.visible.contains_point(kurbo::Point::new(x, y))
    }

    /// Reacts to an event delivered by the host.
    ///
    /// Events outside the layout's subscription are ignored.
    pub fn handle_event(&mut self, event: LayoutEvent) {
        let mode = self.mode();
        if !mode.events().has(event) {
            trace!(?event, ?mode, "event ignored");
            return;
        }
        trace!(?event, "handling event");
        if !self.update_view_data() {
            return;
        }
        if mode == LayoutMode::DynamicMargin {
            if event.is_panel_event() {
                self.adjust_margins(false);
                self.set_max_zoom_for_available_space();
            } else {
                self.adjust_margins(true);
            }
        }
    }

    /// Picks the largest zoom level at which the document and the side panel
    /// fit the canvas side by side, and applies it without recentering.
    ///
    /// Returns the applied level, or `None` for split layouts and while the
    /// document extent is unknown.
    pub fn set_max_zoom_for_available_space(&mut self) -> Option<ZoomLevel> {
        let ModeState::DynamicMargin(_) = self.mode else {
            return None;
        };
        let Some(frame) = self.read_frame() else {
            trace!("zoom search skipped: document extent unknown");
            return None;
        };
        self.frame = frame;
        self.scroll.set_tracks(frame.canvas, self.view_size);

        let probe = FitProbe {
            canvas_width: frame.canvas.width,
            center_x: self.scroll.view_x() - DynamicMargin::margin(&frame)
                + frame.canvas.width / 2.0,
            panel_width: self.effective_panel_width(),
            current: self.context.zoom.zoom(),
            range: self.config.zoom,
        };
        let level = dynamic_margin::search_max_zoom(self.config.zoom, |z| probe.fits(z));
        debug!(zoom = level.get(), "zoom chosen for available space");
        self.context.zoom.set_zoom(level, None, true);
        Some(level)
    }

    /// Moves the document left to make room for the side panel, or back to
    /// the center when the panel no longer needs room.
    fn adjust_margins(&mut self, on_zoom_or_resize: bool) {
        let ModeState::DynamicMargin(dm) = &self.mode else {
            return;
        };
        let shifted = dm.offset();
        if self.context.panel.is_hidden_or_empty() {
            self.recenter();
            return;
        }
        if let Some(selection) = self.context.panel.selection()
            && !selection.in_edit_mode
        {
            self.context.panel.unselect();
        }

        let margin = DynamicMargin::margin(&self.frame);
        let panel_width = self.context.panel.width();
        let offset = if on_zoom_or_resize { 0.0 } else { shifted };
        if !dynamic_margin::can_move_left(margin, panel_width, offset) {
            // A shrunken margin cannot hold the previous shift any more.
            if on_zoom_or_resize && shifted > margin {
                self.shift_document(margin - shifted);
                return;
            }
            trace!(margin, panel_width, offset, "document stays in place");
            return;
        }
        if on_zoom_or_resize && let ModeState::DynamicMargin(dm) = &mut self.mode {
            dm.clear_offset();
        }
        self.shift_document(dynamic_margin::move_left_delta(margin, panel_width, offset));
    }

    fn recenter(&mut self) {
        let ModeState::DynamicMargin(dm) = &self.mode else {
            return;
        };
        let offset = dm.offset();
        if offset == 0.0 {
            return;
        }
        self.shift_document(-offset);
    }

    fn shift_document(&mut self, delta: f64) {
        let ModeState::DynamicMargin(dm) = &mut self.mode else {
            return;
        };
        dm.shift_by(delta);
        debug!(delta, state = ?dm.state(), "document shifted");
        self.update_view_data();
        self.context.redraw.request_redraw();
    }

    /// Recomputes view size, scroll tracks, visible rectangle and tiles, and
    /// publishes the result. Returns `false` if the document extent is unknown.
    fn update_view_data(&mut self) -> bool {
        let Some(frame) = self.read_frame() else {
            trace!("recompute skipped: document extent unknown");
            return false;
        };
        self.frame = frame;

        let panel_width = self.effective_panel_width();
        self.view_size = match &mut self.mode {
            ModeState::SplitPane(split) => {
                split.update(&frame);
                trace!(half_width = split.half_width(), "split panes placed");
                split.view_size(&frame)
            }
            ModeState::DynamicMargin(dm) => dm.view_size(&frame, panel_width),
        };
        self.scroll.set_tracks(frame.canvas, self.view_size);
        self.visible = match &self.mode {
            ModeState::SplitPane(split) => split.visible_rect(&self.scroll, &frame),
            ModeState::DynamicMargin(dm) => dm.visible_rect(&self.scroll, &frame),
        };
        debug!(
            x = self.visible.x1(),
            y = self.visible.y1(),
            width = self.visible.width(),
            height = self.visible.height(),
            "visible area recomputed"
        );

        self.context.transport.visible_area_changed(VisibleArea {
            x: self.visible.x1(),
            y: self.visible.y1(),
            width: self.visible.width(),
            height: self.visible.height(),
        });
        self.refresh_tiles();
        true
    }

    fn refresh_tiles(&mut self) {
        let panes: &[Pane] = match self.mode {
            ModeState::SplitPane(_) => &SPLIT_PANES,
            ModeState::DynamicMargin(_) => &[Pane::Single],
        };
        self.grid.extend_visible_tiles(
            &self.visible,
            self.context.zoom.zoom(),
            self.context.document.current_part(),
            panes,
            &mut self.tiles,
        );
        trace!(count = self.tiles.len(), "tiles requested");
        self.context.tiles.request_tiles(&self.tiles);
    }

    fn read_frame(&self) -> Option<Frame> {
        let document = self.context.document.document_size()?;
        Some(Frame {
            document,
            canvas: self.context.canvas.canvas_size(),
        })
    }

    fn scroll_offset(&self) -> Vec2 {
        Vec2::new(self.scroll.view_x(), self.scroll.view_y())
    }

    fn effective_panel_width(&self) -> f64 {
        let panel = &self.context.panel;
        if panel.is_hidden_or_empty() {
            0.0
        } else {
            panel.width().max(0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::ViewportLayout;
    use crate::config::LayoutConfig;
    use crate::context::{
        CanvasSource, DocumentSource, NoPanel, PanelSelection, RedrawSink, SidePanel,
        TileRequester, ViewContext, VisibleArea, VisibleAreaSink, ZoomControl,
    };
    use crate::events::EventBus;
    use crate::mode::LayoutMode;
    use crate::tiles::TileCoordinate;
    use crate::zoom::ZoomLevel;

    struct Fixed(Size, Size);

    impl DocumentSource for Fixed {
        fn document_size(&self) -> Option<Size> {
            Some(self.0)
        }
    }

    impl CanvasSource for Fixed {
        fn canvas_size(&self) -> Size {
            self.1
        }
    }

    struct Panel {
        width: f64,
        visible: bool,
    }

    impl SidePanel for Panel {
        fn width(&self) -> f64 {
            self.width
        }

        fn is_visible(&self) -> bool {
            self.visible
        }

        fn item_count(&self) -> usize {
            1
        }

        fn selection(&self) -> Option<PanelSelection> {
            None
        }

        fn unselect(&mut self) {}
    }

    struct Sink;

    impl VisibleAreaSink for Sink {
        fn visible_area_changed(&mut self, _: VisibleArea) {}
    }

    impl TileRequester for Sink {
        fn request_tiles(&mut self, _: &[TileCoordinate]) {}
    }

    impl RedrawSink for Sink {
        fn request_redraw(&mut self) {}
    }

    impl ZoomControl for Sink {
        fn zoom(&self) -> ZoomLevel {
            ZoomLevel(10)
        }

        fn set_zoom(&mut self, _: ZoomLevel, _: Option<Point>, _: bool) {}
    }

    fn context(panel: Box<dyn SidePanel>) -> ViewContext {
        let document = Size::new(1000.0, 500.0);
        let canvas = Size::new(1200.0, 800.0);
        ViewContext {
            document: Box::new(Fixed(document, canvas)),
            canvas: Box::new(Fixed(document, canvas)),
            panel,
            transport: Box::new(Sink),
            tiles: Box::new(Sink),
            redraw: Box::new(Sink),
            zoom: Box::new(Sink),
        }
    }

    fn layout(mode: LayoutMode, panel: Box<dyn SidePanel>) -> ViewportLayout {
        let mut bus = EventBus::new();
        ViewportLayout::new(mode, LayoutConfig::default(), context(panel), &mut bus).unwrap()
    }

    #[test]
    fn visible_panel_widens_scrollable_extent() {
        let shown = layout(
            LayoutMode::DynamicMargin,
            Box::new(Panel {
                width: 300.0,
                visible: true,
            }),
        );
        assert_eq!(shown.view_size(), Size::new(1300.0, 800.0));
        assert!(shown.scroll_state().horizontal().is_scrollable());

        let hidden = layout(
            LayoutMode::DynamicMargin,
            Box::new(Panel {
                width: 300.0,
                visible: false,
            }),
        );
        assert_eq!(hidden.view_size(), Size::new(1200.0, 800.0));
        assert!(!hidden.scroll_state().horizontal().is_scrollable());
    }

    #[test]
    fn mode_is_reported_back() {
        assert_eq!(
            layout(LayoutMode::SplitPane, Box::new(NoPanel)).mode(),
            LayoutMode::SplitPane
        );
        assert_eq!(
            layout(LayoutMode::DynamicMargin, Box::new(NoPanel)).mode(),
            LayoutMode::DynamicMargin
        );
    }

    #[test]
    fn config_is_kept() {
        let layout = layout(LayoutMode::SplitPane, Box::new(NoPanel));
        assert_eq!(layout.config(), &LayoutConfig::default());
        assert_eq!(layout.config().tile_size, 256);
    }
}
