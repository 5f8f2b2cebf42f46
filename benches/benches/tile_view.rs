// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_tile_view::{
    CanvasSource, DocumentSource, EventBus, LayoutConfig, LayoutEvent, LayoutMode, Pane,
    PanelSelection, PixelRect, RedrawSink, SidePanel, TileCoordinate, TileGrid, TileRequester,
    ViewContext, ViewportLayout, VisibleArea, VisibleAreaSink, ZoomControl, ZoomLevel,
};

struct Host {
    document: Size,
    canvas: Size,
}

impl DocumentSource for Host {
    fn document_size(&self) -> Option<Size> {
        Some(self.document)
    }
}

impl CanvasSource for Host {
    fn canvas_size(&self) -> Size {
        self.canvas
    }
}

struct Panel(f64);

impl SidePanel for Panel {
    fn width(&self) -> f64 {
        self.0
    }

    fn is_visible(&self) -> bool {
        true
    }

    fn item_count(&self) -> usize {
        4
    }

    fn selection(&self) -> Option<PanelSelection> {
        None
    }

    fn unselect(&mut self) {}
}

#[derive(Default)]
struct Sink {
    tiles: usize,
}

impl VisibleAreaSink for Sink {
    fn visible_area_changed(&mut self, area: VisibleArea) {
        black_box(area);
    }
}

impl TileRequester for Sink {
    fn request_tiles(&mut self, tiles: &[TileCoordinate]) {
        self.tiles += tiles.len();
    }
}

impl RedrawSink for Sink {
    fn request_redraw(&mut self) {}
}

struct Zoom(ZoomLevel);

impl ZoomControl for Zoom {
    fn zoom(&self) -> ZoomLevel {
        self.0
    }

    fn set_zoom(&mut self, level: ZoomLevel, _: Option<Point>, _: bool) {
        self.0 = level;
    }
}

fn context(document: Size, canvas: Size, panel_width: f64) -> ViewContext {
    ViewContext {
        document: Box::new(Host { document, canvas }),
        canvas: Box::new(Host { document, canvas }),
        panel: Box::new(Panel(panel_width)),
        transport: Box::new(Sink::default()),
        tiles: Box::new(Sink::default()),
        redraw: Box::new(Sink::default()),
        zoom: Box::new(Zoom(ZoomLevel(10))),
    }
}

fn layout(mode: LayoutMode, bus: &mut EventBus) -> ViewportLayout {
    let document = Size::new(2480.0, 35_080.0);
    let canvas = Size::new(2560.0, 1440.0);
    ViewportLayout::new(mode, LayoutConfig::default(), context(document, canvas, 400.0), bus)
        .expect("default config is valid")
}

fn bench_visible_tiles(c: &mut Criterion) {
    let grid = TileGrid::new(256);
    let mut group = c.benchmark_group("visible_tiles");
    for (name, rect) in [
        ("hd", PixelRect::new(130.0, 70.0, 1920.0, 1080.0)),
        ("4k", PixelRect::new(130.0, 70.0, 3840.0, 2160.0)),
    ] {
        group.bench_function(format!("{name}/single"), |b| {
            let mut out = Vec::new();
            b.iter(|| {
                grid.extend_visible_tiles(
                    black_box(&rect),
                    ZoomLevel(10),
                    0,
                    &[Pane::Single],
                    &mut out,
                );
                black_box(out.len())
            });
        });
        group.bench_function(format!("{name}/split"), |b| {
            b.iter(|| {
                black_box(grid.visible_tiles(
                    black_box(&rect),
                    ZoomLevel(10),
                    0,
                    &[Pane::Left, Pane::Right],
                ))
            });
        });
    }
    group.finish();
}

fn bench_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll");
    for mode in [LayoutMode::SplitPane, LayoutMode::DynamicMargin] {
        group.bench_function(format!("{mode:?}"), |b| {
            let mut bus = EventBus::new();
            let mut layout = layout(mode, &mut bus);
            let mut down = true;
            b.iter(|| {
                let delta = if down { 40.0 } else { -40.0 };
                if !layout.scroll(0.0, black_box(delta)) {
                    down = !down;
                }
            });
        });
    }
    group.finish();
}

fn bench_events(c: &mut Criterion) {
    c.bench_function("panel_insert_with_zoom_search", |b| {
        b.iter_batched(
            || {
                let mut bus = EventBus::new();
                layout(LayoutMode::DynamicMargin, &mut bus)
            },
            |mut layout| {
                layout.handle_event(LayoutEvent::PanelInsert);
                black_box(layout.margin_state())
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("resize", |b| {
        let mut bus = EventBus::new();
        let mut layout = layout(LayoutMode::DynamicMargin, &mut bus);
        b.iter(|| {
            layout.handle_event(LayoutEvent::Resize);
            black_box(layout.visible_rectangle())
        });
    });
}

criterion_group!(benches, bench_visible_tiles, bench_scroll, bench_events);
criterion_main!(benches);
