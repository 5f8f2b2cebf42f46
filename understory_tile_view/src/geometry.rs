// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel-space points and rectangles.
//!
//! Coordinates are stored in core (device) pixels. Every point also carries the
//! pixel-density scale that was in effect when it was created, so it can be
//! converted to CSS pixels without consulting any global state.

use core::marker::PhantomData;

use kurbo::{Point, Rect, Size, Vec2};

/// Marker for document-pixel space: zoomed document content, independent of scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocumentSpace;

/// Marker for canvas-pixel space: the on-screen drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSpace;

/// A point in a pixel space `S`, tagged with its pixel-density scale.
///
/// Points are immutable values; "mutating" helpers such as
/// [`ScaledPoint::translated`] return a new point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaledPoint<S> {
    point: Point,
    dpi_scale: f64,
    _space: PhantomData<S>,
}

/// A point in document-pixel space.
pub type DocumentPoint = ScaledPoint<DocumentSpace>;

/// A point in canvas-pixel space.
pub type CanvasPoint = ScaledPoint<CanvasSpace>;

impl<S> ScaledPoint<S> {
    /// Creates a point at `(x, y)` core pixels with a pixel-density scale of `1.0`.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self::with_dpi_scale(x, y, 1.0)
    }

    /// Creates a point at `(x, y)` core pixels with the given pixel-density scale.
    #[must_use]
    pub fn with_dpi_scale(x: f64, y: f64, dpi_scale: f64) -> Self {
        Self {
            point: Point::new(x, y),
            dpi_scale,
            _space: PhantomData,
        }
    }

    /// Wraps a Kurbo point expressed in core pixels.
    #[must_use]
    pub fn from_point(point: Point, dpi_scale: f64) -> Self {
        Self::with_dpi_scale(point.x, point.y, dpi_scale)
    }

    /// Horizontal coordinate in core pixels.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.point.x
    }

    /// Vertical coordinate in core pixels.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.point.y
    }

    /// The position as a Kurbo point in core pixels.
    #[must_use]
    pub fn point(&self) -> Point {
        self.point
    }

    /// Pixel-density scale carried by this point.
    #[must_use]
    pub fn dpi_scale(&self) -> f64 {
        self.dpi_scale
    }

    /// The position in CSS pixels (core pixels divided by the density scale).
    #[must_use]
    pub fn to_css(&self) -> Point {
        Point::new(self.point.x / self.dpi_scale, self.point.y / self.dpi_scale)
    }

    /// Returns a copy of this point moved by `delta` core pixels.
    #[must_use]
    pub fn translated(&self, delta: Vec2) -> Self {
        Self::from_point(self.point + delta, self.dpi_scale)
    }

    /// Reinterprets the coordinates in another pixel space.
    pub(crate) fn cast<T>(self) -> ScaledPoint<T> {
        ScaledPoint::from_point(self.point, self.dpi_scale)
    }
}

/// Axis-aligned rectangle in document-pixel space.
///
/// Stored as origin plus extent; `x2`/`y2` are derived. Width and height are
/// never negative: constructors clamp them to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelRect {
    x1: f64,
    y1: f64,
    width: f64,
    height: f64,
}

impl PixelRect {
    /// An empty rectangle at the origin.
    pub const ZERO: Self = Self {
        x1: 0.0,
        y1: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a rectangle from its origin and extent.
    #[must_use]
    pub fn new(x1: f64, y1: f64, width: f64, height: f64) -> Self {
        Self {
            x1,
            y1,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Creates a rectangle from an `[x, y, width, height]` tuple in core pixels.
    #[must_use]
    pub fn from_core_pixels([x1, y1, width, height]: [f64; 4]) -> Self {
        Self::new(x1, y1, width, height)
    }

    /// Left edge.
    #[must_use]
    pub fn x1(&self) -> f64 {
        self.x1
    }

    /// Top edge.
    #[must_use]
    pub fn y1(&self) -> f64 {
        self.y1
    }

    /// Right edge, `x1 + width`.
    #[must_use]
    pub fn x2(&self) -> f64 {
        self.x1 + self.width
    }

    /// Bottom edge, `y1 + height`.
    #[must_use]
    pub fn y2(&self) -> f64 {
        self.y1 + self.height
    }

    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Extent as a Kurbo size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns `true` if the rectangle covers no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Returns `true` if `pt` lies inside the rectangle, edges included.
    #[must_use]
    pub fn contains_point(&self, pt: Point) -> bool {
        pt.x >= self.x1 && pt.x <= self.x2() && pt.y >= self.y1 && pt.y <= self.y2()
    }

    /// Converts into a Kurbo rectangle.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x1, self.y1, self.x2(), self.y2())
    }
}

impl From<PixelRect> for Rect {
    fn from(rect: PixelRect) -> Self {
        rect.to_rect()
    }
}

impl From<Rect> for PixelRect {
    fn from(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }
}
