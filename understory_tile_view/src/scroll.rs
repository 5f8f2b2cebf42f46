// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll offsets, scrollable ranges and scrollbar thumbs.
//!
//! Scroll positions live on the scrollbar *track*: `start` is the distance of
//! the thumb from the start of a track of `length` pixels. The matching
//! document translation, `view`, is derived from `start` and the content
//! extent and is only ever updated together with it.

/// One scrolling axis (horizontal or vertical).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollAxis {
    start: f64,
    length: f64,
    size: f64,
    step: f64,
    view: f64,
    content: f64,
}

impl ScrollAxis {
    /// Thumb offset along the track.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Track length (the canvas extent on this axis).
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Thumb size along the track.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Distance moved by a page-wise scroll.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Document translation implied by [`ScrollAxis::start`], in document pixels.
    #[must_use]
    pub fn view(&self) -> f64 {
        self.view
    }

    /// Content extent the track maps onto.
    #[must_use]
    pub fn content(&self) -> f64 {
        self.content
    }

    /// Largest valid `start`.
    #[must_use]
    pub fn max_start(&self) -> f64 {
        (self.length - self.size).max(0.0)
    }

    /// Returns `true` if the content is larger than the track.
    #[must_use]
    pub fn is_scrollable(&self) -> bool {
        self.content > self.length
    }

    /// Rebuilds the track for a new canvas extent and content extent.
    ///
    /// The current offset is re-clamped into the new range and the view
    /// translation recomputed from it.
    pub fn set_track(&mut self, length: f64, content: f64) {
        let length = length.max(0.0);
        let content = content.max(0.0);
        self.length = length;
        self.content = content;
        self.size = if content > length && content > 0.0 {
            length * (length / content)
        } else {
            length
        };
        self.step = length / 2.0;
        self.start = self.start.clamp(0.0, self.max_start());
        self.view = self.view_for(self.start);
    }

    /// Moves the thumb by `delta` track pixels, clamped to `[0, max_start]`.
    ///
    /// Returns `true` if the offset changed. Non-scrollable axes never move.
    pub fn scroll_by(&mut self, delta: f64) -> bool {
        if delta == 0.0 || !self.is_scrollable() {
            return false;
        }
        let candidate = (self.start + delta).clamp(0.0, self.max_start());
        if candidate == self.start {
            return false;
        }
        self.start = candidate;
        self.view = self.view_for(candidate);
        true
    }

    /// Scrollbar thumb geometry for the current track.
    #[must_use]
    pub fn thumb(&self) -> ThumbGeometry {
        ThumbGeometry {
            track_length: self.length,
            thumb_size: self.size,
            thumb_start: self.start,
            visible: self.is_scrollable(),
        }
    }

    fn view_for(&self, start: f64) -> f64 {
        if self.length <= 0.0 {
            return 0.0;
        }
        (start / self.length * self.content).round()
    }
}

/// Scroll offsets and ranges for both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    horizontal: ScrollAxis,
    vertical: ScrollAxis,
}

impl ScrollState {
    /// The horizontal axis.
    #[must_use]
    pub fn horizontal(&self) -> &ScrollAxis {
        &self.horizontal
    }

    /// The vertical axis.
    #[must_use]
    pub fn vertical(&self) -> &ScrollAxis {
        &self.vertical
    }

    /// Horizontal thumb offset.
    #[must_use]
    pub fn start_x(&self) -> f64 {
        self.horizontal.start
    }

    /// Vertical thumb offset.
    #[must_use]
    pub fn start_y(&self) -> f64 {
        self.vertical.start
    }

    /// Horizontal document translation.
    #[must_use]
    pub fn view_x(&self) -> f64 {
        self.horizontal.view
    }

    /// Vertical document translation.
    #[must_use]
    pub fn view_y(&self) -> f64 {
        self.vertical.view
    }

    /// Rebuilds both tracks from the canvas size and the content size.
    pub fn set_tracks(&mut self, canvas: kurbo::Size, content: kurbo::Size) {
        self.horizontal.set_track(canvas.width, content.width);
        self.vertical.set_track(canvas.height, content.height);
    }

    /// Scrolls both axes; returns `true` if either moved.
    pub fn scroll_by(&mut self, dx: f64, dy: f64) -> bool {
        let moved_x = self.horizontal.scroll_by(dx);
        let moved_y = self.vertical.scroll_by(dy);
        moved_x || moved_y
    }

    /// Scrollbar geometry for both axes.
    #[must_use]
    pub fn scrollbars(&self) -> ScrollbarGeometry {
        ScrollbarGeometry {
            horizontal: self.horizontal.thumb(),
            vertical: self.vertical.thumb(),
        }
    }
}

/// Thumb placement on one scrollbar.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThumbGeometry {
    /// Length of the track the thumb moves on.
    pub track_length: f64,
    /// Thumb length along the track.
    pub thumb_size: f64,
    /// Thumb offset from the start of the track.
    pub thumb_start: f64,
    /// Whether the bar should be shown at all.
    pub visible: bool,
}

/// Thumb placement for both scrollbars.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollbarGeometry {
    /// Horizontal scrollbar.
    pub horizontal: ThumbGeometry,
    /// Vertical scrollbar.
    pub vertical: ThumbGeometry,
}
