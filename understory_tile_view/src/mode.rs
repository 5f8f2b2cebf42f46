// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::events::EventSet;

/// How documents are placed on the canvas.
///
/// The mode is fixed when a [`crate::ViewportLayout`] is created and decides
/// which events the layout subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// Two documents side by side around a central gap, for comparing
    /// revisions. Has no side panel.
    SplitPane,
    /// One document, centered until a side panel on its right needs room.
    DynamicMargin,
}

impl LayoutMode {
    /// Events a layout in this mode reacts to.
    #[must_use]
    pub const fn events(self) -> EventSet {
        match self {
            Self::SplitPane => EventSet::RESIZE.union(EventSet::ZOOM_END),
            Self::DynamicMargin => EventSet::RESIZE
                .union(EventSet::ZOOM_LEVELS_CHANGE)
                .union(EventSet::PANEL),
        }
    }
}
