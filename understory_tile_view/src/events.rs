// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout-relevant events and explicit subscriptions.
//!
//! A layout registers interest in a set of events when it is created and gets
//! back a [`SubscriptionId`]. The host keeps delivering matching events to
//! [`ViewportLayout::handle_event`](crate::ViewportLayout::handle_event) until
//! the layout is torn down, which releases the subscription again.
//!
//! ```
//! use understory_tile_view::{EventBus, EventSet, EventSource, LayoutEvent};
//!
//! let mut bus = EventBus::new();
//! let id = bus.subscribe(EventSet::RESIZE | EventSet::ZOOM_END);
//!
//! assert_eq!(bus.subscribers(LayoutEvent::Resize).collect::<Vec<_>>(), vec![id]);
//! assert_eq!(bus.subscribers(LayoutEvent::PanelInsert).count(), 0);
//!
//! bus.unsubscribe(id);
//! assert!(bus.is_empty());
//! ```

use bitflags::bitflags;

/// Something changed that may affect the layout.
///
/// Events carry no payload: the layout re-reads everything it needs from its
/// collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutEvent {
    /// The canvas was resized.
    Resize,
    /// A zoom animation finished.
    ZoomEnd,
    /// The set of available zoom levels (and with it the current zoom) changed.
    ZoomLevelsChange,
    /// An item was added to the side panel.
    PanelInsert,
    /// An item was removed from the side panel.
    PanelDelete,
    /// Side-panel items were imported in bulk.
    PanelImport,
    /// The side panel was shown or hidden.
    PanelVisibility,
}

impl LayoutEvent {
    /// The single-event set containing this event.
    #[must_use]
    pub const fn as_set(self) -> EventSet {
        match self {
            Self::Resize => EventSet::RESIZE,
            Self::ZoomEnd => EventSet::ZOOM_END,
            Self::ZoomLevelsChange => EventSet::ZOOM_LEVELS_CHANGE,
            Self::PanelInsert => EventSet::PANEL_INSERT,
            Self::PanelDelete => EventSet::PANEL_DELETE,
            Self::PanelImport => EventSet::PANEL_IMPORT,
            Self::PanelVisibility => EventSet::PANEL_VISIBILITY,
        }
    }

    /// Returns `true` for events about side-panel content.
    #[must_use]
    pub const fn is_panel_event(self) -> bool {
        EventSet::PANEL.contains(self.as_set())
    }
}

bitflags! {
    /// A set of [`LayoutEvent`]s.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct EventSet: u8 {
        /// [`LayoutEvent::Resize`].
        const RESIZE = 1 << 0;
        /// [`LayoutEvent::ZoomEnd`].
        const ZOOM_END = 1 << 1;
        /// [`LayoutEvent::ZoomLevelsChange`].
        const ZOOM_LEVELS_CHANGE = 1 << 2;
        /// [`LayoutEvent::PanelInsert`].
        const PANEL_INSERT = 1 << 3;
        /// [`LayoutEvent::PanelDelete`].
        const PANEL_DELETE = 1 << 4;
        /// [`LayoutEvent::PanelImport`].
        const PANEL_IMPORT = 1 << 5;
        /// [`LayoutEvent::PanelVisibility`].
        const PANEL_VISIBILITY = 1 << 6;

        /// Every side-panel content event.
        const PANEL = Self::PANEL_INSERT.bits()
            | Self::PANEL_DELETE.bits()
            | Self::PANEL_IMPORT.bits()
            | Self::PANEL_VISIBILITY.bits();
    }
}

impl EventSet {
    /// Returns `true` if `event` is in the set.
    #[must_use]
    pub const fn has(self, event: LayoutEvent) -> bool {
        self.contains(event.as_set())
    }
}

/// Handle for one registration with an [`EventSource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Wraps a raw identifier chosen by an [`EventSource`] implementation.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw identifier, for logging.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Registration side of an event dispatcher.
pub trait EventSource {
    /// Registers interest in `events` and returns the handle to release it with.
    fn subscribe(&mut self, events: EventSet) -> SubscriptionId;

    /// Releases a registration. Unknown handles are ignored.
    fn unsubscribe(&mut self, id: SubscriptionId);
}

/// A minimal in-process [`EventSource`] that records registrations.
///
/// The bus does not call anyone; the host asks it who is interested in an
/// event with [`EventBus::subscribers`] and delivers the event itself.
#[derive(Clone, Debug, Default)]
pub struct EventBus {
    next_id: u64,
    subscriptions: Vec<(SubscriptionId, EventSet)>,
}

impl EventBus {
    /// Creates a bus with no registrations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscriptions interested in `event`, in registration order.
    pub fn subscribers(&self, event: LayoutEvent) -> impl Iterator<Item = SubscriptionId> + '_ {
        self.subscriptions
            .iter()
            .filter(move |(_, set)| set.has(event))
            .map(|(id, _)| *id)
    }

    /// The event set registered under `id`, if it is still live.
    #[must_use]
    pub fn events_for(&self, id: SubscriptionId) -> Option<EventSet> {
        self.subscriptions
            .iter()
            .find(|(sub, _)| *sub == id)
            .map(|(_, set)| *set)
    }

    /// Number of live registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

impl EventSource for EventBus {
    fn subscribe(&mut self, events: EventSet) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_id);
        self.next_id += 1;
        self.subscriptions.push((id, events));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscriptions.retain(|(sub, _)| *sub != id);
    }
}

#[cfg(test)]
mod tests {
    use super::{EventBus, EventSet, EventSource, LayoutEvent};

    #[test]
    fn panel_events_are_grouped() {
        assert!(LayoutEvent::PanelImport.is_panel_event());
        assert!(LayoutEvent::PanelVisibility.is_panel_event());
        assert!(!LayoutEvent::Resize.is_panel_event());
        assert!(!LayoutEvent::ZoomLevelsChange.is_panel_event());
    }

    #[test]
    fn subscribers_filter_by_event() {
        let mut bus = EventBus::new();
        let a = bus.subscribe(EventSet::RESIZE | EventSet::ZOOM_END);
        let b = bus.subscribe(EventSet::RESIZE | EventSet::PANEL);

        let resize: Vec<_> = bus.subscribers(LayoutEvent::Resize).collect();
        assert_eq!(resize, vec![a, b]);
        let insert: Vec<_> = bus.subscribers(LayoutEvent::PanelInsert).collect();
        assert_eq!(insert, vec![b]);
        assert_eq!(bus.subscribers(LayoutEvent::ZoomLevelsChange).count(), 0);
    }

    #[test]
    fn unsubscribe_releases_only_that_handle() {
        let mut bus = EventBus::new();
        let a = bus.subscribe(EventSet::RESIZE);
        let b = bus.subscribe(EventSet::RESIZE);
        assert_ne!(a, b);

        bus.unsubscribe(a);
        assert_eq!(bus.len(), 1);
        assert_eq!(bus.events_for(a), None);
        assert_eq!(bus.events_for(b), Some(EventSet::RESIZE));

        // Releasing twice is harmless.
        bus.unsubscribe(a);
        assert_eq!(bus.len(), 1);
    }
}
