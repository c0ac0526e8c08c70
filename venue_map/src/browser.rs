// Copyright 2026 the Venue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use tracing::trace;
use venue_cluster::Located;
use venue_pane::{Breakpoint, PaneChange, PaneController, Panes};

use crate::adapter::MapRenderAdapter;
use crate::model::EventMap;
use crate::options::MapOptions;

/// An event browser: the map model plus list/map pane state.
///
/// This is the piece a host layout talks to. It forwards layout signals to a
/// [`PaneController`], keeps an [`EventMap`] of the events, and only presents
/// the map to its adapter while the map pane is visible.
pub struct EventBrowser<E: Located> {
    map: EventMap<E>,
    panes: PaneController,
    breakpoint: Breakpoint,
}

impl<E: Located> core::fmt::Debug for EventBrowser<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventBrowser")
            .field("map", &self.map)
            .field("panes", &self.panes)
            .field("breakpoint", &self.breakpoint)
            .finish()
    }
}

impl<E: Located> EventBrowser<E> {
    /// Creates a browser with default options.
    #[must_use]
    pub fn new(map_size: Size) -> Self {
        Self::with_options(map_size, MapOptions::default())
    }

    /// Creates a browser whose map pane is `map_size` pixels.
    #[must_use]
    pub fn with_options(map_size: Size, options: MapOptions) -> Self {
        let MapOptions {
            fit,
            tiles,
            breakpoint,
        } = options;
        Self {
            map: EventMap::with_options(map_size, fit, tiles),
            panes: PaneController::new(),
            breakpoint,
        }
    }

    /// The map model.
    #[must_use]
    pub fn map(&self) -> &EventMap<E> {
        &self.map
    }

    /// The pane controller.
    #[must_use]
    pub fn panes(&self) -> &PaneController {
        &self.panes
    }

    /// The breakpoint used by [`EventBrowser::set_viewport_width`].
    #[must_use]
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// What the layout should render.
    #[must_use]
    pub fn layout(&self) -> Panes {
        self.panes.visibility()
    }

    /// Applies the layout width in logical pixels.
    pub fn set_viewport_width(&mut self, width: f64) -> PaneChange {
        let change = self.panes.on_viewport_width(width, &self.breakpoint);
        trace!(width, constrained = self.panes.is_constrained(), "viewport width");
        change
    }

    /// Applies an already classified layout change.
    pub fn on_breakpoint_change(&mut self, is_constrained: bool) -> PaneChange {
        let change = self.panes.on_breakpoint_change(is_constrained);
        trace!(
            constrained = is_constrained,
            shown = ?change.shown(),
            hidden = ?change.hidden(),
            "breakpoint change"
        );
        change
    }

    /// Switches between list and map, on explicit user action.
    pub fn toggle(&mut self) -> PaneChange {
        let change = self.panes.toggle();
        trace!(
            state = ?self.panes.state(),
            shown = ?change.shown(),
            "toggled pane"
        );
        change
    }

    /// Resizes the map pane.
    pub fn set_map_size(&mut self, size: Size) {
        self.map.set_view_size(size);
    }

    /// Presents the map if its pane is visible. Returns `true` if the adapter
    /// was called.
    ///
    /// While the map is hidden nothing is sent; the latest state goes out the
    /// next time it is visible.
    pub fn present<A>(&mut self, adapter: &mut A) -> bool
    where
        A: MapRenderAdapter<E::LocationId> + ?Sized,
    {
        if !self.panes.is_map_visible() {
            trace!(revision = self.map.revision(), "map pane hidden, not presenting");
            return false;
        }
        self.map.present(adapter)
    }

    /// Models a remount: back to the list, and the map adapter is
    /// reinitialized on its next presentation. Events are kept.
    pub fn remount(&mut self) -> PaneChange {
        self.map.invalidate_presentation();
        self.panes.reset()
    }
}

impl<E: Located + PartialEq> EventBrowser<E> {
    /// Replaces the events. See [`EventMap::set_events`].
    pub fn set_events(&mut self, events: Vec<E>) -> bool {
        self.map.set_events(events)
    }
}
