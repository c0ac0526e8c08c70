// Copyright 2026 the Venue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use venue_pane::Breakpoint;
use venue_viewport::FitOptions;

use crate::adapter::TileSource;

/// Everything an [`EventBrowser`](crate::EventBrowser) can be configured with.
///
/// With the `serde` feature, missing fields fall back to their defaults, so
/// hosts can keep a partial table in their own config file.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapOptions {
    /// How the map camera is fitted to the event bounds.
    pub fit: FitOptions,
    /// Where tiles come from.
    pub tiles: TileSource,
    /// Width below which only one pane is shown.
    pub breakpoint: Breakpoint,
}

impl MapOptions {
    /// Sets [`MapOptions::fit`].
    #[must_use]
    pub fn with_fit(mut self, fit: FitOptions) -> Self {
        self.fit = fit;
        self
    }

    /// Sets [`MapOptions::tiles`].
    #[must_use]
    pub fn with_tiles(mut self, tiles: TileSource) -> Self {
        self.tiles = tiles;
        self
    }

    /// Sets [`MapOptions::breakpoint`].
    #[must_use]
    pub fn with_breakpoint(mut self, breakpoint: Breakpoint) -> Self {
        self.breakpoint = breakpoint;
        self
    }
}
