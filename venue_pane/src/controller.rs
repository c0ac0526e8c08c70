// Copyright 2026 the Venue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List/map pane controller.
//!
//! ## Usage
//!
//! 1) Create a [`PaneController`] when the browser mounts; it starts on the list.
//! 2) Feed layout changes through [`PaneController::on_breakpoint_change`] (or
//!    [`PaneController::on_viewport_width`] with a [`Breakpoint`]).
//! 3) Call [`PaneController::toggle`] when the user presses the toggle control.
//! 4) Read [`PaneController::visibility`] to decide what to render.
//!
//! ## Minimal example
//!
//! ```
//! use venue_pane::{PaneController, Panes, ViewState};
//!
//! let mut panes = PaneController::new();
//!
//! // Narrow screen: only the list is shown, with the toggle.
//! panes.on_breakpoint_change(true);
//! assert_eq!(panes.visibility(), Panes::LIST | Panes::TOGGLE);
//!
//! // User switches to the map.
//! let change = panes.toggle();
//! assert_eq!(change.shown(), Panes::MAP);
//! assert_eq!(change.hidden(), Panes::LIST);
//!
//! // Rotating to a wide layout shows both, but the choice is remembered.
//! panes.on_breakpoint_change(false);
//! assert!(panes.is_list_visible() && panes.is_map_visible());
//! assert!(!panes.is_toggle_visible());
//! assert_eq!(panes.state(), ViewState::Map);
//! ```

use crate::state::{Breakpoint, Panes, ViewState, visibility_for};

/// Difference in [`Panes`] caused by one transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaneChange {
    /// Visibility before the transition.
    pub before: Panes,
    /// Visibility after the transition.
    pub after: Panes,
}

impl PaneChange {
    /// Panes that became visible.
    #[must_use]
    pub fn shown(&self) -> Panes {
        self.after.difference(self.before)
    }

    /// Panes that became hidden.
    #[must_use]
    pub fn hidden(&self) -> Panes {
        self.before.difference(self.after)
    }

    /// Returns `true` if visibility did not change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.before == self.after
    }
}

/// Two-state list/map controller combined with the layout breakpoint.
///
/// The logical [`ViewState`] changes only through explicit user action
/// ([`PaneController::toggle`], [`PaneController::set_state`]) or a remount
/// ([`PaneController::reset`]). The breakpoint flag changes only which panes
/// are visible. Visibility is always `visibility_for(state, is_constrained)`.
#[derive(Clone, Debug, Default)]
pub struct PaneController {
    state: ViewState,
    constrained: bool,
    revision: u64,
}

impl PaneController {
    /// Creates a controller showing the list in a wide layout.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: ViewState::List,
            constrained: false,
            revision: 0,
        }
    }

    /// Creates a controller showing the list, with a known layout mode.
    #[must_use]
    pub const fn with_constrained(is_constrained: bool) -> Self {
        Self {
            state: ViewState::List,
            constrained: is_constrained,
            revision: 0,
        }
    }

    /// The pane the user last chose.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Returns `true` if the layout is constrained to one pane.
    #[must_use]
    pub fn is_constrained(&self) -> bool {
        self.constrained
    }

    /// Returns the current revision counter.
    ///
    /// Bumped only when the state or the breakpoint flag actually changes, so
    /// observers can compare revisions instead of visibility snapshots.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// What to render right now.
    #[must_use]
    pub fn visibility(&self) -> Panes {
        visibility_for(self.state, self.constrained)
    }

    /// Returns `true` if the list pane is shown.
    #[must_use]
    pub fn is_list_visible(&self) -> bool {
        self.visibility().contains(Panes::LIST)
    }

    /// Returns `true` if the map pane is shown.
    #[must_use]
    pub fn is_map_visible(&self) -> bool {
        self.visibility().contains(Panes::MAP)
    }

    /// Returns `true` if the list/map toggle control is shown.
    #[must_use]
    pub fn is_toggle_visible(&self) -> bool {
        self.visibility().contains(Panes::TOGGLE)
    }

    /// The state the toggle would switch to, for labeling the control.
    #[must_use]
    pub fn toggle_target(&self) -> ViewState {
        self.state.flipped()
    }

    /// Flips between list and map.
    ///
    /// In a wide layout this changes nothing visible, but the choice applies
    /// as soon as the layout becomes constrained again.
    pub fn toggle(&mut self) -> PaneChange {
        self.set_state(self.state.flipped())
    }

    /// Chooses a pane directly, for example when restoring a previous choice.
    pub fn set_state(&mut self, state: ViewState) -> PaneChange {
        let before = self.visibility();
        if self.state != state {
            self.state = state;
            self.bump_revision();
        }
        self.change_from(before)
    }

    /// Applies a layout change without touching the chosen pane.
    pub fn on_breakpoint_change(&mut self, is_constrained: bool) -> PaneChange {
        let before = self.visibility();
        if self.constrained != is_constrained {
            self.constrained = is_constrained;
            self.bump_revision();
        }
        self.change_from(before)
    }

    /// Applies a layout `width` in logical pixels, classified by `breakpoint`.
    pub fn on_viewport_width(&mut self, width: f64, breakpoint: &Breakpoint) -> PaneChange {
        self.on_breakpoint_change(breakpoint.is_constrained(width))
    }

    /// Returns to the list, as on a fresh mount. The layout mode is kept.
    pub fn reset(&mut self) -> PaneChange {
        self.set_state(ViewState::List)
    }

    fn change_from(&self, before: Panes) -> PaneChange {
        PaneChange {
            before,
            after: self.visibility(),
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
