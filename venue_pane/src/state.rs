// Copyright 2026 the Venue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;

/// Which pane the user last chose to look at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ViewState {
    /// The event list.
    #[default]
    List,
    /// The event map.
    Map,
}

impl ViewState {
    /// The other state.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::List => Self::Map,
            Self::Map => Self::List,
        }
    }

    /// The pane flag this state selects.
    #[must_use]
    pub const fn pane(self) -> Panes {
        match self {
            Self::List => Panes::LIST,
            Self::Map => Panes::MAP,
        }
    }
}

bitflags! {
    /// Which parts of the layout are shown.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Panes: u8 {
        /// The event list pane.
        const LIST = 1 << 0;
        /// The map pane.
        const MAP = 1 << 1;
        /// The control that switches between list and map.
        const TOGGLE = 1 << 2;
    }
}

/// Visibility for a layout in `state`.
///
/// - Wide layout: list and map side by side, no toggle.
/// - Constrained layout: only the pane `state` selects, plus the toggle.
#[must_use]
pub const fn visibility_for(state: ViewState, is_constrained: bool) -> Panes {
    if is_constrained {
        state.pane().union(Panes::TOGGLE)
    } else {
        Panes::LIST.union(Panes::MAP)
    }
}

/// Breakpoint separating constrained from wide layouts.
///
/// A layout narrower than `min_wide_width` logical pixels is constrained.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoint {
    /// Narrowest width at which list and map fit side by side.
    pub min_wide_width: f64,
}

impl Breakpoint {
    /// The common "small" breakpoint at 600 logical pixels.
    pub const SMALL: Self = Self::new(600.0);

    /// Creates a breakpoint at `min_wide_width` logical pixels.
    #[must_use]
    pub const fn new(min_wide_width: f64) -> Self {
        Self { min_wide_width }
    }

    /// Returns `true` if a layout `width` pixels wide is constrained.
    ///
    /// `NaN` widths count as wide.
    #[must_use]
    pub fn is_constrained(&self, width: f64) -> bool {
        width < self.min_wide_width
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self::SMALL
    }
}

#[cfg(test)]
mod tests {
    use super::{Breakpoint, Panes, ViewState, visibility_for};

    #[test]
    fn flipped_is_self_inverse() {
        for state in [ViewState::List, ViewState::Map] {
            assert_ne!(state.flipped(), state);
            assert_eq!(state.flipped().flipped(), state);
        }
    }

    #[test]
    fn visibility_table() {
        assert_eq!(visibility_for(ViewState::List, false), Panes::LIST | Panes::MAP);
        assert_eq!(visibility_for(ViewState::Map, false), Panes::LIST | Panes::MAP);
        assert_eq!(
            visibility_for(ViewState::List, true),
            Panes::LIST | Panes::TOGGLE
        );
        assert_eq!(
            visibility_for(ViewState::Map, true),
            Panes::MAP | Panes::TOGGLE
        );
    }

    #[test]
    fn breakpoint_threshold_is_exclusive() {
        let bp = Breakpoint::default();
        assert!(bp.is_constrained(320.0));
        assert!(bp.is_constrained(599.9));
        assert!(!bp.is_constrained(600.0));
        assert!(!bp.is_constrained(1280.0));
        assert!(!bp.is_constrained(f64::NAN));
    }
}
