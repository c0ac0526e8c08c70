// Copyright 2026 the Venue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Venue Pane: list/map pane state for event browsers.
//!
//! An event browser shows a list of events and a map of where they happen.
//! On a wide screen both panes sit side by side. On a narrow one only one fits,
//! and a toggle control switches between them.
//!
//! This crate keeps those two inputs apart:
//! - **Which pane the user chose** ([`ViewState`]), changed only by explicit
//!   action.
//! - **Whether the layout is constrained**, an external signal from the host's
//!   breakpoint logic (see [`Breakpoint`]).
//!
//! Visibility is a pure function of both ([`visibility_for`]), reported as
//! [`Panes`] flags. [`PaneController`] wraps the pair with change reporting
//! and a revision counter.
//!
//! ## Minimal example
//!
//! ```rust
//! use venue_pane::{Breakpoint, PaneController, Panes};
//!
//! let mut panes = PaneController::new();
//! panes.on_viewport_width(390.0, &Breakpoint::SMALL);
//! assert_eq!(panes.visibility(), Panes::LIST | Panes::TOGGLE);
//!
//! panes.toggle();
//! assert!(panes.is_map_visible());
//! assert!(!panes.is_list_visible());
//! ```
//!
//! The controller is a plain value with no internal queue; transitions apply
//! in the order they are called.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod state;

pub use controller::{PaneChange, PaneController};
pub use state::{Breakpoint, Panes, ViewState, visibility_for};
