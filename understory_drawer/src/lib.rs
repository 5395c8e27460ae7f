// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drawer --heading-base-level=0

//! Understory Drawer: a full-size content pane with a resizable drawer laid over it.
//!
//! ## Overview
//!
//! The drawer sits at the bottom (or top) of a container and moves between four symbolic open
//! states: closed, peek, partial, and open. How long the drawer is in each state, how wide it
//! is, and how its content is inset all come from a [`DrawerUi`] configuration. A container
//! keeps one configuration per [`SizeClass`] and re-resolves the current state whenever the
//! active configuration changes, so "partial" stays "partial" across rotations and window
//! resizes.
//!
//! The crate does not draw, recognize gestures, or run animations. Hosts plug in:
//!
//! - a [`DrawerSurface`](view::DrawerSurface) that hosts the two child panes, renders the
//!   [`DrawerChrome`], and applies each [`DrawerLayout`](view::DrawerLayout);
//! - an [`Animator`](understory_transition::Animator) that runs transactions;
//! - gesture recognizers that forward events to the active [`resizer`].
//!
//! ## Geometry
//!
//! Drawer placement is expressed as [`constraints`] produced by a
//! [`ConstraintProvider`](constraints::ConstraintProvider). The built-in provider,
//! [`DrawerMetrics`](constraints::DrawerMetrics), covers the usual shapes: a full-width drawer
//! rising from the bottom edge, or a fixed-width card hanging from the top. Hosts with a
//! constraint solver can use the constraints directly; the rest can use the reference frames
//! resolved in [`Frames`](frame::Frames).
//!
//! ```
//! use kurbo::{Insets, Rect};
//! use understory_drawer::constraints::Item;
//! use understory_drawer::frame::Frames;
//! use understory_drawer::{DrawerUi, Length, OpenState};
//!
//! let ui = DrawerUi::compact();
//! assert_eq!(ui.length_for(OpenState::Partial), Length::Fixed(250.0));
//!
//! let constraints = ui.provider().make_drawer_constraints(Length::Fixed(250.0));
//! let mut frames = Frames::new(
//!     Rect::new(0.0, 0.0, 375.0, 812.0),
//!     Insets::new(0.0, 44.0, 0.0, 34.0),
//! );
//! let drawer = frames.resolve(Item::Drawer, &constraints);
//! assert_eq!(drawer, Rect::new(0.0, 575.0, 375.0, 825.0));
//! ```
//!
//! ## Resizing
//!
//! Two resizers are provided. [`SwipeResizer`](resizer::SwipeResizer) steps through the states
//! on discrete swipes; [`DragResizer`](resizer::DragResizer) follows a pan and snaps on release
//! using the configuration's [`SnapPolicy`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod chrome;
pub mod config;
pub mod constraints;
pub mod container;
pub mod error;
pub mod frame;
pub mod observer;
pub mod resizer;
pub mod types;
pub mod view;

pub use chrome::{DrawerChrome, Grabber, Shadow};
pub use config::{DrawerUi, DrawerUiBuilder, Provider, SnapPolicy};
pub use container::ContentDrawerContainer;
pub use error::ConfigError;
pub use observer::{BarAppearance, DrawerTransitionObserver, NavigationChrome, ObserverId};
pub use types::{
    Background, BarStyle, BlurStyle, Corners, Direction, GrabberStyle, Length, OpenState,
    SizeClass, SwipeDirection,
};
