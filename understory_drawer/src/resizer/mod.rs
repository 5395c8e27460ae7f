// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture resizers: strategies that turn gesture input into drawer changes.
//!
//! ## Usage
//!
//! 1) Ask the container which [`Recognizer`]s the active resizer needs and install them, tagged
//!    with the container's current [`ResizerId`].
//! 2) Forward recognizer policy queries ([`Resizer::should_receive`],
//!    [`Resizer::should_be_required_to_fail_by`]) and recognized events ([`GestureEvent`]).
//! 3) When the resizer is swapped, reinstall the recognizers with the new id. Callbacks still
//!    tagged with the old id are ignored.
//!
//! A resizer never owns the container. Every call receives the container as a
//! [`ResizerDelegate`], and the delegate checks the caller's id before acting, so a superseded
//! resizer can never change the drawer.

use core::fmt::Debug;

use kurbo::{Point, Rect, Vec2};

use crate::types::{Direction, Length, OpenState, SwipeDirection};

mod drag;
mod swipe;

pub use drag::DragResizer;
pub use swipe::{SwipeResizer, can_swipe, swipe_target};

/// Identifier of one installed resizer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResizerId(pub(crate) u64);

/// Which resizer a container installs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResizerKind {
    /// Discrete up/down swipes step between open states.
    #[default]
    Swipe,
    /// A continuous pan follows the pointer and snaps on release.
    Drag,
}

/// Gesture recognizers a resizer asks the host to install.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Recognizer {
    /// One-shot upward swipe.
    SwipeUp,
    /// One-shot downward swipe.
    SwipeDown,
    /// Continuous pan.
    Pan,
}

/// Scroll position of a scrollable view competing with a resizer's recognizer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollMetrics {
    /// Vertical content offset.
    pub offset_y: f64,
    /// Height of the scrolled content.
    pub content_height: f64,
    /// Height of the visible viewport.
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Returns `true` if the content is scrolled away from its top.
    pub fn can_scroll_up(&self) -> bool {
        self.offset_y > 0.0
    }

    /// Returns `true` if more content lies below the viewport.
    pub fn can_scroll_down(&self) -> bool {
        self.offset_y < self.content_height - self.viewport_height
    }
}

/// Pan gesture phases.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PanPhase {
    /// The pan was recognized.
    Began,
    /// The pointer moved.
    Changed,
    /// The pointer was released.
    Ended,
    /// The host cancelled the pan.
    Cancelled,
}

/// One pan update.
///
/// Translation is measured from where the pan began; velocity is in units per second.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanEvent {
    /// Phase.
    pub phase: PanPhase,
    /// Translation since the pan began.
    pub translation: Vec2,
    /// Current velocity.
    pub velocity: Vec2,
}

/// A recognized gesture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureEvent {
    /// A completed swipe.
    Swipe(SwipeDirection),
    /// A pan update.
    Pan(PanEvent),
}

/// What a resizer can ask of the container.
///
/// Every method takes the id of the calling resizer. Queries from a resizer that is no longer
/// installed return `None`; commands from it are ignored.
pub trait ResizerDelegate {
    /// Direction of the active configuration.
    fn direction(&self, resizer: ResizerId) -> Option<Direction>;

    /// Current open state.
    fn open_state(&self, resizer: ResizerId) -> Option<OpenState>;

    /// Current drawer frame in container coordinates.
    fn drawer_frame(&self, resizer: ResizerId) -> Option<Rect>;

    /// Move to `state` through the state machine.
    fn set_open_state(&mut self, resizer: ResizerId, state: OpenState, animated: bool);

    /// Show the drawer at a provisional length without changing the open state.
    fn resize(&mut self, resizer: ResizerId, length: Length);

    /// An interactive resize finished at `length`; resolve it to an open state.
    fn did_end_resizing(&mut self, resizer: ResizerId, length: Length);
}

/// A gesture-handling strategy.
pub trait Resizer: Debug {
    /// This resizer's id.
    fn id(&self) -> ResizerId;

    /// Which kind of resizer this is.
    fn kind(&self) -> ResizerKind;

    /// Recognizers the host must install for this resizer.
    fn recognizers(&self) -> &'static [Recognizer];

    /// Whether `recognizer` should start tracking a touch at `point` (container coordinates).
    fn should_receive(
        &self,
        recognizer: Recognizer,
        point: Point,
        delegate: &dyn ResizerDelegate,
    ) -> bool;

    /// Whether `recognizer` must fail before a competing recognizer may proceed.
    ///
    /// `scroll` describes the competing recognizer's scroll view, or is `None` when the
    /// competitor is not scrolling anything.
    fn should_be_required_to_fail_by(
        &self,
        recognizer: Recognizer,
        scroll: Option<&ScrollMetrics>,
        delegate: &dyn ResizerDelegate,
    ) -> bool {
        let _ = (recognizer, scroll, delegate);
        false
    }

    /// Handle a recognized gesture.
    fn handle(&mut self, event: &GestureEvent, delegate: &mut dyn ResizerDelegate);
}

/// Returns `true` if `point` lies within `frame` grown by `margin` on every side.
pub(crate) fn in_expanded(frame: Option<Rect>, margin: f64, point: Point) -> bool {
    frame.is_some_and(|frame| frame.inflate(margin, margin).contains(point))
}
