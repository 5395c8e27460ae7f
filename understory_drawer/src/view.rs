// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The realized drawer view: host surface, active configuration, and live length.

use alloc::vec::Vec;

use kurbo::{Insets, Rect};

use crate::chrome::DrawerChrome;
use crate::config::DrawerUi;
use crate::constraints::{Constraint, Item, slot_constraints};
use crate::frame::Frames;
use crate::types::{Length, OpenState};

/// Host rendering surface for the two panes.
///
/// The container never draws. It tells the surface which children to host, what chrome to
/// render, and the constraints and reference frames to lay them out with.
pub trait DrawerSurface {
    /// Host handle of a child pane.
    type Child: PartialEq;

    /// Host `child` full size in the content pane, or clear it.
    fn set_content(&mut self, child: Option<&Self::Child>);

    /// Host `child` in the drawer, or clear it.
    fn set_drawer(&mut self, child: Option<&Self::Child>);

    /// Render the drawer with new chrome.
    fn apply_chrome(&mut self, chrome: &DrawerChrome);

    /// Apply a new layout. Called inside the animation transaction the change belongs to.
    fn apply_layout(&mut self, layout: &DrawerLayout);
}

/// Constraints and reference frames for one drawer length.
#[derive(Clone, Debug)]
pub struct DrawerLayout {
    /// Length the layout was computed for.
    pub length: Length,
    /// Constraints placing the drawer in the container.
    pub drawer_constraints: Vec<Constraint>,
    /// Constraints placing the content guide in the drawer.
    pub content_constraints: Vec<Constraint>,
    /// Constraints for the child slots and the shadow.
    pub slot_constraints: Vec<Constraint>,
    /// Resolved frames, in container coordinates.
    pub frames: Frames,
    /// Frame of the grab handle, if shown.
    pub grabber: Option<Rect>,
}

impl DrawerLayout {
    /// Generate and resolve the layout of `ui` at `length`.
    pub fn resolve(
        ui: &DrawerUi,
        chrome: &DrawerChrome,
        length: Length,
        bounds: Rect,
        safe_area: Insets,
    ) -> Self {
        let provider = ui.provider();
        let drawer_constraints = provider.make_drawer_constraints(length);
        let content_constraints = provider.make_content_constraints(length);
        let slot_constraints = slot_constraints(chrome.shadow.outsets());

        let mut frames = Frames::new(bounds, safe_area);
        frames.resolve(Item::ContentContainer, &slot_constraints);
        frames.resolve(Item::ContentChild, &slot_constraints);
        let drawer = frames.resolve(Item::Drawer, &drawer_constraints);
        frames.resolve_drawer_safe_area();
        frames.resolve(Item::ContentGuide, &content_constraints);
        frames.resolve(Item::DrawerChild, &slot_constraints);
        frames.resolve(Item::Shadow, &slot_constraints);

        Self {
            length,
            drawer_constraints,
            content_constraints,
            slot_constraints,
            frames,
            grabber: chrome.grabber.frame_in(drawer),
        }
    }

    /// The drawer frame.
    pub fn drawer_frame(&self) -> Rect {
        self.frames.get(Item::Drawer).unwrap_or(Rect::ZERO)
    }

    /// Frame of `item`.
    pub fn frame(&self, item: Item) -> Option<Rect> {
        self.frames.get(item)
    }
}

/// A realized drawer: the surface plus everything needed to lay it out.
///
/// Changes mark the layout dirty; [`DrawerView::layout_if_needed`] recomputes it and pushes it to
/// the surface. Callers run that inside the transaction that should animate the change.
#[derive(Debug)]
pub struct DrawerView<S> {
    surface: S,
    ui: DrawerUi,
    chrome: DrawerChrome,
    open_length: Length,
    bounds: Rect,
    safe_area: Insets,
    layout: Option<DrawerLayout>,
    reported_drawer_frame: Option<Rect>,
    needs_layout: bool,
}

impl<S: DrawerSurface> DrawerView<S> {
    /// Realize a view over `surface` and render the initial chrome.
    pub fn new(mut surface: S, ui: DrawerUi, open_length: Length) -> Self {
        let chrome = DrawerChrome::from_ui(&ui);
        surface.apply_chrome(&chrome);
        Self {
            surface,
            ui,
            chrome,
            open_length,
            bounds: Rect::ZERO,
            safe_area: Insets::ZERO,
            layout: None,
            reported_drawer_frame: None,
            needs_layout: true,
        }
    }

    /// The host surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The host surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Active configuration.
    pub fn ui(&self) -> &DrawerUi {
        &self.ui
    }

    /// Current chrome.
    pub fn chrome(&self) -> &DrawerChrome {
        &self.chrome
    }

    /// Live drawer length.
    pub fn open_length(&self) -> Length {
        self.open_length
    }

    /// Set the live drawer length.
    pub fn set_open_length(&mut self, length: Length) {
        if self.open_length != length {
            self.open_length = length;
            self.needs_layout = true;
        }
    }

    /// Swap the configuration. `state` re-resolves to a length under the new configuration.
    ///
    /// Returns `false` if `ui` equals the active configuration; nothing changes then.
    pub fn set_ui(&mut self, ui: DrawerUi, state: Option<OpenState>) -> bool {
        if self.ui == ui {
            return false;
        }
        let chrome = DrawerChrome::from_ui(&ui);
        if chrome != self.chrome {
            self.surface.apply_chrome(&chrome);
            self.chrome = chrome;
        }
        if let Some(state) = state {
            self.open_length = ui.length_for(state);
        }
        self.ui = ui;
        self.needs_layout = true;
        true
    }

    /// Container bounds and safe area.
    pub fn bounds(&self) -> (Rect, Insets) {
        (self.bounds, self.safe_area)
    }

    /// Set the container bounds and safe-area insets.
    pub fn set_bounds(&mut self, bounds: Rect, safe_area: Insets) {
        if self.bounds != bounds || self.safe_area != safe_area {
            self.bounds = bounds;
            self.safe_area = safe_area;
            self.needs_layout = true;
        }
    }

    /// Host or clear the content child.
    pub fn set_content(&mut self, child: Option<&S::Child>) {
        self.surface.set_content(child);
    }

    /// Host or clear the drawer child.
    pub fn set_drawer(&mut self, child: Option<&S::Child>) {
        self.surface.set_drawer(child);
    }

    /// Returns `true` if a change is waiting for [`DrawerView::layout_if_needed`].
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Recompute and apply the layout if anything changed.
    pub fn layout_if_needed(&mut self) {
        if !self.needs_layout {
            return;
        }
        let layout = DrawerLayout::resolve(
            &self.ui,
            &self.chrome,
            self.open_length,
            self.bounds,
            self.safe_area,
        );
        self.surface.apply_layout(&layout);
        self.layout = Some(layout);
        self.reported_drawer_frame = None;
        self.needs_layout = false;
    }

    /// The last applied layout.
    pub fn layout(&self) -> Option<&DrawerLayout> {
        self.layout.as_ref()
    }

    /// Record the drawer frame the host actually laid out, until the next layout.
    pub fn set_reported_drawer_frame(&mut self, frame: Rect) {
        self.reported_drawer_frame = Some(frame);
    }

    /// The drawer frame: the host-reported one if any, else the reference frame.
    pub fn drawer_frame(&self) -> Option<Rect> {
        self.reported_drawer_frame
            .or_else(|| self.layout.as_ref().map(DrawerLayout::drawer_frame))
    }

    /// Extent of a drawer at [`Length::Maximum`] in the current bounds.
    pub fn maximum_extent(&self) -> f64 {
        let layout = DrawerLayout::resolve(
            &self.ui,
            &self.chrome,
            Length::Maximum,
            self.bounds,
            self.safe_area,
        );
        layout.drawer_frame().height()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Host surface that records what it is told.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        pub(crate) content: Option<u32>,
        pub(crate) drawer: Option<u32>,
        pub(crate) chrome_updates: usize,
        pub(crate) layouts: Vec<Length>,
        pub(crate) drawer_frame: Option<Rect>,
    }

    impl DrawerSurface for RecordingSurface {
        type Child = u32;

        fn set_content(&mut self, child: Option<&u32>) {
            self.content = child.copied();
        }

        fn set_drawer(&mut self, child: Option<&u32>) {
            self.drawer = child.copied();
        }

        fn apply_chrome(&mut self, _chrome: &DrawerChrome) {
            self.chrome_updates += 1;
        }

        fn apply_layout(&mut self, layout: &DrawerLayout) {
            self.layouts.push(layout.length);
            self.drawer_frame = Some(layout.drawer_frame());
        }
    }
}
