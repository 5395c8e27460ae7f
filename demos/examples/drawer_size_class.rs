// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Size-class transitions.
//!
//! This example keeps a partially open drawer across a switch from the compact bottom sheet to
//! the regular top card, with a navigation bar restyling itself in the same transaction.
//!
//! Run:
//! - `cargo run -p understory_drawer_demos --example drawer_size_class`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Insets, Rect};
use peniko::Color;
use understory_drawer::view::{DrawerLayout, DrawerSurface};
use understory_drawer::{
    BarAppearance, BarStyle, ContentDrawerContainer, Direction, DrawerChrome, DrawerUi,
    NavigationChrome, OpenState, SizeClass,
};
use understory_transition::{Animation, Immediate, TransitionCoordinator};

struct Host;

impl DrawerSurface for Host {
    type Child = u32;

    fn set_content(&mut self, _: Option<&u32>) {}

    fn set_drawer(&mut self, _: Option<&u32>) {}

    fn apply_chrome(&mut self, chrome: &DrawerChrome) {
        println!("  chrome: corners={:?}", chrome.corners);
    }

    fn apply_layout(&mut self, layout: &DrawerLayout) {
        println!(
            "  layout: length={:?} drawer={:?}",
            layout.length,
            layout.drawer_frame()
        );
    }
}

fn main() {
    let regular = match DrawerUi::builder(Direction::TopDown)
        .bar_style(BarStyle::Black)
        .tint(Color::from_rgba8(255, 149, 0, 255))
        .build()
    {
        Ok(ui) => ui,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return;
        }
    };

    let nav = Rc::new(RefCell::new(NavigationChrome::new(BarAppearance::for_ui(
        &DrawerUi::compact(),
    ))));
    let mut container = ContentDrawerContainer::new(Immediate);
    container.set_navigation_observer(&nav);
    container.set_ui(DrawerUi::compact(), regular, false, || {});
    container.set_open_state(OpenState::Partial, false, || {});

    println!("== Compact ==");
    container.load_view(Host);
    container.set_bounds(
        Rect::new(0.0, 0.0, 768.0, 1024.0),
        Insets::new(0.0, 24.0, 0.0, 20.0),
    );
    println!("  drawer size class: {:?}", container.drawer_size_class());

    println!("== Rotate to regular ==");
    let mut coordinator = TransitionCoordinator::new(Animation::new(0.3));
    container.will_transition_to(SizeClass::Regular, &mut coordinator);
    coordinator.perform(&mut Immediate);
    container.set_bounds(
        Rect::new(0.0, 0.0, 1024.0, 768.0),
        Insets::new(0.0, 24.0, 0.0, 20.0),
    );
    println!("  state: {:?}", container.open_state());
    println!("  drawer size class: {:?}", container.drawer_size_class());

    println!("== Restyle ==");
    let black = container.regular_ui().clone();
    container.set_ui(DrawerUi::compact(), black, true, || println!("  restyled"));
    println!("  navigation bar: {:?}", nav.borrow().appearance());
}
