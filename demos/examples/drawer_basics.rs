// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer basics.
//!
//! This example realizes a bottom-up drawer on a phone-sized container, swipes it through its
//! open states, and prints the drawer frame the host would lay out after each step.
//!
//! Run:
//! - `cargo run -p understory_drawer_demos --example drawer_basics`

use kurbo::{Insets, Rect};
use understory_drawer::resizer::GestureEvent;
use understory_drawer::view::{DrawerLayout, DrawerSurface};
use understory_drawer::{ContentDrawerContainer, DrawerChrome, OpenState, SwipeDirection};
use understory_transition::Immediate;

#[derive(Default)]
struct PrintingHost;

impl DrawerSurface for PrintingHost {
    type Child = &'static str;

    fn set_content(&mut self, child: Option<&&'static str>) {
        println!("  content <- {child:?}");
    }

    fn set_drawer(&mut self, child: Option<&&'static str>) {
        println!("  drawer  <- {child:?}");
    }

    fn apply_chrome(&mut self, chrome: &DrawerChrome) {
        println!(
            "  chrome: radius={} corners={:?} grabber={:?}",
            chrome.corner_radius, chrome.corners, chrome.grabber.style
        );
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
    let mut container = ContentDrawerContainer::new(Immediate);
    container.set_content(Some("map"));
    container.set_drawer(Some("search results"));

    println!("== Load ==");
    container.load_view(PrintingHost);
    container.set_bounds(
        Rect::new(0.0, 0.0, 375.0, 812.0),
        Insets::new(0.0, 44.0, 0.0, 34.0),
    );

    let Some(id) = container.resizer_id() else {
        return;
    };
    for swipe in [
        SwipeDirection::Up,
        SwipeDirection::Up,
        SwipeDirection::Up,
        SwipeDirection::Down,
    ] {
        println!("== Swipe {swipe:?} ==");
        container.handle_gesture(id, &GestureEvent::Swipe(swipe));
        println!("  state: {:?}", container.open_state());
    }

    println!("== Close from code ==");
    container.set_open_state(OpenState::Closed, false, || println!("  closed"));
}
