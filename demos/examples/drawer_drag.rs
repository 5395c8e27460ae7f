// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive dragging.
//!
//! This example installs the drag resizer, replays a flick upwards, and advances a
//! [`Timeline`] until the snap animation settles.
//!
//! Run:
//! - `cargo run -p understory_drawer_demos --example drawer_drag`

use kurbo::{Insets, Rect, Vec2};
use understory_drawer::resizer::{GestureEvent, PanEvent, PanPhase, ResizerKind};
use understory_drawer::view::{DrawerLayout, DrawerSurface};
use understory_drawer::{ContentDrawerContainer, DrawerChrome};
use understory_transition::Timeline;

struct Host;

impl DrawerSurface for Host {
    type Child = u32;

    fn set_content(&mut self, _: Option<&u32>) {}

    fn set_drawer(&mut self, _: Option<&u32>) {}

    fn apply_chrome(&mut self, _: &DrawerChrome) {}

    fn apply_layout(&mut self, layout: &DrawerLayout) {
        println!("  length={:?}", layout.length);
    }
}

fn pan(phase: PanPhase, dy: f64, vy: f64) -> GestureEvent {
    GestureEvent::Pan(PanEvent {
        phase,
        translation: Vec2::new(0.0, dy),
        velocity: Vec2::new(0.0, vy),
    })
}

fn main() {
    let mut container =
        ContentDrawerContainer::new(Timeline::new()).with_resizer(ResizerKind::Drag);
    container.load_view(Host);
    container.set_bounds(
        Rect::new(0.0, 0.0, 375.0, 812.0),
        Insets::new(0.0, 44.0, 0.0, 34.0),
    );
    let Some(id) = container.resizer_id() else {
        return;
    };
    println!("recognizers: {:?}", container.recognizers());

    println!("== Pan ==");
    container.handle_gesture(id, &pan(PanPhase::Began, 0.0, 0.0));
    for dy in [-20.0, -60.0, -120.0] {
        container.handle_gesture(id, &pan(PanPhase::Changed, dy, -900.0));
    }
    // 86 + 160 + 0.07 * 1200 = 330, between the closed and open thresholds.
    container.handle_gesture(id, &pan(PanPhase::Ended, -160.0, -1200.0));
    println!("released at state {:?}", container.open_state());

    println!("== Settle ==");
    let timeline = container.animator_mut();
    while !timeline.is_idle() {
        let settled = timeline.advance(1.0 / 60.0);
        if settled > 0 {
            println!("  t={:.3}s: {settled} transaction(s) settled", timeline.now());
        }
    }
}
