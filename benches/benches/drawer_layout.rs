// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Insets, Rect};
use understory_drawer::chrome::DrawerChrome;
use understory_drawer::constraints::{Item, slot_constraints};
use understory_drawer::frame::Frames;
use understory_drawer::resizer::{GestureEvent, PanEvent, PanPhase, ResizerKind};
use understory_drawer::view::{DrawerLayout, DrawerSurface};
use understory_drawer::{ContentDrawerContainer, DrawerUi, Length, OpenState};
use understory_transition::Immediate;

const PHONE: Rect = Rect::new(0.0, 0.0, 375.0, 812.0);
const TABLET: Rect = Rect::new(0.0, 0.0, 1024.0, 768.0);
const SAFE_AREA: Insets = Insets::new(0.0, 44.0, 0.0, 34.0);

struct NullSurface;

impl DrawerSurface for NullSurface {
    type Child = u32;
    fn set_content(&mut self, _: Option<&u32>) {}
    fn set_drawer(&mut self, _: Option<&u32>) {}
    fn apply_chrome(&mut self, _: &DrawerChrome) {}
    fn apply_layout(&mut self, layout: &DrawerLayout) {
        black_box(layout.drawer_frame());
    }
}

fn bench_constraints(c: &mut Criterion) {
    let mut group = c.benchmark_group("constraints");
    for (name, ui) in [("compact", DrawerUi::compact()), ("regular", DrawerUi::regular())] {
        group.bench_function(format!("generate_{name}"), |b| {
            b.iter(|| {
                for state in OpenState::ALL {
                    let length = ui.length_for(state);
                    black_box(ui.provider().make_drawer_constraints(length));
                    black_box(ui.provider().make_content_constraints(length));
                }
            });
        });
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    for (name, ui, bounds) in [
        ("compact_phone", DrawerUi::compact(), PHONE),
        ("regular_tablet", DrawerUi::regular(), TABLET),
    ] {
        let chrome = DrawerChrome::from_ui(&ui);
        let drawer = ui.provider().make_drawer_constraints(Length::Fixed(250.0));
        let slots = slot_constraints(chrome.shadow.outsets());
        group.bench_function(format!("drawer_{name}"), |b| {
            b.iter(|| {
                let mut frames = Frames::new(bounds, SAFE_AREA);
                black_box(frames.resolve(Item::Drawer, &drawer));
                black_box(frames.resolve(Item::Shadow, &slots));
            });
        });
        group.bench_function(format!("layout_{name}"), |b| {
            b.iter(|| {
                black_box(DrawerLayout::resolve(
                    &ui,
                    &chrome,
                    Length::Maximum,
                    bounds,
                    SAFE_AREA,
                ))
            });
        });
    }
    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let pan = |phase, dy| {
        GestureEvent::Pan(PanEvent {
            phase,
            translation: kurbo::Vec2::new(0.0, dy),
            velocity: kurbo::Vec2::ZERO,
        })
    };
    c.bench_function("drag_60_updates", |b| {
        b.iter_batched(
            || {
                let mut container =
                    ContentDrawerContainer::new(Immediate).with_resizer(ResizerKind::Drag);
                container.load_view(NullSurface);
                container.set_bounds(PHONE, SAFE_AREA);
                container
            },
            |mut container| {
                let Some(id) = container.resizer_id() else {
                    return;
                };
                container.handle_gesture(id, &pan(PanPhase::Began, 0.0));
                for i in 1..=60 {
                    container.handle_gesture(id, &pan(PanPhase::Changed, -5.0 * f64::from(i)));
                }
                container.handle_gesture(id, &pan(PanPhase::Ended, -300.0));
                black_box(container.open_state());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_constraints, bench_resolve, bench_drag);
criterion_main!(benches);
