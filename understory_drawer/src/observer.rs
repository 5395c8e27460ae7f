// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition observers: components that restyle themselves alongside a configuration change.

use alloc::rc::Rc;
use core::cell::Cell;

use peniko::Color;
use understory_transition::TransitionCoordinator;

use crate::config::DrawerUi;
use crate::types::BarStyle;

/// Identifier returned when registering a transition observer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(pub(crate) u64);

/// A component that reacts to drawer configuration changes.
///
/// Observers add their own animations (and completions) to `coordinator`, so their changes run
/// in the same transaction as the drawer's. Completions run in reverse registration order.
pub trait DrawerTransitionObserver {
    /// The container is about to switch to `ui`.
    fn will_transition(&mut self, ui: &DrawerUi, coordinator: &mut TransitionCoordinator<'_>);
}

/// Navigation bar appearance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BarAppearance {
    /// Bar style.
    pub style: BarStyle,
    /// Bar tint.
    pub tint: Color,
}

impl BarAppearance {
    /// The appearance a configuration asks for.
    pub fn for_ui(ui: &DrawerUi) -> Self {
        Self {
            style: ui.bar_style,
            tint: ui.tint,
        }
    }
}

/// Keeps a navigation bar's style and tint in step with the drawer configuration.
///
/// The bar is shared with the host through [`NavigationChrome::bar`], which the host reads when
/// rendering.
#[derive(Clone, Debug)]
pub struct NavigationChrome {
    bar: Rc<Cell<BarAppearance>>,
}

impl NavigationChrome {
    /// Start from `appearance`.
    pub fn new(appearance: BarAppearance) -> Self {
        Self {
            bar: Rc::new(Cell::new(appearance)),
        }
    }

    /// Current appearance.
    pub fn appearance(&self) -> BarAppearance {
        self.bar.get()
    }

    /// Shared handle to the appearance.
    pub fn bar(&self) -> Rc<Cell<BarAppearance>> {
        self.bar.clone()
    }
}

impl DrawerTransitionObserver for NavigationChrome {
    fn will_transition(&mut self, ui: &DrawerUi, coordinator: &mut TransitionCoordinator<'_>) {
        let bar = self.bar.clone();
        let next = BarAppearance::for_ui(ui);
        coordinator.animate_alongside(move || bar.set(next));
    }
}
