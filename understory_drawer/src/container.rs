// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The content/drawer container: owns the open state, both configurations, and the resizer.
//!
//! ## Usage
//!
//! 1) Create a [`ContentDrawerContainer`] with the host's [`Animator`] and, optionally, custom
//!    configurations for both size classes.
//! 2) Hand it the content and drawer children, then realize it with
//!    [`ContentDrawerContainer::load_view`].
//! 3) Forward bounds changes, size-class transitions, and gesture callbacks. Gesture callbacks
//!    carry the [`ResizerId`] they were installed with.
//!
//! ```
//! use kurbo::{Insets, Rect};
//! use understory_drawer::container::ContentDrawerContainer;
//! use understory_drawer::resizer::GestureEvent;
//! use understory_drawer::view::{DrawerLayout, DrawerSurface};
//! use understory_drawer::{DrawerChrome, Length, OpenState, SwipeDirection};
//! use understory_transition::Immediate;
//!
//! #[derive(Default)]
//! struct Host {
//!     length: Option<Length>,
//! }
//!
//! impl DrawerSurface for Host {
//!     type Child = &'static str;
//!     fn set_content(&mut self, _: Option<&&'static str>) {}
//!     fn set_drawer(&mut self, _: Option<&&'static str>) {}
//!     fn apply_chrome(&mut self, _: &DrawerChrome) {}
//!     fn apply_layout(&mut self, layout: &DrawerLayout) {
//!         self.length = Some(layout.length);
//!     }
//! }
//!
//! let mut container = ContentDrawerContainer::new(Immediate);
//! container.set_content(Some("map"));
//! container.set_drawer(Some("search"));
//! container.load_view(Host::default());
//! container.set_bounds(Rect::new(0.0, 0.0, 375.0, 812.0), Insets::new(0.0, 44.0, 0.0, 34.0));
//! assert_eq!(container.open_state(), Some(OpenState::Peek));
//!
//! let id = container.resizer_id().unwrap();
//! container.handle_gesture(id, &GestureEvent::Swipe(SwipeDirection::Up));
//! assert_eq!(container.open_state(), Some(OpenState::Partial));
//! assert_eq!(container.view().unwrap().surface().length, Some(Length::Fixed(250.0)));
//! ```

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use kurbo::{Insets, Point, Rect};
use understory_transition::{
    Animation, AnimationOptions, Animator, Easing, Spring, TransitionCoordinator,
};

use crate::config::DrawerUi;
use crate::observer::{DrawerTransitionObserver, ObserverId};
use crate::resizer::{
    DragResizer, GestureEvent, Recognizer, Resizer, ResizerDelegate, ResizerId, ResizerKind,
    ScrollMetrics, SwipeResizer,
};
use crate::types::{Direction, Length, OpenState, SizeClass};
use crate::view::{DrawerSurface, DrawerView};

const INTERACTIVE: AnimationOptions = AnimationOptions::BEGIN_FROM_CURRENT_STATE
    .union(AnimationOptions::ALLOW_USER_INTERACTION);

/// Transition used for animated open-state changes.
pub const OPEN_STATE_ANIMATION: Animation = Animation::new(0.45)
    .with_spring(Spring::new(0.75))
    .with_options(INTERACTIVE);

/// Transition used for each live update of an interactive drag.
pub const DRAG_ANIMATION: Animation = Animation::new(0.07)
    .with_easing(Easing::EaseOut)
    .with_options(INTERACTIVE);

/// Transition used for animated configuration swaps.
pub const UI_ANIMATION: Animation = Animation::new(0.2)
    .with_easing(Easing::EaseOut)
    .with_options(INTERACTIVE);

type SharedObserver = Rc<RefCell<dyn DrawerTransitionObserver>>;
type WeakObserver = Weak<RefCell<dyn DrawerTransitionObserver>>;

/// Everything a resizer may reach through [`ResizerDelegate`].
struct Machine<S: DrawerSurface, A> {
    compact: DrawerUi,
    regular: DrawerUi,
    size_class: SizeClass,
    open_state: Option<OpenState>,
    view: Option<DrawerView<S>>,
    animator: A,
    active_resizer: Option<ResizerId>,
    content: Option<S::Child>,
    drawer: Option<S::Child>,
}

impl<S: DrawerSurface, A: Animator> Machine<S, A> {
    fn current_ui(&self) -> &DrawerUi {
        match self.size_class {
            SizeClass::Compact => &self.compact,
            SizeClass::Regular => &self.regular,
        }
    }

    fn is_active(&self, resizer: ResizerId) -> bool {
        let active = self.active_resizer == Some(resizer);
        if !active {
            tracing::trace!(?resizer, "ignoring superseded resizer");
        }
        active
    }

    fn apply_open_state(
        &mut self,
        state: OpenState,
        animated: bool,
        completion: Box<dyn FnOnce()>,
    ) {
        self.open_state = Some(state);
        let Some(view) = self.view.as_mut() else {
            tracing::trace!(?state, "view not loaded; state applies once it is");
            return;
        };
        tracing::debug!(?state, animated, "open state changed");
        view.set_open_length(view.ui().length_for(state));

        let animation = if animated {
            OPEN_STATE_ANIMATION
        } else {
            Animation::IMMEDIATE
        };
        let mut coordinator = TransitionCoordinator::new(animation);
        coordinator.animate_alongside_with_completion(move || view.layout_if_needed(), completion);
        coordinator.perform(&mut self.animator);
    }
}

impl<S: DrawerSurface, A: Animator> ResizerDelegate for Machine<S, A> {
    fn direction(&self, resizer: ResizerId) -> Option<Direction> {
        self.is_active(resizer).then(|| self.current_ui().direction)
    }

    fn open_state(&self, resizer: ResizerId) -> Option<OpenState> {
        if self.is_active(resizer) {
            self.open_state
        } else {
            None
        }
    }

    fn drawer_frame(&self, resizer: ResizerId) -> Option<Rect> {
        if self.is_active(resizer) {
            self.view.as_ref()?.drawer_frame()
        } else {
            None
        }
    }

    fn set_open_state(&mut self, resizer: ResizerId, state: OpenState, animated: bool) {
        if self.is_active(resizer) {
            self.apply_open_state(state, animated, Box::new(|| {}));
        }
    }

    fn resize(&mut self, resizer: ResizerId, length: Length) {
        if !self.is_active(resizer) {
            return;
        }
        let Some(view) = self.view.as_mut() else {
            return;
        };
        view.set_open_length(length);
        let mut coordinator = TransitionCoordinator::new(DRAG_ANIMATION);
        coordinator.animate_alongside(move || view.layout_if_needed());
        coordinator.perform(&mut self.animator);
    }

    fn did_end_resizing(&mut self, resizer: ResizerId, length: Length) {
        if !self.is_active(resizer) {
            return;
        }
        let (Length::Fixed(extent), Some(view)) = (length, self.view.as_ref()) else {
            tracing::trace!(?length, "resize ended without a fixed length");
            return;
        };
        let ui = self.current_ui();
        let state = ui.snap.snap(extent, ui.provider(), view.maximum_extent());
        tracing::debug!(extent, ?state, "drag released");
        self.apply_open_state(state, true, Box::new(|| {}));
    }
}

/// A full-size content pane with a drawer laid over it.
///
/// The container holds one configuration per [`SizeClass`] and applies the one matching the
/// current size class. The open state is symbolic: its length is re-resolved whenever the
/// configuration changes. Exactly one resizer is installed at a time.
pub struct ContentDrawerContainer<S: DrawerSurface, A: Animator> {
    machine: Machine<S, A>,
    resizer_kind: ResizerKind,
    resizer: Option<Box<dyn Resizer>>,
    next_resizer: u64,
    navigation: Option<WeakObserver>,
    observers: Vec<(ObserverId, WeakObserver)>,
    next_observer: u64,
}

impl<S: DrawerSurface, A: Animator> fmt::Debug for ContentDrawerContainer<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentDrawerContainer")
            .field("size_class", &self.machine.size_class)
            .field("open_state", &self.machine.open_state)
            .field("loaded", &self.machine.view.is_some())
            .field("resizer", &self.resizer)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl<S: DrawerSurface, A: Animator> ContentDrawerContainer<S, A> {
    /// Create an unloaded container with the preset configurations and a swipe resizer.
    pub fn new(animator: A) -> Self {
        Self {
            machine: Machine {
                compact: DrawerUi::compact(),
                regular: DrawerUi::regular(),
                size_class: SizeClass::Compact,
                open_state: None,
                view: None,
                animator,
                active_resizer: None,
                content: None,
                drawer: None,
            },
            resizer_kind: ResizerKind::Swipe,
            resizer: None,
            next_resizer: 0,
            navigation: None,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// Use `compact` and `regular` instead of the presets.
    pub fn with_ui(mut self, compact: DrawerUi, regular: DrawerUi) -> Self {
        self.machine.compact = compact;
        self.machine.regular = regular;
        self
    }

    /// Install a resizer of `kind` once loaded.
    pub fn with_resizer(mut self, kind: ResizerKind) -> Self {
        self.resizer_kind = kind;
        self
    }

    /// Start in `size_class`.
    pub fn with_size_class(mut self, size_class: SizeClass) -> Self {
        self.machine.size_class = size_class;
        self
    }

    /// Realize the view over `surface`.
    ///
    /// The drawer starts at the state requested before loading, or at the active
    /// configuration's initial state. Children handed over earlier are installed.
    pub fn load_view(&mut self, surface: S) {
        let machine = &mut self.machine;
        let ui = machine.current_ui().clone();
        let state = *machine.open_state.get_or_insert(ui.initial_open_state);
        tracing::debug!(?state, size_class = ?machine.size_class, "loading drawer view");

        let length = ui.length_for(state);
        let mut view = DrawerView::new(surface, ui, length);
        view.set_content(machine.content.as_ref());
        view.set_drawer(machine.drawer.as_ref());
        view.layout_if_needed();
        machine.view = Some(view);
        self.install_resizer();
    }

    /// Returns `true` once [`ContentDrawerContainer::load_view`] has run.
    pub fn is_view_loaded(&self) -> bool {
        self.machine.view.is_some()
    }

    /// The realized view.
    pub fn view(&self) -> Option<&DrawerView<S>> {
        self.machine.view.as_ref()
    }

    /// The realized view, mutably.
    pub fn view_mut(&mut self) -> Option<&mut DrawerView<S>> {
        self.machine.view.as_mut()
    }

    /// The host animator.
    pub fn animator(&self) -> &A {
        &self.machine.animator
    }

    /// The host animator, mutably.
    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.machine.animator
    }

    /// Current open state, or `None` before one was set or loaded.
    pub fn open_state(&self) -> Option<OpenState> {
        self.machine.open_state
    }

    /// Move to `state`.
    ///
    /// Animated changes run in the [`OPEN_STATE_ANIMATION`] transaction and `completion` fires
    /// when it settles. Unanimated changes apply and complete before this returns. Before the
    /// view is loaded the state is only recorded and `completion` is dropped.
    pub fn set_open_state(
        &mut self,
        state: OpenState,
        animated: bool,
        completion: impl FnOnce() + 'static,
    ) {
        self.machine
            .apply_open_state(state, animated, Box::new(completion));
    }

    /// Current size class.
    pub fn size_class(&self) -> SizeClass {
        self.machine.size_class
    }

    /// Configuration for compact environments.
    pub fn compact_ui(&self) -> &DrawerUi {
        &self.machine.compact
    }

    /// Configuration for regular environments.
    pub fn regular_ui(&self) -> &DrawerUi {
        &self.machine.regular
    }

    /// The configuration matching the current size class.
    pub fn current_ui(&self) -> &DrawerUi {
        self.machine.current_ui()
    }

    /// Replace both configurations.
    ///
    /// The navigation observer and then every registered observer join the transition, and the
    /// view switches to whichever configuration matches the current size class. Completions run
    /// in reverse: registered observers last to first, the navigation observer, then
    /// `completion`.
    pub fn set_ui(
        &mut self,
        compact: DrawerUi,
        regular: DrawerUi,
        animated: bool,
        completion: impl FnOnce() + 'static,
    ) {
        let observers = self.live_observers();
        let machine = &mut self.machine;
        machine.compact = compact;
        machine.regular = regular;
        let ui = machine.current_ui().clone();
        tracing::debug!(
            size_class = ?machine.size_class,
            animated,
            observers = observers.len(),
            "replacing drawer configurations"
        );

        let mut coordinator = TransitionCoordinator::new(if animated {
            UI_ANIMATION
        } else {
            Animation::IMMEDIATE
        });
        let state = machine.open_state;
        let view = &mut machine.view;
        let next = ui.clone();
        coordinator.animate_alongside_with_completion(
            move || {
                if let Some(view) = view {
                    view.set_ui(next, state);
                    view.layout_if_needed();
                }
            },
            completion,
        );
        for observer in &observers {
            match observer.try_borrow_mut() {
                Ok(mut observer) => observer.will_transition(&ui, &mut coordinator),
                Err(_) => tracing::trace!("observer busy; skipping transition"),
            }
        }
        coordinator.perform(&mut machine.animator);
    }

    /// Switch size class outside any host transition.
    pub fn set_size_class(&mut self, size_class: SizeClass) {
        let machine = &mut self.machine;
        if machine.size_class == size_class {
            return;
        }
        machine.size_class = size_class;
        tracing::debug!(?size_class, "size class changed");
        let ui = machine.current_ui().clone();
        let state = machine.open_state;
        if let Some(view) = machine.view.as_mut() {
            view.set_ui(ui, state);
            view.layout_if_needed();
        }
    }

    /// The host is transitioning to `size_class`; switch configurations alongside it.
    ///
    /// The size class is updated at once. The view swap joins `coordinator`.
    pub fn will_transition_to<'a>(
        &'a mut self,
        size_class: SizeClass,
        coordinator: &mut TransitionCoordinator<'a>,
    ) {
        let machine = &mut self.machine;
        if machine.size_class == size_class {
            return;
        }
        machine.size_class = size_class;
        tracing::debug!(?size_class, "size class transition");
        let ui = machine.current_ui().clone();
        let state = machine.open_state;
        if let Some(view) = machine.view.as_mut() {
            coordinator.animate_alongside(move || {
                view.set_ui(ui, state);
                view.layout_if_needed();
            });
        }
    }

    /// The content child.
    pub fn content(&self) -> Option<&S::Child> {
        self.machine.content.as_ref()
    }

    /// Replace the content child. Setting the current child again does nothing.
    pub fn set_content(&mut self, content: Option<S::Child>) {
        let machine = &mut self.machine;
        if machine.content == content {
            return;
        }
        machine.content = content;
        if let Some(view) = machine.view.as_mut() {
            view.set_content(machine.content.as_ref());
        }
    }

    /// The drawer child.
    pub fn drawer(&self) -> Option<&S::Child> {
        self.machine.drawer.as_ref()
    }

    /// Replace the drawer child. Setting the current child again does nothing.
    pub fn set_drawer(&mut self, drawer: Option<S::Child>) {
        let machine = &mut self.machine;
        if machine.drawer == drawer {
            return;
        }
        machine.drawer = drawer;
        if let Some(view) = machine.view.as_mut() {
            view.set_drawer(machine.drawer.as_ref());
        }
    }

    /// Resize the container and lay it out again.
    pub fn set_bounds(&mut self, bounds: Rect, safe_area: Insets) {
        if let Some(view) = self.machine.view.as_mut() {
            view.set_bounds(bounds, safe_area);
            view.layout_if_needed();
        }
    }

    /// Record the drawer frame the host laid out, for hit testing until the next layout.
    pub fn set_drawer_frame(&mut self, frame: Rect) {
        if let Some(view) = self.machine.view.as_mut() {
            view.set_reported_drawer_frame(frame);
        }
    }

    /// Size class for the drawer child, derived from the drawer's own width.
    pub fn drawer_size_class(&self) -> Option<SizeClass> {
        let frame = self.machine.view.as_ref()?.drawer_frame()?;
        Some(SizeClass::for_width(frame.width()))
    }

    /// Which resizer is (or will be) installed.
    pub fn resizer_kind(&self) -> ResizerKind {
        self.resizer_kind
    }

    /// Swap the resizer.
    ///
    /// A loaded container installs the new resizer under a fresh id, so callbacks still tagged
    /// with the old one are ignored from now on.
    pub fn set_resizer_kind(&mut self, kind: ResizerKind) {
        if self.resizer_kind == kind {
            return;
        }
        self.resizer_kind = kind;
        if self.machine.view.is_some() {
            self.install_resizer();
        }
    }

    /// Id of the installed resizer.
    pub fn resizer_id(&self) -> Option<ResizerId> {
        self.resizer.as_ref().map(|resizer| resizer.id())
    }

    /// Recognizers the host must install for the current resizer.
    pub fn recognizers(&self) -> &'static [Recognizer] {
        match &self.resizer {
            Some(resizer) => resizer.recognizers(),
            None => &[],
        }
    }

    /// Whether `recognizer` should track a touch starting at `point`.
    pub fn should_receive(&self, resizer: ResizerId, recognizer: Recognizer, point: Point) -> bool {
        self.active_resizer(resizer)
            .is_some_and(|r| r.should_receive(recognizer, point, &self.machine))
    }

    /// Whether `recognizer` must fail before a competing recognizer proceeds.
    pub fn should_be_required_to_fail_by(
        &self,
        resizer: ResizerId,
        recognizer: Recognizer,
        scroll: Option<&ScrollMetrics>,
    ) -> bool {
        self.active_resizer(resizer)
            .is_some_and(|r| r.should_be_required_to_fail_by(recognizer, scroll, &self.machine))
    }

    /// Deliver a recognized gesture.
    pub fn handle_gesture(&mut self, resizer: ResizerId, event: &GestureEvent) {
        match self.resizer.as_mut() {
            Some(active) if active.id() == resizer => active.handle(event, &mut self.machine),
            _ => tracing::trace!(?resizer, "gesture for a superseded resizer"),
        }
    }

    /// Register an observer for configuration changes.
    ///
    /// The container holds it weakly; dropping the last strong reference unregisters it.
    pub fn add_transition_observer<O: DrawerTransitionObserver + 'static>(
        &mut self,
        observer: &Rc<RefCell<O>>,
    ) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        let shared: SharedObserver = observer.clone();
        self.observers.push((id, Rc::downgrade(&shared)));
        id
    }

    /// Unregister an observer. Returns `false` if it was not registered.
    pub fn remove_transition_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != id);
        self.observers.len() != before
    }

    /// Set the navigation observer, which joins every transition ahead of the others.
    pub fn set_navigation_observer<O: DrawerTransitionObserver + 'static>(
        &mut self,
        observer: &Rc<RefCell<O>>,
    ) {
        let shared: SharedObserver = observer.clone();
        self.navigation = Some(Rc::downgrade(&shared));
    }

    /// Remove the navigation observer.
    pub fn clear_navigation_observer(&mut self) {
        self.navigation = None;
    }

    fn active_resizer(&self, resizer: ResizerId) -> Option<&dyn Resizer> {
        let active = self.resizer.as_deref().filter(|r| r.id() == resizer);
        if active.is_none() {
            tracing::trace!(?resizer, "query from a superseded resizer");
        }
        active
    }

    fn install_resizer(&mut self) {
        let id = ResizerId(self.next_resizer);
        self.next_resizer += 1;
        let resizer: Box<dyn Resizer> = match self.resizer_kind {
            ResizerKind::Swipe => Box::new(SwipeResizer::new(id)),
            ResizerKind::Drag => Box::new(DragResizer::new(id)),
        };
        tracing::debug!(?id, kind = ?self.resizer_kind, "installing resizer");
        self.resizer = Some(resizer);
        self.machine.active_resizer = Some(id);
    }

    fn live_observers(&mut self) -> Vec<SharedObserver> {
        self.observers.retain(|(_, weak)| weak.strong_count() > 0);
        if self
            .navigation
            .as_ref()
            .is_some_and(|weak| weak.strong_count() == 0)
        {
            self.navigation = None;
        }
        self.navigation
            .iter()
            .chain(self.observers.iter().map(|(_, weak)| weak))
            .filter_map(Weak::upgrade)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{BarAppearance, NavigationChrome};
    use crate::resizer::{PanEvent, PanPhase};
    use crate::types::{BarStyle, SwipeDirection};
    use crate::view::testing::RecordingSurface;
    use alloc::string::String;
    use alloc::format;
    use alloc::vec;
    use core::cell::Cell;
    use kurbo::Vec2;
    use understory_transition::{Immediate, Timeline};

    const PHONE: Rect = Rect::new(0.0, 0.0, 375.0, 812.0);
    const NOTCH: Insets = Insets::new(0.0, 44.0, 0.0, 34.0);

    fn loaded<A: Animator>(animator: A) -> ContentDrawerContainer<RecordingSurface, A> {
        let mut container = ContentDrawerContainer::new(animator);
        container.load_view(RecordingSurface::default());
        container.set_bounds(PHONE, NOTCH);
        container
    }

    fn last_layout<A: Animator>(c: &ContentDrawerContainer<RecordingSurface, A>) -> Option<Length> {
        c.view()?.surface().layouts.last().copied()
    }

    #[test]
    fn swipe_up_from_peek_opens_partially() {
        let mut container = loaded(Immediate);
        assert_eq!(container.open_state(), Some(OpenState::Peek));
        assert_eq!(
            container.view().unwrap().drawer_frame(),
            Some(Rect::new(0.0, 739.0, 375.0, 825.0))
        );

        let id = container.resizer_id().unwrap();
        assert_eq!(
            container.recognizers(),
            &[Recognizer::SwipeUp, Recognizer::SwipeDown]
        );
        assert!(container.should_receive(id, Recognizer::SwipeUp, Point::new(100.0, 700.0)));
        container.handle_gesture(id, &GestureEvent::Swipe(SwipeDirection::Up));

        assert_eq!(container.open_state(), Some(OpenState::Partial));
        assert_eq!(last_layout(&container), Some(Length::Fixed(250.0)));
        assert_eq!(
            container.view().unwrap().drawer_frame(),
            Some(Rect::new(0.0, 575.0, 375.0, 825.0))
        );
    }

    #[test]
    fn unanimated_changes_complete_synchronously() {
        let mut container = loaded(Timeline::new());
        let done = Rc::new(Cell::new(false));
        let flag = done.clone();
        container.set_open_state(OpenState::Open, false, move || flag.set(true));
        assert!(done.get());
        assert!(container.animator().is_idle());
        assert_eq!(last_layout(&container), Some(Length::Maximum));
    }

    #[test]
    fn animated_changes_complete_when_settled() {
        let mut container = loaded(Timeline::new());
        let done = Rc::new(Cell::new(false));
        let flag = done.clone();
        container.set_open_state(OpenState::Partial, true, move || flag.set(true));

        assert_eq!(last_layout(&container), Some(Length::Fixed(250.0)));
        assert!(!done.get());
        let timeline = container.animator_mut();
        let id = timeline.last_transaction().unwrap();
        assert_eq!(timeline.animation(id), Some(&OPEN_STATE_ANIMATION));
        timeline.advance(0.45);
        assert!(done.get());
    }

    #[test]
    fn state_requested_before_loading_is_applied_on_load() {
        let mut container = ContentDrawerContainer::new(Immediate);
        let done = Rc::new(Cell::new(false));
        let flag = done.clone();
        container.set_open_state(OpenState::Open, true, move || flag.set(true));
        assert_eq!(container.open_state(), Some(OpenState::Open));
        assert!(!done.get());
        assert_eq!(container.resizer_id(), None);
        assert!(container.recognizers().is_empty());

        container.load_view(RecordingSurface::default());
        assert_eq!(container.view().unwrap().open_length(), Length::Maximum);
    }

    #[test]
    fn children_are_handed_over_on_load() {
        let mut container = ContentDrawerContainer::new(Immediate);
        container.set_content(Some(1));
        container.set_drawer(Some(2));
        container.load_view(RecordingSurface::default());
        let surface = container.view().unwrap().surface();
        assert_eq!((surface.content, surface.drawer), (Some(1), Some(2)));

        container.set_drawer(Some(3));
        container.set_content(None);
        let surface = container.view().unwrap().surface();
        assert_eq!((surface.content, surface.drawer), (None, Some(3)));
        assert_eq!(container.drawer(), Some(&3));
    }

    #[test]
    fn set_ui_keeps_the_state_and_re_resolves_its_length() {
        let mut container = loaded(Immediate);
        container.set_open_state(OpenState::Partial, false, || {});
        let compact = DrawerUi::builder(Direction::BottomUp)
            .length(OpenState::Partial, Length::Fixed(300.0))
            .build()
            .unwrap();
        container.set_ui(compact, DrawerUi::regular(), true, || {});

        assert_eq!(container.open_state(), Some(OpenState::Partial));
        assert_eq!(last_layout(&container), Some(Length::Fixed(300.0)));
        assert_eq!(container.regular_ui(), &DrawerUi::regular());
    }

    #[test]
    fn configurations_are_kept_per_size_class() {
        let mut container = loaded(Immediate);
        let regular = DrawerUi::builder(Direction::TopDown)
            .bar_style(BarStyle::Black)
            .build()
            .unwrap();
        container.set_ui(DrawerUi::compact(), regular.clone(), false, || {});
        assert_eq!(container.current_ui(), &DrawerUi::compact());

        container.set_size_class(SizeClass::Regular);
        assert_eq!(container.current_ui(), &regular);
        assert_eq!(container.view().unwrap().ui(), &regular);
        assert_eq!(last_layout(&container), Some(Length::Fixed(197.0)));
    }

    #[test]
    fn size_class_transition_joins_the_host_transaction() {
        let mut container = loaded(Immediate);
        let mut coordinator = TransitionCoordinator::new(Animation::new(0.3));
        container.will_transition_to(SizeClass::Regular, &mut coordinator);
        assert_eq!(coordinator.len(), 1);
        coordinator.perform(&mut Immediate);
        assert_eq!(container.size_class(), SizeClass::Regular);
        assert_eq!(container.view().unwrap().ui().direction, Direction::TopDown);

        let mut coordinator = TransitionCoordinator::new(Animation::new(0.3));
        container.will_transition_to(SizeClass::Regular, &mut coordinator);
        assert!(coordinator.is_empty());
    }

    struct Logger {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl DrawerTransitionObserver for Logger {
        fn will_transition(&mut self, _ui: &DrawerUi, coordinator: &mut TransitionCoordinator<'_>) {
            let (name, a, c) = (self.name, self.log.clone(), self.log.clone());
            coordinator.animate_alongside_with_completion(
                move || a.borrow_mut().push(format!("animate {name}")),
                move || c.borrow_mut().push(format!("complete {name}")),
            );
        }
    }

    #[test]
    fn observers_join_in_order_and_complete_in_reverse() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let logger = |name| {
            Rc::new(RefCell::new(Logger {
                name,
                log: log.clone(),
            }))
        };
        let (nav, first, second) = (logger("nav"), logger("first"), logger("second"));

        let mut container = loaded(Immediate);
        container.add_transition_observer(&first);
        container.add_transition_observer(&second);
        container.set_navigation_observer(&nav);
        let done = log.clone();
        container.set_ui(DrawerUi::compact(), DrawerUi::regular(), false, move || {
            done.borrow_mut().push(String::from("complete container"));
        });

        assert_eq!(
            *log.borrow(),
            vec![
                "animate nav",
                "animate first",
                "animate second",
                "complete second",
                "complete first",
                "complete nav",
                "complete container",
            ]
        );
    }

    #[test]
    fn dropped_and_removed_observers_are_skipped() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let kept = Rc::new(RefCell::new(Logger {
            name: "kept",
            log: log.clone(),
        }));
        let removed = Rc::new(RefCell::new(Logger {
            name: "removed",
            log: log.clone(),
        }));
        let dropped = Rc::new(RefCell::new(Logger {
            name: "dropped",
            log: log.clone(),
        }));

        let mut container = loaded(Immediate);
        container.add_transition_observer(&kept);
        let id = container.add_transition_observer(&removed);
        container.add_transition_observer(&dropped);
        drop(dropped);
        assert!(container.remove_transition_observer(id));
        assert!(!container.remove_transition_observer(id));

        container.set_ui(DrawerUi::compact(), DrawerUi::regular(), false, || {});
        assert_eq!(*log.borrow(), vec!["animate kept", "complete kept"]);
    }

    #[test]
    fn navigation_chrome_follows_set_ui() {
        let nav = Rc::new(RefCell::new(NavigationChrome::new(BarAppearance::for_ui(
            &DrawerUi::compact(),
        ))));
        let mut container = loaded(Timeline::new());
        container.set_navigation_observer(&nav);

        let compact = DrawerUi::builder(Direction::BottomUp)
            .bar_style(BarStyle::Black)
            .build()
            .unwrap();
        container.set_ui(compact, DrawerUi::regular(), true, || {});
        assert_eq!(nav.borrow().appearance().style, BarStyle::Black);
        let timeline = container.animator_mut();
        let id = timeline.last_transaction().unwrap();
        assert_eq!(timeline.animation(id), Some(&UI_ANIMATION));

        container.clear_navigation_observer();
        container.set_ui(DrawerUi::compact(), DrawerUi::regular(), false, || {});
        assert_eq!(nav.borrow().appearance().style, BarStyle::Black);
    }

    #[test]
    fn swapping_resizers_retires_the_old_id() {
        let mut container = loaded(Immediate);
        let swipe = container.resizer_id().unwrap();
        container.set_resizer_kind(ResizerKind::Drag);
        let drag = container.resizer_id().unwrap();
        assert_ne!(swipe, drag);
        assert_eq!(container.recognizers(), &[Recognizer::Pan]);

        container.handle_gesture(swipe, &GestureEvent::Swipe(SwipeDirection::Up));
        assert_eq!(container.open_state(), Some(OpenState::Peek));
        assert!(!container.should_receive(swipe, Recognizer::SwipeUp, Point::new(100.0, 760.0)));
        assert!(container.should_receive(drag, Recognizer::Pan, Point::new(100.0, 760.0)));
        assert!(!container.should_be_required_to_fail_by(swipe, Recognizer::SwipeUp, None));
    }

    fn release_drag(dy: f64) -> Option<OpenState> {
        let mut container = loaded(Immediate);
        container.set_resizer_kind(ResizerKind::Drag);
        let id = container.resizer_id().unwrap();
        let pan = |phase, dy| {
            GestureEvent::Pan(PanEvent {
                phase,
                translation: Vec2::new(0.0, dy),
                velocity: Vec2::ZERO,
            })
        };
        container.handle_gesture(id, &pan(PanPhase::Began, 0.0));
        container.handle_gesture(id, &pan(PanPhase::Changed, dy / 2.0));
        container.handle_gesture(id, &pan(PanPhase::Ended, dy));
        container.open_state()
    }

    // The peek drawer is 86 tall; dragging up by `d` releases at 86 + d.
    #[test]
    fn drag_release_snaps_at_the_thresholds() {
        assert_eq!(release_drag(-63.0), Some(OpenState::Closed));
        assert_eq!(release_drag(-64.0), Some(OpenState::Partial));
        assert_eq!(release_drag(-413.0), Some(OpenState::Partial));
        assert_eq!(release_drag(-414.0), Some(OpenState::Open));
    }

    #[test]
    fn drawer_size_class_follows_the_drawer_width() {
        let mut container = loaded(Immediate);
        assert_eq!(container.drawer_size_class(), Some(SizeClass::Compact));
        container.set_bounds(Rect::new(0.0, 0.0, 1024.0, 768.0), Insets::ZERO);
        assert_eq!(container.drawer_size_class(), Some(SizeClass::Regular));

        container.set_size_class(SizeClass::Regular);
        assert_eq!(container.drawer_size_class(), Some(SizeClass::Compact));

        container.set_drawer_frame(Rect::new(0.0, 0.0, 700.0, 300.0));
        assert_eq!(container.drawer_size_class(), Some(SizeClass::Regular));

        let unloaded = ContentDrawerContainer::<RecordingSurface, _>::new(Immediate);
        assert_eq!(unloaded.drawer_size_class(), None);
    }
}
