// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use super::{
    GestureEvent, Recognizer, Resizer, ResizerDelegate, ResizerId, ResizerKind, ScrollMetrics,
    in_expanded,
};
use crate::types::{Direction, OpenState, SwipeDirection};

/// The state a swipe leads to, or `None` if the swipe does nothing from `state`.
///
/// Opening swipes step peek → partial → open; closing swipes step open → partial → peek.
/// Swipes never reach or leave [`OpenState::Closed`].
pub fn swipe_target(state: OpenState, opening: bool) -> Option<OpenState> {
    match (state, opening) {
        (OpenState::Peek, true) => Some(OpenState::Partial),
        (OpenState::Partial, true) => Some(OpenState::Open),
        (OpenState::Open, false) => Some(OpenState::Partial),
        (OpenState::Partial, false) => Some(OpenState::Peek),
        (OpenState::Open | OpenState::Closed, true)
        | (OpenState::Closed | OpenState::Peek, false) => None,
    }
}

/// Whether a swipe may begin at all.
///
/// An upward swipe is refused at the state it would push the drawer towards: open for
/// bottom-up drawers and peek for top-down drawers. Downward swipes mirror this.
pub fn can_swipe(direction: Direction, state: OpenState, swipe: SwipeDirection) -> bool {
    match (direction, swipe) {
        (Direction::BottomUp, SwipeDirection::Up) | (Direction::TopDown, SwipeDirection::Down) => {
            state != OpenState::Open
        }
        (Direction::BottomUp, SwipeDirection::Down) | (Direction::TopDown, SwipeDirection::Up) => {
            state != OpenState::Peek
        }
    }
}

/// Steps between open states on discrete up/down swipes.
///
/// Swipes are accepted within 50 units of the drawer frame.
#[derive(Clone, Debug)]
pub struct SwipeResizer {
    id: ResizerId,
}

impl SwipeResizer {
    /// Margin around the drawer frame that still accepts swipes.
    pub const HIT_MARGIN: f64 = 50.0;

    const RECOGNIZERS: &'static [Recognizer] = &[Recognizer::SwipeUp, Recognizer::SwipeDown];

    /// Create a swipe resizer.
    pub fn new(id: ResizerId) -> Self {
        Self { id }
    }

    fn swipe(recognizer: Recognizer) -> Option<SwipeDirection> {
        match recognizer {
            Recognizer::SwipeUp => Some(SwipeDirection::Up),
            Recognizer::SwipeDown => Some(SwipeDirection::Down),
            Recognizer::Pan => None,
        }
    }
}

impl Resizer for SwipeResizer {
    fn id(&self) -> ResizerId {
        self.id
    }

    fn kind(&self) -> ResizerKind {
        ResizerKind::Swipe
    }

    fn recognizers(&self) -> &'static [Recognizer] {
        Self::RECOGNIZERS
    }

    fn should_receive(
        &self,
        recognizer: Recognizer,
        point: Point,
        delegate: &dyn ResizerDelegate,
    ) -> bool {
        if !in_expanded(delegate.drawer_frame(self.id), Self::HIT_MARGIN, point) {
            return false;
        }
        let (Some(swipe), Some(direction), Some(state)) = (
            Self::swipe(recognizer),
            delegate.direction(self.id),
            delegate.open_state(self.id),
        ) else {
            return false;
        };
        can_swipe(direction, state, swipe)
    }

    // Scroll views inside an open drawer win unless they sit at the boundary the swipe would
    // scroll them past.
    fn should_be_required_to_fail_by(
        &self,
        recognizer: Recognizer,
        scroll: Option<&ScrollMetrics>,
        delegate: &dyn ResizerDelegate,
    ) -> bool {
        let Some(scroll) = scroll else {
            return true;
        };
        if delegate
            .open_state(self.id)
            .is_some_and(|state| state != OpenState::Open)
        {
            return true;
        }
        let Some(direction) = delegate.direction(self.id) else {
            return false;
        };
        match (Self::swipe(recognizer), direction) {
            (Some(SwipeDirection::Up), Direction::TopDown) => !scroll.can_scroll_down(),
            (Some(SwipeDirection::Down), Direction::BottomUp) => !scroll.can_scroll_up(),
            _ => false,
        }
    }

    fn handle(&mut self, event: &GestureEvent, delegate: &mut dyn ResizerDelegate) {
        let GestureEvent::Swipe(swipe) = *event else {
            return;
        };
        let (Some(direction), Some(state)) =
            (delegate.direction(self.id), delegate.open_state(self.id))
        else {
            return;
        };
        let opening = swipe == direction.opening_swipe();
        match swipe_target(state, opening) {
            Some(target) => delegate.set_open_state(self.id, target, true),
            None => tracing::trace!(?state, ?swipe, "swipe has no effect"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resizer::testing::Recorder;
    use alloc::vec;

    fn swipe(
        direction: Direction,
        state: OpenState,
        swipe: SwipeDirection,
    ) -> alloc::vec::Vec<OpenState> {
        let mut recorder = Recorder::new(direction, state);
        let mut resizer = SwipeResizer::new(recorder.id);
        resizer.handle(&GestureEvent::Swipe(swipe), &mut recorder);
        recorder.set
    }

    #[test]
    fn bottom_up_transition_table() {
        use OpenState::*;
        use SwipeDirection::*;
        let d = Direction::BottomUp;
        assert_eq!(swipe(d, Peek, Up), vec![Partial]);
        assert_eq!(swipe(d, Partial, Up), vec![Open]);
        assert!(swipe(d, Open, Up).is_empty());
        assert!(swipe(d, Closed, Up).is_empty());
        assert_eq!(swipe(d, Open, Down), vec![Partial]);
        assert_eq!(swipe(d, Partial, Down), vec![Peek]);
        assert!(swipe(d, Peek, Down).is_empty());
        assert!(swipe(d, Closed, Down).is_empty());
    }

    #[test]
    fn top_down_opens_downwards() {
        use OpenState::*;
        use SwipeDirection::*;
        let d = Direction::TopDown;
        assert_eq!(swipe(d, Peek, Down), vec![Partial]);
        assert_eq!(swipe(d, Open, Up), vec![Partial]);
        assert!(swipe(d, Open, Down).is_empty());
    }

    #[test]
    fn closed_is_never_reached_by_swiping() {
        for state in OpenState::ALL {
            for opening in [true, false] {
                assert_ne!(swipe_target(state, opening), Some(OpenState::Closed));
            }
        }
        assert_eq!(swipe_target(OpenState::Open, true), None);
        assert_eq!(swipe_target(OpenState::Closed, false), None);
    }

    #[test]
    fn acceptance_policy() {
        use Direction::*;
        use OpenState::*;
        use SwipeDirection::*;
        assert!(!can_swipe(BottomUp, Open, Up));
        assert!(can_swipe(BottomUp, Partial, Up));
        assert!(!can_swipe(BottomUp, Peek, Down));
        assert!(can_swipe(BottomUp, Closed, Down));
        assert!(!can_swipe(TopDown, Peek, Up));
        assert!(!can_swipe(TopDown, Open, Down));
        assert!(can_swipe(TopDown, Open, Up));
    }

    #[test]
    fn receives_only_near_the_drawer() {
        let recorder = Recorder::new(Direction::BottomUp, OpenState::Partial);
        let resizer = SwipeResizer::new(recorder.id);
        assert!(resizer.should_receive(Recognizer::SwipeUp, Point::new(100.0, 520.0), &recorder));
        assert!(!resizer.should_receive(Recognizer::SwipeUp, Point::new(100.0, 500.0), &recorder));
        assert!(!resizer.should_receive(Recognizer::Pan, Point::new(100.0, 600.0), &recorder));
    }

    #[test]
    fn stale_resizers_are_ignored() {
        let mut recorder = Recorder::new(Direction::BottomUp, OpenState::Peek);
        let mut stale = SwipeResizer::new(ResizerId(0));
        assert!(!stale.should_receive(Recognizer::SwipeUp, Point::new(100.0, 600.0), &recorder));
        stale.handle(&GestureEvent::Swipe(SwipeDirection::Up), &mut recorder);
        assert!(recorder.set.is_empty());
    }

    #[test]
    fn failure_requirements_against_scroll_views() {
        let at_top = ScrollMetrics {
            offset_y: 0.0,
            content_height: 1000.0,
            viewport_height: 400.0,
        };
        let at_bottom = ScrollMetrics {
            offset_y: 600.0,
            ..at_top
        };

        let partial = Recorder::new(Direction::BottomUp, OpenState::Partial);
        let resizer = SwipeResizer::new(partial.id);
        let fails = |recognizer, scroll: Option<&ScrollMetrics>, delegate: &Recorder| {
            resizer.should_be_required_to_fail_by(recognizer, scroll, delegate)
        };
        assert!(fails(Recognizer::SwipeUp, None, &partial));
        assert!(fails(Recognizer::SwipeUp, Some(&at_top), &partial));

        let open = Recorder::new(Direction::BottomUp, OpenState::Open);
        assert!(!fails(Recognizer::SwipeUp, Some(&at_top), &open));
        assert!(fails(Recognizer::SwipeDown, Some(&at_top), &open));
        assert!(!fails(Recognizer::SwipeDown, Some(&at_bottom), &open));

        let mut top_down = Recorder::new(Direction::TopDown, OpenState::Open);
        top_down.id = partial.id;
        assert!(fails(Recognizer::SwipeUp, Some(&at_bottom), &top_down));
        assert!(!fails(Recognizer::SwipeUp, Some(&at_top), &top_down));
        assert!(!fails(Recognizer::SwipeDown, Some(&at_top), &top_down));
    }
}
