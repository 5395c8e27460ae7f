// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use super::{
    GestureEvent, PanEvent, PanPhase, Recognizer, Resizer, ResizerDelegate, ResizerId,
    ResizerKind, in_expanded,
};
use crate::types::Length;

/// Follows a pan continuously and snaps to an open state on release.
///
/// While the pan moves, the drawer is shown at its extent when the pan began plus the
/// translation along the opening axis. On release the translation is projected forward by
/// [`DragResizer::PROJECTION`] seconds of velocity, and the projected length is handed to the
/// container's snap policy.
#[derive(Clone, Debug)]
pub struct DragResizer {
    id: ResizerId,
    initial_extent: Option<f64>,
}

impl DragResizer {
    /// Margin around the drawer frame that still accepts pans.
    pub const HIT_MARGIN: f64 = 60.0;
    /// How far ahead release velocity is projected, in seconds.
    pub const PROJECTION: f64 = 0.07;

    const RECOGNIZERS: &'static [Recognizer] = &[Recognizer::Pan];

    /// Create a drag resizer.
    pub fn new(id: ResizerId) -> Self {
        Self {
            id,
            initial_extent: None,
        }
    }

    /// Extent captured when the current pan began.
    pub fn initial_extent(&self) -> Option<f64> {
        self.initial_extent
    }

    fn pan(&mut self, pan: &PanEvent, delegate: &mut dyn ResizerDelegate) {
        if pan.phase == PanPhase::Began {
            self.initial_extent = delegate.drawer_frame(self.id).map(|frame| frame.height());
        }
        let (Some(initial), Some(direction)) = (self.initial_extent, delegate.direction(self.id))
        else {
            tracing::trace!(phase = ?pan.phase, "pan without a starting extent");
            return;
        };

        let live = direction.dragged_extent(initial, pan.translation.y).max(0.0);
        delegate.resize(self.id, Length::Fixed(live));

        if matches!(pan.phase, PanPhase::Ended | PanPhase::Cancelled) {
            let projected = pan.translation.y + pan.velocity.y * Self::PROJECTION;
            let length = Length::Fixed(direction.dragged_extent(initial, projected));
            self.initial_extent = None;
            delegate.did_end_resizing(self.id, length);
        }
    }
}

impl Resizer for DragResizer {
    fn id(&self) -> ResizerId {
        self.id
    }

    fn kind(&self) -> ResizerKind {
        ResizerKind::Drag
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
        recognizer == Recognizer::Pan
            && in_expanded(delegate.drawer_frame(self.id), Self::HIT_MARGIN, point)
    }

    fn handle(&mut self, event: &GestureEvent, delegate: &mut dyn ResizerDelegate) {
        if let GestureEvent::Pan(pan) = event {
            self.pan(pan, delegate);
        }
    }
}
